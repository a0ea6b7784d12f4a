use crate::core::{Arity, FrontSet, OError, Requirement};
use crate::metrics::distance::{check_exponent, generational_distance, DEFAULT_P};
use crate::metrics::indicator::{impl_state_accessors, three_fronts};
use crate::metrics::{Indicator, IndicatorState};

/// The relative progress measure. This compares the generational distance of a front $A$ and of
/// the front $A_t$ found later during the search, both from the true Pareto front $R$:
///
///   $ RP = \ln \left( \frac{GD(A, R)}{GD(A_t, R)} \right) $
///
/// The fronts are attached as the first, second and third front respectively. A positive value
/// means that the search converged towards the true front. When both distances are zero, the
/// progress is zero; when only one of them is zero, the result is infinite. The indicator is not
/// computed when one of the distances cannot be calculated.
///
/// # Reference
/// > Thomas Bäck. Evolutionary Algorithms in Theory and Practice. Oxford University Press, 1996.
#[derive(Debug, Clone)]
pub struct RelativeProgress {
    /// The exponent of the generational distances.
    p: f64,
    state: IndicatorState,
}

impl RelativeProgress {
    /// Create the indicator. This returns an error if `p` is not a positive number.
    ///
    /// # Arguments
    ///
    /// * `p`: The exponent of the generational distances.
    ///
    /// returns: `Result<RelativeProgress, OError>`
    pub fn new(p: f64) -> Result<Self, OError> {
        Ok(Self {
            p: check_exponent("RelativeProgress", p)?,
            state: IndicatorState::default(),
        })
    }
}

impl Default for RelativeProgress {
    fn default() -> Self {
        Self {
            p: DEFAULT_P,
            state: IndicatorState::default(),
        }
    }
}

impl Indicator for RelativeProgress {
    fn name(&self) -> String {
        "RelativeProgress".to_string()
    }

    fn arity(&self) -> Arity {
        Arity::Three
    }

    fn requires_scaled_objectives(&self) -> Requirement {
        Requirement::RequiredTrue
    }

    fn evaluate(&self, fronts: FrontSet) -> Result<Option<f64>, OError> {
        let (front, later_front, true_front) = three_fronts(&self.name(), &fronts)?;
        let g1 = generational_distance(front, true_front, self.p, front.len());
        let g2 = generational_distance(later_front, true_front, self.p, later_front.len());

        match (g1, g2) {
            (Some(g1), Some(g2)) if g1 == 0.0 && g2 == 0.0 => Ok(Some(0.0)),
            (Some(g1), Some(g2)) => Ok(Some((g1 / g2).ln())),
            _ => Ok(None),
        }
    }

    impl_state_accessors!();
}

#[cfg(test)]
mod test {
    use float_cmp::assert_approx_eq;

    use crate::core::test_utils::front_from;
    use crate::core::{Front, FrontSet, OError};
    use crate::metrics::{Indicator, RelativeProgress};

    #[test]
    fn test_relative_progress() {
        let front = front_from(&[[0.0, 0.0]]);
        let later_front = front_from(&[[0.5, 0.5]]);
        let true_front = front_from(&[[1.0, 1.0]]);

        let mut rp = RelativeProgress::default();
        rp.set_front(front);
        rp.set_second_front(later_front);
        rp.set_third_front(true_front);
        // ln(sqrt(2) / sqrt(0.5))
        assert_approx_eq!(f64, rp.calculate().unwrap(), 2.0_f64.ln(), epsilon = 1e-12);
    }

    #[test]
    fn test_zero_distances() {
        let true_front = front_from(&[[1.0, 1.0]]);
        let other = front_from(&[[0.5, 0.5]]);
        let rp = RelativeProgress::default();

        let value = rp
            .evaluate(FrontSet::Three(&true_front, &true_front, &true_front))
            .unwrap();
        assert_eq!(value, Some(0.0));

        let value = rp
            .evaluate(FrontSet::Three(&true_front, &other, &true_front))
            .unwrap()
            .unwrap();
        assert_eq!(value, f64::NEG_INFINITY);
        let value = rp
            .evaluate(FrontSet::Three(&other, &true_front, &true_front))
            .unwrap()
            .unwrap();
        assert_eq!(value, f64::INFINITY);
    }

    #[test]
    fn test_not_computed() {
        let front = front_from(&[[0.5, 0.5]]);
        let rp = RelativeProgress::default();
        let value = rp
            .evaluate(FrontSet::Three(&Front::empty(), &front, &front))
            .unwrap();
        assert_eq!(value, None);
    }

    #[test]
    fn test_missing_third_front() {
        let front = front_from(&[[0.5, 0.5]]);
        let mut rp = RelativeProgress::new(1.0).unwrap();
        rp.set_front(front.clone());
        rp.set_second_front(front);
        assert!(matches!(
            rp.calculate().unwrap_err(),
            OError::MissingFront(_, ref w) if w == "third"
        ));
        assert!(matches!(
            RelativeProgress::new(-1.0).unwrap_err(),
            OError::IndicatorConfig(..)
        ));
    }
}
