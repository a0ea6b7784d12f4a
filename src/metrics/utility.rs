use crate::core::{Arity, Front, FrontSet, OError, Requirement};
use crate::metrics::indicator::{impl_state_accessors, two_fronts};
use crate::metrics::{Indicator, IndicatorState};
use crate::utils::{vector_min, WeightVectors};

/// The constant the R3 numerator is divided by when the utility of the reference front is zero.
pub const R3_ZERO_DENOMINATOR: f64 = 10e-20;

/// The weighted Tchebycheff utility of a point: $\max_i w_i |p_i - r_i|$.
///
/// # Arguments
///
/// * `point`: The point.
/// * `weights`: The weight vector.
/// * `reference_point`: The reference point.
///
/// returns: `f64`
fn tchebycheff_utility(point: &[f64], weights: &[f64], reference_point: &[f64]) -> f64 {
    point
        .iter()
        .zip(weights)
        .zip(reference_point)
        .map(|((p, w), r)| w * (p - r).abs())
        .fold(f64::NEG_INFINITY, f64::max)
}

/// The reference point and weight vectors shared by the R-indicators.
#[derive(Debug, Clone)]
struct UtilitySetup {
    reference_point: Vec<f64>,
    weights: WeightVectors,
}

impl UtilitySetup {
    /// Validate the configuration and generate the weight vectors. The number of objectives is
    /// taken from the reference point.
    fn new(name: &str, reference_point: Vec<f64>, resolution: usize) -> Result<Self, OError> {
        if reference_point.iter().any(|v| !v.is_finite()) {
            return Err(OError::IndicatorConfig(
                name.to_string(),
                format!("The reference point {:?} must be finite", reference_point),
            ));
        }
        let weights = WeightVectors::new(reference_point.len(), resolution)
            .map_err(|e| OError::IndicatorConfig(name.to_string(), e.to_string()))?;
        Ok(Self {
            reference_point,
            weights,
        })
    }

    /// For each weight vector, find the best (smallest) utility in the front.
    fn best_utilities(&self, name: &str, front: &Front) -> Result<Vec<f64>, OError> {
        let size = self.reference_point.len();
        if let Some(n) = front.number_of_objectives() {
            if n != size {
                return Err(OError::DimensionMismatch(
                    format!("front assessed with the {} reference point", name),
                    n,
                    size,
                ));
            }
        }

        self.weights
            .vectors()
            .iter()
            .map(|w| {
                let utilities: Vec<f64> = front
                    .iter()
                    .map(|p| tchebycheff_utility(p, w, &self.reference_point))
                    .collect();
                vector_min(&utilities)
            })
            .collect()
    }

    /// Calculate the utilities of both fronts. `None` when a front is empty.
    fn utilities(
        &self,
        name: &str,
        fronts: &FrontSet,
    ) -> Result<Option<(Vec<f64>, Vec<f64>)>, OError> {
        let (front, reference_front) = two_fronts(name, fronts)?;
        if front.is_empty() || reference_front.is_empty() {
            return Ok(None);
        }
        let u_a = self.best_utilities(name, front)?;
        let u_b = self.best_utilities(name, reference_front)?;
        Ok(Some((u_a, u_b)))
    }
}

/// The R2 indicator by Hansen and Jaszkiewicz. This compares a front $A$ to a reference front
/// $B$ using the weighted Tchebycheff utility $u$ with respect to a reference point, averaged
/// over a set $\Lambda$ of uniformly-spaced weight vectors:
///
///   $ R2(A, B) = \frac{1}{|\Lambda|} \sum_{\lambda \in \Lambda} \left( u^*(\lambda, B) -
///     u^*(\lambda, A) \right) $
///
/// where $u^*$ is the smallest utility in the front. A positive value means that $A$ is better
/// than $B$. The indicator is not computed when either front is empty.
///
/// # Reference
/// > Michael Pilegaard Hansen and Andrzej Jaszkiewicz. Evaluating the quality of approximations
/// > to the non-dominated set. IMM Technical Report IMM-REP-1998-7, 1998.
#[derive(Debug, Clone)]
pub struct R2 {
    setup: UtilitySetup,
    state: IndicatorState,
}

impl R2 {
    /// Create the indicator. This returns an error if the resolution is zero or the reference
    /// point is empty.
    ///
    /// # Arguments
    ///
    /// * `reference_point`: The reference point. Its size sets the number of objectives.
    /// * `resolution`: The number of uniform gaps `H` used to generate the weight vectors.
    ///
    /// returns: `Result<R2, OError>`
    pub fn new(reference_point: Vec<f64>, resolution: usize) -> Result<Self, OError> {
        Ok(Self {
            setup: UtilitySetup::new("R2", reference_point, resolution)?,
            state: IndicatorState::default(),
        })
    }

    /// The weight vectors.
    ///
    /// returns: `&WeightVectors`
    pub fn weights(&self) -> &WeightVectors {
        &self.setup.weights
    }
}

impl Indicator for R2 {
    fn name(&self) -> String {
        "R2".to_string()
    }

    fn arity(&self) -> Arity {
        Arity::Two
    }

    fn requires_scaled_objectives(&self) -> Requirement {
        Requirement::RequiredTrue
    }

    fn evaluate(&self, fronts: FrontSet) -> Result<Option<f64>, OError> {
        let Some((u_a, u_b)) = self.setup.utilities(&self.name(), &fronts)? else {
            return Ok(None);
        };
        let sum: f64 = u_a.iter().zip(&u_b).map(|(a, b)| b - a).sum();
        Ok(Some(sum / u_a.len() as f64))
    }

    impl_state_accessors!();
}

/// The R3 indicator by Hansen and Jaszkiewicz. This is the ratio version of [`R2`]:
///
///   $ R3(A, B) = \frac{1}{|\Lambda|} \sum_{\lambda \in \Lambda}
///     \frac{u^*(\lambda, B) - u^*(\lambda, A)}{u^*(\lambda, B)} $
///
/// When $u^*(\lambda, B)$ is zero, the numerator is divided by [`R3_ZERO_DENOMINATOR`] instead.
/// The indicator is not computed when either front is empty.
///
/// # Reference
/// > Michael Pilegaard Hansen and Andrzej Jaszkiewicz. Evaluating the quality of approximations
/// > to the non-dominated set. IMM Technical Report IMM-REP-1998-7, 1998.
#[derive(Debug, Clone)]
pub struct R3 {
    setup: UtilitySetup,
    state: IndicatorState,
}

impl R3 {
    /// Create the indicator. This returns an error if the resolution is zero or the reference
    /// point is empty.
    ///
    /// # Arguments
    ///
    /// * `reference_point`: The reference point. Its size sets the number of objectives.
    /// * `resolution`: The number of uniform gaps `H` used to generate the weight vectors.
    ///
    /// returns: `Result<R3, OError>`
    pub fn new(reference_point: Vec<f64>, resolution: usize) -> Result<Self, OError> {
        Ok(Self {
            setup: UtilitySetup::new("R3", reference_point, resolution)?,
            state: IndicatorState::default(),
        })
    }

    /// The weight vectors.
    ///
    /// returns: `&WeightVectors`
    pub fn weights(&self) -> &WeightVectors {
        &self.setup.weights
    }
}

impl Indicator for R3 {
    fn name(&self) -> String {
        "R3".to_string()
    }

    fn arity(&self) -> Arity {
        Arity::Two
    }

    fn requires_scaled_objectives(&self) -> Requirement {
        Requirement::RequiredTrue
    }

    fn evaluate(&self, fronts: FrontSet) -> Result<Option<f64>, OError> {
        let Some((u_a, u_b)) = self.setup.utilities(&self.name(), &fronts)? else {
            return Ok(None);
        };
        let sum: f64 = u_a
            .iter()
            .zip(&u_b)
            .map(|(a, b)| {
                if *b != 0.0 {
                    (b - a) / b
                } else {
                    (b - a) / R3_ZERO_DENOMINATOR
                }
            })
            .sum();
        Ok(Some(sum / u_a.len() as f64))
    }

    impl_state_accessors!();
}

#[cfg(test)]
mod test {
    use float_cmp::assert_approx_eq;

    use crate::core::test_utils::{front_from, random_front};
    use crate::core::{Front, FrontSet, OError};
    use crate::metrics::{Indicator, R2, R3, R3_ZERO_DENOMINATOR};

    #[test]
    fn test_invalid_configuration() {
        assert!(matches!(
            R2::new(vec![0.0, 0.0], 0).unwrap_err(),
            OError::IndicatorConfig(..)
        ));
        assert!(matches!(
            R3::new(vec![], 3).unwrap_err(),
            OError::IndicatorConfig(..)
        ));
        assert!(matches!(
            R2::new(vec![0.0, f64::NAN], 3).unwrap_err(),
            OError::IndicatorConfig(..)
        ));
    }

    #[test]
    fn test_weights_are_built_once() {
        let r2 = R2::new(vec![0.0, 0.0, 0.0], 4).unwrap();
        assert_eq!(r2.weights().vectors().len(), 15);
        assert_eq!(r2.weights().number_of_points(), 15);
    }

    #[test]
    fn test_r2_identical_fronts() {
        let front = random_front(10, 3, 5);
        let r2 = R2::new(vec![0.0, 0.0, 0.0], 5).unwrap();
        assert_eq!(r2.evaluate(FrontSet::Two(&front, &front)).unwrap(), Some(0.0));
    }

    #[test]
    fn test_r2_r3() {
        let a = front_from(&[[0.5, 0.5]]);
        let b = front_from(&[[0.2, 0.8], [0.8, 0.2]]);
        // the best utilities for the weights (0, 1), (0.5, 0.5) and (1, 0) are
        // [0.5, 0.25, 0.5] for a and [0.2, 0.4, 0.2] for b
        let mut r2 = R2::new(vec![0.0, 0.0], 2).unwrap();
        r2.set_front(a.clone());
        r2.set_second_front(b.clone());
        assert_approx_eq!(f64, r2.calculate().unwrap(), -0.15, epsilon = 1e-12);

        let mut r3 = R3::new(vec![0.0, 0.0], 2).unwrap();
        r3.set_front(a);
        r3.set_second_front(b);
        assert_approx_eq!(f64, r3.calculate().unwrap(), -0.875, epsilon = 1e-12);
    }

    #[test]
    /// The numerator is divided by the fallback constant when the utility of the reference front
    /// is zero.
    fn test_r3_zero_utility() {
        let a = front_from(&[[0.5, 0.5]]);
        let b = front_from(&[[0.0, 0.0]]);
        let r3 = R3::new(vec![0.0, 0.0], 2).unwrap();
        let value = r3.evaluate(FrontSet::Two(&a, &b)).unwrap().unwrap();

        let expected = -(0.5 + 0.25 + 0.5) / R3_ZERO_DENOMINATOR / 3.0;
        assert!((value / expected - 1.0).abs() < 1e-12);
        assert!(value < -1e18);
    }

    #[test]
    fn test_not_computed() {
        let a = front_from(&[[0.5, 0.5]]);
        let r2 = R2::new(vec![0.0, 0.0], 2).unwrap();
        assert_eq!(
            r2.evaluate(FrontSet::Two(&a, &Front::empty())).unwrap(),
            None
        );
        assert_eq!(
            r2.evaluate(FrontSet::Two(&Front::empty(), &a)).unwrap(),
            None
        );
    }

    #[test]
    fn test_reference_point_mismatch() {
        let a = front_from(&[[0.5, 0.5, 0.1]]);
        let r3 = R3::new(vec![0.0, 0.0], 2).unwrap();
        assert!(matches!(
            r3.evaluate(FrontSet::Two(&a, &a)).unwrap_err(),
            OError::DimensionMismatch(_, 3, 2)
        ));
    }
}
