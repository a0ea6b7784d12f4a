use crate::core::{Arity, FrontSet, OError};
use crate::metrics::indicator::{impl_state_accessors, one_front};
use crate::metrics::{Indicator, IndicatorState};
use crate::utils::{mean, nearest_neighbour_distance};

/// Schott's spacing metric. This measures how evenly the points of a front are distributed using
/// the Manhattan distance $d_i$ between each point and its nearest neighbour:
///
///   $ S = \sqrt{ \frac{1}{|A| - 1} \sum_{i=1}^{|A|} (\bar{d} - d_i)^2 } $
///
/// where $\bar{d}$ is the mean of all $d_i$. A value of zero means that all points are
/// equidistant. A front with fewer than 2 points has a spacing of zero.
///
/// # Reference
/// > Jason R. Schott. Fault Tolerant Design Using Single and Multicriteria Genetic Algorithm
/// > Optimization. Master's thesis, Massachusetts Institute of Technology, 1995.
#[derive(Debug, Default, Clone)]
pub struct Spacing {
    state: IndicatorState,
}

impl Spacing {
    /// Create the indicator.
    ///
    /// returns: `Spacing`
    pub fn new() -> Self {
        Self::default()
    }
}

impl Indicator for Spacing {
    fn name(&self) -> String {
        "Spacing".to_string()
    }

    fn arity(&self) -> Arity {
        Arity::One
    }

    fn evaluate(&self, fronts: FrontSet) -> Result<Option<f64>, OError> {
        let front = one_front(&fronts);
        let n = front.len();
        if n < 2 {
            return Ok(Some(0.0));
        }

        let distances: Vec<f64> = front
            .iter()
            .map(|point| nearest_neighbour_distance(point, front.points(), 1.0))
            .collect();
        let mean_distance = mean(&distances)?;
        let squared_deviations: f64 = distances
            .iter()
            .map(|d| (mean_distance - d).powi(2))
            .sum();

        Ok(Some((squared_deviations / (n - 1) as f64).sqrt()))
    }

    impl_state_accessors!();
}

#[cfg(test)]
mod test {
    use float_cmp::assert_approx_eq;

    use crate::core::test_utils::front_from;
    use crate::core::{Front, FrontSet};
    use crate::metrics::{Indicator, Spacing};

    #[test]
    fn test_small_fronts() {
        let spacing = Spacing::new();
        assert_eq!(
            spacing.evaluate(FrontSet::One(&Front::empty())).unwrap(),
            Some(0.0)
        );
        let front = front_from(&[[0.3, 0.4]]);
        assert_eq!(spacing.evaluate(FrontSet::One(&front)).unwrap(), Some(0.0));
    }

    #[test]
    fn test_uniform_front() {
        let mut spacing = Spacing::new();
        spacing.set_front(front_from(&[[0.0, 2.0], [1.0, 1.0], [2.0, 0.0]]));
        assert_eq!(spacing.calculate().unwrap(), 0.0);
    }

    #[test]
    fn test_spacing() {
        let front = front_from(&[[0.0, 0.0], [1.0, 1.0], [3.0, 3.0]]);
        // nearest Manhattan distances are 2, 2 and 4
        let value = Spacing::new()
            .evaluate(FrontSet::One(&front))
            .unwrap()
            .unwrap();
        assert_approx_eq!(f64, value, (4.0_f64 / 3.0).sqrt(), epsilon = 1e-12);
    }

    #[test]
    /// Coinciding points are not considered neighbours.
    fn test_duplicated_points() {
        let front = front_from(&[[0.0, 0.0], [0.0, 0.0], [1.0, 0.0]]);
        // the distances are all 1
        let value = Spacing::new()
            .evaluate(FrontSet::One(&front))
            .unwrap()
            .unwrap();
        assert_eq!(value, 0.0);
    }
}
