use crate::core::{Arity, FrontSet, ObjectiveDirection, OError};
use crate::metrics::cardinality::coordinate_set;
use crate::metrics::indicator::{impl_state_accessors, two_fronts};
use crate::metrics::{Indicator, IndicatorState};
use crate::utils::is_dominated_by_any;

/// The two-set coverage (C-metric) of front $A$ over front $B$. This is the fraction of points in
/// $B$ dominated by at least one point in $A$:
///
///   $ C(A, B) = \frac{ | \{ b \in B : \exists a \in A, a \succ b \} | }{ |B| } $
///
/// When $A$ and $B$ contain the same points, $C(A, B) = 1$. The indicator is not symmetric and is
/// not computed when either front is empty.
///
/// # Reference
/// > Eckart Zitzler and Lothar Thiele. Multiobjective Optimization Using Evolutionary Algorithms
/// > - A Comparative Case Study. PPSN V, pages 292–301, 1998.
#[derive(Debug, Clone)]
pub struct TwoSetCoverage {
    /// Whether the objectives are minimised or maximised.
    direction: ObjectiveDirection,
    state: IndicatorState,
}

impl TwoSetCoverage {
    /// Create the indicator.
    ///
    /// # Arguments
    ///
    /// * `direction`: Whether the objectives of both fronts are minimised or maximised.
    ///
    /// returns: `TwoSetCoverage`
    pub fn new(direction: ObjectiveDirection) -> Self {
        Self {
            direction,
            state: IndicatorState::default(),
        }
    }

    /// The objective direction used to check dominance.
    ///
    /// returns: `ObjectiveDirection`
    pub fn direction(&self) -> ObjectiveDirection {
        self.direction
    }
}

impl Default for TwoSetCoverage {
    /// The coverage of maximised objectives.
    fn default() -> Self {
        Self::new(ObjectiveDirection::Maximise)
    }
}

impl Indicator for TwoSetCoverage {
    fn name(&self) -> String {
        "TwoSetCoverage".to_string()
    }

    fn arity(&self) -> Arity {
        Arity::Two
    }

    fn evaluate(&self, fronts: FrontSet) -> Result<Option<f64>, OError> {
        let (front, other) = two_fronts(&self.name(), &fronts)?;
        if front.is_empty() || other.is_empty() {
            return Ok(None);
        }

        if coordinate_set(front) == coordinate_set(other) {
            return Ok(Some(1.0));
        }

        let covered = other
            .iter()
            .filter(|b| is_dominated_by_any(b, front.points(), self.direction))
            .count();

        Ok(Some(covered as f64 / other.len() as f64))
    }

    impl_state_accessors!();
}

#[cfg(test)]
mod test {
    use crate::core::test_utils::{front_from, random_front};
    use crate::core::{Front, FrontSet, ObjectiveDirection};
    use crate::metrics::{Indicator, TwoSetCoverage};

    #[test]
    fn test_identical_fronts() {
        let a = random_front(15, 3, 21);
        for direction in [ObjectiveDirection::Minimise, ObjectiveDirection::Maximise] {
            let value = TwoSetCoverage::new(direction)
                .evaluate(FrontSet::Two(&a, &a))
                .unwrap();
            assert_eq!(value, Some(1.0));
        }
    }

    #[test]
    fn test_coverage() {
        let a = front_from(&[[0.5, 0.5], [0.9, 0.1]]);
        let b = front_from(&[[0.4, 0.4], [0.1, 0.9], [0.8, 0.1], [0.6, 0.2]]);

        // maximising: a covers [0.4, 0.4] and [0.8, 0.1]
        let c_ab = TwoSetCoverage::default()
            .evaluate(FrontSet::Two(&a, &b))
            .unwrap();
        assert_eq!(c_ab, Some(0.5));
        // b covers nothing in a
        let c_ba = TwoSetCoverage::default()
            .evaluate(FrontSet::Two(&b, &a))
            .unwrap();
        assert_eq!(c_ba, Some(0.0));

        // minimising: [0.4, 0.4] dominates [0.5, 0.5] and [0.8, 0.1] dominates [0.9, 0.1]
        let mut coverage = TwoSetCoverage::new(ObjectiveDirection::Minimise);
        coverage.set_front(b);
        coverage.set_second_front(a);
        assert_eq!(coverage.calculate().unwrap(), 1.0);
    }

    #[test]
    /// Shared points are not covered unless the two fronts are the same set.
    fn test_partially_overlapping_fronts() {
        let a = front_from(&[[0.5, 0.5]]);
        let b = front_from(&[[0.5, 0.5], [0.9, 0.9]]);
        let coverage = TwoSetCoverage::default();
        assert_eq!(coverage.evaluate(FrontSet::Two(&a, &b)).unwrap(), Some(0.0));

        let c = front_from(&[[0.5, 0.5], [0.4, 0.4]]);
        assert_eq!(coverage.evaluate(FrontSet::Two(&a, &c)).unwrap(), Some(0.5));

        // same set with a duplicated point and a different order
        let d = front_from(&[[0.4, 0.4], [0.5, 0.5], [0.4, 0.4]]);
        assert_eq!(coverage.evaluate(FrontSet::Two(&c, &d)).unwrap(), Some(1.0));
    }

    #[test]
    fn test_empty_fronts() {
        let a = front_from(&[[0.5, 0.5]]);
        let empty = Front::empty();
        let coverage = TwoSetCoverage::default();
        assert_eq!(coverage.evaluate(FrontSet::Two(&a, &empty)).unwrap(), None);
        assert_eq!(coverage.evaluate(FrontSet::Two(&empty, &a)).unwrap(), None);
    }
}
