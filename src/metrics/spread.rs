use std::cmp::Ordering;

use crate::core::{Arity, FrontSet, ObjectiveDirection, OError, Requirement};
use crate::metrics::indicator::{impl_state_accessors, two_fronts};
use crate::metrics::{Indicator, IndicatorState};
use crate::utils::{euclidean, mean, nearest_distance, nearest_neighbour_distance};

/// Compare two points lexicographically. Minimised objectives are sorted in ascending order,
/// maximised objectives in descending order.
fn lexicographic_order(a: &[f64], b: &[f64], direction: ObjectiveDirection) -> Ordering {
    for (a_k, b_k) in a.iter().zip(b) {
        let ordering = match direction {
            ObjectiveDirection::Minimise => a_k.total_cmp(b_k),
            ObjectiveDirection::Maximise => b_k.total_cmp(a_k),
        };
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
    Ordering::Equal
}

/// Copy the points and sort them lexicographically.
///
/// # Arguments
///
/// * `points`: The points to sort.
/// * `direction`: The objective direction.
///
/// returns: `Vec<Vec<f64>>`
fn sorted_points(points: &[Vec<f64>], direction: ObjectiveDirection) -> Vec<Vec<f64>> {
    let mut sorted = points.to_vec();
    sorted.sort_by(|a, b| lexicographic_order(a, b, direction));
    sorted
}

/// The spread ($\Delta$) metric by Deb et al. measuring the extent and uniformity of a
/// bi-objective front $A$ with respect to the true Pareto front $B$:
///
///   $ \Delta = \frac{d_f + d_l + \sum_{i=1}^{|A|-1} |d_i - \bar{d}|}{d_f + d_l + (|A| - 1) \bar{d}} $
///
/// where both fronts are sorted lexicographically, $d_i$ is the Euclidean distance between
/// consecutive points of $A$, $\bar{d}$ their mean and $d_f$ and $d_l$ the distances between the
/// first and last points of $A$ and $B$. An ideal distribution has a spread of zero.
///
/// A front with at most one point has a spread of `1`. The indicator is not computed when the
/// true front is empty or the denominator is zero.
///
/// # Reference
/// > K. Deb, A. Pratap, S. Agarwal and T. Meyarivan, "A fast and elitist multiobjective genetic
/// > algorithm: NSGA-II," in IEEE Transactions on Evolutionary Computation, vol. 6, no. 2, pp.
/// > 182-197, April 2002.
#[derive(Debug, Default, Clone)]
pub struct Spread {
    /// The direction used to sort the fronts.
    direction: ObjectiveDirection,
    state: IndicatorState,
}

impl Spread {
    /// Create the indicator.
    ///
    /// # Arguments
    ///
    /// * `direction`: Whether the objectives are minimised or maximised.
    ///
    /// returns: `Spread`
    pub fn new(direction: ObjectiveDirection) -> Self {
        Self {
            direction,
            state: IndicatorState::default(),
        }
    }
}

impl Indicator for Spread {
    fn name(&self) -> String {
        "Spread".to_string()
    }

    fn arity(&self) -> Arity {
        Arity::Two
    }

    fn requires_scaled_objectives(&self) -> Requirement {
        Requirement::RequiredTrue
    }

    fn evaluate(&self, fronts: FrontSet) -> Result<Option<f64>, OError> {
        let (front, true_front) = two_fronts(&self.name(), &fronts)?;
        let n = front.len();
        if n <= 1 {
            return Ok(Some(1.0));
        }
        if true_front.is_empty() {
            return Ok(None);
        }

        let front = sorted_points(front.points(), self.direction);
        let true_front = sorted_points(true_front.points(), self.direction);

        let d_f = euclidean(&front[0], &true_front[0]);
        let d_l = euclidean(&front[n - 1], &true_front[true_front.len() - 1]);

        let distances: Vec<f64> = front
            .windows(2)
            .map(|pair| euclidean(&pair[0], &pair[1]))
            .collect();
        let mean_distance = mean(&distances)?;
        let deviation: f64 = distances.iter().map(|d| (d - mean_distance).abs()).sum();

        let denominator = d_f + d_l + (n - 1) as f64 * mean_distance;
        if denominator == 0.0 {
            return Ok(None);
        }
        Ok(Some((d_f + d_l + deviation) / denominator))
    }

    impl_state_accessors!();
}

/// The generalised spread metric by Zhou et al. This extends [`Spread`] to any number of
/// objectives by measuring the distance between the front and the extreme points of the true
/// Pareto front, one per objective, and by replacing the consecutive distances with the distance
/// of each point to its nearest neighbour:
///
///   $ \Delta^* = \frac{\sum_{j=1}^{M} d(e_j, A) + \sum_{a \in A} |d(a, A) - \bar{d}|}
///     {\sum_{j=1}^{M} d(e_j, A) + |A| \bar{d}} $
///
/// With minimised objectives, the extreme point $e_j$ is the point of the true front with the
/// largest value of the $j$-th objective; with maximised objectives the one with the smallest
/// value.
///
/// A front with at most one point, or whose lexicographically first and last points coincide,
/// has a spread of `1`. The indicator is not computed when the true front is empty or the
/// denominator is zero.
///
/// # Reference
/// > A. Zhou, Y. Jin, Q. Zhang, B. Sendhoff and E. Tsang, "Combining Model-based and
/// > Genetics-based Offspring Generation for Multi-objective Optimization Using a Convergence
/// > Criterion," 2006 IEEE International Conference on Evolutionary Computation, pp. 892-899.
#[derive(Debug, Default, Clone)]
pub struct GeneralizedSpread {
    /// Whether the objectives are minimised or maximised.
    direction: ObjectiveDirection,
    state: IndicatorState,
}

impl GeneralizedSpread {
    /// Create the indicator.
    ///
    /// # Arguments
    ///
    /// * `direction`: Whether the objectives are minimised or maximised.
    ///
    /// returns: `GeneralizedSpread`
    pub fn new(direction: ObjectiveDirection) -> Self {
        Self {
            direction,
            state: IndicatorState::default(),
        }
    }

    /// Find the extreme point of the front for each objective.
    ///
    /// # Arguments
    ///
    /// * `points`: The non-empty true front.
    /// * `number_of_objectives`: The number of objectives.
    ///
    /// returns: `Vec<&[f64]>`
    fn extreme_points<'a>(&self, points: &'a [Vec<f64>], number_of_objectives: usize) -> Vec<&'a [f64]> {
        (0..number_of_objectives)
            .filter_map(|j| {
                let by_objective = |a: &&Vec<f64>, b: &&Vec<f64>| a[j].total_cmp(&b[j]);
                let extreme = match self.direction {
                    ObjectiveDirection::Minimise => points.iter().max_by(by_objective),
                    ObjectiveDirection::Maximise => points.iter().min_by(by_objective),
                };
                extreme.map(|p| p.as_slice())
            })
            .collect()
    }
}

impl Indicator for GeneralizedSpread {
    fn name(&self) -> String {
        "GeneralizedSpread".to_string()
    }

    fn arity(&self) -> Arity {
        Arity::Two
    }

    fn requires_scaled_objectives(&self) -> Requirement {
        Requirement::RequiredTrue
    }

    fn evaluate(&self, fronts: FrontSet) -> Result<Option<f64>, OError> {
        let (front, true_front) = two_fronts(&self.name(), &fronts)?;
        let n = front.len();
        if n <= 1 {
            return Ok(Some(1.0));
        }
        let Some(number_of_objectives) = true_front.number_of_objectives() else {
            return Ok(None);
        };

        let sorted = sorted_points(front.points(), self.direction);
        if euclidean(&sorted[0], &sorted[n - 1]) == 0.0 {
            return Ok(Some(1.0));
        }

        let extremes = self.extreme_points(true_front.points(), number_of_objectives);
        let extreme_distance: f64 = extremes
            .iter()
            .filter_map(|e| nearest_distance(e, front.points(), euclidean))
            .sum();

        let distances: Vec<f64> = front
            .iter()
            .map(|point| nearest_neighbour_distance(point, front.points(), 2.0))
            .collect();
        let mean_distance = mean(&distances)?;
        let deviation: f64 = distances.iter().map(|d| (d - mean_distance).abs()).sum();

        let denominator = extreme_distance + n as f64 * mean_distance;
        if denominator == 0.0 {
            return Ok(None);
        }
        Ok(Some((extreme_distance + deviation) / denominator))
    }

    impl_state_accessors!();
}

#[cfg(test)]
mod test {
    use float_cmp::assert_approx_eq;

    use crate::core::test_utils::front_from;
    use crate::core::{Front, FrontSet, ObjectiveDirection};
    use crate::metrics::{GeneralizedSpread, Indicator, Spread};

    #[test]
    fn test_spread_small_fronts() {
        let true_front = front_from(&[[0.0, 1.0], [1.0, 0.0]]);
        let single = front_from(&[[0.5, 0.5]]);
        for front in [&single, &Front::empty()] {
            assert_eq!(
                Spread::default()
                    .evaluate(FrontSet::Two(front, &true_front))
                    .unwrap(),
                Some(1.0)
            );
            assert_eq!(
                GeneralizedSpread::default()
                    .evaluate(FrontSet::Two(front, &true_front))
                    .unwrap(),
                Some(1.0)
            );
        }
    }

    #[test]
    fn test_spread_ideal_front() {
        let front = front_from(&[[0.0, 1.0], [0.5, 0.5], [1.0, 0.0]]);
        let value = Spread::default()
            .evaluate(FrontSet::Two(&front, &front))
            .unwrap()
            .unwrap();
        assert_approx_eq!(f64, value, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_spread() {
        let front = front_from(&[[1.0, 0.0], [0.0, 1.0], [0.25, 0.75]]);
        let true_front = front_from(&[[0.0, 1.0], [1.0, 0.0]]);

        // the consecutive distances are 0.25 * sqrt(2) and 0.75 * sqrt(2)
        for direction in [ObjectiveDirection::Minimise, ObjectiveDirection::Maximise] {
            let mut spread = Spread::new(direction);
            spread.set_front(front.clone());
            spread.set_second_front(true_front.clone());
            assert_approx_eq!(f64, spread.calculate().unwrap(), 0.5, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_spread_not_computed() {
        let front = front_from(&[[0.5, 0.5], [0.5, 0.5]]);
        let spread = Spread::default();
        // zero denominator
        assert_eq!(
            spread.evaluate(FrontSet::Two(&front, &front)).unwrap(),
            None
        );
        // empty true front
        let other = front_from(&[[0.0, 1.0], [1.0, 0.0]]);
        assert_eq!(
            spread
                .evaluate(FrontSet::Two(&other, &Front::empty()))
                .unwrap(),
            None
        );
    }

    #[test]
    fn test_generalized_spread_ideal_front() {
        let front = front_from(&[[0.0, 1.0], [0.5, 0.5], [1.0, 0.0]]);
        let value = GeneralizedSpread::default()
            .evaluate(FrontSet::Two(&front, &front))
            .unwrap()
            .unwrap();
        assert_approx_eq!(f64, value, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_generalized_spread() {
        let front = front_from(&[[0.0, 1.0], [0.25, 0.75], [1.0, 0.0]]);
        let true_front = front_from(&[[0.0, 1.0], [1.0, 0.0]]);
        // the nearest neighbour distances are 0.25, 0.25 and 0.75 (times sqrt(2)) and the
        // extreme points belong to the front
        let value = GeneralizedSpread::default()
            .evaluate(FrontSet::Two(&front, &true_front))
            .unwrap()
            .unwrap();
        assert_approx_eq!(f64, value, 8.0 / 15.0, epsilon = 1e-12);
    }

    #[test]
    fn test_generalized_spread_extreme_points() {
        // the extreme points of the true front are [0, 2] and [2, 0]
        let front = front_from(&[[0.0, 1.0], [1.0, 0.0]]);
        let true_front = front_from(&[[0.0, 2.0], [1.0, 1.0], [2.0, 0.0]]);
        let value = GeneralizedSpread::new(ObjectiveDirection::Minimise)
            .evaluate(FrontSet::Two(&front, &true_front))
            .unwrap()
            .unwrap();
        // (1 + 1 + 0) / (1 + 1 + 2 * sqrt(2))
        let expected = 2.0 / (2.0 + 2.0 * 2.0_f64.sqrt());
        assert_approx_eq!(f64, value, expected, epsilon = 1e-12);
    }

    #[test]
    fn test_generalized_spread_coinciding_extremes() {
        let front = front_from(&[[0.3, 0.3, 0.3], [0.3, 0.3, 0.3]]);
        let true_front = front_from(&[[0.0, 0.0, 1.0], [1.0, 0.0, 0.0]]);
        let value = GeneralizedSpread::default()
            .evaluate(FrontSet::Two(&front, &true_front))
            .unwrap();
        assert_eq!(value, Some(1.0));
    }
}
