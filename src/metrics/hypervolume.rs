use log::debug;

use crate::core::{Arity, Front, FrontSet, OError, ObjectiveDirection, Requirement};
use crate::metrics::indicator::{impl_state_accessors, one_front, two_fronts};
use crate::metrics::{Indicator, IndicatorState};
use crate::utils::{dominates, vector_min};

static HYPERVOLUME_NAME: &str = "Hypervolume";

/// Calculate the hyper-volume, the volume of the objective space dominated by a front, using the
/// recursive slicing algorithm by Zitzler and Thiele:
///
/// > E. Zitzler and L. Thiele, "Multiobjective evolutionary algorithms: a comparative case study
/// > and the strength Pareto approach," in IEEE Transactions on Evolutionary Computation, vol. 3,
/// > no. 4, pp. 257-271, Nov. 1999, doi: 10.1109/4235.797969.
///
/// The front is sliced along the last objective. At each step:
///  1) the points that are non-dominated on the remaining objectives are moved at the top of
///     the working copy;
///  2) the area (or volume) of the slice is calculated recursively on these points;
///  3) the slice is widened up to the smallest value of the last objective;
///  4) the points whose last objective is not larger than the slice bound are discarded.
///
/// **IMPLEMENTATION NOTES**:
/// 1) All objectives are assumed to be maximised and the reference point is the origin. The
///    objectives are usually scaled between 0 and 1 before running the algorithm.
/// 2) The calculation is done on a private copy of the objective values; the given front is never
///    modified.
/// 3) The cost of the recursion grows quickly with the number of objectives. An optional budget on
///    the number of slicing steps can be set with [`HypervolumeEngine::with_step_limit`].
#[derive(Debug, Default, Clone)]
pub struct HypervolumeEngine {
    /// The maximum number of slicing steps.
    step_limit: Option<usize>,
    /// The number of slicing steps done in the current calculation.
    steps: usize,
}

impl HypervolumeEngine {
    /// Create the engine without a step budget.
    ///
    /// returns: `HypervolumeEngine`
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the engine with a budget on the number of slicing steps. When the budget is
    /// exhausted, the calculation stops with an [`OError::StepBudgetExceeded`] error.
    ///
    /// # Arguments
    ///
    /// * `step_limit`: The maximum number of steps.
    ///
    /// returns: `HypervolumeEngine`
    pub fn with_step_limit(step_limit: usize) -> Self {
        Self {
            step_limit: Some(step_limit),
            steps: 0,
        }
    }

    /// The number of slicing steps done in the last calculation.
    ///
    /// returns: `usize`
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Calculate the hyper-volume of a front.
    ///
    /// # Arguments
    ///
    /// * `front`: The front. This must have at least one point and two objectives.
    ///
    /// returns: `Result<f64, OError>`
    pub fn compute(&mut self, front: &Front) -> Result<f64, OError> {
        let number_of_objectives = match front.number_of_objectives() {
            None => {
                return Err(OError::Metric(
                    HYPERVOLUME_NAME.to_string(),
                    "The front is too small: there are no points".to_string(),
                ))
            }
            Some(n) => n,
        };
        if number_of_objectives < 2 {
            return Err(OError::Metric(
                HYPERVOLUME_NAME.to_string(),
                "The metric can only be calculated on fronts with 2 or more objectives"
                    .to_string(),
            ));
        }

        self.steps = 0;
        let mut points = front.points().to_vec();
        let volume = self.volume(&mut points, number_of_objectives)?;
        debug!("Hyper-volume calculated in {} steps", self.steps);
        Ok(volume)
    }

    /// Calculate the volume dominated by the `points` using their first `number_of_objectives`
    /// objectives. The points are reordered in place.
    ///
    /// # Arguments
    ///
    /// * `points`: The points.
    /// * `number_of_objectives`: The number of leading objectives to use.
    ///
    /// returns: `Result<f64, OError>`
    fn volume(&mut self, points: &mut [Vec<f64>], number_of_objectives: usize) -> Result<f64, OError> {
        let last = number_of_objectives - 1;
        let mut volume = 0.0;
        let mut distance = 0.0;
        let mut n = points.len();

        while n > 0 {
            self.steps += 1;
            if let Some(limit) = self.step_limit {
                if self.steps > limit {
                    return Err(OError::StepBudgetExceeded(limit));
                }
            }

            let non_dominated = Self::filter_non_dominated(&mut points[..n], last);
            let slice_volume = if number_of_objectives < 3 {
                if non_dominated < 1 {
                    return Err(OError::Metric(
                        HYPERVOLUME_NAME.to_string(),
                        "The front is too small: no non-dominated point was found".to_string(),
                    ));
                }
                points[0][0]
            } else {
                self.volume(&mut points[..non_dominated], last)?
            };

            // the filter above only reorders the first n points
            let column: Vec<f64> = points[..n].iter().map(|p| p[last]).collect();
            let new_distance = vector_min(&column)?;
            volume += slice_volume * (new_distance - distance);
            distance = new_distance;
            n = Self::reduce(&mut points[..n], last, distance);
        }
        Ok(volume)
    }

    /// Move the points non-dominated on the first `number_of_objectives` objectives at the top
    /// of `points` by swapping the dominated ones to the end.
    ///
    /// # Arguments
    ///
    /// * `points`: The points.
    /// * `number_of_objectives`: The number of leading objectives to compare.
    ///
    /// returns: `usize`. The number of non-dominated points.
    fn filter_non_dominated(points: &mut [Vec<f64>], number_of_objectives: usize) -> usize {
        let direction = ObjectiveDirection::Maximise;
        let mut n = points.len();
        let mut i = 0;
        while i < n {
            let mut j = i + 1;
            let mut i_removed = false;
            while j < n {
                if dominates(&points[i], &points[j], number_of_objectives, direction) {
                    n -= 1;
                    points.swap(j, n);
                } else if dominates(&points[j], &points[i], number_of_objectives, direction) {
                    n -= 1;
                    points.swap(i, n);
                    i_removed = true;
                    break;
                } else {
                    j += 1;
                }
            }
            if !i_removed {
                i += 1;
            }
        }
        n
    }

    /// Move the points whose `objective` is not larger than `threshold` to the end of `points`.
    ///
    /// # Arguments
    ///
    /// * `points`: The points.
    /// * `objective`: The objective index.
    /// * `threshold`: The threshold.
    ///
    /// returns: `usize`. The number of points left.
    fn reduce(points: &mut [Vec<f64>], objective: usize, threshold: f64) -> usize {
        let mut n = points.len();
        let mut i = 0;
        while i < n {
            if points[i][objective] <= threshold {
                n -= 1;
                points.swap(i, n);
            } else {
                i += 1;
            }
        }
        n
    }
}

/// The hyper-volume of a front: the volume of the objective space dominated by the front, with
/// all objectives maximised and scaled between 0 and 1, and the origin as reference point.
/// See [`HypervolumeEngine`] for the algorithm. An empty front is not computed.
#[derive(Debug, Default, Clone)]
pub struct Hypervolume {
    /// The maximum number of slicing steps.
    step_limit: Option<usize>,
    state: IndicatorState,
}

impl Hypervolume {
    /// Create the indicator without a step budget.
    ///
    /// returns: `Hypervolume`
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the indicator with a budget on the number of slicing steps of
    /// [`HypervolumeEngine`].
    ///
    /// # Arguments
    ///
    /// * `step_limit`: The maximum number of steps.
    ///
    /// returns: `Hypervolume`
    pub fn with_step_limit(step_limit: usize) -> Self {
        Self {
            step_limit: Some(step_limit),
            state: IndicatorState::default(),
        }
    }

    /// Calculate the hyper-volume of a front.
    ///
    /// # Arguments
    ///
    /// * `front`: The front.
    ///
    /// returns: `Result<Option<f64>, OError>`. `None` if the front is empty.
    fn volume_of(&self, front: &Front) -> Result<Option<f64>, OError> {
        if front.is_empty() {
            return Ok(None);
        }
        let mut engine = match self.step_limit {
            None => HypervolumeEngine::new(),
            Some(limit) => HypervolumeEngine::with_step_limit(limit),
        };
        Ok(Some(engine.compute(front)?))
    }
}

impl Indicator for Hypervolume {
    fn name(&self) -> String {
        HYPERVOLUME_NAME.to_string()
    }

    fn arity(&self) -> Arity {
        Arity::One
    }

    fn requires_max_problem(&self) -> Requirement {
        Requirement::RequiredTrue
    }

    fn requires_scaled_objectives(&self) -> Requirement {
        Requirement::RequiredTrue
    }

    fn evaluate(&self, fronts: FrontSet) -> Result<Option<f64>, OError> {
        self.volume_of(one_front(&fronts))
    }

    impl_state_accessors!();
}

/// The hyper-area ratio: the ratio between the hyper-volume of the front and the hyper-volume of
/// the true Pareto front. This is not computed when one of the two hyper-volumes is zero or
/// not available.
///
/// # Reference
/// > David A. Van Veldhuizen. Multiobjective Evolutionary Algorithms: Classifications, Analyses,
/// > and New Innovations. PhD thesis, Air Force Institute of Technology, 1999.
#[derive(Debug, Default, Clone)]
pub struct HyperareaRatio {
    /// The indicator used for both fronts.
    hypervolume: Hypervolume,
    state: IndicatorState,
}

impl HyperareaRatio {
    /// Create the indicator.
    ///
    /// returns: `HyperareaRatio`
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the indicator with a budget on the number of slicing steps used by each
    /// hyper-volume calculation.
    ///
    /// # Arguments
    ///
    /// * `step_limit`: The maximum number of steps.
    ///
    /// returns: `HyperareaRatio`
    pub fn with_step_limit(step_limit: usize) -> Self {
        Self {
            hypervolume: Hypervolume::with_step_limit(step_limit),
            state: IndicatorState::default(),
        }
    }
}

impl Indicator for HyperareaRatio {
    fn name(&self) -> String {
        "HyperareaRatio".to_string()
    }

    fn arity(&self) -> Arity {
        Arity::Two
    }

    fn requires_max_problem(&self) -> Requirement {
        Requirement::RequiredTrue
    }

    fn requires_scaled_objectives(&self) -> Requirement {
        Requirement::RequiredTrue
    }

    fn evaluate(&self, fronts: FrontSet) -> Result<Option<f64>, OError> {
        let (front, true_front) = two_fronts(&self.name(), &fronts)?;
        let hv_front = self.hypervolume.volume_of(front)?;
        let hv_true_front = self.hypervolume.volume_of(true_front)?;
        match (hv_front, hv_true_front) {
            (Some(a), Some(b)) if a != 0.0 && b != 0.0 => Ok(Some(a / b)),
            _ => Ok(None),
        }
    }

    impl_state_accessors!();
}

#[cfg(test)]
mod test {
    use float_cmp::assert_approx_eq;

    use crate::core::test_utils::{front_from, random_front};
    use crate::core::{Front, FrontSet, OError};
    use crate::metrics::{HyperareaRatio, Hypervolume, HypervolumeEngine, Indicator};

    /// Exact hyper-volume of boxes between the origin and each point using the
    /// inclusion-exclusion principle.
    fn inclusion_exclusion(points: &[Vec<f64>]) -> f64 {
        let n = points.len();
        let m = points[0].len();
        let mut total = 0.0;
        for mask in 1..(1_usize << n) {
            let mut corner = vec![f64::INFINITY; m];
            for (i, point) in points.iter().enumerate() {
                if mask & (1 << i) != 0 {
                    for k in 0..m {
                        corner[k] = corner[k].min(point[k]);
                    }
                }
            }
            let volume: f64 = corner.iter().product();
            if mask.count_ones() % 2 == 1 {
                total += volume;
            } else {
                total -= volume;
            }
        }
        total
    }

    #[test]
    fn test_single_point() {
        let mut hv = Hypervolume::new();
        hv.set_front(front_from(&[[1.0, 1.0]]));
        assert_eq!(hv.calculate().unwrap(), 1.0);

        hv.set_front(front_from(&[[0.5, 0.5]]));
        assert_eq!(hv.calculate().unwrap(), 0.25);

        hv.set_front(front_from(&[[0.5, 0.5, 0.5]]));
        assert_eq!(hv.calculate().unwrap(), 0.125);
    }

    #[test]
    fn test_two_objectives() {
        let front = front_from(&[[1.0, 0.5], [0.5, 1.0]]);
        let hv = HypervolumeEngine::new().compute(&front).unwrap();
        assert_eq!(hv, 0.75);

        // a dominated point does not contribute
        let front = front_from(&[[1.0, 0.5], [0.4, 0.4], [0.5, 1.0]]);
        let hv = HypervolumeEngine::new().compute(&front).unwrap();
        assert_eq!(hv, 0.75);

        // duplicated points
        let front = front_from(&[[1.0, 0.5], [1.0, 0.5], [0.5, 1.0]]);
        let hv = HypervolumeEngine::new().compute(&front).unwrap();
        assert_eq!(hv, 0.75);
    }

    #[test]
    fn test_three_objectives() {
        let front = front_from(&[[1.0, 1.0, 0.5], [0.5, 0.5, 1.0]]);
        let hv = HypervolumeEngine::new().compute(&front).unwrap();
        assert_approx_eq!(f64, hv, 0.625, ulps = 2);
    }

    #[test]
    /// Compare the slicing algorithm against the inclusion-exclusion formula on random fronts.
    fn test_random_fronts() {
        for (seed, (n, m)) in [(2, 2), (5, 2), (8, 3), (6, 4), (7, 5), (10, 3)]
            .into_iter()
            .enumerate()
        {
            let front = random_front(n, m, seed as u64);
            let expected = inclusion_exclusion(front.points());
            let calculated = HypervolumeEngine::new().compute(&front).unwrap();
            assert_approx_eq!(f64, calculated, expected, epsilon = 1e-10);
        }
    }

    #[test]
    /// The input front is never changed.
    fn test_front_is_not_modified() {
        let front = random_front(20, 3, 99);
        let copy = front.clone();
        let hv = Hypervolume::new();
        let first = hv.evaluate(FrontSet::One(&front)).unwrap().unwrap();
        let second = hv.evaluate(FrontSet::One(&front)).unwrap().unwrap();
        assert_eq!(front, copy);
        assert_eq!(first, second);
    }

    #[test]
    fn test_errors() {
        // empty front
        let hv = Hypervolume::new();
        assert_eq!(hv.evaluate(FrontSet::One(&Front::empty())).unwrap(), None);
        let err = HypervolumeEngine::new().compute(&Front::empty()).unwrap_err();
        assert!(err.to_string().contains("too small"), "{}", err);

        // one objective
        let err = HypervolumeEngine::new()
            .compute(&front_from(&[[1.0]]))
            .unwrap_err();
        assert!(err.to_string().contains("2 or more objectives"), "{}", err);
    }

    #[test]
    fn test_step_limit() {
        let front = random_front(30, 4, 3);
        let mut engine = HypervolumeEngine::with_step_limit(5);
        assert!(matches!(
            engine.compute(&front).unwrap_err(),
            OError::StepBudgetExceeded(5)
        ));

        let mut engine = HypervolumeEngine::new();
        engine.compute(&front).unwrap();
        assert!(engine.steps() > 5);
        let mut engine = HypervolumeEngine::with_step_limit(engine.steps());
        assert!(engine.compute(&front).is_ok());
    }

    #[test]
    fn test_hyperarea_ratio() {
        let front = front_from(&[[0.5, 0.5]]);
        let true_front = front_from(&[[1.0, 0.5], [0.5, 1.0]]);
        let mut ratio = HyperareaRatio::new();
        ratio.set_front(front);
        ratio.set_second_front(true_front.clone());
        assert_approx_eq!(f64, ratio.calculate().unwrap(), 0.25 / 0.75, ulps = 2);

        // zero hyper-volume
        ratio.set_front(front_from(&[[0.0, 0.5]]));
        assert_eq!(ratio.calculate().unwrap(), -1.0);
        assert!(!ratio.is_computed());

        // empty front
        ratio.set_front(Front::empty());
        assert!(!ratio.is_computed());
        ratio.calculate().unwrap();
        assert!(!ratio.is_computed());
    }
}
