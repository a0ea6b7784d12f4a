use crate::core::{Arity, Front, FrontSet, OError, Requirement};
use crate::metrics::indicator::{impl_state_accessors, two_fronts};
use crate::metrics::{Indicator, IndicatorState};
use crate::utils::{minkowski, nearest_distance, raw_power, vector_max};

/// The default exponent of the distance indicators.
pub const DEFAULT_P: f64 = 2.0;

/// Check the exponent of a distance indicator.
///
/// # Arguments
///
/// * `name`: The indicator name.
/// * `p`: The exponent.
///
/// returns: `Result<f64, OError>`
pub(crate) fn check_exponent(name: &str, p: f64) -> Result<f64, OError> {
    if !p.is_finite() || p <= 0.0 {
        return Err(OError::IndicatorConfig(
            name.to_string(),
            format!("The exponent p ({}) must be a positive number", p),
        ));
    }
    Ok(p)
}

/// Calculate the distance of `a` as the distance between each point in the set and the closest
/// point in the `r` set. The contributions $d^p$ are summed, the root $1/p$ is applied to the sum
/// and the result is divided by `normaliser`.
///
/// # Arguments
///
/// * `a`: The points whose distance is measured.
/// * `r`: The points to use to calculate the distance.
/// * `p`: The exponent.
/// * `normaliser`: The number the rooted sum is divided by.
///
/// returns: `Option<f64>`. `None` if one of the sets is empty.
pub(crate) fn generational_distance(
    a: &Front,
    r: &Front,
    p: f64,
    normaliser: usize,
) -> Option<f64> {
    if a.is_empty() || r.is_empty() || normaliser == 0 {
        return None;
    }

    let distance_sum = a
        .iter()
        .map(|a| nearest_distance(a, r.points(), |x, y| raw_power(x, y, p)))
        .sum::<Option<f64>>()?;

    Some(distance_sum.powf(1.0 / p) / normaliser as f64)
}

/// The generational distance (GD) of a front $A$ from the true Pareto front $R$:
///
///   $  GD (A, R) =  \frac{1}{| A |} \cdot \[ \sum_{a \in A } min_{r \in R} \quad  d(a, r)^p \]^{1/p} $
///
/// where $d(a, r)^p = \sum_{k=1}^{M} |a_k - r_k|^p$ and $p$ defaults to 2. Note that the root is
/// applied once to the sum and not to each distance. This is not computed if one of the fronts
/// is empty.
///
/// # Reference
/// > David A. Van Veldhuizen, Gary B. Lamont (1998). “Evolutionary Computation and Convergence to
/// > a Pareto Front.” In John R. Koza (ed.), Late Breaking Papers at the Genetic Programming 1998
/// > Conference, 221-228.
#[derive(Debug, Clone)]
pub struct GenerationalDistance {
    /// The exponent.
    p: f64,
    state: IndicatorState,
}

impl GenerationalDistance {
    /// Create the indicator. This returns an error if `p` is not a positive number.
    ///
    /// # Arguments
    ///
    /// * `p`: The exponent.
    ///
    /// returns: `Result<GenerationalDistance, OError>`
    pub fn new(p: f64) -> Result<Self, OError> {
        Ok(Self {
            p: check_exponent("GenerationalDistance", p)?,
            state: IndicatorState::default(),
        })
    }

    /// The exponent.
    ///
    /// returns: `f64`
    pub fn p(&self) -> f64 {
        self.p
    }
}

impl Default for GenerationalDistance {
    fn default() -> Self {
        Self {
            p: DEFAULT_P,
            state: IndicatorState::default(),
        }
    }
}

impl Indicator for GenerationalDistance {
    fn name(&self) -> String {
        "GenerationalDistance".to_string()
    }

    fn arity(&self) -> Arity {
        Arity::Two
    }

    fn requires_scaled_objectives(&self) -> Requirement {
        Requirement::RequiredTrue
    }

    fn evaluate(&self, fronts: FrontSet) -> Result<Option<f64>, OError> {
        let (front, true_front) = two_fronts(&self.name(), &fronts)?;
        Ok(generational_distance(front, true_front, self.p, front.len()))
    }

    impl_state_accessors!();
}

/// The inverted generational distance (IGD). This measures the distance of each point of the
/// true Pareto front $R$ from the closest point of the front $A$:
///
///   $  IGD (A, R) =  \frac{1}{| A |} \cdot \[ \sum_{r \in R } min_{a \in A} \quad  d(r, a)^p \]^{1/p} $
///
/// The sum is normalised by the size of the assessed front $A$, not by the size of $R$. This is
/// not computed if one of the fronts is empty.
#[derive(Debug, Clone)]
pub struct InvertedGenerationalDistance {
    /// The exponent.
    p: f64,
    state: IndicatorState,
}

impl InvertedGenerationalDistance {
    /// Create the indicator. This returns an error if `p` is not a positive number.
    ///
    /// # Arguments
    ///
    /// * `p`: The exponent.
    ///
    /// returns: `Result<InvertedGenerationalDistance, OError>`
    pub fn new(p: f64) -> Result<Self, OError> {
        Ok(Self {
            p: check_exponent("InvertedGenerationalDistance", p)?,
            state: IndicatorState::default(),
        })
    }
}

impl Default for InvertedGenerationalDistance {
    fn default() -> Self {
        Self {
            p: DEFAULT_P,
            state: IndicatorState::default(),
        }
    }
}

impl Indicator for InvertedGenerationalDistance {
    fn name(&self) -> String {
        "InvertedGenerationalDistance".to_string()
    }

    fn arity(&self) -> Arity {
        Arity::Two
    }

    fn requires_scaled_objectives(&self) -> Requirement {
        Requirement::RequiredTrue
    }

    fn evaluate(&self, fronts: FrontSet) -> Result<Option<f64>, OError> {
        let (front, true_front) = two_fronts(&self.name(), &fronts)?;
        Ok(generational_distance(true_front, front, self.p, front.len()))
    }

    impl_state_accessors!();
}

/// The maximum Pareto front error (ME). This is the largest Minkowski distance between a point of
/// the front and its closest point in the true Pareto front:
///
///   $  ME (A, R) =  max_{a \in A} \quad min_{r \in R} \quad  d(a, r) $
///
/// with $d(a, r) = \[ \sum_{k=1}^{M} |a_k - r_k|^p \]^{1/p}$. Unlike [`GenerationalDistance`]
/// the root is applied to each distance. This is not computed if one of the fronts is empty.
#[derive(Debug, Clone)]
pub struct MaximumError {
    /// The exponent.
    p: f64,
    state: IndicatorState,
}

impl MaximumError {
    /// Create the indicator. This returns an error if `p` is not a positive number.
    ///
    /// # Arguments
    ///
    /// * `p`: The exponent.
    ///
    /// returns: `Result<MaximumError, OError>`
    pub fn new(p: f64) -> Result<Self, OError> {
        Ok(Self {
            p: check_exponent("MaximumError", p)?,
            state: IndicatorState::default(),
        })
    }
}

impl Default for MaximumError {
    fn default() -> Self {
        Self {
            p: DEFAULT_P,
            state: IndicatorState::default(),
        }
    }
}

impl Indicator for MaximumError {
    fn name(&self) -> String {
        "MaximumError".to_string()
    }

    fn arity(&self) -> Arity {
        Arity::Two
    }

    fn requires_scaled_objectives(&self) -> Requirement {
        Requirement::RequiredTrue
    }

    fn evaluate(&self, fronts: FrontSet) -> Result<Option<f64>, OError> {
        let (front, true_front) = two_fronts(&self.name(), &fronts)?;
        if front.is_empty() || true_front.is_empty() {
            return Ok(None);
        }

        let p = self.p;
        let distances = front
            .iter()
            .filter_map(|a| nearest_distance(a, true_front.points(), |x, y| minkowski(x, y, p)))
            .collect::<Vec<f64>>();
        Ok(Some(vector_max(&distances)?))
    }

    impl_state_accessors!();
}

#[cfg(test)]
mod test {
    use float_cmp::assert_approx_eq;

    use crate::core::test_utils::{front_from, random_front};
    use crate::core::{Front, FrontSet};
    use crate::metrics::{
        GenerationalDistance, Indicator, InvertedGenerationalDistance, MaximumError,
    };

    #[test]
    fn test_gd_single_point() {
        let a = front_from(&[[0.0, 0.0]]);
        let b = front_from(&[[1.0, 1.0]]);
        let gd = GenerationalDistance::default();
        let value = gd.evaluate(FrontSet::Two(&a, &b)).unwrap().unwrap();
        assert_approx_eq!(f64, value, 2.0_f64.sqrt(), ulps = 2);
    }

    #[test]
    /// The root is applied to the sum and not to each point distance.
    fn test_gd_root_applied_once() {
        let a = front_from(&[[0.0, 0.0], [3.0, 0.0]]);
        let b = front_from(&[[1.0, 1.0], [3.0, 4.0]]);
        // nearest squared distances are 2 and 5
        let gd = GenerationalDistance::default();
        let value = gd.evaluate(FrontSet::Two(&a, &b)).unwrap().unwrap();
        assert_approx_eq!(f64, value, 7.0_f64.sqrt() / 2.0, ulps = 2);

        // with p = 1 the Manhattan distances are 2 and 3
        let gd = GenerationalDistance::new(1.0).unwrap();
        let value = gd.evaluate(FrontSet::Two(&a, &b)).unwrap().unwrap();
        assert_approx_eq!(f64, value, 2.5, ulps = 2);
    }

    #[test]
    /// Fronts from Ishibuchi et al. (2015), Table 4, with the Manhattan distance (p = 1).
    fn test_gd_manhattan_ishibuchi_et_al_2015() {
        let z = front_from(&[
            [0., 10.],
            [1., 6.],
            [2., 2.],
            [6., 1.],
            [10., 0.],
        ]);
        let a = front_from(&[[2., 4.], [3., 3.], [4., 2.]]);
        let b = front_from(&[[2., 8.], [4., 4.], [8., 2.]]);

        let gd = GenerationalDistance::new(1.0).unwrap();
        assert_approx_eq!(
            f64,
            gd.evaluate(FrontSet::Two(&a, &z)).unwrap().unwrap(),
            (2.0 + 2.0 + 2.0) / 3.0,
            epsilon = 0.00001
        );
        assert_approx_eq!(
            f64,
            gd.evaluate(FrontSet::Two(&b, &z)).unwrap().unwrap(),
            (3.0 + 4.0 + 3.0) / 3.0,
            epsilon = 0.00001
        );
    }

    #[test]
    fn test_gd_igd_identical_fronts() {
        let front = random_front(25, 3, 11);
        let gd = GenerationalDistance::default();
        let igd = InvertedGenerationalDistance::default();
        assert_eq!(gd.evaluate(FrontSet::Two(&front, &front)).unwrap(), Some(0.0));
        assert_eq!(igd.evaluate(FrontSet::Two(&front, &front)).unwrap(), Some(0.0));
    }

    #[test]
    /// The IGD sum is normalised by the size of the assessed front, not the true front.
    fn test_igd_normalised_by_front_size() {
        let a = front_from(&[[0.0, 0.0]]);
        let b = front_from(&[[1.0, 1.0], [3.0, 3.0]]);
        let mut igd = InvertedGenerationalDistance::default();
        igd.set_front(a);
        igd.set_second_front(b);
        // squared distances 2 and 18; the size of A is 1
        assert_approx_eq!(f64, igd.calculate().unwrap(), 20.0_f64.sqrt(), ulps = 2);

        let a = front_from(&[[0.0, 0.0], [0.0, 0.0]]);
        let b = front_from(&[[1.0, 1.0]]);
        igd.set_front(a);
        igd.set_second_front(b);
        assert_approx_eq!(f64, igd.calculate().unwrap(), 2.0_f64.sqrt() / 2.0, ulps = 2);
    }

    #[test]
    fn test_maximum_error() {
        let a = front_from(&[[0.0, 0.0], [3.0, 0.0]]);
        let b = front_from(&[[1.0, 1.0], [3.0, 4.0]]);
        let me = MaximumError::default();
        // the nearest distances are sqrt(2) and sqrt(5)
        assert_approx_eq!(
            f64,
            me.evaluate(FrontSet::Two(&a, &b)).unwrap().unwrap(),
            5.0_f64.sqrt(),
            ulps = 2
        );

        let me = MaximumError::new(1.0).unwrap();
        assert_eq!(me.evaluate(FrontSet::Two(&a, &b)).unwrap(), Some(3.0));
    }

    #[test]
    fn test_empty_fronts() {
        let a = front_from(&[[0.0, 0.0]]);
        let empty = Front::empty();
        for (x, y) in [(&a, &empty), (&empty, &a)] {
            let set = FrontSet::Two(x, y);
            assert_eq!(GenerationalDistance::default().evaluate(set).unwrap(), None);
            assert_eq!(
                InvertedGenerationalDistance::default().evaluate(set).unwrap(),
                None
            );
            assert_eq!(MaximumError::default().evaluate(set).unwrap(), None);
        }
    }

    #[test]
    fn test_invalid_exponent() {
        assert!(GenerationalDistance::new(0.0).is_err());
        assert!(InvertedGenerationalDistance::new(-1.0).is_err());
        assert!(MaximumError::new(f64::NAN).is_err());
    }
}
