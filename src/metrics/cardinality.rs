use std::collections::HashSet;

use ordered_float::OrderedFloat;

use crate::core::{Arity, Front, FrontSet, OError};
use crate::metrics::indicator::{impl_state_accessors, one_front, two_fronts};
use crate::metrics::{Indicator, IndicatorState};

/// The hashable coordinates of a point. Two keys are equal only when all objective values are
/// equal.
pub(crate) fn coordinate_key(point: &[f64]) -> Vec<OrderedFloat<f64>> {
    point.iter().map(|v| OrderedFloat(*v)).collect()
}

/// The distinct points of a front.
pub(crate) fn coordinate_set(front: &Front) -> HashSet<Vec<OrderedFloat<f64>>> {
    front.iter().map(|point| coordinate_key(point)).collect()
}

/// Overall Non-dominated Vector Generation (ONVG). This is the number of points in the front.
#[derive(Debug, Default, Clone)]
pub struct Onvg {
    state: IndicatorState,
}

impl Onvg {
    /// Create the indicator.
    ///
    /// returns: `Onvg`
    pub fn new() -> Self {
        Self::default()
    }
}

impl Indicator for Onvg {
    fn name(&self) -> String {
        "ONVG".to_string()
    }

    fn arity(&self) -> Arity {
        Arity::One
    }

    fn evaluate(&self, fronts: FrontSet) -> Result<Option<f64>, OError> {
        Ok(Some(one_front(&fronts).len() as f64))
    }

    impl_state_accessors!();
}

/// Overall Non-dominated Vector Generation Ratio (ONVGR). This is the ratio between the number
/// of points in the front and in the true Pareto front. The indicator is not computed when the
/// true front is empty.
#[derive(Debug, Default, Clone)]
pub struct Onvgr {
    state: IndicatorState,
}

impl Onvgr {
    /// Create the indicator.
    ///
    /// returns: `Onvgr`
    pub fn new() -> Self {
        Self::default()
    }
}

impl Indicator for Onvgr {
    fn name(&self) -> String {
        "ONVGR".to_string()
    }

    fn arity(&self) -> Arity {
        Arity::Two
    }

    fn evaluate(&self, fronts: FrontSet) -> Result<Option<f64>, OError> {
        let (front, true_front) = two_fronts(&self.name(), &fronts)?;
        if true_front.is_empty() {
            return Ok(None);
        }
        Ok(Some(front.len() as f64 / true_front.len() as f64))
    }

    impl_state_accessors!();
}

/// Non-dominated Vector Addition (NVA). This is the signed difference between the number of
/// points in the two fronts, $|A| - |B|$. Negative values are real results.
#[derive(Debug, Default, Clone)]
pub struct Nva {
    state: IndicatorState,
}

impl Nva {
    /// Create the indicator.
    ///
    /// returns: `Nva`
    pub fn new() -> Self {
        Self::default()
    }
}

impl Indicator for Nva {
    fn name(&self) -> String {
        "NVA".to_string()
    }

    fn arity(&self) -> Arity {
        Arity::Two
    }

    fn evaluate(&self, fronts: FrontSet) -> Result<Option<f64>, OError> {
        let (front, other) = two_fronts(&self.name(), &fronts)?;
        Ok(Some(front.len() as f64 - other.len() as f64))
    }

    impl_state_accessors!();
}

/// The error ratio. This is the fraction of points in the front that do not exactly match (all
/// coordinates equal) any point of the true Pareto front. `0` means that all points belong to
/// the true front; `1` that none does.
///
/// # Reference
/// > David A. Van Veldhuizen. Multiobjective Evolutionary Algorithms: Classifications, Analyses,
/// > and New Innovations. PhD thesis, Air Force Institute of Technology, 1999.
#[derive(Debug, Default, Clone)]
pub struct ErrorRatio {
    state: IndicatorState,
}

impl ErrorRatio {
    /// Create the indicator.
    ///
    /// returns: `ErrorRatio`
    pub fn new() -> Self {
        Self::default()
    }
}

impl Indicator for ErrorRatio {
    fn name(&self) -> String {
        "ErrorRatio".to_string()
    }

    fn arity(&self) -> Arity {
        Arity::Two
    }

    fn evaluate(&self, fronts: FrontSet) -> Result<Option<f64>, OError> {
        let (front, true_front) = two_fronts(&self.name(), &fronts)?;
        if front.is_empty() || true_front.is_empty() {
            return Ok(None);
        }

        let known = coordinate_set(true_front);
        let errors = front
            .iter()
            .filter(|point| !known.contains(&coordinate_key(point)))
            .count();

        Ok(Some(errors as f64 / front.len() as f64))
    }

    impl_state_accessors!();
}
