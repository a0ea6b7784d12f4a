use std::fmt::Debug;

use log::debug;

use crate::core::{Arity, Front, FrontSet, OError, Requirement};

/// The value returned by [`Indicator::result`] when the indicator has not been calculated or its
/// preconditions (for example non-empty fronts) were not met.
pub const NOT_COMPUTED: f64 = -1.0;

/// The fronts attached to an indicator and its cached result.
#[derive(Clone, Debug, Default)]
pub struct IndicatorState {
    /// The front to assess.
    front: Option<Front>,
    /// The second front (usually the true Pareto front).
    second_front: Option<Front>,
    /// The third front used by ternary indicators.
    third_front: Option<Front>,
    /// The last calculated value. `None` when not available.
    result: Option<f64>,
}

impl IndicatorState {
    /// Collect the attached fronts needed by an indicator with the given `arity`.
    ///
    /// # Arguments
    ///
    /// * `name`: The indicator name used in the error message.
    /// * `arity`: The number of fronts the indicator needs.
    ///
    /// returns: `Result<FrontSet, OError>`. An error is returned if one of the needed fronts was
    /// not set.
    pub fn front_set(&self, name: &str, arity: Arity) -> Result<FrontSet<'_>, OError> {
        let missing = |which: &str| OError::MissingFront(name.to_string(), which.to_string());
        let front = self.front.as_ref().ok_or_else(|| missing("first"))?;
        match arity {
            Arity::One => Ok(FrontSet::One(front)),
            Arity::Two => {
                let second = self.second_front.as_ref().ok_or_else(|| missing("second"))?;
                Ok(FrontSet::Two(front, second))
            }
            Arity::Three => {
                let second = self.second_front.as_ref().ok_or_else(|| missing("second"))?;
                let third = self.third_front.as_ref().ok_or_else(|| missing("third"))?;
                Ok(FrontSet::Three(front, second, third))
            }
        }
    }
}

/// The trait implemented by all the quality indicators. An indicator is a scalar measure of the
/// quality of an approximated Pareto front, optionally compared against other fronts.
///
/// Indicators can be used in two ways:
///  - by calling [`Indicator::evaluate`] with a [`FrontSet`]. This is a pure function that never
///    modifies the given fronts and can be called concurrently on shared data.
///  - by attaching the fronts with [`Indicator::set_front`], [`Indicator::set_second_front`] and
///    [`Indicator::set_third_front`], running [`Indicator::calculate`] and reading the cached
///    value with [`Indicator::result`].
///
/// When a precondition is not met (for example a front is empty), the indicator is not
/// computed and [`Indicator::result`] returns [`NOT_COMPUTED`]. Malformed inputs, such as
/// fronts with different numbers of objectives or a missing front, return an error instead.
///
/// # Example
/// ```
/// use optirustic_indicators::core::{Front, OError};
/// use optirustic_indicators::metrics::{GenerationalDistance, Indicator};
///
/// fn main() -> Result<(), OError> {
///     let mut gd = GenerationalDistance::default();
///     gd.set_front(Front::new(vec![vec![0.0, 0.0]])?);
///     gd.set_second_front(Front::new(vec![vec![1.0, 1.0]])?);
///     let value = gd.calculate()?;
///     assert!((value - 2.0_f64.sqrt()).abs() < 1e-12);
///     assert_eq!(gd.result(), value);
///     Ok(())
/// }
/// ```
pub trait Indicator: Debug + Send + Sync {
    /// The indicator name.
    ///
    /// returns: `String`
    fn name(&self) -> String;

    /// The number of fronts the indicator needs.
    ///
    /// returns: `Arity`
    fn arity(&self) -> Arity;

    /// Whether the indicator expects the objectives to be maximised.
    ///
    /// returns: `Requirement`
    fn requires_max_problem(&self) -> Requirement {
        Requirement::Irrelevant
    }

    /// Whether the indicator expects the objectives to be scaled between 0 and 1.
    ///
    /// returns: `Requirement`
    fn requires_scaled_objectives(&self) -> Requirement {
        Requirement::Irrelevant
    }

    /// Calculate the indicator value on the given fronts.
    ///
    /// # Arguments
    ///
    /// * `fronts`: The fronts.
    ///
    /// returns: `Result<Option<f64>, OError>`. The value or `None` if the preconditions of the
    /// indicator are not met.
    fn evaluate(&self, fronts: FrontSet) -> Result<Option<f64>, OError>;

    /// The attached fronts and the cached result.
    ///
    /// returns: `&IndicatorState`
    fn state(&self) -> &IndicatorState;

    /// The mutable attached fronts and the cached result.
    ///
    /// returns: `&mut IndicatorState`
    fn state_mut(&mut self) -> &mut IndicatorState;

    /// Attach the front to assess.
    ///
    /// # Arguments
    ///
    /// * `front`: The front.
    ///
    /// returns: `()`
    fn set_front(&mut self, front: Front) {
        self.state_mut().front = Some(front);
    }

    /// Attach the second front. This is usually the true Pareto front or its approximation.
    ///
    /// # Arguments
    ///
    /// * `front`: The front.
    ///
    /// returns: `()`
    fn set_second_front(&mut self, front: Front) {
        self.state_mut().second_front = Some(front);
    }

    /// Attach the third front used by ternary indicators.
    ///
    /// # Arguments
    ///
    /// * `front`: The front.
    ///
    /// returns: `()`
    fn set_third_front(&mut self, front: Front) {
        self.state_mut().third_front = Some(front);
    }

    /// Calculate the indicator using the attached fronts and cache the result. The cached
    /// result is reset before the calculation.
    ///
    /// returns: `Result<f64, OError>`. The value or [`NOT_COMPUTED`].
    fn calculate(&mut self) -> Result<f64, OError> {
        self.state_mut().result = None;
        let name = self.name();
        let value = {
            let fronts = self.state().front_set(&name, self.arity())?;
            self.evaluate(fronts)?
        };
        match value {
            Some(v) => debug!("Indicator '{}' is {}", name, v),
            None => debug!("Indicator '{}' cannot be computed on the given fronts", name),
        }
        self.state_mut().result = value;
        Ok(self.result())
    }

    /// The last calculated value or [`NOT_COMPUTED`].
    ///
    /// returns: `f64`
    fn result(&self) -> f64 {
        self.state().result.unwrap_or(NOT_COMPUTED)
    }

    /// The last calculated value. Unlike [`Indicator::result`], this can tell apart a real `-1`
    /// value from an indicator that was not computed.
    ///
    /// returns: `Option<f64>`
    fn value(&self) -> Option<f64> {
        self.state().result
    }

    /// Whether the indicator was calculated.
    ///
    /// returns: `bool`
    fn is_computed(&self) -> bool {
        self.state().result.is_some()
    }
}

/// Get the front to assess from the set.
///
/// # Arguments
///
/// * `fronts`: The fronts.
///
/// returns: `&Front`
pub(crate) fn one_front<'a>(fronts: &FrontSet<'a>) -> &'a Front {
    fronts.front()
}

/// Get the front to assess and the second front from the set. This returns an error if the
/// second front is not available or the fronts have a different number of objectives.
///
/// # Arguments
///
/// * `name`: The indicator name.
/// * `fronts`: The fronts.
///
/// returns: `Result<(&Front, &Front), OError>`
pub(crate) fn two_fronts<'a>(
    name: &str,
    fronts: &FrontSet<'a>,
) -> Result<(&'a Front, &'a Front), OError> {
    fronts.number_of_objectives()?;
    match *fronts {
        FrontSet::One(_) => Err(OError::MissingFront(
            name.to_string(),
            "second".to_string(),
        )),
        FrontSet::Two(a, b) | FrontSet::Three(a, b, _) => Ok((a, b)),
    }
}

/// Get the three fronts from the set. This returns an error if a front is not available or
/// the fronts have a different number of objectives.
///
/// # Arguments
///
/// * `name`: The indicator name.
/// * `fronts`: The fronts.
///
/// returns: `Result<(&Front, &Front, &Front), OError>`
pub(crate) fn three_fronts<'a>(
    name: &str,
    fronts: &FrontSet<'a>,
) -> Result<(&'a Front, &'a Front, &'a Front), OError> {
    fronts.number_of_objectives()?;
    match *fronts {
        FrontSet::One(_) => Err(OError::MissingFront(
            name.to_string(),
            "second".to_string(),
        )),
        FrontSet::Two(_, _) => Err(OError::MissingFront(
            name.to_string(),
            "third".to_string(),
        )),
        FrontSet::Three(a, b, c) => Ok((a, b, c)),
    }
}

/// Implement the [`Indicator::state`] and [`Indicator::state_mut`] accessors for an indicator
/// storing its [`IndicatorState`] in the `state` field.
macro_rules! impl_state_accessors {
    () => {
        fn state(&self) -> &$crate::metrics::IndicatorState {
            &self.state
        }

        fn state_mut(&mut self) -> &mut $crate::metrics::IndicatorState {
            &mut self.state
        }
    };
}

pub(crate) use impl_state_accessors;
