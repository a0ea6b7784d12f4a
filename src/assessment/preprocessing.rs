use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::core::{Front, OError, Requirement};

/// The transformation applied to a copy of the fronts before calculating an indicator, so that
/// the fronts meet the direction and scale requirements of the indicator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Preprocessing {
    /// The fronts are used as they are.
    Identity,
    /// The objective values are negated to swap between minimisation and maximisation.
    Invert,
    /// The objective values are scaled between 0 and 1.
    Scale,
    /// The objective values are scaled between 0 and 1 and then inverted as `1 - scaled`.
    InvertAndScale,
}

impl Preprocessing {
    /// Choose the transformation needed by an indicator.
    ///
    /// # Arguments
    ///
    /// * `requires_max_problem`: Whether the indicator needs maximised objectives.
    /// * `requires_scaled_objectives`: Whether the indicator needs objectives scaled between 0
    ///    and 1. The input fronts are assumed not to be scaled.
    /// * `problem_is_maximised`: Whether the objectives of the problem are maximised.
    ///
    /// returns: `Preprocessing`
    pub fn classify(
        requires_max_problem: Requirement,
        requires_scaled_objectives: Requirement,
        problem_is_maximised: bool,
    ) -> Self {
        let invert = requires_max_problem.needs_change(problem_is_maximised);
        let scale = requires_scaled_objectives.needs_change(false);
        match (invert, scale) {
            (false, false) => Preprocessing::Identity,
            (true, false) => Preprocessing::Invert,
            (false, true) => Preprocessing::Scale,
            (true, true) => Preprocessing::InvertAndScale,
        }
    }

    /// Transform a copy of the front.
    ///
    /// # Arguments
    ///
    /// * `front`: The front.
    /// * `bounds`: The `(min, max)` values of each objective used for scaling. These are
    ///    usually collected from all the fronts passed to the same indicator with
    ///    [`joint_bounds`] so that all fronts are mapped in the same way.
    ///
    /// returns: `Result<Front, OError>`
    pub fn apply(&self, front: &Front, bounds: &[(f64, f64)]) -> Result<Front, OError> {
        if *self == Preprocessing::Identity || front.is_empty() {
            return Ok(front.clone());
        }
        if *self != Preprocessing::Invert {
            if let Some(n) = front.number_of_objectives() {
                if n != bounds.len() {
                    return Err(OError::DimensionMismatch(
                        "front to scale".to_string(),
                        n,
                        bounds.len(),
                    ));
                }
            }
        }

        let points = front
            .iter()
            .map(|point| {
                point
                    .iter()
                    .enumerate()
                    .map(|(k, v)| match self {
                        Preprocessing::Identity => *v,
                        Preprocessing::Invert => -v,
                        Preprocessing::Scale => scale(*v, bounds[k]),
                        Preprocessing::InvertAndScale => 1.0 - scale(*v, bounds[k]),
                    })
                    .collect()
            })
            .collect();
        Front::new(points)
    }
}

impl Display for Preprocessing {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Preprocessing::Identity => f.write_str("identity"),
            Preprocessing::Invert => f.write_str("invert"),
            Preprocessing::Scale => f.write_str("scale"),
            Preprocessing::InvertAndScale => f.write_str("invert and scale"),
        }
    }
}

/// Min-max scaling. A range with zero width maps to 0.
fn scale(value: f64, (min, max): (f64, f64)) -> f64 {
    let range = max - min;
    if range == 0.0 {
        0.0
    } else {
        (value - min) / range
    }
}

/// Collect the `(min, max)` values of each objective across all the given fronts.
///
/// # Arguments
///
/// * `fronts`: The fronts. These must have the same number of objectives.
///
/// returns: `Vec<(f64, f64)>`. This is empty when all fronts are empty.
pub fn joint_bounds(fronts: &[&Front]) -> Vec<(f64, f64)> {
    let mut bounds: Vec<(f64, f64)> = vec![];
    for front_bounds in fronts.iter().filter_map(|f| f.bounds()) {
        if bounds.is_empty() {
            bounds = front_bounds;
            continue;
        }
        for (bound, (min, max)) in bounds.iter_mut().zip(front_bounds) {
            bound.0 = bound.0.min(min);
            bound.1 = bound.1.max(max);
        }
    }
    bounds
}
