use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Whether the objectives of a front are minimised or maximised. Default is minimise.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObjectiveDirection {
    #[default]
    /// Minimise the objectives.
    Minimise,
    /// Maximise the objectives.
    Maximise,
}

impl ObjectiveDirection {
    /// Build the direction from a maximisation flag.
    ///
    /// # Arguments
    ///
    /// * `maximise`: Whether the objectives are maximised.
    ///
    /// returns: `ObjectiveDirection`
    pub fn from_maximise(maximise: bool) -> Self {
        if maximise {
            ObjectiveDirection::Maximise
        } else {
            ObjectiveDirection::Minimise
        }
    }

    /// Whether the objectives are maximised.
    ///
    /// returns: `bool`
    pub fn is_maximised(&self) -> bool {
        *self == ObjectiveDirection::Maximise
    }

    /// Whether `first` is strictly better than `second` under this direction.
    ///
    /// # Arguments
    ///
    /// * `first`: The first objective value.
    /// * `second`: The second objective value.
    ///
    /// returns: `bool`
    pub fn is_better(&self, first: f64, second: f64) -> bool {
        match self {
            ObjectiveDirection::Minimise => first < second,
            ObjectiveDirection::Maximise => first > second,
        }
    }
}

impl Display for ObjectiveDirection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ObjectiveDirection::Minimise => f.write_str("minimised"),
            ObjectiveDirection::Maximise => f.write_str("maximised"),
        }
    }
}

/// The requirement an indicator sets on a property of the fronts it receives (for example
/// whether the objectives must be maximised or scaled between 0 and 1). The caller is in
/// charge of preparing the fronts accordingly.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Requirement {
    /// The indicator works regardless of the property.
    #[default]
    Irrelevant,
    /// The property must hold.
    RequiredTrue,
    /// The property must not hold.
    RequiredFalse,
}

impl Requirement {
    /// Whether the property must be enforced given its current state. This returns `true` when
    /// the property `is_satisfied` is not what the requirement asks for.
    ///
    /// # Arguments
    ///
    /// * `is_satisfied`: Whether the property currently holds.
    ///
    /// returns: `bool`
    pub fn needs_change(&self, is_satisfied: bool) -> bool {
        match self {
            Requirement::Irrelevant => false,
            Requirement::RequiredTrue => !is_satisfied,
            Requirement::RequiredFalse => is_satisfied,
        }
    }
}

impl Display for Requirement {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Requirement::Irrelevant => f.write_str("irrelevant"),
            Requirement::RequiredTrue => f.write_str("required"),
            Requirement::RequiredFalse => f.write_str("forbidden"),
        }
    }
}

#[cfg(test)]
mod test {
    use crate::core::{ObjectiveDirection, Requirement};

    #[test]
    fn test_is_better() {
        assert!(ObjectiveDirection::Minimise.is_better(1.0, 2.0));
        assert!(!ObjectiveDirection::Minimise.is_better(2.0, 2.0));
        assert!(ObjectiveDirection::Maximise.is_better(3.0, 2.0));
        assert!(!ObjectiveDirection::Maximise.is_better(1.0, 2.0));
    }

    #[test]
    fn test_requirement_needs_change() {
        assert!(!Requirement::Irrelevant.needs_change(true));
        assert!(!Requirement::Irrelevant.needs_change(false));
        assert!(Requirement::RequiredTrue.needs_change(false));
        assert!(!Requirement::RequiredTrue.needs_change(true));
        assert!(Requirement::RequiredFalse.needs_change(true));
        assert!(!Requirement::RequiredFalse.needs_change(false));
    }
}
