use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::core::{Front, OError};

/// The number of fronts an indicator needs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Arity {
    /// The indicator only needs the front to assess.
    One,
    /// The indicator compares the front against a second front (usually the true Pareto front).
    Two,
    /// The indicator needs the front, the same front at a later time and the true Pareto front.
    Three,
}

impl Display for Arity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Arity::One => f.write_str("unary"),
            Arity::Two => f.write_str("binary"),
            Arity::Three => f.write_str("ternary"),
        }
    }
}

/// The fronts passed to an indicator.
#[derive(Clone, Copy, Debug)]
pub enum FrontSet<'a> {
    /// The front to assess.
    One(&'a Front),
    /// The front to assess and the second (reference or true) front.
    Two(&'a Front, &'a Front),
    /// The front to assess, the second front and the true Pareto front.
    Three(&'a Front, &'a Front, &'a Front),
}

impl<'a> FrontSet<'a> {
    /// The arity of the set.
    ///
    /// returns: `Arity`
    pub fn arity(&self) -> Arity {
        match self {
            FrontSet::One(_) => Arity::One,
            FrontSet::Two(_, _) => Arity::Two,
            FrontSet::Three(_, _, _) => Arity::Three,
        }
    }

    /// The front to assess.
    ///
    /// returns: `&Front`
    pub fn front(&self) -> &'a Front {
        match *self {
            FrontSet::One(f) | FrontSet::Two(f, _) | FrontSet::Three(f, _, _) => f,
        }
    }

    /// All the fronts in the set.
    ///
    /// returns: `Vec<&Front>`
    pub fn fronts(&self) -> Vec<&'a Front> {
        match *self {
            FrontSet::One(a) => vec![a],
            FrontSet::Two(a, b) => vec![a, b],
            FrontSet::Three(a, b, c) => vec![a, b, c],
        }
    }

    /// Check that all the non-empty fronts in the set have the same number of objectives.
    ///
    /// returns: `Result<Option<usize>, OError>`. The number of objectives, or `None` if all
    /// fronts are empty.
    pub fn number_of_objectives(&self) -> Result<Option<usize>, OError> {
        let mut expected: Option<usize> = None;
        for (idx, front) in self.fronts().iter().enumerate() {
            if let Some(n) = front.number_of_objectives() {
                match expected {
                    None => expected = Some(n),
                    Some(e) if e != n => {
                        return Err(OError::DimensionMismatch(
                            format!("front #{}", idx + 1),
                            n,
                            e,
                        ))
                    }
                    Some(_) => {}
                }
            }
        }
        Ok(expected)
    }
}
