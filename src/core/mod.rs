pub use error::OError;
pub use front::Front;
pub use front_set::{Arity, FrontSet};
pub use objective::{ObjectiveDirection, Requirement};

mod error;
mod front;
mod front_set;
mod objective;
pub(crate) mod test_utils;
