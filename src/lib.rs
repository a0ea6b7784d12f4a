//! Quality indicators to assess the approximated Pareto fronts produced by multi-objective
//! optimisation algorithms.
//!
//! A front is a set of objective vectors ([`core::Front`]). An indicator ([`metrics::Indicator`])
//! turns one, two or three fronts into a scalar measuring convergence, diversity, cardinality,
//! coverage or the dominated hyper-volume. When the fronts do not meet the preconditions of an
//! indicator (for example they are empty), the indicator is not computed and its result is
//! [`metrics::NOT_COMPUTED`].
//!
//! The [`assessment`] module calculates a battery of indicators on a front, preparing a copy of
//! the fronts for each indicator according to its direction and scale requirements.
//!
//! ```
//! use optirustic_indicators::core::{Front, FrontSet, OError};
//! use optirustic_indicators::metrics::{Hypervolume, Indicator, Spacing};
//!
//! fn main() -> Result<(), OError> {
//!     let front = Front::new(vec![vec![1.0, 0.0], vec![0.5, 0.5], vec![0.0, 1.0]])?;
//!     let hv = Hypervolume::new().evaluate(FrontSet::One(&front))?;
//!     assert_eq!(hv, Some(0.25));
//!
//!     let mut spacing = Spacing::new();
//!     spacing.set_front(front);
//!     assert_eq!(spacing.calculate()?, 0.0);
//!     Ok(())
//! }
//! ```

pub mod assessment;
pub mod core;
pub mod metrics;
pub mod utils;
