pub use cardinality::{ErrorRatio, Nva, Onvg, Onvgr};
pub use coverage::TwoSetCoverage;
pub use distance::{
    GenerationalDistance, InvertedGenerationalDistance, MaximumError, DEFAULT_P,
};
pub use hypervolume::{HyperareaRatio, Hypervolume, HypervolumeEngine};
pub use indicator::{Indicator, IndicatorState, NOT_COMPUTED};
pub use kind::IndicatorKind;
pub use relative_progress::RelativeProgress;
pub use spacing::Spacing;
pub use spread::{GeneralizedSpread, Spread};
pub use utility::{R2, R3, R3_ZERO_DENOMINATOR};

mod cardinality;
mod coverage;
mod distance;
mod hypervolume;
mod indicator;
mod kind;
mod relative_progress;
mod spacing;
mod spread;
mod utility;
