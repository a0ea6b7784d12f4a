pub use config::IndicatorConfig;
#[cfg(feature = "plot")]
pub use plot::plot_fronts;
pub use preprocessing::{joint_bounds, Preprocessing};
pub use report::{Assessment, AssessmentReport, IndicatorEntry};

mod config;
#[cfg(feature = "plot")]
mod plot;
mod preprocessing;
mod report;
