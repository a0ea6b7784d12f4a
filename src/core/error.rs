use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
/// Errors raised by the library.
pub enum OError {
    #[error("The following error occurred: {0}")]
    Generic(String),
    #[error("The solution #{0} has {1} objectives, but the front has {2} objectives")]
    RaggedFront(usize, usize, usize),
    #[error("An error occurred when reading the front file '{path:?}' at line {line}: {message}")]
    FrontFile {
        path: PathBuf,
        line: usize,
        message: String,
    },
    #[error("The {0} has {1} objectives, but {2} objectives were expected")]
    DimensionMismatch(String, usize, usize),
    #[error("The indicator '{0}' needs the {1} front, but this was not set")]
    MissingFront(String, String),
    #[error("The configuration of the indicator '{0}' is not valid: {1}")]
    IndicatorConfig(String, String),
    #[error("An error occurred in the calculation of the '{0}' metric: {1}")]
    Metric(String, String),
    #[error("The hyper-volume calculation exceeded the budget of {0} steps")]
    StepBudgetExceeded(usize),
    #[error("An error occurred when exporting the assessment data: {0}")]
    Export(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
