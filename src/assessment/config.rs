use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::core::{Front, ObjectiveDirection, OError};
use crate::metrics::{
    ErrorRatio, GeneralizedSpread, GenerationalDistance, HyperareaRatio, Hypervolume, Indicator,
    IndicatorKind, InvertedGenerationalDistance, MaximumError, Nva, Onvg, Onvgr, RelativeProgress,
    Spacing, Spread, TwoSetCoverage, DEFAULT_P, R2, R3,
};

/// The settings of one indicator. Options that do not apply to the indicator kind are ignored.
///
/// # Example
/// ```
/// use optirustic_indicators::assessment::IndicatorConfig;
/// use optirustic_indicators::core::OError;
/// use optirustic_indicators::metrics::{Indicator, IndicatorKind};
///
/// fn main() -> Result<(), OError> {
///     let config: IndicatorConfig =
///         serde_json::from_str(r#"{ "kind": "R2", "refPoint": "0, 0", "H": 10 }"#)?;
///     let r2 = config.build()?;
///     assert_eq!(r2.name(), "R2");
///
///     let gd = IndicatorConfig::new(IndicatorKind::GenerationalDistance).with_p(1.0);
///     assert_eq!(gd.build()?.name(), "GenerationalDistance");
///     Ok(())
/// }
/// ```
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct IndicatorConfig {
    /// The indicator to calculate.
    pub kind: IndicatorKind,
    /// The file with the front to use as second (true) front instead of the one of the
    /// assessment.
    #[serde(default, alias = "second-pareto-front")]
    pub second_pareto_front: Option<PathBuf>,
    /// The exponent of the distance indicators. Default to 2.
    #[serde(default)]
    pub p: Option<f64>,
    /// The comma-separated coordinates of the reference point of R2 and R3.
    #[serde(default, alias = "refPoint")]
    pub ref_point: Option<String>,
    /// The resolution used to generate the weight vectors of R2 and R3.
    #[serde(default, alias = "H")]
    pub h: Option<usize>,
    /// Whether the objectives are maximised. This sets the direction of TwoSetCoverage, Spread
    /// and GeneralizedSpread. When this is not set, [`IndicatorConfig::build_for`] uses the
    /// direction of the problem and [`IndicatorConfig::build`] defaults to `true` for
    /// TwoSetCoverage and to `false` for the spread indicators.
    #[serde(default)]
    pub max: Option<bool>,
    /// The maximum number of slicing steps of the hyper-volume algorithm.
    #[serde(default)]
    pub step_limit: Option<usize>,
}

impl IndicatorConfig {
    /// Create the configuration of an indicator with the default settings.
    ///
    /// # Arguments
    ///
    /// * `kind`: The indicator.
    ///
    /// returns: `IndicatorConfig`
    pub fn new(kind: IndicatorKind) -> Self {
        Self {
            kind,
            second_pareto_front: None,
            p: None,
            ref_point: None,
            h: None,
            max: None,
            step_limit: None,
        }
    }

    /// Set the second front file.
    pub fn with_second_pareto_front<P: AsRef<Path>>(mut self, file: P) -> Self {
        self.second_pareto_front = Some(file.as_ref().to_path_buf());
        self
    }

    /// Set the exponent.
    pub fn with_p(mut self, p: f64) -> Self {
        self.p = Some(p);
        self
    }

    /// Set the reference point as comma-separated coordinates.
    pub fn with_ref_point(mut self, ref_point: &str) -> Self {
        self.ref_point = Some(ref_point.to_string());
        self
    }

    /// Set the resolution of the weight vectors.
    pub fn with_h(mut self, h: usize) -> Self {
        self.h = Some(h);
        self
    }

    /// Set the objective direction flag.
    pub fn with_max(mut self, max: bool) -> Self {
        self.max = Some(max);
        self
    }

    /// Set the hyper-volume step budget.
    pub fn with_step_limit(mut self, step_limit: usize) -> Self {
        self.step_limit = Some(step_limit);
        self
    }

    /// Load a list of configurations from a JSON file.
    ///
    /// # Arguments
    ///
    /// * `file`: The path to the JSON file containing an array of configurations.
    ///
    /// returns: `Result<Vec<IndicatorConfig>, OError>`
    pub fn from_json_file<P: AsRef<Path>>(file: P) -> Result<Vec<Self>, OError> {
        let reader = BufReader::new(File::open(file.as_ref())?);
        let configs: Vec<Self> = serde_json::from_reader(reader)?;
        debug!(
            "Loaded {} indicator configurations from {:?}",
            configs.len(),
            file.as_ref()
        );
        Ok(configs)
    }

    /// Parse the reference point.
    ///
    /// returns: `Result<Option<Vec<f64>>, OError>`. `None` if the reference point is not set.
    pub fn parsed_ref_point(&self) -> Result<Option<Vec<f64>>, OError> {
        let Some(ref_point) = &self.ref_point else {
            return Ok(None);
        };
        ref_point
            .split(',')
            .map(|v| {
                v.trim().parse::<f64>().map_err(|_| {
                    OError::IndicatorConfig(
                        self.kind.to_string(),
                        format!("The reference point coordinate '{}' is not a number", v.trim()),
                    )
                })
            })
            .collect::<Result<Vec<f64>, OError>>()
            .map(Some)
    }

    /// Load the second front file, if set.
    ///
    /// returns: `Result<Option<Front>, OError>`
    pub fn load_second_front(&self) -> Result<Option<Front>, OError> {
        self.second_pareto_front
            .as_ref()
            .map(Front::from_file)
            .transpose()
    }

    /// Get a mandatory option or return a configuration error.
    fn required<T>(&self, value: Option<T>, option: &str) -> Result<T, OError> {
        value.ok_or_else(|| {
            OError::IndicatorConfig(
                self.kind.to_string(),
                format!("The option '{}' is mandatory", option),
            )
        })
    }

    /// Create the indicator. This returns an error if a mandatory option is missing or an
    /// option is not valid.
    ///
    /// returns: `Result<Box<dyn Indicator>, OError>`
    pub fn build(&self) -> Result<Box<dyn Indicator>, OError> {
        self.create(None)
    }

    /// Create the indicator for a problem. The direction of the problem is used by the
    /// indicators checking dominance or sorting the fronts when `max` is not set.
    ///
    /// # Arguments
    ///
    /// * `problem_direction`: Whether the objectives of the problem are minimised or maximised.
    ///
    /// returns: `Result<Box<dyn Indicator>, OError>`
    pub fn build_for(
        &self,
        problem_direction: ObjectiveDirection,
    ) -> Result<Box<dyn Indicator>, OError> {
        self.create(Some(problem_direction.is_maximised()))
    }

    fn create(&self, problem_is_maximised: Option<bool>) -> Result<Box<dyn Indicator>, OError> {
        let p = self.p.unwrap_or(DEFAULT_P);
        let direction = |fallback: bool| {
            ObjectiveDirection::from_maximise(
                self.max.or(problem_is_maximised).unwrap_or(fallback),
            )
        };
        let indicator: Box<dyn Indicator> = match self.kind {
            IndicatorKind::GenerationalDistance => Box::new(GenerationalDistance::new(p)?),
            IndicatorKind::InvertedGenerationalDistance => {
                Box::new(InvertedGenerationalDistance::new(p)?)
            }
            IndicatorKind::MaximumError => Box::new(MaximumError::new(p)?),
            IndicatorKind::Spacing => Box::new(Spacing::new()),
            IndicatorKind::ErrorRatio => Box::new(ErrorRatio::new()),
            IndicatorKind::TwoSetCoverage => Box::new(TwoSetCoverage::new(direction(true))),
            IndicatorKind::Nva => Box::new(Nva::new()),
            IndicatorKind::Onvg => Box::new(Onvg::new()),
            IndicatorKind::Onvgr => Box::new(Onvgr::new()),
            IndicatorKind::Spread => Box::new(Spread::new(direction(false))),
            IndicatorKind::GeneralizedSpread => Box::new(GeneralizedSpread::new(direction(false))),
            IndicatorKind::Hypervolume => match self.step_limit {
                Some(limit) => Box::new(Hypervolume::with_step_limit(limit)),
                None => Box::new(Hypervolume::new()),
            },
            IndicatorKind::HyperareaRatio => match self.step_limit {
                Some(limit) => Box::new(HyperareaRatio::with_step_limit(limit)),
                None => Box::new(HyperareaRatio::new()),
            },
            IndicatorKind::R2 => {
                let ref_point = self.required(self.parsed_ref_point()?, "refPoint")?;
                Box::new(R2::new(ref_point, self.required(self.h, "H")?)?)
            }
            IndicatorKind::R3 => {
                let ref_point = self.required(self.parsed_ref_point()?, "refPoint")?;
                Box::new(R3::new(ref_point, self.required(self.h, "H")?)?)
            }
            IndicatorKind::RelativeProgress => Box::new(RelativeProgress::new(p)?),
        };
        Ok(indicator)
    }
}
