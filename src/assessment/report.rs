use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::assessment::preprocessing::joint_bounds;
use crate::assessment::{IndicatorConfig, Preprocessing};
use crate::core::{Arity, Front, ObjectiveDirection, OError};
use crate::metrics::{IndicatorKind, NOT_COMPUTED};

/// The outcome of one indicator.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct IndicatorEntry {
    /// The indicator.
    pub kind: IndicatorKind,
    /// The transformation applied to the fronts. `None` if the indicator failed before the
    /// fronts were prepared.
    pub preprocessing: Option<Preprocessing>,
    /// The indicator value or [`NOT_COMPUTED`].
    pub result: f64,
    /// Whether the indicator was computed. This tells apart a real `-1` from [`NOT_COMPUTED`].
    pub computed: bool,
    /// The error message, if the indicator failed.
    pub error: Option<String>,
}

/// The indicator values calculated by [`Assessment::run`].
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct AssessmentReport {
    /// When the assessment started.
    pub created_at: DateTime<Utc>,
    /// The time taken by the assessment in milliseconds.
    pub took_ms: i64,
    /// Whether the objectives of the problem are minimised or maximised.
    pub direction: ObjectiveDirection,
    /// The number of solutions in the assessed front.
    pub number_of_solutions: usize,
    /// The number of objectives of the assessed front.
    pub number_of_objectives: Option<usize>,
    /// The outcome of each indicator, in the configuration order.
    pub indicators: Vec<IndicatorEntry>,
}

impl AssessmentReport {
    /// Get the first entry of an indicator.
    ///
    /// # Arguments
    ///
    /// * `kind`: The indicator.
    ///
    /// returns: `Option<&IndicatorEntry>`
    pub fn get(&self, kind: IndicatorKind) -> Option<&IndicatorEntry> {
        self.indicators.iter().find(|e| e.kind == kind)
    }

    /// The entries of the indicators that failed.
    ///
    /// returns: `Vec<&IndicatorEntry>`
    pub fn failures(&self) -> Vec<&IndicatorEntry> {
        self.indicators
            .iter()
            .filter(|e| e.error.is_some())
            .collect()
    }

    /// Serialise the report to a JSON string.
    ///
    /// returns: `Result<String, OError>`
    pub fn to_json(&self) -> Result<String, OError> {
        serde_json::to_string_pretty(self).map_err(|e| OError::Export(e.to_string()))
    }

    /// Save the report to a JSON file.
    ///
    /// # Arguments
    ///
    /// * `destination`: The path to the JSON file.
    ///
    /// returns: `Result<(), OError>`
    pub fn save_to_json<P: AsRef<Path>>(&self, destination: P) -> Result<(), OError> {
        let data = self.to_json()?;
        fs::write(destination.as_ref(), data).map_err(|e| OError::Export(e.to_string()))?;
        info!("Saved assessment report to {:?}", destination.as_ref());
        Ok(())
    }
}

/// Calculate a battery of indicators on a front. For each indicator, the fronts are copied and
/// transformed to meet the indicator direction and scale requirements (see
/// [`Preprocessing::classify`]). The indicators run in parallel and the failure of one indicator
/// is reported in its entry without stopping the others.
///
/// # Example
/// ```
/// use optirustic_indicators::assessment::{Assessment, IndicatorConfig};
/// use optirustic_indicators::core::{Front, ObjectiveDirection, OError};
/// use optirustic_indicators::metrics::IndicatorKind;
///
/// fn main() -> Result<(), OError> {
///     let front = Front::new(vec![vec![0.1, 0.9], vec![0.6, 0.5]])?;
///     let true_front = Front::new(vec![vec![0.0, 1.0], vec![0.5, 0.5], vec![1.0, 0.0]])?;
///     let assessment = Assessment::new(front, ObjectiveDirection::Minimise)
///         .with_reference_front(true_front)
///         .with_indicators(vec![
///             IndicatorConfig::new(IndicatorKind::Onvgr),
///             IndicatorConfig::new(IndicatorKind::ErrorRatio),
///         ]);
///     let report = assessment.run();
///     assert_eq!(report.get(IndicatorKind::ErrorRatio).unwrap().result, 1.0);
///     Ok(())
/// }
/// ```
#[derive(Clone, Debug)]
pub struct Assessment {
    /// The front to assess.
    front: Front,
    /// The reference or true Pareto front.
    reference_front: Option<Front>,
    /// The front found later during the search, used by ternary indicators.
    later_front: Option<Front>,
    /// Whether the objectives are minimised or maximised.
    direction: ObjectiveDirection,
    /// The indicators to calculate.
    indicators: Vec<IndicatorConfig>,
}

impl Assessment {
    /// Create an assessment without indicators.
    ///
    /// # Arguments
    ///
    /// * `front`: The front to assess.
    /// * `direction`: Whether the objectives are minimised or maximised.
    ///
    /// returns: `Assessment`
    pub fn new(front: Front, direction: ObjectiveDirection) -> Self {
        Self {
            front,
            reference_front: None,
            later_front: None,
            direction,
            indicators: vec![],
        }
    }

    /// Set the reference (or true) Pareto front used by the indicators comparing two fronts.
    pub fn with_reference_front(mut self, front: Front) -> Self {
        self.reference_front = Some(front);
        self
    }

    /// Set the front found later during the search, used by [`IndicatorKind::RelativeProgress`].
    pub fn with_later_front(mut self, front: Front) -> Self {
        self.later_front = Some(front);
        self
    }

    /// Set the indicators to calculate.
    pub fn with_indicators(mut self, indicators: Vec<IndicatorConfig>) -> Self {
        self.indicators = indicators;
        self
    }

    /// Add an indicator to calculate.
    pub fn add_indicator(&mut self, indicator: IndicatorConfig) {
        self.indicators.push(indicator);
    }

    /// The front to assess.
    ///
    /// returns: `&Front`
    pub fn front(&self) -> &Front {
        &self.front
    }

    /// The reference front.
    ///
    /// returns: `Option<&Front>`
    pub fn reference_front(&self) -> Option<&Front> {
        self.reference_front.as_ref()
    }

    /// Calculate all the indicators.
    ///
    /// returns: `AssessmentReport`
    pub fn run(&self) -> AssessmentReport {
        let created_at = Utc::now();
        info!(
            "Assessing a front with {} solutions using {} indicators",
            self.front.len(),
            self.indicators.len()
        );

        let indicators: Vec<IndicatorEntry> = self
            .indicators
            .par_iter()
            .map(|config| self.assess(config))
            .collect();

        let report = AssessmentReport {
            created_at,
            took_ms: (Utc::now() - created_at).num_milliseconds(),
            direction: self.direction,
            number_of_solutions: self.front.len(),
            number_of_objectives: self.front.number_of_objectives(),
            indicators,
        };
        info!(
            "Assessment completed in {} ms with {} failures",
            report.took_ms,
            report.failures().len()
        );
        report
    }

    /// Calculate one indicator and collect its outcome or its error.
    fn assess(&self, config: &IndicatorConfig) -> IndicatorEntry {
        let mut entry = IndicatorEntry {
            kind: config.kind,
            preprocessing: None,
            result: NOT_COMPUTED,
            computed: false,
            error: None,
        };
        if let Err(e) = self.try_assess(config, &mut entry) {
            warn!("The indicator '{}' failed: {}", config.kind, e);
            entry.result = NOT_COMPUTED;
            entry.computed = false;
            entry.error = Some(e.to_string());
        }
        entry
    }

    fn try_assess(&self, config: &IndicatorConfig, entry: &mut IndicatorEntry) -> Result<(), OError> {
        let mut indicator = config.build_for(self.direction)?;
        let own_reference = config.load_second_front()?;
        let reference = own_reference.as_ref().or(self.reference_front.as_ref());
        let missing = |which: &str| OError::MissingFront(config.kind.to_string(), which.to_string());

        let fronts: Vec<&Front> = match indicator.arity() {
            Arity::One => vec![&self.front],
            Arity::Two => vec![&self.front, reference.ok_or_else(|| missing("reference"))?],
            Arity::Three => vec![
                &self.front,
                self.later_front.as_ref().ok_or_else(|| missing("later"))?,
                reference.ok_or_else(|| missing("reference"))?,
            ],
        };

        let preprocessing = Preprocessing::classify(
            indicator.requires_max_problem(),
            indicator.requires_scaled_objectives(),
            self.direction.is_maximised(),
        );
        entry.preprocessing = Some(preprocessing);
        debug!("Preparing the fronts of '{}' with {}", config.kind, preprocessing);

        let bounds = joint_bounds(&fronts);
        let mut prepared = fronts
            .iter()
            .map(|f| preprocessing.apply(f, &bounds))
            .collect::<Result<Vec<Front>, OError>>()?
            .into_iter();

        if let Some(front) = prepared.next() {
            indicator.set_front(front);
        }
        if let Some(front) = prepared.next() {
            indicator.set_second_front(front);
        }
        if let Some(front) = prepared.next() {
            indicator.set_third_front(front);
        }

        entry.result = indicator.calculate()?;
        entry.computed = indicator.is_computed();
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use std::env;

    use float_cmp::assert_approx_eq;

    use crate::assessment::{Assessment, IndicatorConfig, Preprocessing};
    use crate::core::test_utils::front_from;
    use crate::core::{Front, ObjectiveDirection};
    use crate::metrics::{IndicatorKind, NOT_COMPUTED};

    fn fronts() -> (Front, Front) {
        let front = front_from(&[[0.0, 1.0], [0.5, 0.6], [1.0, 0.0]]);
        let true_front = front_from(&[[0.0, 1.0], [0.5, 0.5], [1.0, 0.0]]);
        (front, true_front)
    }

    #[test]
    fn test_run() {
        let (front, true_front) = fronts();
        let assessment = Assessment::new(front, ObjectiveDirection::Minimise)
            .with_reference_front(true_front)
            .with_indicators(vec![
                IndicatorConfig::new(IndicatorKind::Onvg),
                IndicatorConfig::new(IndicatorKind::Nva),
                IndicatorConfig::new(IndicatorKind::ErrorRatio),
                IndicatorConfig::new(IndicatorKind::Hypervolume),
                IndicatorConfig::new(IndicatorKind::GenerationalDistance),
            ]);
        let report = assessment.run();

        assert_eq!(report.indicators.len(), 5);
        assert!(report.failures().is_empty());
        assert_eq!(report.number_of_solutions, 3);
        assert_eq!(report.number_of_objectives, Some(2));

        let onvg = report.get(IndicatorKind::Onvg).unwrap();
        assert_eq!(onvg.result, 3.0);
        assert_eq!(onvg.preprocessing, Some(Preprocessing::Identity));
        assert_eq!(report.get(IndicatorKind::Nva).unwrap().result, 0.0);
        assert_approx_eq!(
            f64,
            report.get(IndicatorKind::ErrorRatio).unwrap().result,
            1.0 / 3.0,
            ulps = 2
        );

        // minimised front inverted and scaled to [[1, 0], [0.5, 0.4], [0, 1]]
        let hv = report.get(IndicatorKind::Hypervolume).unwrap();
        assert_eq!(hv.preprocessing, Some(Preprocessing::InvertAndScale));
        assert_approx_eq!(f64, hv.result, 0.2, epsilon = 1e-12);

        // scaled fronts differ by 0.1 in one point
        let gd = report.get(IndicatorKind::GenerationalDistance).unwrap();
        assert_eq!(gd.preprocessing, Some(Preprocessing::Scale));
        assert_approx_eq!(f64, gd.result, 0.1 / 3.0, epsilon = 1e-12);
    }

    #[test]
    /// A failing indicator does not stop the other indicators.
    fn test_failure_isolation() {
        let (front, _) = fronts();
        let assessment = Assessment::new(front, ObjectiveDirection::Minimise).with_indicators(vec![
            IndicatorConfig::new(IndicatorKind::R2).with_h(3),
            IndicatorConfig::new(IndicatorKind::Spacing),
            IndicatorConfig::new(IndicatorKind::Onvgr),
            IndicatorConfig::new(IndicatorKind::RelativeProgress),
        ]);
        let report = assessment.run();

        assert_eq!(report.failures().len(), 3);
        let r2 = report.get(IndicatorKind::R2).unwrap();
        assert_eq!(r2.result, NOT_COMPUTED);
        assert!(r2.error.is_some());
        assert!(r2.preprocessing.is_none());

        let onvgr = report.get(IndicatorKind::Onvgr).unwrap();
        assert!(onvgr.error.as_ref().unwrap().contains("reference"));

        let spacing = report.get(IndicatorKind::Spacing).unwrap();
        assert!(spacing.computed);
        assert!(spacing.error.is_none());
    }

    #[test]
    fn test_not_computed_and_negative_values() {
        let (front, true_front) = fronts();
        let assessment = Assessment::new(front, ObjectiveDirection::Minimise)
            .with_reference_front(Front::empty())
            .with_later_front(true_front)
            .with_indicators(vec![
                IndicatorConfig::new(IndicatorKind::Onvgr),
                IndicatorConfig::new(IndicatorKind::Nva),
            ]);
        let report = assessment.run();
        assert!(report.failures().is_empty());

        let onvgr = report.get(IndicatorKind::Onvgr).unwrap();
        assert_eq!(onvgr.result, NOT_COMPUTED);
        assert!(!onvgr.computed);

        let nva = report.get(IndicatorKind::Nva).unwrap();
        assert_eq!(nva.result, 3.0);
        assert!(nva.computed);
    }

    #[test]
    /// The dominance and sorting direction follows the direction of the problem.
    fn test_minimised_coverage() {
        let front = front_from(&[[0.1, 0.1]]);
        let reference = front_from(&[[0.5, 0.5]]);
        let report = Assessment::new(front.clone(), ObjectiveDirection::Minimise)
            .with_reference_front(reference.clone())
            .with_indicators(vec![IndicatorConfig::new(IndicatorKind::TwoSetCoverage)])
            .run();
        let coverage = report.get(IndicatorKind::TwoSetCoverage).unwrap();
        assert_eq!(coverage.preprocessing, Some(Preprocessing::Identity));
        assert_eq!(coverage.result, 1.0);

        // the front covers nothing when the objectives are maximised
        let report = Assessment::new(front, ObjectiveDirection::Maximise)
            .with_reference_front(reference)
            .with_indicators(vec![IndicatorConfig::new(IndicatorKind::TwoSetCoverage)])
            .run();
        assert_eq!(report.get(IndicatorKind::TwoSetCoverage).unwrap().result, 0.0);
    }

    #[test]
    fn test_save_report() {
        let (front, true_front) = fronts();
        let report = Assessment::new(front, ObjectiveDirection::Maximise)
            .with_reference_front(true_front)
            .with_indicators(vec![IndicatorConfig::new(IndicatorKind::TwoSetCoverage)])
            .run();

        let file = env::temp_dir().join("optirustic_indicators_report.json");
        report.save_to_json(&file).unwrap();
        let data = std::fs::read_to_string(&file).unwrap();
        let loaded: crate::assessment::AssessmentReport = serde_json::from_str(&data).unwrap();
        assert_eq!(loaded.indicators, report.indicators);
        assert_eq!(loaded.direction, ObjectiveDirection::Maximise);
    }
}
