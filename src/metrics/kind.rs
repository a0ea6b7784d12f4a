use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::core::Arity;

/// The available quality indicators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IndicatorKind {
    GenerationalDistance,
    InvertedGenerationalDistance,
    MaximumError,
    Spacing,
    ErrorRatio,
    TwoSetCoverage,
    #[serde(rename = "NVA")]
    Nva,
    #[serde(rename = "ONVG")]
    Onvg,
    #[serde(rename = "ONVGR")]
    Onvgr,
    Spread,
    GeneralizedSpread,
    Hypervolume,
    HyperareaRatio,
    R2,
    R3,
    RelativeProgress,
}

impl IndicatorKind {
    /// All the indicators.
    pub const ALL: [IndicatorKind; 16] = [
        IndicatorKind::GenerationalDistance,
        IndicatorKind::InvertedGenerationalDistance,
        IndicatorKind::MaximumError,
        IndicatorKind::Spacing,
        IndicatorKind::ErrorRatio,
        IndicatorKind::TwoSetCoverage,
        IndicatorKind::Nva,
        IndicatorKind::Onvg,
        IndicatorKind::Onvgr,
        IndicatorKind::Spread,
        IndicatorKind::GeneralizedSpread,
        IndicatorKind::Hypervolume,
        IndicatorKind::HyperareaRatio,
        IndicatorKind::R2,
        IndicatorKind::R3,
        IndicatorKind::RelativeProgress,
    ];

    /// The indicator name. This matches [`crate::metrics::Indicator::name`].
    ///
    /// returns: `&'static str`
    pub fn name(&self) -> &'static str {
        match self {
            IndicatorKind::GenerationalDistance => "GenerationalDistance",
            IndicatorKind::InvertedGenerationalDistance => "InvertedGenerationalDistance",
            IndicatorKind::MaximumError => "MaximumError",
            IndicatorKind::Spacing => "Spacing",
            IndicatorKind::ErrorRatio => "ErrorRatio",
            IndicatorKind::TwoSetCoverage => "TwoSetCoverage",
            IndicatorKind::Nva => "NVA",
            IndicatorKind::Onvg => "ONVG",
            IndicatorKind::Onvgr => "ONVGR",
            IndicatorKind::Spread => "Spread",
            IndicatorKind::GeneralizedSpread => "GeneralizedSpread",
            IndicatorKind::Hypervolume => "Hypervolume",
            IndicatorKind::HyperareaRatio => "HyperareaRatio",
            IndicatorKind::R2 => "R2",
            IndicatorKind::R3 => "R3",
            IndicatorKind::RelativeProgress => "RelativeProgress",
        }
    }

    /// The number of fronts the indicator needs.
    ///
    /// returns: `Arity`
    pub fn arity(&self) -> Arity {
        match self {
            IndicatorKind::Spacing | IndicatorKind::Onvg | IndicatorKind::Hypervolume => {
                Arity::One
            }
            IndicatorKind::RelativeProgress => Arity::Three,
            _ => Arity::Two,
        }
    }
}

impl Display for IndicatorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
