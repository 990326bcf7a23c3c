// This is the models module containing the result structures handed back to JS
use serde::{Deserialize, Serialize};
use std::fmt;

/// Every check the engine can record. Serialized as its display name, which
/// is what the remediation trace shows next to each step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rule {
    #[serde(rename = "Root type")]
    RootType,
    #[serde(rename = "Features array")]
    FeaturesArray,
    #[serde(rename = "Feature type")]
    FeatureType,
    #[serde(rename = "Properties")]
    Properties,
    #[serde(rename = "Required property")]
    RequiredProperty,
    #[serde(rename = "Area type")]
    AreaType,
    #[serde(rename = "Geometry")]
    Geometry,
    #[serde(rename = "Geometry type")]
    GeometryType,
    #[serde(rename = "Polygon only")]
    PolygonOnly,
    #[serde(rename = "Coordinates array")]
    CoordinatesArray,
    #[serde(rename = "Interior rings")]
    InteriorRings,
    #[serde(rename = "Exterior ring")]
    ExteriorRing,
    #[serde(rename = "Ring structure")]
    RingStructure,
    #[serde(rename = "Minimum points")]
    MinimumPoints,
    #[serde(rename = "Ring closure")]
    RingClosure,
    #[serde(rename = "Duplicate points")]
    DuplicatePoints,
    #[serde(rename = "Zero-length edges")]
    ZeroLengthEdges,
    #[serde(rename = "Coordinates")]
    Coordinates,
    #[serde(rename = "Position format")]
    PositionFormat,
    #[serde(rename = "Longitude")]
    Longitude,
    #[serde(rename = "Latitude")]
    Latitude,
    #[serde(rename = "Coordinate precision")]
    CoordinatePrecision,
    #[serde(rename = "Self-intersection")]
    SelfIntersection,
    #[serde(rename = "Spike vertices")]
    SpikeVertices,
    #[serde(rename = "Excessive straight lines")]
    StraightLines,
}

impl Rule {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rule::RootType => "Root type",
            Rule::FeaturesArray => "Features array",
            Rule::FeatureType => "Feature type",
            Rule::Properties => "Properties",
            Rule::RequiredProperty => "Required property",
            Rule::AreaType => "Area type",
            Rule::Geometry => "Geometry",
            Rule::GeometryType => "Geometry type",
            Rule::PolygonOnly => "Polygon only",
            Rule::CoordinatesArray => "Coordinates array",
            Rule::InteriorRings => "Interior rings",
            Rule::ExteriorRing => "Exterior ring",
            Rule::RingStructure => "Ring structure",
            Rule::MinimumPoints => "Minimum points",
            Rule::RingClosure => "Ring closure",
            Rule::DuplicatePoints => "Duplicate points",
            Rule::ZeroLengthEdges => "Zero-length edges",
            Rule::Coordinates => "Coordinates",
            Rule::PositionFormat => "Position format",
            Rule::Longitude => "Longitude",
            Rule::Latitude => "Latitude",
            Rule::CoordinatePrecision => "Coordinate precision",
            Rule::SelfIntersection => "Self-intersection",
            Rule::SpikeVertices => "Spike vertices",
            Rule::StraightLines => "Excessive straight lines",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationStep {
    pub rule: Rule,
    pub passed: bool,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub steps: Vec<ValidationStep>,
}

impl ValidationResult {
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn failed_steps(&self) -> impl Iterator<Item = &ValidationStep> {
        self.steps.iter().filter(|step| !step.passed)
    }

    /// True when at least one step for `rule` was recorded as failing.
    pub fn has_failure(&self, rule: Rule) -> bool {
        self.failed_steps().any(|step| step.rule == rule)
    }

    /// True when any step, passing or failing, was recorded for `rule`.
    pub fn has_step(&self, rule: Rule) -> bool {
        self.steps.iter().any(|step| step.rule == rule)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerPlotResult {
    pub plot_id: String,
    pub farmer: String,
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub steps: Vec<ValidationStep>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleCount {
    pub rule: Rule,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationSummary {
    pub total_plots: usize,
    pub valid_plots: usize,
    pub invalid_plots: usize,
    pub common_failures: Vec<RuleCount>,
    pub invalid_plot_ids: Vec<String>,
}
