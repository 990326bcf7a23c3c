use serde::{Deserialize, Serialize};

use crate::error::ValidatorError;

// Decimal places used when comparing positions for closure and duplicates
pub const COORDINATE_TOLERANCE_DECIMALS: i32 = 6;

const DEFAULT_MAX_DECIMAL_PLACES: u32 = 6;
const DEFAULT_MIN_SPIKE_ANGLE_DEGREES: f64 = 5.0;
const MAX_SUPPORTED_DECIMAL_PLACES: u32 = 15;

pub const PLOT_ID_PROPERTY: &str = "plot_ID";
pub const FARMER_NAME_PROPERTY: &str = "farmer_name";
pub const AREA_PROPERTY: &str = "area";

/// Knobs for the rule engine, deserialized from the options object the
/// front end passes alongside the document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ValidationOptions {
    /// Record every crossing edge pair instead of stopping at the first.
    pub report_all_self_intersections: bool,
    pub enforce_coordinate_precision: bool,
    pub max_decimal_places: u32,
    pub min_spike_angle_degrees: f64,
    /// Emit the zero-length-edge step next to each duplicate-point step,
    /// for consumers that match on the older message wording.
    pub legacy_zero_length_edge_messages: bool,
    pub required_properties: Vec<String>,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            report_all_self_intersections: true,
            enforce_coordinate_precision: true,
            max_decimal_places: DEFAULT_MAX_DECIMAL_PLACES,
            min_spike_angle_degrees: DEFAULT_MIN_SPIKE_ANGLE_DEGREES,
            legacy_zero_length_edge_messages: false,
            required_properties: vec![
                PLOT_ID_PROPERTY.to_string(),
                FARMER_NAME_PROPERTY.to_string(),
            ],
        }
    }
}

impl ValidationOptions {
    pub fn validate(&self) -> Result<(), ValidatorError> {
        let angle = self.min_spike_angle_degrees;
        if !angle.is_finite() || !(0.0..180.0).contains(&angle) {
            return Err(ValidatorError::InvalidOptions(format!(
                "minSpikeAngleDegrees must be within [0, 180), got {}",
                angle
            )));
        }

        if self.max_decimal_places > MAX_SUPPORTED_DECIMAL_PLACES {
            return Err(ValidatorError::InvalidOptions(format!(
                "maxDecimalPlaces must be at most {}, got {}",
                MAX_SUPPORTED_DECIMAL_PLACES, self.max_decimal_places
            )));
        }

        if self.required_properties.iter().any(|name| name.trim().is_empty()) {
            return Err(ValidatorError::InvalidOptions(
                "requiredProperties must not contain empty names".to_string(),
            ));
        }

        Ok(())
    }
}
