use wasm_bindgen::prelude::*;
use serde_json::Value;

// Create a console module for logging
pub mod console;
// Boundary errors for the JS exports
pub mod error;
// Rule engine configuration
pub mod options;
// Result structures handed back to JS
pub mod models;
// Step accumulator shared by all rules
pub mod diagnostics;
// Geometry kinds and feature property helpers
pub mod geojson_features;
// Orientation, crossing and angle math
mod predicates;
// The rulebook itself
pub mod rules;
// Roll-up statistics over per-plot results
pub mod summary;
// JS-facing exports; they build JsValues, so they only exist on wasm32
#[cfg(target_arch = "wasm32")]
mod exports;

pub use error::ValidatorError;
pub use models::{PerPlotResult, Rule, RuleCount, ValidationResult, ValidationStep, ValidationSummary};
pub use options::ValidationOptions;
pub use summary::summarize;
#[cfg(target_arch = "wasm32")]
pub use exports::{
    default_validation_options, summarize_plots, validate_geojson, validate_geojson_str,
    validate_plots,
};

// Enable better panic messages in console during development
#[cfg(feature = "console_error_panic_hook")]
pub use console_error_panic_hook::set_once as set_panic_hook;

// Use the macro from our console module
#[macro_export]
macro_rules! console_log {
    ($($t:tt)*) => (crate::console::log(&format!($($t)*)))
}

#[macro_export]
macro_rules! console_warn {
    ($($t:tt)*) => (crate::console::warn(&format!($($t)*)))
}

use std::sync::Once;
static INIT: Once = Once::new();

// This sets up the wasm_bindgen start functionality
#[wasm_bindgen(start)]
pub fn start() {
    INIT.call_once(|| {
        // Set the panic hook for better error messages
        #[cfg(feature = "console_error_panic_hook")]
        console_error_panic_hook::set_once();

        console_log!("Plot validator WASM module initialized");
    });
}

/// Validates a whole document into one shared trace, using default options.
pub fn validate(document: &Value) -> ValidationResult {
    validate_with_options(document, &ValidationOptions::default())
}

pub fn validate_with_options(document: &Value, options: &ValidationOptions) -> ValidationResult {
    rules::collection::validate_collection(document, options)
}

/// Validates each feature on its own so plots can be fixed one at a time.
/// Returns nothing when the root is not a non-empty FeatureCollection.
pub fn validate_all_features(document: &Value) -> Vec<PerPlotResult> {
    validate_all_features_with_options(document, &ValidationOptions::default())
}

pub fn validate_all_features_with_options(
    document: &Value,
    options: &ValidationOptions,
) -> Vec<PerPlotResult> {
    rules::collection::validate_each_feature(document, options)
}

/// Parses options JSON. Empty or missing text means defaults.
pub fn options_from_json(options_json: Option<&str>) -> Result<ValidationOptions, ValidatorError> {
    let options = match options_json {
        Some(text) if !text.trim().is_empty() => serde_json::from_str(text).map_err(|err| {
            ValidatorError::InvalidOptions(format!("options are not valid JSON: {}", err))
        })?,
        _ => ValidationOptions::default(),
    };
    checked_options(options)
}

pub(crate) fn checked_options(options: ValidationOptions) -> Result<ValidationOptions, ValidatorError> {
    if let Err(err) = options.validate() {
        console_warn!("Rejected validation options: {}", err);
        return Err(err);
    }
    Ok(options)
}

/// Aggregate validation of GeoJSON text, for callers holding the raw file.
pub fn validate_json_str(
    input_json: &str,
    options_json: Option<&str>,
) -> Result<ValidationResult, ValidatorError> {
    let options = options_from_json(options_json)?;
    let document: Value = serde_json::from_str(input_json)?;
    Ok(validate_with_options(&document, &options))
}
