use js_sys::Date;
use serde_json::Value;
use serde_wasm_bindgen::to_value;
use wasm_bindgen::prelude::*;

use crate::{
    checked_options, console_log, options_from_json, summarize, validate_all_features_with_options,
    validate_with_options, PerPlotResult, ValidationOptions, ValidationResult, ValidatorError,
};

// Missing or null options mean defaults
fn options_from_js(options: JsValue) -> Result<ValidationOptions, ValidatorError> {
    let options: ValidationOptions = if options.is_undefined() || options.is_null() {
        ValidationOptions::default()
    } else {
        serde_wasm_bindgen::from_value(options)?
    };
    checked_options(options)
}

fn log_result(result: &ValidationResult, started: f64) {
    console_log!(
        "Validation finished: valid={}, {} error(s) in {:.1}ms",
        result.is_valid,
        result.error_count(),
        Date::now() - started
    );
}

/// Aggregate validation of an already-parsed GeoJSON object.
#[wasm_bindgen]
pub fn validate_geojson(document: JsValue, options: JsValue) -> Result<JsValue, JsValue> {
    let options = options_from_js(options)?;
    let document: Value = serde_wasm_bindgen::from_value(document).map_err(ValidatorError::from)?;

    let started = Date::now();
    let result = validate_with_options(&document, &options);
    log_result(&result, started);
    Ok(to_value(&result).map_err(ValidatorError::from)?)
}

/// Aggregate validation straight from the uploaded file's text.
#[wasm_bindgen]
pub fn validate_geojson_str(input_json: &str, options_json: Option<String>) -> Result<JsValue, JsValue> {
    let started = Date::now();
    let result = crate::validate_json_str(input_json, options_json.as_deref())?;
    log_result(&result, started);
    Ok(to_value(&result).map_err(ValidatorError::from)?)
}

/// Per-plot validation; resolves to an array with one entry per feature.
#[wasm_bindgen]
pub fn validate_plots(document: JsValue, options: JsValue) -> Result<JsValue, JsValue> {
    let options = options_from_js(options)?;
    let document: Value = serde_wasm_bindgen::from_value(document).map_err(ValidatorError::from)?;

    let started = Date::now();
    let results = validate_all_features_with_options(&document, &options);
    let valid = results.iter().filter(|result| result.is_valid).count();
    console_log!(
        "Validated {} plot(s): {} valid in {:.1}ms",
        results.len(),
        valid,
        Date::now() - started
    );

    Ok(to_value(&results).map_err(ValidatorError::from)?)
}

#[wasm_bindgen]
pub fn summarize_plots(results: JsValue) -> Result<JsValue, JsValue> {
    let results: Vec<PerPlotResult> = serde_wasm_bindgen::from_value(results).map_err(ValidatorError::from)?;
    let summary = summarize(&results);
    console_log!("{} of {} plots valid", summary.valid_plots, summary.total_plots);
    Ok(to_value(&summary).map_err(ValidatorError::from)?)
}

#[wasm_bindgen]
pub fn default_validation_options() -> Result<JsValue, JsValue> {
    Ok(to_value(&ValidationOptions::default()).map_err(ValidatorError::from)?)
}
