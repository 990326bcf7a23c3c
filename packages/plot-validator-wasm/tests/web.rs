//! Exercises the JS-facing exports. Run with `wasm-pack test --node`.
#![cfg(target_arch = "wasm32")]

use plot_validator_wasm::{
    default_validation_options, summarize_plots, validate_geojson, validate_geojson_str,
    validate_plots, PerPlotResult, ValidationOptions, ValidationResult, ValidationSummary,
};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

const SQUARE_PLOT: &str = r#"{
    "type": "FeatureCollection",
    "features": [{
        "type": "Feature",
        "properties": { "plot_ID": "A1", "farmer_name": "J. Doe", "area": 1.5 },
        "geometry": { "type": "Polygon", "coordinates": [[[0, 0], [0, 1], [1, 1], [1, 0], [0, 0]]] }
    }]
}"#;

fn parse_js(text: &str) -> JsValue {
    js_sys::JSON::parse(text).unwrap()
}

#[wasm_bindgen_test]
fn validates_from_text() {
    let value = validate_geojson_str(SQUARE_PLOT, None).unwrap();
    let result: ValidationResult = serde_wasm_bindgen::from_value(value).unwrap();
    assert!(result.is_valid);
    assert!(result.errors.is_empty());
}

#[wasm_bindgen_test]
fn unparseable_text_is_an_error() {
    assert!(validate_geojson_str("{ not json", None).is_err());
}

#[wasm_bindgen_test]
fn validates_js_objects_with_default_options() {
    let value = validate_geojson(parse_js(SQUARE_PLOT), JsValue::UNDEFINED).unwrap();
    let result: ValidationResult = serde_wasm_bindgen::from_value(value).unwrap();
    assert!(result.is_valid);
}

#[wasm_bindgen_test]
fn invalid_options_are_rejected() {
    let options = parse_js(r#"{ "minSpikeAngleDegrees": 400 }"#);
    assert!(validate_geojson(parse_js(SQUARE_PLOT), options).is_err());
}

#[wasm_bindgen_test]
fn per_plot_results_feed_the_summary() {
    let plots = validate_plots(parse_js(SQUARE_PLOT), JsValue::NULL).unwrap();
    let decoded: Vec<PerPlotResult> = serde_wasm_bindgen::from_value(plots.clone()).unwrap();
    assert_eq!(decoded.len(), 1);
    assert_eq!(decoded[0].plot_id, "A1");

    let summary: ValidationSummary =
        serde_wasm_bindgen::from_value(summarize_plots(plots).unwrap()).unwrap();
    assert_eq!(summary.total_plots, 1);
    assert_eq!(summary.valid_plots, 1);
}

#[wasm_bindgen_test]
fn default_options_round_trip() {
    let options: ValidationOptions =
        serde_wasm_bindgen::from_value(default_validation_options().unwrap()).unwrap();
    assert_eq!(options, ValidationOptions::default());
}
