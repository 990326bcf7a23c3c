use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures at the JS boundary. Validation itself never fails; a malformed
/// document always produces a result with failing steps instead.
#[derive(Debug, Error)]
pub enum ValidatorError {
    #[error("Failed to parse GeoJSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Failed to convert value: {0}")]
    Conversion(String),

    #[error("Invalid validation options: {0}")]
    InvalidOptions(String),
}

impl From<serde_wasm_bindgen::Error> for ValidatorError {
    fn from(err: serde_wasm_bindgen::Error) -> Self {
        ValidatorError::Conversion(err.to_string())
    }
}

impl From<ValidatorError> for JsValue {
    fn from(err: ValidatorError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
