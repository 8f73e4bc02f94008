//! Error handling for WASM bindings.
//!
//! Validation failures become JavaScript `Error` objects whose `message` is
//! the user-facing text and whose `code` property identifies the failure.

use devconv_core::ValidationError;
use wasm_bindgen::prelude::*;

/// A JavaScript-friendly error.
#[derive(Debug)]
pub struct WasmError {
    code: &'static str,
    message: String,
}

impl WasmError {
    /// Get the error code.
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Get the error message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Create a serialization error.
    pub fn serialization(message: impl Into<String>) -> Self {
        Self {
            code: "SERIALIZATION_ERROR",
            message: message.into(),
        }
    }
}

impl From<ValidationError> for WasmError {
    fn from(err: ValidationError) -> Self {
        let code = match err {
            ValidationError::InvalidLength => "INVALID_LENGTH",
            ValidationError::InvalidBaseSize => "INVALID_BASE_SIZE",
            ValidationError::InvalidRatio => "INVALID_RATIO",
            ValidationError::DegenerateRatio { .. } => "DEGENERATE_RATIO",
            ValidationError::RatioOutOfRange { .. } => "RATIO_OUT_OF_RANGE",
            ValidationError::InvalidColorFormat => "INVALID_COLOR_FORMAT",
        };
        Self {
            code,
            message: err.to_string(),
        }
    }
}

impl From<WasmError> for JsValue {
    fn from(err: WasmError) -> Self {
        let js_error = js_sys::Error::new(&err.message);
        js_sys::Reflect::set(&js_error, &"code".into(), &JsValue::from_str(err.code)).ok();
        js_error.into()
    }
}
