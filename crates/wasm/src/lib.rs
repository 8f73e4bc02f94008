#![deny(unsafe_code)]
//! WebAssembly bindings for devconv.
//!
//! Exposes the three converters to a browser form layer. Each export takes
//! the raw field text and returns a plain JavaScript object:
//!
//! ```javascript
//! import init, { convertLength, simplifyRatio, parseColor } from 'devconv-wasm';
//!
//! await init();
//!
//! convertLength("24", undefined, "16");  // { pixels: "24", rem: "1.5000" }
//! simplifyRatio("1920", "1080");         // { width: 16, height: 9, ratioText: "16:9", decimalText: "1.778" }
//! parseColor("#f00")?.hsl;               // "hsl(0, 100%, 50%)"
//! ```
//!
//! Validation failures throw an `Error` with a `code` property (see [`error`]).
//! `simplifyRatio` returns `null` when a field is blank; `parseColor` returns
//! `null` for anything it cannot parse.

mod error;

pub use error::WasmError;

use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Installs the panic hook so Rust panics show up in the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Get the version of the devconv-wasm library.
#[wasm_bindgen(js_name = getVersion)]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Base font size used when the form has not been changed.
#[wasm_bindgen(js_name = defaultBaseSize)]
pub fn default_base_size() -> f64 {
    devconv_core::DEFAULT_BASE_SIZE
}

/// Converts whichever of `pixels` / `rem` is filled in into the other unit.
#[wasm_bindgen(js_name = convertLength)]
pub fn convert_length(
    pixels: Option<String>,
    rem: Option<String>,
    base: &str,
) -> Result<JsValue, JsValue> {
    let pair = devconv_core::convert_length(pixels.as_deref(), rem.as_deref(), base)
        .map_err(WasmError::from)?;
    to_js(&pair)
}

/// Simplifies a width/height pair; `null` when either field is blank.
#[wasm_bindgen(js_name = simplifyRatio)]
pub fn simplify_ratio(width: &str, height: &str) -> Result<JsValue, JsValue> {
    match devconv_core::simplify_ratio(width, height).map_err(WasmError::from)? {
        Some(ratio) => to_js(&ratio),
        None => Ok(JsValue::NULL),
    }
}

/// Every representation of `input`, or `null` if it is not a supported color.
#[wasm_bindgen(js_name = parseColor)]
pub fn parse_color(input: &str) -> Result<JsValue, JsValue> {
    match devconv_core::parse_color(input) {
        Some(reps) => to_js(&reps),
        None => Ok(JsValue::NULL),
    }
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value)
        .map_err(|e| WasmError::serialization(e.to_string()).into())
}
