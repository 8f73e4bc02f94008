//! WebAssembly integration tests.
//!
//! These tests run in a headless browser using wasm-bindgen-test.
//!
//! Run with: wasm-pack test --headless --chrome crates/wasm

use serde_json::{json, Value};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn to_json(value: JsValue) -> Value {
    serde_wasm_bindgen::from_value(value).expect("export should return a plain object")
}

fn error_code(err: &JsValue) -> Option<String> {
    js_sys::Reflect::get(err, &"code".into())
        .ok()
        .and_then(|v| v.as_string())
}

#[wasm_bindgen_test]
fn test_version() {
    assert!(!devconv_wasm::get_version().is_empty());
}

#[wasm_bindgen_test]
fn test_default_base_size() {
    assert_eq!(devconv_wasm::default_base_size(), 16.0);
}

#[wasm_bindgen_test]
fn test_convert_length() {
    let pair = devconv_wasm::convert_length(Some("24".into()), None, "16").unwrap();
    assert_eq!(to_json(pair), json!({"pixels": "24", "rem": "1.5000"}));
}

#[wasm_bindgen_test]
fn test_convert_length_error_has_code() {
    let err = devconv_wasm::convert_length(Some("-1".into()), None, "16").unwrap_err();
    assert_eq!(error_code(&err).as_deref(), Some("INVALID_LENGTH"));
}

#[wasm_bindgen_test]
fn test_simplify_ratio() {
    let ratio = devconv_wasm::simplify_ratio("1920", "1080").unwrap();
    let ratio = to_json(ratio);
    assert_eq!(ratio["ratioText"], "16:9");
    assert_eq!(ratio["decimalText"], "1.778");
}

#[wasm_bindgen_test]
fn test_simplify_ratio_blank_is_null() {
    let ratio = devconv_wasm::simplify_ratio("", "1080").unwrap();
    assert!(ratio.is_null());
}

#[wasm_bindgen_test]
fn test_parse_color() {
    let reps = to_json(devconv_wasm::parse_color("#FF0000").unwrap());
    assert_eq!(reps["hex"], "#ff0000");
    assert_eq!(reps["rgb"], "rgb(255, 0, 0)");
    assert_eq!(reps["hsl"], "hsl(0, 100%, 50%)");
}

#[wasm_bindgen_test]
fn test_parse_color_invalid_is_null() {
    assert!(devconv_wasm::parse_color("rgb(256,0,0)").unwrap().is_null());
    assert!(devconv_wasm::parse_color("notacolor").unwrap().is_null());
}
