//! Configuration parsing for the JavaScript side.
//!
//! The host passes one plain object holding both the options and the
//! lifecycle callbacks. Options are read through serde; callbacks are picked
//! up separately by [`JsListener`](crate::listener::JsListener).

use cropkit_core::CutterConfig;
use wasm_bindgen::prelude::*;

/// Read a `CutterConfig` from a JS object. `undefined` and `null` yield the
/// defaults.
pub(crate) fn parse_config(value: &JsValue) -> Result<CutterConfig, String> {
    if value.is_undefined() || value.is_null() {
        return Ok(CutterConfig::default());
    }
    serde_wasm_bindgen::from_value(value.clone()).map_err(|e| format!("config could not be read: {}", e))
}

/// Every reason a parsed (or unparseable) configuration is unusable.
pub(crate) fn config_reasons(parsed: &Result<CutterConfig, String>) -> Vec<String> {
    match parsed {
        Ok(config) => match config.validate() {
            Ok(()) => Vec::new(),
            Err(err) => err.reasons().to_vec(),
        },
        Err(message) => vec![message.clone()],
    }
}

/// Surface a setup problem in the browser console.
pub(crate) fn warn(message: &str) {
    web_sys::console::warn_1(&JsValue::from_str(message));
}

/// Validate a configuration object without starting a session.
///
/// Returns an array of reasons; an empty array means the configuration is
/// usable.
///
/// # Example
///
/// ```typescript
/// const reasons = validateConfig({ cutWidth: 0 });
/// if (reasons.length > 0) console.warn(reasons.join('\n'));
/// ```
#[wasm_bindgen(js_name = validateConfig)]
pub fn validate_config(config: JsValue) -> Result<JsValue, JsValue> {
    let reasons = config_reasons(&parse_config(&config));
    serde_wasm_bindgen::to_value(&reasons).map_err(|e| JsValue::from_str(&e.to_string()))
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn object(entries: &[(&str, JsValue)]) -> JsValue {
        let obj = js_sys::Object::new();
        for (key, value) in entries {
            js_sys::Reflect::set(&obj, &JsValue::from_str(key), value).unwrap();
        }
        obj.into()
    }

    #[wasm_bindgen_test]
    fn test_undefined_is_default() {
        assert_eq!(parse_config(&JsValue::UNDEFINED).unwrap(), CutterConfig::default());
    }

    #[wasm_bindgen_test]
    fn test_partial_object_keeps_defaults() {
        let config = parse_config(&object(&[
            ("cutWidth", JsValue::from_f64(120.0)),
            ("scale", JsValue::from_f64(1.5)),
        ]))
        .unwrap();
        assert_eq!(config.cut_width, 120.0);
        assert_eq!(config.scale_step, 1.5);
        assert_eq!(config.cut_height, 200.0);
    }

    #[wasm_bindgen_test]
    fn test_wrong_type_is_reported() {
        let value = object(&[("cutWidth", JsValue::from_str("wide"))]);
        let reasons: Vec<String> =
            serde_wasm_bindgen::from_value(validate_config(value).unwrap()).unwrap();
        assert_eq!(reasons.len(), 1);
        assert!(reasons[0].starts_with("config could not be read"));
    }
}
