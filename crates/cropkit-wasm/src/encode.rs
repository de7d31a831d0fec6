//! PNG encoding binding.
//!
//! Lets a host encode an RGBA buffer it already holds (for example one read
//! back from a canvas) the same way `cutImage` encodes crops.

use cropkit_core::encode;
use wasm_bindgen::prelude::*;

/// Encode RGBA pixel data to PNG bytes.
///
/// # Arguments
///
/// * `pixels` - RGBA pixel data (4 bytes per pixel, row-major order)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
///
/// # Errors
///
/// Returns an error if either dimension is zero or the buffer length does
/// not match `width * height * 4`.
#[wasm_bindgen(js_name = encodePng)]
pub fn encode_png(pixels: &[u8], width: u32, height: u32) -> Result<Vec<u8>, JsValue> {
    encode::encode_png_pixels(pixels, width, height).map_err(|e| JsValue::from_str(&e.to_string()))
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_encode_png_binding() {
        let bytes = encode_png(&[0u8; 16], 2, 2).unwrap();
        assert_eq!(&bytes[1..4], b"PNG");
        assert!(encode_png(&[0u8; 16], 0, 2).is_err());
    }
}
