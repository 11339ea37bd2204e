//! WebAssembly exports.
//!
//! These functions are exposed to JavaScript via wasm-bindgen. Images cross
//! the boundary as encoded bytes (PNG or JPEG), the same as the native API.

use wasm_bindgen::prelude::*;

use crate::codec;
use crate::pipeline::run;

/// Apply a filter to encoded image bytes.
///
/// # Arguments
/// * `data` - Encoded image (PNG or JPEG)
/// * `process_type` - Filter selector, e.g. "grayscale" or "edges"
/// * `brightness` - Brightness factor 0.0-2.0 (non-finite = 1.0)
/// * `contrast` - Contrast factor 0.0-2.0 (non-finite = 1.0)
///
/// # Returns
/// Encoded result bytes; failures are thrown as a string
#[wasm_bindgen(js_name = applyFilter)]
pub fn apply_filter_wasm(
    data: &[u8],
    process_type: &str,
    brightness: f32,
    contrast: f32,
) -> Result<Vec<u8>, JsValue> {
    run(data, process_type, Some(brightness), Some(contrast)).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// MIME type of an encoded buffer, for building a `Blob`.
#[wasm_bindgen(js_name = contentType)]
pub fn content_type_wasm(data: &[u8]) -> String {
    codec::content_type(data).to_string()
}
