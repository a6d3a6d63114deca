//! Filterlab WASM - WebAssembly bindings for Filterlab
//!
//! This crate exposes the filterlab-core filter engine to JavaScript/TypeScript.
//!
//! # Module Structure
//!
//! - `types` - WASM-compatible wrapper type for RGB images
//! - `codec` - Upload decoding and PNG/JPEG encoding
//! - `filters` - Filter application, labels and export file names
//! - `histogram` - Histogram computation for display
//!
//! # Usage
//!
//! ```typescript
//! import init, { decode_image, apply_filter, encode_png } from '@filterlab/wasm';
//!
//! await init();
//!
//! const original = decode_image(new Uint8Array(await file.arrayBuffer()));
//! const result = apply_filter(original, { op: 'sepia' });
//! const png = encode_png(result);
//! ```

use wasm_bindgen::prelude::*;

mod codec;
mod console_log;
mod filters;
mod histogram;
mod types;

pub use codec::{decode_image, encode_jpeg, encode_png};
pub use filters::{
    apply_filter, export_file_name, filter_categories, filter_category, filter_label,
};
pub use histogram::{compute_histogram, JsHistogram};
pub use types::JsRasterImage;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    console_log::init(log::LevelFilter::Info);
}

/// Change how much the engine logs to the console.
///
/// Accepts `off`, `error`, `warn`, `info`, `debug` or `trace`.
#[wasm_bindgen]
pub fn set_log_level(level: &str) -> Result<(), JsValue> {
    let filter: log::LevelFilter = level
        .parse()
        .map_err(|_| JsValue::from_str(&format!("unknown log level: {}", level)))?;
    log::set_max_level(filter);
    Ok(())
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Initial value of every adjustable parameter, as a plain object.
#[wasm_bindgen]
pub fn default_params() -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&filterlab_core::FilterDefaults::default()).map_err(Into::into)
}

/// Lowercase file extensions accepted for upload.
#[wasm_bindgen]
pub fn supported_formats() -> Vec<String> {
    filterlab_core::SUPPORTED_FORMATS
        .iter()
        .map(|f| f.to_string())
        .collect()
}

/// Whether a file name carries a supported image extension.
#[wasm_bindgen]
pub fn is_supported_file(name: &str) -> bool {
    filterlab_core::is_supported_file(name)
}
