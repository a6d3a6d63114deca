//! Upload decoding and result encoding WASM bindings.
//!
//! # Example
//!
//! ```typescript
//! import { decode_image, encode_png, export_file_name } from '@filterlab/wasm';
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const original = decode_image(bytes);
//! const png = encode_png(original);
//! const blob = new Blob([png], { type: 'image/png' });
//! ```

use crate::types::JsRasterImage;
use filterlab_core::{decode, encode};
use wasm_bindgen::prelude::*;

/// Decode an uploaded PNG, JPEG, BMP or TIFF file to RGB.
///
/// The format is sniffed from the bytes, not the file name. Alpha is dropped
/// and grayscale sources are expanded to three channels.
///
/// # Errors
///
/// Returns an error if the format is not recognized or the file is corrupt.
#[wasm_bindgen]
pub fn decode_image(bytes: &[u8]) -> Result<JsRasterImage, JsValue> {
    decode::decode_image(bytes)
        .map(JsRasterImage::from_raster)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Encode an image as PNG for download.
#[wasm_bindgen]
pub fn encode_png(image: &JsRasterImage) -> Result<Vec<u8>, JsValue> {
    png_bytes(image).map_err(|e| JsValue::from_str(&e))
}

/// Encode an image as JPEG.
///
/// # Arguments
///
/// * `image` - The image to encode
/// * `quality` - JPEG quality (1-100, clamped)
#[wasm_bindgen]
pub fn encode_jpeg(image: &JsRasterImage, quality: u8) -> Result<Vec<u8>, JsValue> {
    jpeg_bytes(image, quality).map_err(|e| JsValue::from_str(&e))
}

fn jpeg_bytes(image: &JsRasterImage, quality: u8) -> Result<Vec<u8>, String> {
    encode::encode_jpeg(image.pixel_bytes(), image.width(), image.height(), quality)
        .map_err(|e| e.to_string())
}

fn png_bytes(image: &JsRasterImage) -> Result<Vec<u8>, String> {
    let raster = image.to_raster().map_err(|e| e.to_string())?;
    encode::encode_png(&raster).map_err(|e| e.to_string())
}
