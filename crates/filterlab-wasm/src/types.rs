//! WASM-compatible wrapper types for image data.
//!
//! [`JsRasterImage`] is the handle JavaScript holds between calls. It owns
//! an RGB buffer in WASM memory and converts to and from the core
//! [`RasterImage`] at the binding boundary.

use filterlab_core::{FilterError, RasterImage};
use wasm_bindgen::prelude::*;

/// An RGB image held in WASM memory.
///
/// Pixels stay on the WASM side between filter calls; `pixels()` and
/// `to_rgba()` copy them out. Keep the decoded upload as a `JsRasterImage`
/// and hand it to every filter call instead of round-tripping buffers.
#[wasm_bindgen]
#[derive(Debug)]
pub struct JsRasterImage {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

#[wasm_bindgen]
impl JsRasterImage {
    /// Wrap row-major RGB bytes. The buffer length is checked when the
    /// image is first used, not here.
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> JsRasterImage {
        JsRasterImage {
            width,
            height,
            pixels,
        }
    }

    /// Build an image from canvas `ImageData` (RGBA). Alpha is dropped.
    pub fn from_rgba(width: u32, height: u32, rgba: &[u8]) -> Result<JsRasterImage, JsValue> {
        let raster = RasterImage::from_interleaved(width, height, 4, rgba)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self::from_raster(raster))
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Size of the RGB buffer in bytes
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.pixels.len()
    }

    /// Copy of the RGB bytes as a `Uint8Array`.
    pub fn pixels(&self) -> Vec<u8> {
        self.pixels.clone()
    }

    /// Returns RGBA pixel data with opaque alpha, ready for `new ImageData(...)`.
    pub fn to_rgba(&self) -> Vec<u8> {
        self.pixels
            .chunks_exact(3)
            .flat_map(|px| [px[0], px[1], px[2], 255])
            .collect()
    }

    /// Release the buffer now instead of waiting for the finalizer.
    pub fn free(self) {}
}

impl JsRasterImage {
    pub(crate) fn from_raster(img: RasterImage) -> Self {
        Self {
            width: img.width,
            height: img.height,
            pixels: img.pixels,
        }
    }

    /// Borrow the RGB bytes without copying.
    pub(crate) fn pixel_bytes(&self) -> &[u8] {
        &self.pixels
    }

    /// Clone into a core RasterImage, checking the buffer length.
    pub(crate) fn to_raster(&self) -> Result<RasterImage, FilterError> {
        RasterImage::new(self.width, self.height, self.pixels.clone())
    }
}
