//! Histogram computation WASM bindings.

use crate::types::JsRasterImage;
use filterlab_core::histogram::compute_histogram as compute_histogram_core;
use filterlab_core::Histogram;
use wasm_bindgen::prelude::*;

/// Channel histograms of an image; bins come out as `Uint32Array[256]`.
#[wasm_bindgen]
pub struct JsHistogram {
    inner: Histogram,
}

#[wasm_bindgen]
impl JsHistogram {
    pub fn red(&self) -> Vec<u32> {
        self.inner.red.to_vec()
    }

    pub fn green(&self) -> Vec<u32> {
        self.inner.green.to_vec()
    }

    pub fn blue(&self) -> Vec<u32> {
        self.inner.blue.to_vec()
    }

    /// BT.601 luma bins
    pub fn luminance(&self) -> Vec<u32> {
        self.inner.luminance.to_vec()
    }

    /// Largest color bin, for normalizing a plot
    #[wasm_bindgen(getter)]
    pub fn max_value(&self) -> u32 {
        self.inner.max_value()
    }

    #[wasm_bindgen(getter)]
    pub fn has_highlight_clipping(&self) -> bool {
        self.inner.has_highlight_clipping()
    }

    #[wasm_bindgen(getter)]
    pub fn has_shadow_clipping(&self) -> bool {
        self.inner.has_shadow_clipping()
    }
}

/// Compute RGB and luminance histograms of `image` for display.
///
/// ```typescript
/// const hist = compute_histogram(original);
/// const peak = hist.max_value;
/// drawBins(hist.red(), peak);
/// ```
#[wasm_bindgen]
pub fn compute_histogram(image: &JsRasterImage) -> Result<JsHistogram, JsValue> {
    histogram_for(image).map_err(|e| JsValue::from_str(&e))
}

fn histogram_for(image: &JsRasterImage) -> Result<JsHistogram, String> {
    let raster = image.to_raster().map_err(|e| e.to_string())?;
    let inner = compute_histogram_core(&raster).map_err(|e| e.to_string())?;
    Ok(JsHistogram { inner })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hist_of(width: u32, height: u32, pixels: Vec<u8>) -> JsHistogram {
        histogram_for(&JsRasterImage::new(width, height, pixels)).unwrap()
    }

    #[test]
    fn test_bins_have_256_entries() {
        let hist = hist_of(1, 1, vec![1, 2, 3]);
        for bins in [hist.red(), hist.green(), hist.blue(), hist.luminance()] {
            assert_eq!(bins.len(), 256);
            assert_eq!(bins.iter().sum::<u32>(), 1);
        }
    }

    #[test]
    fn test_primaries_clip_both_ends() {
        let hist = hist_of(3, 1, vec![255, 0, 0, 0, 255, 0, 0, 0, 255]);
        assert!(hist.has_highlight_clipping());
        assert!(hist.has_shadow_clipping());
        assert_eq!(hist.red()[0], 2);
        assert_eq!(hist.red()[255], 1);
    }

    #[test]
    fn test_midtones_do_not_clip() {
        let hist = hist_of(2, 1, vec![30, 60, 90, 120, 150, 180]);
        assert!(!hist.has_highlight_clipping());
        assert!(!hist.has_shadow_clipping());
    }

    #[test]
    fn test_max_value_counts_repeated_levels() {
        let hist = hist_of(2, 2, vec![50, 50, 50, 50, 50, 50, 50, 50, 50, 9, 9, 9]);
        assert_eq!(hist.max_value(), 3);
        assert_eq!(hist.luminance()[50], 3);
    }

    #[test]
    fn test_bad_buffer_is_an_error() {
        assert!(histogram_for(&JsRasterImage::new(2, 2, vec![0; 3])).is_err());
    }
}
