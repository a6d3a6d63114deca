//! Filter application WASM bindings.
//!
//! Operations cross the boundary as plain objects in the [`FilterOp`] JSON
//! form, tagged by `op`:
//!
//! ```typescript
//! const blurred = apply_filter(original, { op: 'blur', kernel_size: 15 });
//! const label = filter_label({ op: 'blur', kernel_size: 15 }); // "Blur (Kernel: 15)"
//! const name = export_file_name(label); // "filtered_image_blur_kernel_15.png"
//! ```
//!
//! Every call takes the image to filter explicitly. Passing the original
//! upload each time keeps filters from compounding.

use crate::types::JsRasterImage;
use filterlab_core::{ops, FilterCategory, FilterOp};
use wasm_bindgen::prelude::*;

/// Apply one filter operation, returning a new image.
///
/// # Errors
///
/// Returns an error if `op` does not describe a known operation, a parameter
/// is out of range, or the image buffer does not match its dimensions.
#[wasm_bindgen]
pub fn apply_filter(image: &JsRasterImage, op: JsValue) -> Result<JsRasterImage, JsValue> {
    let op: FilterOp = serde_wasm_bindgen::from_value(op)?;
    run(image, &op).map_err(|e| JsValue::from_str(&e))
}

/// Display label for an operation, e.g. `"Rotate 45°"`.
#[wasm_bindgen]
pub fn filter_label(op: JsValue) -> Result<String, JsValue> {
    let op: FilterOp = serde_wasm_bindgen::from_value(op)?;
    Ok(op.label())
}

/// Category title an operation is listed under, e.g. `"Artistic Effects"`.
#[wasm_bindgen]
pub fn filter_category(op: JsValue) -> Result<String, JsValue> {
    let op: FilterOp = serde_wasm_bindgen::from_value(op)?;
    Ok(op.category().title().to_string())
}

/// Category titles in display order.
#[wasm_bindgen]
pub fn filter_categories() -> Vec<String> {
    FilterCategory::ALL
        .iter()
        .map(|c| c.title().to_string())
        .collect()
}

/// Download file name for a result labelled `label`; `original` when absent.
#[wasm_bindgen]
pub fn export_file_name(label: Option<String>) -> String {
    filterlab_core::export_file_name(label.as_deref())
}

fn run(image: &JsRasterImage, op: &FilterOp) -> Result<JsRasterImage, String> {
    let source = image.to_raster().map_err(|e| e.to_string())?;
    let result = ops::apply_filter(&source, op).map_err(|e| e.to_string())?;
    Ok(JsRasterImage::from_raster(result))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_invert() {
        let img = JsRasterImage::new(1, 1, vec![0, 100, 255]);
        let out = run(&img, &FilterOp::Invert).unwrap();
        assert_eq!(out.pixels(), vec![255, 155, 0]);
    }

    #[test]
    fn test_run_leaves_source_untouched() {
        let img = JsRasterImage::new(2, 1, vec![10, 20, 30, 40, 50, 60]);
        let _ = run(&img, &FilterOp::Grayscale).unwrap();
        assert_eq!(img.pixels(), vec![10, 20, 30, 40, 50, 60]);
    }

    #[test]
    fn test_run_crop_changes_dimensions() {
        let img = JsRasterImage::new(4, 4, vec![7; 48]);
        let op = FilterOp::Crop {
            left: 1,
            top: 0,
            right: 3,
            bottom: 2,
        };
        let out = run(&img, &op).unwrap();
        assert_eq!((out.width(), out.height()), (2, 2));
        assert_eq!(out.byte_length(), 12);
    }

    #[test]
    fn test_run_reports_bad_parameter() {
        let img = JsRasterImage::new(4, 4, vec![7; 48]);
        let err = run(&img, &FilterOp::Blur { kernel_size: 4 }).unwrap_err();
        assert!(err.contains("kernel_size"));
    }

    #[test]
    fn test_run_reports_bad_buffer() {
        let img = JsRasterImage::new(4, 4, vec![7; 5]);
        assert!(run(&img, &FilterOp::Sepia).is_err());
    }

    #[test]
    fn test_export_file_name() {
        assert_eq!(export_file_name(None), "filtered_image_original.png");
        assert_eq!(
            export_file_name(Some("Pencil Sketch".into())),
            "filtered_image_pencil_sketch.png"
        );
    }

    #[test]
    fn test_filter_categories() {
        let titles = filter_categories();
        assert_eq!(titles.len(), 6);
        assert_eq!(titles[0], "Basic Filters");
        assert_eq!(titles[5], "Crop & Resize");
    }
}
