//! Image resizing by scale factor or to exact dimensions.
//!
//! Resampling is delegated to the `image` crate's algorithms. All functions
//! return new images without modifying the input.

use crate::{FilterError, FilterResult, RasterImage};

/// Largest accepted output width or height.
pub const MAX_RESIZE_DIMENSION: u32 = 8192;

/// Interpolation filter used for resizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResampleFilter {
    /// Nearest neighbor interpolation (fastest, blocky).
    Nearest,
    /// Bilinear interpolation.
    #[default]
    Bilinear,
    /// Lanczos3 interpolation (slowest, sharpest).
    Lanczos3,
}

impl ResampleFilter {
    /// Convert to the image crate's FilterType.
    pub fn to_image_filter(self) -> image::imageops::FilterType {
        match self {
            ResampleFilter::Nearest => image::imageops::FilterType::Nearest,
            ResampleFilter::Bilinear => image::imageops::FilterType::Triangle,
            ResampleFilter::Lanczos3 => image::imageops::FilterType::Lanczos3,
        }
    }
}

/// What size a resize should produce.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResizeTarget {
    /// Multiply both dimensions by a factor; results are rounded.
    Scale(f64),
    /// Exact output dimensions (aspect ratio is not preserved).
    Dimensions { width: u32, height: u32 },
}

impl ResizeTarget {
    /// Output dimensions for a `width x height` source.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` if the scale is not a finite positive number or the
    /// result falls outside `1..=MAX_RESIZE_DIMENSION`.
    pub fn output_dimensions(&self, width: u32, height: u32) -> FilterResult<(u32, u32)> {
        let (w, h) = match *self {
            ResizeTarget::Scale(scale) => {
                if !scale.is_finite() || scale <= 0.0 {
                    return Err(FilterError::invalid(
                        "scale",
                        format!("must be a finite positive number, got {}", scale),
                    ));
                }
                (
                    (width as f64 * scale).round(),
                    (height as f64 * scale).round(),
                )
            }
            ResizeTarget::Dimensions { width, height } => (width as f64, height as f64),
        };

        let limit = MAX_RESIZE_DIMENSION as f64;
        if w < 1.0 || h < 1.0 || w > limit || h > limit {
            return Err(FilterError::invalid(
                "size",
                format!(
                    "output {}x{} must be within 1..={} on both axes",
                    w, h, MAX_RESIZE_DIMENSION
                ),
            ));
        }
        Ok((w as u32, h as u32))
    }
}

/// Resize with bilinear interpolation.
pub fn resize(image: &RasterImage, target: ResizeTarget) -> FilterResult<RasterImage> {
    resize_with(image, target, ResampleFilter::Bilinear)
}

/// Resize with the given interpolation filter.
///
/// A target equal to the current size returns an exact copy.
pub fn resize_with(
    image: &RasterImage,
    target: ResizeTarget,
    filter: ResampleFilter,
) -> FilterResult<RasterImage> {
    image.validate()?;
    let (width, height) = target.output_dimensions(image.width, image.height)?;

    if image.width == width && image.height == height {
        return Ok(image.clone());
    }

    let rgb_image = image
        .to_rgb_image()
        .ok_or_else(|| FilterError::UnsupportedInput("pixel buffer does not fit dimensions".into()))?;
    let resized = image::imageops::resize(&rgb_image, width, height, filter.to_image_filter());

    Ok(RasterImage::from_rgb_image(resized))
}
