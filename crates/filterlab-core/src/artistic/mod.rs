//! Artistic composite effects.
//!
//! Each effect chains several primitive operations (color matrices,
//! convolutions, masks) into a fixed recipe with no tunable parameters.
//! Intermediate stages run on `f32` planes and are rounded once at the end.

mod cartoon;
mod splash;
mod vintage;

pub use cartoon::cartoon;
pub use splash::{color_splash, color_splash_hue, dominant_hue, DEFAULT_HUE_TOLERANCE};
pub use vintage::{apply_vignette, smootherstep, vintage};

use crate::convolve::{gaussian_weights, merge, Plane};
use crate::{FilterResult, RasterImage};

/// Gaussian kernel size shared by the pencil sketch and HDR effects.
const EFFECT_BLUR_SIZE: usize = 21;
/// Detail gain of the HDR effect.
const HDR_DETAIL_GAIN: f32 = 1.5;

/// Pencil sketch: color dodge of the gray image with its blurred negative.
///
/// Flat regions go white; lines and texture remain as gray strokes.
pub fn pencil_sketch(image: &RasterImage) -> FilterResult<RasterImage> {
    image.validate()?;
    let weights = gaussian_weights(EFFECT_BLUR_SIZE)?;

    let gray = Plane::luma(image);
    let blurred = gray.map(|v| 255.0 - v).convolve_separable(&weights);

    let sketch = Plane {
        width: gray.width,
        height: gray.height,
        data: gray
            .data
            .iter()
            .zip(&blurred.data)
            .map(|(&g, &b)| (g * 256.0 / (256.0 - b)).min(255.0))
            .collect(),
    };
    Ok(sketch.to_gray_image())
}

/// Local-contrast boost that mimics a tone-mapped HDR look.
///
/// Every channel is pushed away from its own large-radius Gaussian blur,
/// exaggerating fine detail while keeping flat areas unchanged.
pub fn hdr(image: &RasterImage) -> FilterResult<RasterImage> {
    image.validate()?;
    let weights = gaussian_weights(EFFECT_BLUR_SIZE)?;

    let planes = Plane::split(image).map(|plane| {
        let base = plane.convolve_separable(&weights);
        Plane {
            width: plane.width,
            height: plane.height,
            data: plane
                .data
                .iter()
                .zip(&base.data)
                .map(|(&v, &b)| v + HDR_DETAIL_GAIN * (v - b))
                .collect(),
        }
    });
    Ok(merge(&planes))
}
