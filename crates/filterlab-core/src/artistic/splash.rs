//! Color splash: keep one hue in color, turn everything else gray.

use crate::color::rgb_to_hsv;
use crate::luminance::calculate_luma_u8;
use crate::{FilterError, FilterResult, RasterImage};

/// Width of a hue histogram bin in degrees.
const HUE_BIN_DEGREES: f32 = 10.0;
const HUE_BINS: usize = 36;
/// Half-width of the retained hue range around the dominant hue.
pub const DEFAULT_HUE_TOLERANCE: f32 = 20.0;
/// Pixels below this saturation count as gray and are never retained.
const MIN_SATURATION: f32 = 0.25;
/// Pixels below this value (brightness) count as black.
const MIN_VALUE: f32 = 0.2;

/// Detect the dominant hue in degrees, if the image has colorful pixels.
///
/// Hues of sufficiently saturated and bright pixels are binned in 10°
/// steps; the center of the fullest bin wins (first bin on ties).
pub fn dominant_hue(image: &RasterImage) -> Option<f32> {
    let mut bins = [0u32; HUE_BINS];
    for px in image.pixels.chunks_exact(3) {
        let (hue, sat, val) = rgb_to_hsv([px[0], px[1], px[2]]);
        if sat >= MIN_SATURATION && val >= MIN_VALUE {
            let bin = ((hue / HUE_BIN_DEGREES) as usize).min(HUE_BINS - 1);
            bins[bin] += 1;
        }
    }

    let (best, &count) = bins
        .iter()
        .enumerate()
        .max_by(|(ia, a), (ib, b)| a.cmp(b).then(ib.cmp(ia)))?;
    if count == 0 {
        return None;
    }
    Some(best as f32 * HUE_BIN_DEGREES + HUE_BIN_DEGREES / 2.0)
}

/// Color splash around the automatically detected dominant hue.
///
/// An image without any colorful pixels comes back as plain grayscale.
pub fn color_splash(image: &RasterImage) -> FilterResult<RasterImage> {
    image.validate()?;
    Ok(match dominant_hue(image) {
        Some(hue) => splash(image, hue, DEFAULT_HUE_TOLERANCE),
        None => splash_gray(image),
    })
}

/// Color splash around a fixed hue.
///
/// # Errors
///
/// `InvalidParameter` if `hue_degrees` is not in 0.0..360.0 or
/// `tolerance_degrees` is not in (0.0, 180.0].
pub fn color_splash_hue(
    image: &RasterImage,
    hue_degrees: f32,
    tolerance_degrees: f32,
) -> FilterResult<RasterImage> {
    image.validate()?;
    if !(0.0..360.0).contains(&hue_degrees) {
        return Err(FilterError::invalid(
            "hue",
            format!("must be in 0..360 degrees, got {}", hue_degrees),
        ));
    }
    if !(tolerance_degrees > 0.0 && tolerance_degrees <= 180.0) {
        return Err(FilterError::invalid(
            "tolerance",
            format!("must be in (0, 180] degrees, got {}", tolerance_degrees),
        ));
    }
    Ok(splash(image, hue_degrees, tolerance_degrees))
}

fn splash(image: &RasterImage, hue: f32, tolerance: f32) -> RasterImage {
    image.map_pixels(|px| {
        let (h, s, v) = rgb_to_hsv(px);
        if s >= MIN_SATURATION && v >= MIN_VALUE && hue_distance(h, hue) <= tolerance {
            px
        } else {
            let l = calculate_luma_u8(px[0], px[1], px[2]);
            [l, l, l]
        }
    })
}

fn splash_gray(image: &RasterImage) -> RasterImage {
    image.map_pixels(|[r, g, b]| {
        let l = calculate_luma_u8(r, g, b);
        [l, l, l]
    })
}

/// Shortest angular distance between two hues, 0..=180.
#[inline]
fn hue_distance(a: f32, b: f32) -> f32 {
    let d = (a - b).abs() % 360.0;
    d.min(360.0 - d)
}
