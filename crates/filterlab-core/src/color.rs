//! Per-pixel color and tone transforms.
//!
//! Every function here maps each pixel independently, so the output always
//! has the same dimensions as the input.

use crate::luminance::calculate_luma_u8;
use crate::raster::clamp_u8;
use crate::{FilterError, FilterResult, RasterImage};

/// Mid-gray pivot used by contrast adjustments.
pub const MID_GRAY: f32 = 128.0;

/// Sepia color matrix, rows produce R, G and B.
pub const SEPIA_MATRIX: [[f32; 3]; 3] = [
    [0.393, 0.769, 0.189],
    [0.349, 0.686, 0.168],
    [0.272, 0.534, 0.131],
];

/// Valid range for brightness and contrast.
pub const BRIGHTNESS_CONTRAST_RANGE: (i32, i32) = (-100, 100);

/// Valid range for each color balance offset.
pub const COLOR_BALANCE_RANGE: (i32, i32) = (-50, 50);

/// Convert to grayscale using BT.601 luma, replicated across all channels.
pub fn grayscale(image: &RasterImage) -> FilterResult<RasterImage> {
    image.validate()?;
    Ok(image.map_pixels(|[r, g, b]| {
        let l = calculate_luma_u8(r, g, b);
        [l, l, l]
    }))
}

/// Apply the sepia color matrix.
pub fn sepia(image: &RasterImage) -> FilterResult<RasterImage> {
    image.validate()?;
    Ok(image.map_pixels(|px| apply_color_matrix(px, &SEPIA_MATRIX)))
}

/// Invert every sample (`255 - v`).
pub fn invert(image: &RasterImage) -> FilterResult<RasterImage> {
    image.validate()?;
    Ok(image.with_pixels(image.pixels.iter().map(|v| 255 - v).collect()))
}

/// Adjust brightness and contrast.
///
/// Contrast scales each sample's distance from mid-gray by
/// `1 + contrast / 100`, then brightness is added as an offset in sample
/// units. Both values range from -100 to 100.
///
/// # Errors
///
/// `InvalidParameter` if either value is outside -100..=100.
pub fn brightness_contrast(
    image: &RasterImage,
    brightness: i32,
    contrast: i32,
) -> FilterResult<RasterImage> {
    image.validate()?;
    check_range("brightness", brightness, BRIGHTNESS_CONTRAST_RANGE)?;
    check_range("contrast", contrast, BRIGHTNESS_CONTRAST_RANGE)?;

    if brightness == 0 && contrast == 0 {
        return Ok(image.clone());
    }

    let factor = 1.0 + contrast as f32 / 100.0;
    let offset = brightness as f32;

    // 256-entry lookup table, the mapping is the same for every channel
    let lut: Vec<u8> = (0..=255u8)
        .map(|v| clamp_u8((v as f32 - MID_GRAY) * factor + MID_GRAY + offset))
        .collect();

    Ok(image.with_pixels(image.pixels.iter().map(|&v| lut[v as usize]).collect()))
}

/// Add a fixed offset to each channel.
///
/// # Errors
///
/// `InvalidParameter` if any offset is outside -50..=50.
pub fn color_balance(
    image: &RasterImage,
    red: i32,
    green: i32,
    blue: i32,
) -> FilterResult<RasterImage> {
    image.validate()?;
    check_range("red", red, COLOR_BALANCE_RANGE)?;
    check_range("green", green, COLOR_BALANCE_RANGE)?;
    check_range("blue", blue, COLOR_BALANCE_RANGE)?;

    let shift = |v: u8, delta: i32| (v as i32 + delta).clamp(0, 255) as u8;
    Ok(image.map_pixels(|[r, g, b]| [shift(r, red), shift(g, green), shift(b, blue)]))
}

/// Multiply an RGB triple by a 3x3 color matrix, rounding and clamping.
#[inline]
pub(crate) fn apply_color_matrix([r, g, b]: [u8; 3], m: &[[f32; 3]; 3]) -> [u8; 3] {
    let (r, g, b) = (r as f32, g as f32, b as f32);
    [
        clamp_u8(m[0][0] * r + m[0][1] * g + m[0][2] * b),
        clamp_u8(m[1][0] * r + m[1][1] * g + m[1][2] * b),
        clamp_u8(m[2][0] * r + m[2][1] * g + m[2][2] * b),
    ]
}

/// Convert RGB to hue (degrees, 0..360), saturation and value (0..1).
///
/// Hue is 0 for achromatic pixels.
pub(crate) fn rgb_to_hsv([r, g, b]: [u8; 3]) -> (f32, f32, f32) {
    let r = r as f32 / 255.0;
    let g = g as f32 / 255.0;
    let b = b as f32 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let saturation = if max > 0.0 { delta / max } else { 0.0 };
    let hue = if delta <= f32::EPSILON {
        0.0
    } else if max == r {
        60.0 * ((g - b) / delta).rem_euclid(6.0)
    } else if max == g {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    };

    (hue, saturation, max)
}

fn check_range(name: &'static str, value: i32, (min, max): (i32, i32)) -> FilterResult<()> {
    if value < min || value > max {
        return Err(FilterError::invalid(
            name,
            format!("must be in {}..={}, got {}", min, max, value),
        ));
    }
    Ok(())
}
