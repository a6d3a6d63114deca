//! Vintage look: sepia toning, softened contrast and a vignette.

use crate::color::{apply_color_matrix, MID_GRAY, SEPIA_MATRIX};
use crate::raster::{clamp_u8, CHANNELS};
use crate::{FilterError, FilterResult, RasterImage};

/// Contrast multiplier applied after sepia toning.
const VINTAGE_CONTRAST: f32 = 0.85;
/// Corner darkening used by the vintage effect.
const VINTAGE_VIGNETTE: f32 = 0.5;

/// Smootherstep interpolation function.
///
/// Returns values from 0.0 to 1.0 with zero velocity and acceleration at
/// boundaries, so the vignette has no visible ring where it starts.
///
/// Formula: `6t^5 - 15t^4 + 10t^3`
#[inline]
pub fn smootherstep(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

/// Brightness multiplier of the vignette at pixel (x, y).
///
/// Distance is measured from the image center in coordinates normalized so
/// the corners sit at 1.0; the multiplier is 1.0 at the center and
/// `1 - strength` at the corners.
#[inline]
fn vignette_factor(x: u32, y: u32, width: u32, height: u32, strength: f32) -> f32 {
    let half_w = width as f32 / 2.0;
    let half_h = height as f32 / 2.0;
    let nx = (x as f32 + 0.5 - half_w) / half_w;
    let ny = (y as f32 + 0.5 - half_h) / half_h;
    let dist = (nx * nx + ny * ny).sqrt() / std::f32::consts::SQRT_2;
    1.0 - strength * smootherstep(dist)
}

/// Darken an image radially from its center.
///
/// # Errors
///
/// `InvalidParameter` if `strength` is not in 0.0..=1.0.
pub fn apply_vignette(image: &RasterImage, strength: f32) -> FilterResult<RasterImage> {
    image.validate()?;
    if !(0.0..=1.0).contains(&strength) {
        return Err(FilterError::invalid(
            "strength",
            format!("must be in 0.0..=1.0, got {}", strength),
        ));
    }
    Ok(vignette(image, strength))
}

fn vignette(image: &RasterImage, strength: f32) -> RasterImage {
    let mut pixels = Vec::with_capacity(image.pixels.len());
    for y in 0..image.height {
        for x in 0..image.width {
            let factor = vignette_factor(x, y, image.width, image.height, strength);
            let idx = image.index(x, y);
            for c in 0..CHANNELS {
                pixels.push(clamp_u8(image.pixels[idx + c] as f32 * factor));
            }
        }
    }
    image.with_pixels(pixels)
}

/// Apply the vintage effect.
pub fn vintage(image: &RasterImage) -> FilterResult<RasterImage> {
    image.validate()?;
    let toned = image.map_pixels(|px| {
        let [r, g, b] = apply_color_matrix(px, &SEPIA_MATRIX);
        let soften = |v: u8| clamp_u8((v as f32 - MID_GRAY) * VINTAGE_CONTRAST + MID_GRAY);
        [soften(r), soften(g), soften(b)]
    });
    Ok(vignette(&toned, VINTAGE_VIGNETTE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_smootherstep_boundaries() {
        assert!((smootherstep(0.0) - 0.0).abs() < f32::EPSILON);
        assert!((smootherstep(1.0) - 1.0).abs() < f32::EPSILON);
        assert!((smootherstep(0.5) - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn test_smootherstep_clamping() {
        assert!((smootherstep(-0.5) - 0.0).abs() < f32::EPSILON);
        assert!((smootherstep(1.5) - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_smootherstep_monotonic() {
        let mut prev = 0.0;
        for i in 0..=100 {
            let val = smootherstep(i as f32 / 100.0);
            assert!(val >= prev);
            prev = val;
        }
    }

    #[test]
    fn test_vignette_factor_center_and_corner() {
        // Odd size puts a pixel exactly on the center
        assert!((vignette_factor(5, 5, 11, 11, 0.5) - 1.0).abs() < 1e-6);
        let corner = vignette_factor(0, 0, 11, 11, 0.5);
        assert!(corner < 0.6 && corner >= 0.5, "corner factor {}", corner);
    }

    #[test]
    fn test_vignette_darkens_corners() {
        let img = RasterImage::filled(21, 21, [200, 200, 200]).unwrap();
        let result = apply_vignette(&img, 0.8).unwrap();
        assert_eq!(result.pixel(10, 10), [200, 200, 200]);
        assert!(result.pixel(0, 0)[0] < 100);
        // Symmetric about the center
        assert_eq!(result.pixel(0, 0), result.pixel(20, 20));
        assert_eq!(result.pixel(0, 20), result.pixel(20, 0));
    }

    #[test]
    fn test_vignette_zero_strength_is_identity() {
        let pixels: Vec<u8> = (0..6 * 4 * 3).map(|i| (i * 11) as u8).collect();
        let img = RasterImage::new(6, 4, pixels).unwrap();
        assert_eq!(apply_vignette(&img, 0.0).unwrap(), img);
    }

    #[test]
    fn test_vignette_rejects_bad_strength() {
        let img = RasterImage::filled(2, 2, [1, 1, 1]).unwrap();
        assert!(apply_vignette(&img, 1.5).is_err());
        assert!(apply_vignette(&img, -0.1).is_err());
        assert!(apply_vignette(&img, f32::NAN).is_err());
    }

    #[test]
    fn test_vintage_warm_and_vignetted() {
        let img = RasterImage::filled(15, 15, [120, 120, 120]).unwrap();
        let result = vintage(&img).unwrap();
        let center = result.pixel(7, 7);
        // Sepia tone: red > green > blue
        assert!(center[0] > center[1] && center[1] > center[2]);
        // Corners darker than the center
        assert!(result.pixel(0, 0)[0] < center[0]);
        assert_eq!((result.width, result.height), (15, 15));
    }
}
