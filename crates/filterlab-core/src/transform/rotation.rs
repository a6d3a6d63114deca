//! Image rotation with bilinear and Lanczos3 interpolation.
//!
//! # Algorithm
//!
//! Quarter and half turns are exact pixel permutations. Every other angle
//! uses inverse mapping: for each output pixel center, the matching source
//! position is computed and interpolated.
//!
//! For a counter-clockwise rotation by θ, with coordinates measured from the
//! image centers (pixel centers sit at `i + 0.5`):
//! ```text
//! src_x = dx * cos(θ) - dy * sin(θ)
//! src_y = dx * sin(θ) + dy * cos(θ)
//! ```
//!
//! Output pixels whose source position falls outside the image are black.

use crate::raster::rgb_len;
use crate::{FilterError, FilterResult, RasterImage};

/// Largest accepted rotation magnitude in degrees.
pub const MAX_ROTATION_DEGREES: f64 = 180.0;

/// Interpolation filter for rotation operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterpolationFilter {
    /// Fast bilinear interpolation.
    #[default]
    Bilinear,
    /// Sharper Lanczos3 interpolation over a 6x6 neighborhood.
    Lanczos3,
}

/// Compute the dimensions of the bounding box for a rotated image.
///
/// Returns the smallest `(width, height)` that contains the whole rotated
/// rectangle. Multiples of 90° are exact; other angles are rounded and never
/// smaller than 1.
pub fn compute_rotated_bounds(width: u32, height: u32, angle_degrees: f64) -> (u32, u32) {
    let angle_normalized = angle_degrees % 360.0;
    let abs_angle = angle_normalized.abs();

    if abs_angle < 0.001 || (360.0 - abs_angle).abs() < 0.001 {
        return (width, height);
    }
    if (abs_angle - 90.0).abs() < 0.001 || (abs_angle - 270.0).abs() < 0.001 {
        return (height, width);
    }
    if (abs_angle - 180.0).abs() < 0.001 {
        return (width, height);
    }

    let angle_rad = angle_degrees.to_radians();
    let cos = angle_rad.cos().abs();
    let sin = angle_rad.sin().abs();

    let w = width as f64;
    let h = height as f64;

    let new_w = (w * cos + h * sin).round() as u32;
    let new_h = (w * sin + h * cos).round() as u32;

    (new_w.max(1), new_h.max(1))
}

/// Rotate an image about its center with bilinear sampling.
///
/// Positive angles rotate counter-clockwise. The canvas grows to the rotated
/// bounding box and uncovered area is filled with black.
///
/// # Errors
///
/// `InvalidParameter` if `angle_degrees` is not finite or outside
/// -180.0..=180.0.
pub fn rotate(image: &RasterImage, angle_degrees: f64) -> FilterResult<RasterImage> {
    rotate_with(image, angle_degrees, InterpolationFilter::Bilinear)
}

/// Rotate an image about its center with the given interpolation filter.
pub fn rotate_with(
    image: &RasterImage,
    angle_degrees: f64,
    filter: InterpolationFilter,
) -> FilterResult<RasterImage> {
    image.validate()?;
    if !angle_degrees.is_finite() || angle_degrees.abs() > MAX_ROTATION_DEGREES {
        return Err(FilterError::invalid(
            "angle",
            format!(
                "must be within ±{} degrees, got {}",
                MAX_ROTATION_DEGREES, angle_degrees
            ),
        ));
    }

    Ok(if angle_degrees == 0.0 {
        image.clone()
    } else if angle_degrees.abs() == 180.0 {
        rotate_half_turn(image)
    } else if angle_degrees == 90.0 {
        rotate_quarter_ccw(image)
    } else if angle_degrees == -90.0 {
        rotate_quarter_cw(image)
    } else {
        rotate_resampled(image, angle_degrees, filter)
    })
}

/// Reverse both axes.
fn rotate_half_turn(image: &RasterImage) -> RasterImage {
    let mut pixels = Vec::with_capacity(image.pixels.len());
    for px in image.pixels.chunks_exact(3).rev() {
        pixels.extend_from_slice(px);
    }
    image.with_pixels(pixels)
}

/// `dst(x, y) = src(w - 1 - y, x)`, output is `h x w`.
fn rotate_quarter_ccw(image: &RasterImage) -> RasterImage {
    let (w, h) = (image.width, image.height);
    let mut pixels = Vec::with_capacity(image.pixels.len());
    for y in 0..w {
        for x in 0..h {
            pixels.extend_from_slice(&image.pixel(w - 1 - y, x));
        }
    }
    RasterImage {
        width: h,
        height: w,
        pixels,
    }
}

/// `dst(x, y) = src(y, h - 1 - x)`, output is `h x w`.
fn rotate_quarter_cw(image: &RasterImage) -> RasterImage {
    let (w, h) = (image.width, image.height);
    let mut pixels = Vec::with_capacity(image.pixels.len());
    for y in 0..w {
        for x in 0..h {
            pixels.extend_from_slice(&image.pixel(y, h - 1 - x));
        }
    }
    RasterImage {
        width: h,
        height: w,
        pixels,
    }
}

fn rotate_resampled(
    image: &RasterImage,
    angle_degrees: f64,
    filter: InterpolationFilter,
) -> RasterImage {
    let (dst_w, dst_h) = compute_rotated_bounds(image.width, image.height, angle_degrees);
    let (sin, cos) = angle_degrees.to_radians().sin_cos();

    let src_cx = image.width as f64 / 2.0;
    let src_cy = image.height as f64 / 2.0;
    let dst_cx = dst_w as f64 / 2.0;
    let dst_cy = dst_h as f64 / 2.0;

    let mut pixels = Vec::with_capacity(rgb_len(dst_w, dst_h));
    for dst_y in 0..dst_h {
        for dst_x in 0..dst_w {
            let dx = dst_x as f64 + 0.5 - dst_cx;
            let dy = dst_y as f64 + 0.5 - dst_cy;

            // Back to pixel-index space, where pixel i is centered on i
            let src_x = dx * cos - dy * sin + src_cx - 0.5;
            let src_y = dx * sin + dy * cos + src_cy - 0.5;

            let pixel = match filter {
                InterpolationFilter::Bilinear => sample_bilinear(image, src_x, src_y),
                InterpolationFilter::Lanczos3 => sample_lanczos3(image, src_x, src_y),
            };
            pixels.extend_from_slice(&pixel);
        }
    }

    RasterImage {
        width: dst_w,
        height: dst_h,
        pixels,
    }
}

/// Whether (x, y) in pixel-index space lies on the image area.
#[inline]
fn covers(image: &RasterImage, x: f64, y: f64) -> bool {
    x >= -0.5 && x <= image.width as f64 - 0.5 && y >= -0.5 && y <= image.height as f64 - 0.5
}

/// Pixel at clamped integer coordinates, as `f64` channels.
#[inline]
fn get_pixel_f64(image: &RasterImage, px: i64, py: i64) -> [f64; 3] {
    let x = px.clamp(0, image.width as i64 - 1) as u32;
    let y = py.clamp(0, image.height as i64 - 1) as u32;
    image.pixel(x, y).map(|v| v as f64)
}

/// Bilinear interpolation of the 4 nearest pixels; neighbors past the
/// border are replicated from the edge.
fn sample_bilinear(image: &RasterImage, x: f64, y: f64) -> [u8; 3] {
    if !covers(image, x, y) {
        return [0, 0, 0];
    }

    let x0 = x.floor() as i64;
    let y0 = y.floor() as i64;
    let fx = x - x0 as f64;
    let fy = y - y0 as f64;

    let p00 = get_pixel_f64(image, x0, y0);
    let p10 = get_pixel_f64(image, x0 + 1, y0);
    let p01 = get_pixel_f64(image, x0, y0 + 1);
    let p11 = get_pixel_f64(image, x0 + 1, y0 + 1);

    let mut result = [0u8; 3];
    for i in 0..3 {
        let v = p00[i] * (1.0 - fx) * (1.0 - fy)
            + p10[i] * fx * (1.0 - fy)
            + p01[i] * (1.0 - fx) * fy
            + p11[i] * fx * fy;
        result[i] = v.clamp(0.0, 255.0).round() as u8;
    }
    result
}

/// Lanczos3 interpolation over a 6x6 neighborhood with edge replication.
fn sample_lanczos3(image: &RasterImage, x: f64, y: f64) -> [u8; 3] {
    if !covers(image, x, y) {
        return [0, 0, 0];
    }

    let x0 = x.floor() as i64;
    let y0 = y.floor() as i64;

    let mut sum = [0.0f64; 3];
    let mut weight_sum = 0.0;
    for ky in -2..=3 {
        for kx in -2..=3 {
            let px = x0 + kx;
            let py = y0 + ky;
            let weight = lanczos_weight(x - px as f64, 3.0) * lanczos_weight(y - py as f64, 3.0);

            let pixel = get_pixel_f64(image, px, py);
            for i in 0..3 {
                sum[i] += pixel[i] * weight;
            }
            weight_sum += weight;
        }
    }

    if weight_sum.abs() < f64::EPSILON {
        return sample_bilinear(image, x, y);
    }
    sum.map(|s| (s / weight_sum).clamp(0.0, 255.0).round() as u8)
}

/// Lanczos kernel: `sinc(x) * sinc(x / a)` for `|x| < a`, otherwise 0.
fn lanczos_weight(x: f64, a: f64) -> f64 {
    if x.abs() < f64::EPSILON {
        return 1.0;
    }
    if x.abs() >= a {
        return 0.0;
    }

    let pi_x = std::f64::consts::PI * x;
    let pi_x_a = pi_x / a;
    (a * pi_x.sin() * pi_x_a.sin()) / (pi_x * pi_x)
}
