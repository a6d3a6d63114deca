//! Cartoon effect: flattened color regions outlined by dark edges.
//!
//! # Pipeline
//!
//! 1. Luma plane → 5x5 median
//! 2. Adaptive mean threshold (block 9, offset 9) → edge mask
//! 3. Bilateral filter on the color image (diameter 9, sigmas 75)
//! 4. Pixels under an edge are set to black

use crate::convolve::Plane;
use crate::raster::{clamp_u8, CHANNELS};
use crate::{FilterResult, RasterImage};

/// Median window for edge-mask denoising.
const MEDIAN_SIZE: usize = 5;
/// Neighborhood size for the adaptive threshold.
const THRESHOLD_BLOCK: usize = 9;
/// Offset subtracted from the local mean before thresholding.
const THRESHOLD_OFFSET: f32 = 9.0;
/// Bilateral filter diameter.
const BILATERAL_DIAMETER: usize = 9;
const BILATERAL_SIGMA_COLOR: f32 = 75.0;
const BILATERAL_SIGMA_SPACE: f32 = 75.0;

/// Cartoonize an image.
pub fn cartoon(image: &RasterImage) -> FilterResult<RasterImage> {
    image.validate()?;

    let edges = adaptive_threshold(
        &median_filter(&Plane::luma(image), MEDIAN_SIZE),
        THRESHOLD_BLOCK,
        THRESHOLD_OFFSET,
    );
    let smoothed = bilateral_filter(
        image,
        BILATERAL_DIAMETER,
        BILATERAL_SIGMA_COLOR,
        BILATERAL_SIGMA_SPACE,
    );

    let mut pixels = smoothed.pixels;
    for (px, &keep) in pixels.chunks_exact_mut(CHANNELS).zip(&edges) {
        if !keep {
            px.copy_from_slice(&[0, 0, 0]);
        }
    }
    Ok(image.with_pixels(pixels))
}

/// Median over a `size x size` window with border replication.
pub(crate) fn median_filter(plane: &Plane, size: usize) -> Plane {
    let r = (size / 2) as isize;
    let mut window = Vec::with_capacity(size * size);

    let mut data = Vec::with_capacity(plane.data.len());
    for y in 0..plane.height as isize {
        for x in 0..plane.width as isize {
            window.clear();
            for dy in -r..=r {
                for dx in -r..=r {
                    window.push(plane.get_clamped(x + dx, y + dy));
                }
            }
            window.sort_by(f32::total_cmp);
            data.push(window[window.len() / 2]);
        }
    }

    Plane {
        width: plane.width,
        height: plane.height,
        data,
    }
}

/// Binary mask: `true` where a sample is brighter than its local mean minus
/// `offset`. Dark lines against their surroundings come out `false`.
pub(crate) fn adaptive_threshold(plane: &Plane, block: usize, offset: f32) -> Vec<bool> {
    let weights = vec![1.0 / block as f32; block];
    let mean = plane.convolve_separable(&weights);
    plane
        .data
        .iter()
        .zip(&mean.data)
        .map(|(&v, &m)| v > m - offset)
        .collect()
}

/// Edge-preserving smoothing.
///
/// Each output pixel is a weighted mean over a circular neighborhood, where
/// weights fall off with spatial distance and with color distance (sum of
/// absolute channel differences). Strong edges have large color distance and
/// so are not blurred across.
pub(crate) fn bilateral_filter(
    image: &RasterImage,
    diameter: usize,
    sigma_color: f32,
    sigma_space: f32,
) -> RasterImage {
    let radius = (diameter / 2) as isize;
    let (w, h) = (image.width as isize, image.height as isize);

    // Color weights indexed by L1 distance, 0..=765
    let color_coeff = -0.5 / (sigma_color * sigma_color);
    let color_weight: Vec<f32> = (0..=255 * CHANNELS)
        .map(|d| ((d * d) as f32 * color_coeff).exp())
        .collect();

    let space_coeff = -0.5 / (sigma_space * sigma_space);
    let mut offsets = Vec::new();
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            let dist_sq = (dx * dx + dy * dy) as f32;
            if dist_sq <= (radius * radius) as f32 {
                offsets.push((dx, dy, (dist_sq * space_coeff).exp()));
            }
        }
    }

    let fetch = |x: isize, y: isize| -> [u8; 3] {
        image.pixel(x.clamp(0, w - 1) as u32, y.clamp(0, h - 1) as u32)
    };

    let mut pixels = Vec::with_capacity(image.pixels.len());
    for y in 0..h {
        for x in 0..w {
            let center = fetch(x, y);
            let mut sum = [0.0f32; 3];
            let mut weight_sum = 0.0f32;

            for &(dx, dy, space_w) in &offsets {
                let px = fetch(x + dx, y + dy);
                let dist: usize = (0..CHANNELS)
                    .map(|c| (px[c] as i32 - center[c] as i32).unsigned_abs() as usize)
                    .sum();
                let weight = space_w * color_weight[dist];
                for c in 0..CHANNELS {
                    sum[c] += px[c] as f32 * weight;
                }
                weight_sum += weight;
            }

            for s in sum {
                pixels.push(clamp_u8(s / weight_sum));
            }
        }
    }

    image.with_pixels(pixels)
}
