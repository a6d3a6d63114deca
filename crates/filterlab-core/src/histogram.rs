//! Histogram computation and histogram equalization.
//!
//! Equalization works on the BT.601 luma channel: the luma histogram is
//! flattened through its cumulative distribution and the change in luma is
//! added back to each channel. This leaves chroma (Cb/Cr) untouched, so
//! colors keep their hue while the tonal range is spread out.

use crate::luminance::{calculate_luma, calculate_luma_u8};
use crate::raster::clamp_u8;
use crate::{FilterResult, Histogram, RasterImage};

/// Compute RGB and luminance histograms from an image.
///
/// # Example
/// ```ignore
/// use filterlab_core::{histogram::compute_histogram, RasterImage};
///
/// let img = RasterImage::new(2, 1, vec![255, 0, 0, 0, 255, 0])?;
/// let hist = compute_histogram(&img)?;
/// assert_eq!(hist.red[255], 1);
/// assert_eq!(hist.green[255], 1);
/// ```
pub fn compute_histogram(image: &RasterImage) -> FilterResult<Histogram> {
    image.validate()?;
    let mut hist = Histogram::new();

    for chunk in image.pixels.chunks_exact(3) {
        hist.red[chunk[0] as usize] += 1;
        hist.green[chunk[1] as usize] += 1;
        hist.blue[chunk[2] as usize] += 1;

        let lum = calculate_luma_u8(chunk[0], chunk[1], chunk[2]);
        hist.luminance[lum as usize] += 1;
    }

    Ok(hist)
}

/// Build the equalization lookup table for a 256-bin histogram.
///
/// `lut[v] = round((cdf[v] - cdf_min) * 255 / (total - cdf_min))` where
/// `cdf_min` is the first non-zero cumulative count. A histogram with a
/// single occupied bin yields the identity table.
pub fn equalization_lut(bins: &[u32; 256]) -> [u8; 256] {
    let mut lut = [0u8; 256];
    let total: u64 = bins.iter().map(|&c| c as u64).sum();
    let cdf_min = bins.iter().find(|&&c| c > 0).copied().unwrap_or(0) as u64;

    if total == cdf_min {
        for (v, entry) in lut.iter_mut().enumerate() {
            *entry = v as u8;
        }
        return lut;
    }

    let range = (total - cdf_min) as f64;
    let mut cdf = 0u64;
    for (v, &count) in bins.iter().enumerate() {
        cdf += count as u64;
        let scaled = (cdf.saturating_sub(cdf_min)) as f64 * 255.0 / range;
        lut[v] = scaled.round().clamp(0.0, 255.0) as u8;
    }
    lut
}

/// Equalize the luminance histogram of an image.
pub fn equalize_histogram(image: &RasterImage) -> FilterResult<RasterImage> {
    let hist = compute_histogram(image)?;
    let lut = equalization_lut(&hist.luminance);

    Ok(image.map_pixels(|[r, g, b]| {
        let luma = calculate_luma(r, g, b);
        let target = lut[calculate_luma_u8(r, g, b) as usize] as f32;
        let shift = target - luma;
        [
            clamp_u8(r as f32 + shift),
            clamp_u8(g as f32 + shift),
            clamp_u8(b as f32 + shift),
        ]
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(width: u32, height: u32, pixels: Vec<u8>) -> RasterImage {
        RasterImage::new(width, height, pixels).unwrap()
    }

    #[test]
    fn test_single_red_pixel() {
        let hist = compute_histogram(&image(1, 1, vec![255, 0, 0])).unwrap();
        assert_eq!(hist.red[255], 1);
        assert_eq!(hist.green[0], 1);
        assert_eq!(hist.blue[0], 1);
        assert_eq!(hist.luminance[76], 1);
        assert!(hist.has_highlight_clipping());
        assert!(hist.has_shadow_clipping());
    }

    #[test]
    fn test_rgb_primary_colors() {
        let pixels = vec![
            255, 0, 0, // Red
            0, 255, 0, // Green
            0, 0, 255, // Blue
        ];
        let hist = compute_histogram(&image(3, 1, pixels)).unwrap();
        assert_eq!(hist.red[255], 1);
        assert_eq!(hist.red[0], 2);
        assert_eq!(hist.green[255], 1);
        assert_eq!(hist.green[0], 2);
        assert_eq!(hist.blue[255], 1);
        assert_eq!(hist.blue[0], 2);
    }

    #[test]
    fn test_histogram_counts_every_pixel() {
        let img = RasterImage::filled(7, 5, [10, 20, 30]).unwrap();
        let hist = compute_histogram(&img).unwrap();
        assert_eq!(hist.red.iter().sum::<u32>(), 35);
        assert_eq!(hist.luminance.iter().sum::<u32>(), 35);
        assert_eq!(hist.max_value(), 35);
    }

    #[test]
    fn test_lut_identity_for_single_level() {
        let mut bins = [0u32; 256];
        bins[90] = 16;
        let lut = equalization_lut(&bins);
        for (v, &mapped) in lut.iter().enumerate() {
            assert_eq!(mapped as usize, v);
        }
    }

    #[test]
    fn test_lut_spreads_two_levels() {
        let mut bins = [0u32; 256];
        bins[100] = 5;
        bins[110] = 5;
        let lut = equalization_lut(&bins);
        assert_eq!(lut[100], 0);
        assert_eq!(lut[110], 255);
    }

    #[test]
    fn test_lut_is_monotonic() {
        let mut bins = [0u32; 256];
        for (i, b) in bins.iter_mut().enumerate() {
            *b = (i as u32 * 37) % 11;
        }
        let lut = equalization_lut(&bins);
        for w in lut.windows(2) {
            assert!(w[0] <= w[1]);
        }
    }

    #[test]
    fn test_equalize_stretches_low_contrast_gray() {
        // Four gray levels squeezed into 100..=130
        let mut pixels = Vec::new();
        for v in [100u8, 110, 120, 130] {
            pixels.extend_from_slice(&[v, v, v]);
        }
        let result = equalize_histogram(&image(4, 1, pixels)).unwrap();
        assert_eq!(result.pixel(0, 0), [0, 0, 0]);
        assert_eq!(result.pixel(1, 0), [85, 85, 85]);
        assert_eq!(result.pixel(2, 0), [170, 170, 170]);
        assert_eq!(result.pixel(3, 0), [255, 255, 255]);
    }

    #[test]
    fn test_equalize_uniform_image_unchanged() {
        let img = RasterImage::filled(4, 4, [128, 128, 128]).unwrap();
        assert_eq!(equalize_histogram(&img).unwrap(), img);
    }

    #[test]
    fn test_equalize_deterministic() {
        let pixels: Vec<u8> = (0..10 * 10 * 3).map(|i| ((i * 13) % 97) as u8).collect();
        let img = image(10, 10, pixels);
        assert_eq!(
            equalize_histogram(&img).unwrap(),
            equalize_histogram(&img).unwrap()
        );
    }

    #[test]
    fn test_equalize_preserves_dimensions() {
        let img = RasterImage::filled(6, 3, [1, 2, 3]).unwrap();
        let result = equalize_histogram(&img).unwrap();
        assert_eq!((result.width, result.height), (6, 3));
    }
}
