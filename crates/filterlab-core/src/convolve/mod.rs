//! Convolution-based effects: blur, sharpen, edge detection and emboss.
//!
//! # Border Policy
//!
//! Samples outside the image are replicated from the nearest edge pixel
//! (no wraparound, no zero padding). Smoothing a flat region therefore
//! leaves it flat right up to the border.

mod kernel;
mod plane;

pub use kernel::{gaussian_weights, Kernel};
pub use plane::{merge, Plane};

use crate::{FilterError, FilterResult, RasterImage};

/// Largest accepted blur kernel size.
pub const MAX_BLUR_KERNEL: u32 = 99;

/// Bias added to emboss output so flat regions land on mid-gray.
pub const EMBOSS_BIAS: f32 = 128.0;

/// Gaussian blur with an odd kernel size of at least 3.
///
/// # Errors
///
/// `InvalidParameter` if `kernel_size` is even, below 3 or above 99.
pub fn blur(image: &RasterImage, kernel_size: u32) -> FilterResult<RasterImage> {
    image.validate()?;
    if kernel_size < 3 || kernel_size > MAX_BLUR_KERNEL {
        return Err(FilterError::invalid(
            "kernel_size",
            format!("must be in 3..={}, got {}", MAX_BLUR_KERNEL, kernel_size),
        ));
    }
    let weights = gaussian_weights(kernel_size as usize)?;
    Ok(gaussian_blur_planes(image, &weights))
}

/// Sharpen with a center-weighted high-pass kernel.
pub fn sharpen(image: &RasterImage) -> FilterResult<RasterImage> {
    image.validate()?;
    let kernel = Kernel::sharpen();
    let planes = Plane::split(image).map(|p| p.convolve(&kernel));
    Ok(merge(&planes))
}

/// Sobel gradient magnitude of the luma plane, as a gray image.
pub fn edge_detection(image: &RasterImage) -> FilterResult<RasterImage> {
    image.validate()?;
    let luma = Plane::luma(image);
    let gx = luma.convolve(&Kernel::sobel_x());
    let gy = luma.convolve(&Kernel::sobel_y());

    let magnitude = Plane {
        width: luma.width,
        height: luma.height,
        data: gx
            .data
            .iter()
            .zip(&gy.data)
            .map(|(x, y)| (x * x + y * y).sqrt())
            .collect(),
    };
    Ok(magnitude.to_gray_image())
}

/// Gray relief image: directional difference of the luma plane offset by
/// mid-gray.
pub fn emboss(image: &RasterImage) -> FilterResult<RasterImage> {
    image.validate()?;
    let relief = Plane::luma(image)
        .convolve(&Kernel::emboss())
        .map(|v| v + EMBOSS_BIAS);
    Ok(relief.to_gray_image())
}

/// Blur every channel with the given separable weights.
pub(crate) fn gaussian_blur_planes(image: &RasterImage, weights: &[f32]) -> RasterImage {
    let planes = Plane::split(image).map(|p| p.convolve_separable(weights));
    merge(&planes)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn image_strategy() -> impl Strategy<Value = RasterImage> {
        (1u32..=10, 1u32..=10).prop_flat_map(|(w, h)| {
            proptest::collection::vec(any::<u8>(), (w * h * 3) as usize)
                .prop_map(move |pixels| RasterImage::new(w, h, pixels).unwrap())
        })
    }

    proptest! {
        /// Property: Convolution effects preserve dimensions.
        #[test]
        fn prop_dimensions_preserved(img in image_strategy(), half in 1u32..=5) {
            let kernel_size = half * 2 + 1;
            for result in [
                blur(&img, kernel_size).unwrap(),
                sharpen(&img).unwrap(),
                edge_detection(&img).unwrap(),
                emboss(&img).unwrap(),
            ] {
                prop_assert_eq!(result.width, img.width);
                prop_assert_eq!(result.height, img.height);
                prop_assert_eq!(result.pixels.len(), img.pixels.len());
            }
        }

        /// Property: Blurring never leaves the input's sample range.
        #[test]
        fn prop_blur_bounded_by_input(img in image_strategy()) {
            let min = *img.pixels.iter().min().unwrap();
            let max = *img.pixels.iter().max().unwrap();
            let result = blur(&img, 3).unwrap();
            for &v in &result.pixels {
                prop_assert!(v >= min && v <= max);
            }
        }

        /// Property: Even kernel sizes are always rejected.
        #[test]
        fn prop_even_kernel_rejected(img in image_strategy(), half in 1u32..=20) {
            prop_assert!(blur(&img, half * 2).is_err());
        }
    }
}
