//! Rectangular cropping in pixel coordinates.
//!
//! # Coordinate System
//!
//! - Origin is the top-left corner
//! - `left`/`top` are inclusive, `right`/`bottom` are exclusive
//! - The output is `(right - left) x (bottom - top)`

use crate::raster::CHANNELS;
use crate::{FilterError, FilterResult, RasterImage};

/// A crop region in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CropRect {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl CropRect {
    pub fn new(left: u32, top: u32, right: u32, bottom: u32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// The rectangle covering a whole `width x height` image.
    pub fn full(width: u32, height: u32) -> Self {
        Self::new(0, 0, width, height)
    }

    /// Output width, 0 for an inverted rectangle.
    pub fn width(&self) -> u32 {
        self.right.saturating_sub(self.left)
    }

    /// Output height, 0 for an inverted rectangle.
    pub fn height(&self) -> u32 {
        self.bottom.saturating_sub(self.top)
    }

    /// Check that the rectangle is non-empty and inside a `width x height` image.
    pub fn validate(&self, width: u32, height: u32) -> FilterResult<()> {
        if self.left >= self.right || self.right > width {
            return Err(FilterError::invalid(
                "crop",
                format!(
                    "need left < right <= {}, got left={} right={}",
                    width, self.left, self.right
                ),
            ));
        }
        if self.top >= self.bottom || self.bottom > height {
            return Err(FilterError::invalid(
                "crop",
                format!(
                    "need top < bottom <= {}, got top={} bottom={}",
                    height, self.top, self.bottom
                ),
            ));
        }
        Ok(())
    }
}

/// Crop an image to `rect`.
///
/// # Errors
///
/// `InvalidParameter` if the rectangle is empty, inverted or reaches past
/// the image.
pub fn crop(image: &RasterImage, rect: CropRect) -> FilterResult<RasterImage> {
    image.validate()?;
    rect.validate(image.width, image.height)?;

    if rect == CropRect::full(image.width, image.height) {
        return Ok(image.clone());
    }

    let out_width = rect.width();
    let out_height = rect.height();
    let row_bytes = out_width as usize * CHANNELS;

    let mut pixels = Vec::with_capacity(row_bytes * out_height as usize);
    for y in rect.top..rect.bottom {
        let start = image.index(rect.left, y);
        pixels.extend_from_slice(&image.pixels[start..start + row_bytes]);
    }

    Ok(RasterImage {
        width: out_width,
        height: out_height,
        pixels,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Each pixel stores its own coordinates.
    fn test_image(width: u32, height: u32) -> RasterImage {
        let mut pixels = Vec::with_capacity((width * height * 3) as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.extend_from_slice(&[x as u8, y as u8, 7]);
            }
        }
        RasterImage::new(width, height, pixels).unwrap()
    }

    #[test]
    fn test_full_crop() {
        let img = test_image(10, 6);
        assert_eq!(crop(&img, CropRect::full(10, 6)).unwrap(), img);
    }

    #[test]
    fn test_center_crop() {
        let img = test_image(100, 100);
        let result = crop(&img, CropRect::new(25, 25, 75, 75)).unwrap();
        assert_eq!((result.width, result.height), (50, 50));
        assert_eq!(result.pixel(0, 0), [25, 25, 7]);
        assert_eq!(result.pixel(49, 49), [74, 74, 7]);
    }

    #[test]
    fn test_crop_rectangular() {
        let img = test_image(20, 10);
        let result = crop(&img, CropRect::new(3, 2, 11, 5)).unwrap();
        assert_eq!((result.width, result.height), (8, 3));
        assert_eq!(result.pixel(2, 1), [5, 3, 7]);
    }

    #[test]
    fn test_single_pixel_crop() {
        let img = test_image(5, 5);
        let result = crop(&img, CropRect::new(4, 4, 5, 5)).unwrap();
        assert_eq!((result.width, result.height), (1, 1));
        assert_eq!(result.pixels, vec![4, 4, 7]);
    }

    #[test]
    fn test_crop_rejects_inverted_rect() {
        let img = test_image(20, 20);
        assert!(matches!(
            crop(&img, CropRect::new(10, 0, 5, 10)),
            Err(FilterError::InvalidParameter { name: "crop", .. })
        ));
        assert!(crop(&img, CropRect::new(0, 10, 10, 5)).is_err());
    }

    #[test]
    fn test_crop_rejects_empty_rect() {
        let img = test_image(20, 20);
        assert!(crop(&img, CropRect::new(5, 0, 5, 10)).is_err());
        assert!(crop(&img, CropRect::new(0, 5, 10, 5)).is_err());
    }

    #[test]
    fn test_crop_rejects_out_of_bounds() {
        let img = test_image(20, 10);
        assert!(crop(&img, CropRect::new(0, 0, 21, 10)).is_err());
        assert!(crop(&img, CropRect::new(0, 0, 20, 11)).is_err());
        assert!(crop(&img, CropRect::new(50, 0, 10, 10)).is_err());
    }

    #[test]
    fn test_rect_dimensions() {
        let rect = CropRect::new(2, 3, 10, 4);
        assert_eq!((rect.width(), rect.height()), (8, 1));
        assert_eq!(CropRect::new(9, 9, 1, 1).width(), 0);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Image dimensions plus a valid crop rectangle inside them.
    fn crop_case_strategy() -> impl Strategy<Value = (u32, u32, CropRect)> {
        (1u32..=40, 1u32..=40).prop_flat_map(|(w, h)| {
            (0..w, 0..h).prop_flat_map(move |(left, top)| {
                (left + 1..=w, top + 1..=h).prop_map(move |(right, bottom)| {
                    (w, h, CropRect::new(left, top, right, bottom))
                })
            })
        })
    }

    fn create_test_image(width: u32, height: u32) -> RasterImage {
        let mut pixels = Vec::with_capacity((width * height * 3) as usize);
        for y in 0..height {
            for x in 0..width {
                let v = ((y * width + x) % 256) as u8;
                pixels.extend_from_slice(&[v, x as u8, y as u8]);
            }
        }
        RasterImage::new(width, height, pixels).unwrap()
    }

    proptest! {
        /// Property: Output dimensions are exactly the rectangle size.
        #[test]
        fn prop_output_matches_rect((w, h, rect) in crop_case_strategy()) {
            let img = create_test_image(w, h);
            let result = crop(&img, rect).unwrap();

            prop_assert_eq!(result.width, rect.right - rect.left);
            prop_assert_eq!(result.height, rect.bottom - rect.top);
            prop_assert_eq!(result.pixels.len(), (result.width * result.height * 3) as usize);
        }

        /// Property: Every cropped pixel is the source pixel at the offset position.
        #[test]
        fn prop_cropped_pixels_from_original((w, h, rect) in crop_case_strategy()) {
            let img = create_test_image(w, h);
            let result = crop(&img, rect).unwrap();

            for y in 0..result.height {
                for x in 0..result.width {
                    prop_assert_eq!(result.pixel(x, y), img.pixel(rect.left + x, rect.top + y));
                }
            }
        }

        /// Property: Nested crops equal one crop of the combined rectangle.
        #[test]
        fn prop_sequential_crops((w, h, outer) in crop_case_strategy()) {
            let img = create_test_image(w, h);
            let first = crop(&img, outer).unwrap();
            let inner = CropRect::new(0, 0, first.width, first.height);
            prop_assert_eq!(crop(&first, inner).unwrap(), first);
        }

        /// Property: Rectangles reaching past the image are rejected.
        #[test]
        fn prop_oversized_rejected(w in 1u32..=40, h in 1u32..=40, extra in 1u32..=10) {
            let img = create_test_image(w, h);
            prop_assert!(crop(&img, CropRect::new(0, 0, w + extra, h)).is_err());
            prop_assert!(crop(&img, CropRect::new(0, 0, w, h + extra)).is_err());
        }
    }
}
