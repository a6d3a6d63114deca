//! The in-memory raster buffer every filter reads and produces.

use crate::{FilterError, FilterResult};

/// Number of interleaved samples per pixel.
pub const CHANNELS: usize = 3;

/// An RGB image with 8 bits per channel.
///
/// Filters treat a `RasterImage` as immutable: every operation borrows its
/// source and allocates a new image for the result, so a caller can keep
/// the original around and re-derive from it on every request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// RGB pixel data in row-major order (3 bytes per pixel).
    /// Length must be width * height * 3.
    pub pixels: Vec<u8>,
}

impl RasterImage {
    /// Create a new RasterImage, checking dimensions against the buffer.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> FilterResult<Self> {
        let image = Self {
            width,
            height,
            pixels,
        };
        image.validate()?;
        Ok(image)
    }

    /// Create an image where every pixel has the same color.
    pub fn filled(width: u32, height: u32, rgb: [u8; 3]) -> FilterResult<Self> {
        let count = (width as usize) * (height as usize);
        let pixels = rgb.iter().copied().cycle().take(count * CHANNELS).collect();
        Self::new(width, height, pixels)
    }

    /// Build an image from interleaved samples with 3 (RGB) or 4 (RGBA)
    /// channels. Alpha is discarded, not blended.
    pub fn from_interleaved(
        width: u32,
        height: u32,
        channels: usize,
        data: &[u8],
    ) -> FilterResult<Self> {
        let pixels = match channels {
            3 => data.to_vec(),
            4 => data
                .chunks_exact(4)
                .flat_map(|px| [px[0], px[1], px[2]])
                .collect(),
            other => {
                return Err(FilterError::UnsupportedInput(format!(
                    "expected 3 or 4 channels, got {}",
                    other
                )))
            }
        };
        let expected = (width as usize) * (height as usize) * channels;
        if data.len() != expected {
            return Err(FilterError::UnsupportedInput(format!(
                "expected {} bytes for {}x{}x{}, got {}",
                expected,
                width,
                height,
                channels,
                data.len()
            )));
        }
        Self::new(width, height, pixels)
    }

    /// Create a RasterImage from an image::RgbImage.
    pub fn from_rgb_image(img: image::RgbImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            pixels: img.into_raw(),
        }
    }

    /// Convert to an image::RgbImage for resampling and encoding.
    pub fn to_rgb_image(&self) -> Option<image::RgbImage> {
        image::RgbImage::from_raw(self.width, self.height, self.pixels.clone())
    }

    /// Check the buffer against the raster model.
    ///
    /// Every public filter calls this before touching the pixels.
    pub fn validate(&self) -> FilterResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(FilterError::UnsupportedInput(format!(
                "image dimensions must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        let expected = self.pixel_count() * CHANNELS;
        if self.pixels.len() != expected {
            return Err(FilterError::UnsupportedInput(format!(
                "pixel buffer holds {} bytes, expected {} for {}x{} RGB",
                self.pixels.len(),
                expected,
                self.width,
                self.height
            )));
        }
        Ok(())
    }

    /// Get the RGB triple at (x, y).
    ///
    /// Panics if the coordinates are outside the image.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
        let idx = self.index(x, y);
        [self.pixels[idx], self.pixels[idx + 1], self.pixels[idx + 2]]
    }

    /// Byte offset of the pixel at (x, y).
    #[inline]
    pub(crate) fn index(&self, x: u32, y: u32) -> usize {
        ((y as usize) * (self.width as usize) + x as usize) * CHANNELS
    }

    /// Get the total number of pixels.
    pub fn pixel_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Get the size of the pixel buffer in bytes.
    pub fn byte_size(&self) -> usize {
        self.pixels.len()
    }

    /// Apply a per-pixel mapping, producing a new image of the same size.
    pub(crate) fn map_pixels(&self, mut f: impl FnMut([u8; 3]) -> [u8; 3]) -> RasterImage {
        let mut pixels = Vec::with_capacity(self.pixels.len());
        for chunk in self.pixels.chunks_exact(CHANNELS) {
            pixels.extend_from_slice(&f([chunk[0], chunk[1], chunk[2]]));
        }
        self.with_pixels(pixels)
    }

    /// A new image with the same dimensions and the given pixel data.
    pub(crate) fn with_pixels(&self, pixels: Vec<u8>) -> RasterImage {
        debug_assert_eq!(pixels.len(), self.pixels.len(), "Pixel buffer size mismatch");
        RasterImage {
            width: self.width,
            height: self.height,
            pixels,
        }
    }
}

/// Byte length of an RGB buffer, widened before multiplying.
#[inline]
pub(crate) fn rgb_len(width: u32, height: u32) -> usize {
    width as usize * height as usize * CHANNELS
}

/// Round and clamp a floating point sample into the u8 range.
#[inline]
pub(crate) fn clamp_u8(v: f32) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}
