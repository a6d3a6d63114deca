//! Lossless PNG encoding for exported results.

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};

use super::check_rgb_buffer;
use crate::{CodecError, RasterImage};

/// Encode an image as an 8-bit RGB PNG.
///
/// # Errors
///
/// `InvalidDimensions` or `InvalidPixelData` for a malformed buffer,
/// `EncodingFailed` if the encoder rejects the image.
pub fn encode_png(image: &RasterImage) -> Result<Vec<u8>, CodecError> {
    check_rgb_buffer(&image.pixels, image.width, image.height)?;

    let mut buffer = Vec::new();
    PngEncoder::new(&mut buffer)
        .write_image(
            &image.pixels,
            image.width,
            image.height,
            ExtendedColorType::Rgb8,
        )
        .map_err(|e| CodecError::EncodingFailed(e.to_string()))?;

    log::debug!(
        "encoded {}x{} png ({} bytes)",
        image.width,
        image.height,
        buffer.len()
    );
    Ok(buffer)
}
