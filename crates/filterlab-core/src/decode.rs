//! Decoding uploaded image files into raster buffers.
//!
//! The format is sniffed from the file contents rather than trusted from the
//! file name. Only the codecs enabled on the `image` dependency (PNG, JPEG,
//! BMP and TIFF) are available; anything else is `InvalidFormat`.

use std::io::Cursor;

use image::{ImageFormat, ImageReader};

use crate::{CodecError, RasterImage};

/// Detect the image format from magic bytes.
pub fn detect_format(bytes: &[u8]) -> Option<ImageFormat> {
    image::guess_format(bytes).ok()
}

/// Decode PNG, JPEG, BMP or TIFF bytes to an RGB raster.
///
/// Grayscale inputs are expanded to three channels and any alpha channel
/// is discarded.
///
/// # Errors
///
/// `InvalidFormat` if the format is not recognized, `CorruptedFile` if the
/// data cannot be decoded.
pub fn decode_image(bytes: &[u8]) -> Result<RasterImage, CodecError> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| CodecError::CorruptedFile(e.to_string()))?;
    let format = reader.format().ok_or(CodecError::InvalidFormat)?;

    let img = reader.decode().map_err(|e| match e {
        image::ImageError::Unsupported(_) => CodecError::InvalidFormat,
        other => CodecError::CorruptedFile(other.to_string()),
    })?;

    log::debug!(
        "decoded {:?} image {}x{} ({:?})",
        format,
        img.width(),
        img.height(),
        img.color()
    );

    let raster = RasterImage::from_rgb_image(img.into_rgb8());
    if raster.width == 0 || raster.height == 0 {
        return Err(CodecError::InvalidDimensions {
            width: raster.width,
            height: raster.height,
        });
    }
    Ok(raster)
}
