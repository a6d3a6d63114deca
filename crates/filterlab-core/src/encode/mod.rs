//! Encoding filtered images for download.
//!
//! PNG is the export format (lossless, so the filter output is kept exactly);
//! JPEG is available for smaller previews and shares.

mod jpeg;
mod png;

pub use jpeg::encode_jpeg;
pub use png::encode_png;

use crate::CodecError;

/// Check that `pixels` is a complete RGB buffer for `width x height`.
fn check_rgb_buffer(pixels: &[u8], width: u32, height: u32) -> Result<(), CodecError> {
    if width == 0 || height == 0 {
        return Err(CodecError::InvalidDimensions { width, height });
    }

    let expected = (width as usize) * (height as usize) * 3;
    if pixels.len() != expected {
        return Err(CodecError::InvalidPixelData {
            expected,
            actual: pixels.len(),
        });
    }
    Ok(())
}
