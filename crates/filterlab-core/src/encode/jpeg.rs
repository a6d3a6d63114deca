//! JPEG encoding with the `image` crate's baseline encoder.

use std::io::Cursor;

use image::codecs::jpeg::JpegEncoder;
use image::{ExtendedColorType, ImageEncoder};

use super::check_rgb_buffer;
use crate::CodecError;

/// Encode RGB pixel data to JPEG bytes.
///
/// `quality` is clamped to 1..=100. Around 90 keeps filter artifacts such as
/// salt-and-pepper noise readable; below 60 block artifacts dominate.
///
/// # Errors
///
/// `InvalidDimensions` for a zero side, `InvalidPixelData` when
/// `pixels.len() != width * height * 3`, `EncodingFailed` if the encoder
/// rejects the image.
pub fn encode_jpeg(
    pixels: &[u8],
    width: u32,
    height: u32,
    quality: u8,
) -> Result<Vec<u8>, CodecError> {
    check_rgb_buffer(pixels, width, height)?;
    let quality = quality.clamp(1, 100);

    let mut buffer = Cursor::new(Vec::new());
    JpegEncoder::new_with_quality(&mut buffer, quality)
        .write_image(pixels, width, height, ExtendedColorType::Rgb8)
        .map_err(|e| CodecError::EncodingFailed(e.to_string()))?;

    log::debug!(
        "encoded {}x{} jpeg at quality {} ({} bytes)",
        width,
        height,
        quality,
        buffer.get_ref().len()
    );
    Ok(buffer.into_inner())
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: Any valid buffer encodes to a well-formed JPEG.
        #[test]
        fn prop_valid_input_produces_valid_jpeg(
            (width, height) in (1u32..=40, 1u32..=40),
            quality in 0u8..=255,
            seed in any::<u8>(),
        ) {
            let size = (width * height * 3) as usize;
            let pixels: Vec<u8> = (0..size).map(|i| (i as u8).wrapping_mul(31).wrapping_add(seed)).collect();

            let jpeg = encode_jpeg(&pixels, width, height, quality).unwrap();
            prop_assert_eq!(&jpeg[0..2], &[0xFF, 0xD8]);
            prop_assert_eq!(&jpeg[jpeg.len() - 2..], &[0xFF, 0xD9]);
        }

        /// Property: Encoding is deterministic.
        #[test]
        fn prop_deterministic_output((width, height) in (1u32..=16, 1u32..=16), quality in 1u8..=100) {
            let pixels = vec![77u8; (width * height * 3) as usize];
            prop_assert_eq!(
                encode_jpeg(&pixels, width, height, quality).unwrap(),
                encode_jpeg(&pixels, width, height, quality).unwrap()
            );
        }

        /// Property: A wrong buffer length is always reported.
        #[test]
        fn prop_invalid_pixel_length_returns_error(
            (width, height) in (1u32..=30, 1u32..=30),
            delta in 1usize..=10,
            longer in any::<bool>(),
        ) {
            let expected = (width * height * 3) as usize;
            let actual = if longer { expected + delta } else { expected.saturating_sub(delta) };
            let result = encode_jpeg(&vec![0u8; actual], width, height, 90);
            let is_invalid_data = matches!(result, Err(CodecError::InvalidPixelData { .. }));
            prop_assert!(is_invalid_data);
        }
    }
}
