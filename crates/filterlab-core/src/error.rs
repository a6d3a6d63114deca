//! Error types for filter operations and image codecs.

use thiserror::Error;

/// Errors that can occur while applying a filter.
///
/// A failed operation never touches its input, so the caller's current image
/// stays valid and can be shown as-is.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FilterError {
    /// A parameter is outside the domain accepted by the operation.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter {
        /// Name of the offending parameter
        name: &'static str,
        /// Human readable description of the violation
        reason: String,
    },

    /// The input buffer does not satisfy the raster model.
    #[error("unsupported input: {0}")]
    UnsupportedInput(String),
}

impl FilterError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        FilterError::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

/// Result type for filter operations
pub type FilterResult<T> = Result<T, FilterError>;

/// Errors that can occur while decoding or encoding image files.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The bytes are not in a recognized or enabled image format.
    #[error("Invalid or unsupported image format")]
    InvalidFormat,

    /// The format was recognized but the data could not be decoded.
    #[error("Corrupted or incomplete image file: {0}")]
    CorruptedFile(String),

    /// Pixel data length doesn't match expected dimensions
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 3), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// The encoder rejected the image.
    #[error("Encoding failed: {0}")]
    EncodingFailed(String),
}
