//! Filterlab Core - Image filter engine
//!
//! This crate provides the pixel-level operations behind Filterlab: color and
//! tone transforms, convolution effects, artistic composites, geometric
//! transforms and synthetic noise, plus decoding and encoding of uploads.
//!
//! Every operation is a pure function from a borrowed [`RasterImage`] to a
//! new one. Nothing is chained implicitly: the caller keeps the original and
//! decides what each filter is applied to.
//!
//! ```ignore
//! use filterlab_core::{apply_filter, decode_image, encode_png, FilterOp};
//!
//! let original = decode_image(&upload_bytes)?;
//! let result = apply_filter(&original, &FilterOp::Blur { kernel_size: 15 })?;
//! let png = encode_png(&result)?;
//! ```

pub mod artistic;
pub mod color;
pub mod config;
pub mod convolve;
pub mod decode;
pub mod encode;
pub mod error;
pub mod histogram;
pub mod label;
pub mod luminance;
pub mod noise;
pub mod ops;
pub mod raster;
pub mod transform;

pub use config::{is_supported_file, FilterCategory, FilterDefaults, SUPPORTED_FORMATS};
pub use decode::decode_image;
pub use encode::{encode_jpeg, encode_png};
pub use error::{CodecError, FilterError, FilterResult};
pub use label::export_file_name;
pub use noise::NoiseKind;
pub use ops::{apply_filter, FilterOp};
pub use raster::RasterImage;
pub use transform::{CropRect, MirrorAxis, ResizeTarget};

/// Histogram data for an image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
    /// Red channel histogram (256 bins)
    pub red: [u32; 256],
    /// Green channel histogram (256 bins)
    pub green: [u32; 256],
    /// Blue channel histogram (256 bins)
    pub blue: [u32; 256],
    /// BT.601 luma histogram (256 bins)
    pub luminance: [u32; 256],
}

impl Default for Histogram {
    fn default() -> Self {
        Self {
            red: [0; 256],
            green: [0; 256],
            blue: [0; 256],
            luminance: [0; 256],
        }
    }
}

impl Histogram {
    /// Create a new empty histogram
    pub fn new() -> Self {
        Self::default()
    }

    /// Largest bin across the color channels, for scaling a plot
    pub fn max_value(&self) -> u32 {
        [&self.red, &self.green, &self.blue]
            .iter()
            .flat_map(|bins| bins.iter())
            .copied()
            .max()
            .unwrap_or(0)
    }

    /// Any channel has samples at 255
    pub fn has_highlight_clipping(&self) -> bool {
        self.red[255] > 0 || self.green[255] > 0 || self.blue[255] > 0
    }

    /// Any channel has samples at 0
    pub fn has_shadow_clipping(&self) -> bool {
        self.red[0] > 0 || self.green[0] > 0 || self.blue[0] > 0
    }
}
