//! Operation dispatch: one serializable value per filter invocation.
//!
//! A [`FilterOp`] bundles an operation with its parameters. Its JSON form is
//! internally tagged by `"op"`, for example `{"op": "blur", "kernel_size": 15}`
//! or `{"op": "resize", "target": {"scale": 1.5}}`.

use crate::config::FilterCategory;
use crate::noise::NoiseKind;
use crate::transform::{CropRect, MirrorAxis, ResizeTarget};
use crate::{artistic, color, convolve, histogram, noise, transform};
use crate::{FilterResult, RasterImage};

/// A filter operation together with its parameters.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum FilterOp {
    Grayscale,
    Sepia,
    Invert,
    BrightnessContrast {
        brightness: i32,
        contrast: i32,
    },
    ColorBalance {
        red: i32,
        green: i32,
        blue: i32,
    },
    HistogramEqualization,
    Blur {
        kernel_size: u32,
    },
    Sharpen,
    EdgeDetection,
    Emboss,
    Cartoon,
    Vintage,
    PencilSketch,
    Hdr,
    ColorSplash,
    Rotate {
        angle: f64,
    },
    Mirror {
        axis: MirrorAxis,
    },
    Resize {
        target: ResizeTarget,
    },
    Crop {
        left: u32,
        top: u32,
        right: u32,
        bottom: u32,
    },
    Noise {
        kind: NoiseKind,
        intensity: f64,
        /// Fixed seed for reproducible noise; fresh entropy when absent.
        #[serde(default)]
        seed: Option<u64>,
    },
}

impl FilterOp {
    /// Run the operation on `source`, returning a new image.
    pub fn apply(&self, source: &RasterImage) -> FilterResult<RasterImage> {
        match *self {
            FilterOp::Grayscale => color::grayscale(source),
            FilterOp::Sepia => color::sepia(source),
            FilterOp::Invert => color::invert(source),
            FilterOp::BrightnessContrast {
                brightness,
                contrast,
            } => color::brightness_contrast(source, brightness, contrast),
            FilterOp::ColorBalance { red, green, blue } => {
                color::color_balance(source, red, green, blue)
            }
            FilterOp::HistogramEqualization => histogram::equalize_histogram(source),
            FilterOp::Blur { kernel_size } => convolve::blur(source, kernel_size),
            FilterOp::Sharpen => convolve::sharpen(source),
            FilterOp::EdgeDetection => convolve::edge_detection(source),
            FilterOp::Emboss => convolve::emboss(source),
            FilterOp::Cartoon => artistic::cartoon(source),
            FilterOp::Vintage => artistic::vintage(source),
            FilterOp::PencilSketch => artistic::pencil_sketch(source),
            FilterOp::Hdr => artistic::hdr(source),
            FilterOp::ColorSplash => artistic::color_splash(source),
            FilterOp::Rotate { angle } => transform::rotate(source, angle),
            FilterOp::Mirror { axis } => transform::mirror(source, axis),
            FilterOp::Resize { target } => transform::resize(source, target),
            FilterOp::Crop {
                left,
                top,
                right,
                bottom,
            } => transform::crop(source, CropRect::new(left, top, right, bottom)),
            FilterOp::Noise {
                kind,
                intensity,
                seed,
            } => noise::add_noise(source, kind, intensity, seed),
        }
    }

    /// Display label describing this operation, e.g. `"Blur (Kernel: 15)"`.
    pub fn label(&self) -> String {
        match self {
            FilterOp::Grayscale => "Grayscale".into(),
            FilterOp::Sepia => "Sepia".into(),
            FilterOp::Invert => "Invert".into(),
            FilterOp::BrightnessContrast {
                brightness,
                contrast,
            } => format!("Brightness: {}, Contrast: {}", brightness, contrast),
            FilterOp::ColorBalance { red, green, blue } => {
                format!("Color Balance (R:{}, G:{}, B:{})", red, green, blue)
            }
            FilterOp::HistogramEqualization => "Histogram Equalization".into(),
            FilterOp::Blur { kernel_size } => format!("Blur (Kernel: {})", kernel_size),
            FilterOp::Sharpen => "Sharpen".into(),
            FilterOp::EdgeDetection => "Edge Detection".into(),
            FilterOp::Emboss => "Emboss".into(),
            FilterOp::Cartoon => "Cartoon".into(),
            FilterOp::Vintage => "Vintage".into(),
            FilterOp::PencilSketch => "Pencil Sketch".into(),
            FilterOp::Hdr => "HDR Effect".into(),
            FilterOp::ColorSplash => "Color Splash".into(),
            FilterOp::Rotate { angle } => format!("Rotate {}°", angle),
            FilterOp::Mirror { axis } => format!("Mirror {}", axis),
            FilterOp::Resize {
                target: ResizeTarget::Scale(scale),
            } => format!("Resize {}x", decimal(*scale)),
            FilterOp::Resize {
                target: ResizeTarget::Dimensions { width, height },
            } => format!("Resize ({}x{})", width, height),
            FilterOp::Crop {
                left,
                top,
                right,
                bottom,
            } => format!("Crop ({},{},{},{})", left, top, right, bottom),
            FilterOp::Noise {
                kind, intensity, ..
            } => format!("{} Noise ({})", kind.title(), decimal(*intensity)),
        }
    }

    /// The category this operation is listed under.
    pub fn category(&self) -> FilterCategory {
        match self {
            FilterOp::Grayscale
            | FilterOp::Sepia
            | FilterOp::Invert
            | FilterOp::Blur { .. }
            | FilterOp::Sharpen
            | FilterOp::EdgeDetection => FilterCategory::BasicFilters,
            FilterOp::Cartoon
            | FilterOp::Vintage
            | FilterOp::Emboss
            | FilterOp::PencilSketch
            | FilterOp::Hdr
            | FilterOp::ColorSplash => FilterCategory::ArtisticEffects,
            FilterOp::BrightnessContrast { .. }
            | FilterOp::ColorBalance { .. }
            | FilterOp::HistogramEqualization => FilterCategory::Adjustments,
            FilterOp::Rotate { .. }
            | FilterOp::Mirror { .. }
            | FilterOp::Resize {
                target: ResizeTarget::Scale(_),
            } => FilterCategory::Transformations,
            FilterOp::Noise { .. } => FilterCategory::NoiseAndEffects,
            FilterOp::Crop { .. }
            | FilterOp::Resize {
                target: ResizeTarget::Dimensions { .. },
            } => FilterCategory::CropAndResize,
        }
    }
}

/// Apply `op` to `source`, logging the call and any failure.
pub fn apply_filter(source: &RasterImage, op: &FilterOp) -> FilterResult<RasterImage> {
    log::debug!(
        "applying {} to {}x{} image",
        op.label(),
        source.width,
        source.height
    );
    op.apply(source).inspect_err(|e| {
        log::warn!("{} failed: {}", op.label(), e);
    })
}

/// Format a decimal parameter with at least one fractional digit (`2.0`,
/// `1.5`, `0.1`).
fn decimal(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}
