//! Default parameters, accepted ranges and upload formats.

use std::fmt;

use crate::color::{BRIGHTNESS_CONTRAST_RANGE, COLOR_BALANCE_RANGE};
use crate::convolve::MAX_BLUR_KERNEL;
use crate::transform::{MAX_RESIZE_DIMENSION, MAX_ROTATION_DEGREES};
use crate::{FilterError, FilterResult};

/// Smallest blur kernel size.
pub const MIN_BLUR_KERNEL: u32 = 3;
/// Accepted blur kernel sizes (odd values only).
pub const BLUR_KERNEL_RANGE: (u32, u32) = (MIN_BLUR_KERNEL, MAX_BLUR_KERNEL);
/// Accepted rotation angles in degrees.
pub const ROTATION_RANGE: (f64, f64) = (-MAX_ROTATION_DEGREES, MAX_ROTATION_DEGREES);
/// Accepted resize output dimensions.
pub const RESIZE_DIMENSION_RANGE: (u32, u32) = (1, MAX_RESIZE_DIMENSION);

/// File extensions accepted for upload.
pub const SUPPORTED_FORMATS: [&str; 5] = ["png", "jpg", "jpeg", "bmp", "tiff"];

/// Whether a file name carries a supported image extension (case-insensitive).
pub fn is_supported_file(name: &str) -> bool {
    match name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => SUPPORTED_FORMATS
            .iter()
            .any(|fmt| fmt.eq_ignore_ascii_case(ext)),
        _ => false,
    }
}

/// Initial values for every adjustable filter parameter.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct FilterDefaults {
    /// Gaussian blur kernel size (odd, 3 to 99)
    pub blur_kernel_size: u32,
    /// Brightness offset (-100 to 100)
    pub brightness: i32,
    /// Contrast (-100 to 100)
    pub contrast: i32,
    /// Red channel offset (-50 to 50)
    pub red_balance: i32,
    /// Green channel offset (-50 to 50)
    pub green_balance: i32,
    /// Blue channel offset (-50 to 50)
    pub blue_balance: i32,
    /// Rotation in degrees (-180 to 180)
    pub rotation_angle: f64,
    /// Resize scale factor (> 0)
    pub scale_factor: f64,
    /// Noise intensity (0 exclusive to 1)
    pub noise_intensity: f64,
}

impl Default for FilterDefaults {
    fn default() -> Self {
        Self {
            blur_kernel_size: 15,
            brightness: 0,
            contrast: 0,
            red_balance: 0,
            green_balance: 0,
            blue_balance: 0,
            rotation_angle: 0.0,
            scale_factor: 1.0,
            noise_intensity: 0.1,
        }
    }
}

impl FilterDefaults {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check every field against the domain of the operation it feeds.
    pub fn validate(&self) -> FilterResult<()> {
        let (min_k, max_k) = BLUR_KERNEL_RANGE;
        if self.blur_kernel_size < min_k
            || self.blur_kernel_size > max_k
            || self.blur_kernel_size % 2 == 0
        {
            return Err(FilterError::invalid(
                "blur_kernel_size",
                format!(
                    "must be odd and in {}..={}, got {}",
                    min_k, max_k, self.blur_kernel_size
                ),
            ));
        }

        check_i32("brightness", self.brightness, BRIGHTNESS_CONTRAST_RANGE)?;
        check_i32("contrast", self.contrast, BRIGHTNESS_CONTRAST_RANGE)?;
        check_i32("red_balance", self.red_balance, COLOR_BALANCE_RANGE)?;
        check_i32("green_balance", self.green_balance, COLOR_BALANCE_RANGE)?;
        check_i32("blue_balance", self.blue_balance, COLOR_BALANCE_RANGE)?;

        let (min_a, max_a) = ROTATION_RANGE;
        if !(self.rotation_angle >= min_a && self.rotation_angle <= max_a) {
            return Err(FilterError::invalid(
                "rotation_angle",
                format!("must be in {}..={}, got {}", min_a, max_a, self.rotation_angle),
            ));
        }
        if !(self.scale_factor.is_finite() && self.scale_factor > 0.0) {
            return Err(FilterError::invalid(
                "scale_factor",
                format!("must be a finite positive number, got {}", self.scale_factor),
            ));
        }
        if !(self.noise_intensity > 0.0 && self.noise_intensity <= 1.0) {
            return Err(FilterError::invalid(
                "noise_intensity",
                format!("must be in (0, 1], got {}", self.noise_intensity),
            ));
        }
        Ok(())
    }
}

fn check_i32(name: &'static str, value: i32, (min, max): (i32, i32)) -> FilterResult<()> {
    if value < min || value > max {
        return Err(FilterError::invalid(
            name,
            format!("must be in {}..={}, got {}", min, max, value),
        ));
    }
    Ok(())
}

/// Grouping of operations for presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterCategory {
    BasicFilters,
    ArtisticEffects,
    Adjustments,
    Transformations,
    NoiseAndEffects,
    CropAndResize,
}

impl FilterCategory {
    /// Every category in display order.
    pub const ALL: [FilterCategory; 6] = [
        FilterCategory::BasicFilters,
        FilterCategory::ArtisticEffects,
        FilterCategory::Adjustments,
        FilterCategory::Transformations,
        FilterCategory::NoiseAndEffects,
        FilterCategory::CropAndResize,
    ];

    pub fn title(self) -> &'static str {
        match self {
            FilterCategory::BasicFilters => "Basic Filters",
            FilterCategory::ArtisticEffects => "Artistic Effects",
            FilterCategory::Adjustments => "Adjustments",
            FilterCategory::Transformations => "Transformations",
            FilterCategory::NoiseAndEffects => "Noise & Effects",
            FilterCategory::CropAndResize => "Crop & Resize",
        }
    }
}

impl fmt::Display for FilterCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_ui() {
        let d = FilterDefaults::default();
        assert_eq!(d.blur_kernel_size, 15);
        assert_eq!((d.brightness, d.contrast), (0, 0));
        assert_eq!((d.red_balance, d.green_balance, d.blue_balance), (0, 0, 0));
        assert_eq!(d.rotation_angle, 0.0);
        assert_eq!(d.scale_factor, 1.0);
        assert!((d.noise_intensity - 0.1).abs() < f64::EPSILON);
    }

    #[test]
    fn test_defaults_are_valid() {
        assert!(FilterDefaults::new().validate().is_ok());
    }

    #[test]
    fn test_validate_catches_each_field() {
        let mut d = FilterDefaults::default();
        d.blur_kernel_size = 16;
        assert!(d.validate().is_err());

        let mut d = FilterDefaults::default();
        d.blur_kernel_size = 101;
        assert!(d.validate().is_err());

        let mut d = FilterDefaults::default();
        d.contrast = 101;
        assert!(matches!(
            d.validate(),
            Err(FilterError::InvalidParameter { name: "contrast", .. })
        ));

        let mut d = FilterDefaults::default();
        d.green_balance = -51;
        assert!(matches!(
            d.validate(),
            Err(FilterError::InvalidParameter { name: "green_balance", .. })
        ));

        let mut d = FilterDefaults::default();
        d.rotation_angle = f64::NAN;
        assert!(d.validate().is_err());

        let mut d = FilterDefaults::default();
        d.scale_factor = 0.0;
        assert!(d.validate().is_err());

        let mut d = FilterDefaults::default();
        d.noise_intensity = 0.0;
        assert!(d.validate().is_err());
    }

    #[test]
    fn test_supported_files() {
        assert!(is_supported_file("photo.png"));
        assert!(is_supported_file("photo.JPG"));
        assert!(is_supported_file("archive.2024.Tiff"));
        assert!(is_supported_file("scan.bmp"));
        assert!(!is_supported_file("photo.gif"));
        assert!(!is_supported_file("png"));
        assert!(!is_supported_file(".png"));
        assert!(!is_supported_file("photo."));
    }

    #[test]
    fn test_category_titles() {
        let titles: Vec<_> = FilterCategory::ALL.iter().map(|c| c.title()).collect();
        assert_eq!(
            titles,
            [
                "Basic Filters",
                "Artistic Effects",
                "Adjustments",
                "Transformations",
                "Noise & Effects",
                "Crop & Resize",
            ]
        );
        assert_eq!(FilterCategory::NoiseAndEffects.to_string(), "Noise & Effects");
    }
}
