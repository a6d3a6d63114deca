//! Mirroring along the horizontal or vertical axis.

use std::fmt;
use std::str::FromStr;

use crate::raster::CHANNELS;
use crate::{FilterError, FilterResult, RasterImage};

/// Which order a mirror reverses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MirrorAxis {
    /// Reverse column order (left becomes right).
    Horizontal,
    /// Reverse row order (top becomes bottom).
    Vertical,
}

impl MirrorAxis {
    pub fn as_str(self) -> &'static str {
        match self {
            MirrorAxis::Horizontal => "horizontal",
            MirrorAxis::Vertical => "vertical",
        }
    }
}

impl fmt::Display for MirrorAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MirrorAxis {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "horizontal" => Ok(MirrorAxis::Horizontal),
            "vertical" => Ok(MirrorAxis::Vertical),
            other => Err(FilterError::invalid(
                "axis",
                format!("expected \"horizontal\" or \"vertical\", got {:?}", other),
            )),
        }
    }
}

/// Mirror an image.
pub fn mirror(image: &RasterImage, axis: MirrorAxis) -> FilterResult<RasterImage> {
    image.validate()?;
    let row_bytes = image.width as usize * CHANNELS;

    let mut pixels = Vec::with_capacity(image.pixels.len());
    match axis {
        MirrorAxis::Horizontal => {
            for row in image.pixels.chunks_exact(row_bytes) {
                for px in row.chunks_exact(CHANNELS).rev() {
                    pixels.extend_from_slice(px);
                }
            }
        }
        MirrorAxis::Vertical => {
            for row in image.pixels.chunks_exact(row_bytes).rev() {
                pixels.extend_from_slice(row);
            }
        }
    }
    Ok(image.with_pixels(pixels))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_image() -> RasterImage {
        // 3x2: pixel value encodes position
        let pixels = vec![
            0, 0, 0, 1, 1, 1, 2, 2, 2, //
            10, 10, 10, 11, 11, 11, 12, 12, 12,
        ];
        RasterImage::new(3, 2, pixels).unwrap()
    }

    #[test]
    fn test_horizontal_reverses_columns() {
        let result = mirror(&test_image(), MirrorAxis::Horizontal).unwrap();
        assert_eq!(result.pixel(0, 0), [2, 2, 2]);
        assert_eq!(result.pixel(2, 0), [0, 0, 0]);
        assert_eq!(result.pixel(0, 1), [12, 12, 12]);
    }

    #[test]
    fn test_vertical_reverses_rows() {
        let result = mirror(&test_image(), MirrorAxis::Vertical).unwrap();
        assert_eq!(result.pixel(0, 0), [10, 10, 10]);
        assert_eq!(result.pixel(2, 1), [2, 2, 2]);
    }

    #[test]
    fn test_mirror_twice_is_identity() {
        let img = test_image();
        for axis in [MirrorAxis::Horizontal, MirrorAxis::Vertical] {
            let twice = mirror(&mirror(&img, axis).unwrap(), axis).unwrap();
            assert_eq!(twice, img);
        }
    }

    #[test]
    fn test_axis_from_str() {
        assert_eq!(
            "horizontal".parse::<MirrorAxis>().unwrap(),
            MirrorAxis::Horizontal
        );
        assert_eq!(
            "vertical".parse::<MirrorAxis>().unwrap(),
            MirrorAxis::Vertical
        );
    }

    #[test]
    fn test_axis_from_str_rejects_unknown() {
        for s in ["diagonal", "Horizontal", "", "both"] {
            assert!(matches!(
                s.parse::<MirrorAxis>(),
                Err(FilterError::InvalidParameter { name: "axis", .. })
            ));
        }
    }

    #[test]
    fn test_axis_display_round_trips() {
        for axis in [MirrorAxis::Horizontal, MirrorAxis::Vertical] {
            assert_eq!(axis.to_string().parse::<MirrorAxis>().unwrap(), axis);
        }
    }
}
