//! Geometric transforms: rotation, mirroring, resizing and cropping.
//!
//! Unlike the color and convolution filters, these may change the output
//! dimensions.
//!
//! # Coordinate System
//!
//! - Origin is the top-left corner, x grows right and y grows down
//! - Rotation angles are in degrees, positive = counter-clockwise
//! - Crop rectangles are in whole pixels, right/bottom exclusive

mod crop;
mod mirror;
mod resize;
mod rotation;

pub use crop::{crop, CropRect};
pub use mirror::{mirror, MirrorAxis};
pub use resize::{resize, resize_with, ResampleFilter, ResizeTarget, MAX_RESIZE_DIMENSION};
pub use rotation::{
    compute_rotated_bounds, rotate, rotate_with, InterpolationFilter, MAX_ROTATION_DEGREES,
};
