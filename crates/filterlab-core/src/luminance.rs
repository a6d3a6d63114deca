//! Luma calculation using ITU-R BT.601 coefficients.
//!
//! Shared by grayscale conversion, histogram computation and every effect
//! that works on an intensity plane.

/// ITU-R BT.601 coefficient for red channel.
pub const LUMA_R: f32 = 0.299;

/// ITU-R BT.601 coefficient for green channel.
pub const LUMA_G: f32 = 0.587;

/// ITU-R BT.601 coefficient for blue channel.
pub const LUMA_B: f32 = 0.114;

/// Calculate luma from u8 RGB values without rounding (0.0 to 255.0).
#[inline]
pub fn calculate_luma(r: u8, g: u8, b: u8) -> f32 {
    LUMA_R * r as f32 + LUMA_G * g as f32 + LUMA_B * b as f32
}

/// Calculate luma from u8 RGB values (0 to 255).
///
/// For gray pixels (r == g == b) this returns the input value exactly.
#[inline]
pub fn calculate_luma_u8(r: u8, g: u8, b: u8) -> u8 {
    calculate_luma(r, g, b).clamp(0.0, 255.0).round() as u8
}
