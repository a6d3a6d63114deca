//! Single-channel floating point working buffers.
//!
//! Effects split an image into planes, filter them in `f32` and only round
//! back to `u8` once at the end, so intermediate results never wrap or lose
//! precision between pipeline stages.

use super::Kernel;
use crate::luminance::calculate_luma;
use crate::raster::{clamp_u8, CHANNELS};
use crate::RasterImage;

/// A width x height grid of `f32` samples in row-major order.
#[derive(Debug, Clone, PartialEq)]
pub struct Plane {
    pub width: usize,
    pub height: usize,
    pub data: Vec<f32>,
}

impl Plane {
    /// Extract one channel (0 = R, 1 = G, 2 = B).
    pub fn from_channel(image: &RasterImage, channel: usize) -> Self {
        Self {
            width: image.width as usize,
            height: image.height as usize,
            data: image
                .pixels
                .chunks_exact(CHANNELS)
                .map(|px| px[channel] as f32)
                .collect(),
        }
    }

    /// Extract all three channels.
    pub fn split(image: &RasterImage) -> [Plane; 3] {
        [
            Self::from_channel(image, 0),
            Self::from_channel(image, 1),
            Self::from_channel(image, 2),
        ]
    }

    /// BT.601 luma, rounded to whole sample values.
    pub fn luma(image: &RasterImage) -> Self {
        Self {
            width: image.width as usize,
            height: image.height as usize,
            data: image
                .pixels
                .chunks_exact(CHANNELS)
                .map(|px| calculate_luma(px[0], px[1], px[2]).round())
                .collect(),
        }
    }

    /// Sample at (x, y) with border replication for out-of-bounds coordinates.
    #[inline]
    pub fn get_clamped(&self, x: isize, y: isize) -> f32 {
        let cx = x.clamp(0, self.width as isize - 1) as usize;
        let cy = y.clamp(0, self.height as isize - 1) as usize;
        self.data[cy * self.width + cx]
    }

    /// Apply a 2D kernel with border replication.
    pub fn convolve(&self, kernel: &Kernel) -> Plane {
        let r = kernel.radius() as isize;
        let mut out = Vec::with_capacity(self.data.len());

        for y in 0..self.height as isize {
            for x in 0..self.width as isize {
                let mut acc = 0.0;
                for ky in 0..kernel.size() {
                    for kx in 0..kernel.size() {
                        let sx = x + kx as isize - r;
                        let sy = y + ky as isize - r;
                        acc += kernel.get(kx, ky) * self.get_clamped(sx, sy);
                    }
                }
                out.push(acc);
            }
        }

        self.with_data(out)
    }

    /// Apply the same 1D kernel horizontally then vertically, with border
    /// replication. Equivalent to convolving with the outer product of
    /// `weights` with itself.
    pub fn convolve_separable(&self, weights: &[f32]) -> Plane {
        let r = (weights.len() / 2) as isize;
        let (w, h) = (self.width as isize, self.height as isize);

        let mut horizontal = Vec::with_capacity(self.data.len());
        for y in 0..h {
            for x in 0..w {
                let acc: f32 = weights
                    .iter()
                    .enumerate()
                    .map(|(i, wt)| wt * self.get_clamped(x + i as isize - r, y))
                    .sum();
                horizontal.push(acc);
            }
        }
        let horizontal = self.with_data(horizontal);

        let mut vertical = Vec::with_capacity(self.data.len());
        for y in 0..h {
            for x in 0..w {
                let acc: f32 = weights
                    .iter()
                    .enumerate()
                    .map(|(i, wt)| wt * horizontal.get_clamped(x, y + i as isize - r))
                    .sum();
                vertical.push(acc);
            }
        }
        self.with_data(vertical)
    }

    /// Apply a function to every sample.
    pub fn map(&self, f: impl Fn(f32) -> f32) -> Plane {
        self.with_data(self.data.iter().map(|&v| f(v)).collect())
    }

    fn with_data(&self, data: Vec<f32>) -> Plane {
        Plane {
            width: self.width,
            height: self.height,
            data,
        }
    }

    /// Round and clamp into an image with the plane replicated on all channels.
    pub fn to_gray_image(&self) -> RasterImage {
        let mut pixels = Vec::with_capacity(self.data.len() * CHANNELS);
        for &v in &self.data {
            let s = clamp_u8(v);
            pixels.extend_from_slice(&[s, s, s]);
        }
        RasterImage {
            width: self.width as u32,
            height: self.height as u32,
            pixels,
        }
    }
}

/// Round, clamp and interleave three planes into an image.
pub fn merge(planes: &[Plane; 3]) -> RasterImage {
    let [r, g, b] = planes;
    let mut pixels = Vec::with_capacity(r.data.len() * CHANNELS);
    for i in 0..r.data.len() {
        pixels.push(clamp_u8(r.data[i]));
        pixels.push(clamp_u8(g.data[i]));
        pixels.push(clamp_u8(b.data[i]));
    }
    RasterImage {
        width: r.width as u32,
        height: r.height as u32,
        pixels,
    }
}
