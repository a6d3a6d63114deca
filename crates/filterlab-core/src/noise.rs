//! Synthetic noise: Gaussian, salt-and-pepper and Poisson (shot) noise.
//!
//! The random source is injected. [`add_noise_with_rng`] accepts any
//! [`Rng`], and [`add_noise`] seeds a [`StdRng`] from an optional seed so
//! results are reproducible when a seed is given.

use std::fmt;
use std::str::FromStr;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal, Poisson};

use crate::raster::{clamp_u8, CHANNELS};
use crate::{FilterError, FilterResult, RasterImage};

/// Above this Poisson mean the shot noise rounds away to nothing.
const POISSON_MAX_LAMBDA: f64 = 1e9;

/// Noise model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoiseKind {
    /// Zero-mean normal noise on every sample.
    Gaussian,
    /// Random pixels forced to pure white or pure black.
    SaltPepper,
    /// Signal-dependent shot noise.
    Poisson,
}

impl NoiseKind {
    pub const ALL: [NoiseKind; 3] = [NoiseKind::Gaussian, NoiseKind::SaltPepper, NoiseKind::Poisson];

    pub fn as_str(self) -> &'static str {
        match self {
            NoiseKind::Gaussian => "gaussian",
            NoiseKind::SaltPepper => "salt_pepper",
            NoiseKind::Poisson => "poisson",
        }
    }

    /// Display name: each `_`-separated word capitalized.
    pub fn title(self) -> &'static str {
        match self {
            NoiseKind::Gaussian => "Gaussian",
            NoiseKind::SaltPepper => "Salt_Pepper",
            NoiseKind::Poisson => "Poisson",
        }
    }
}

impl fmt::Display for NoiseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NoiseKind {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NoiseKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| {
                FilterError::invalid(
                    "noise_type",
                    format!(
                        "expected one of gaussian, salt_pepper, poisson; got {:?}",
                        s
                    ),
                )
            })
    }
}

/// Add noise using a `StdRng` seeded from `seed`, or from the operating
/// system when `seed` is `None`.
pub fn add_noise(
    image: &RasterImage,
    kind: NoiseKind,
    intensity: f64,
    seed: Option<u64>,
) -> FilterResult<RasterImage> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    add_noise_with_rng(image, kind, intensity, &mut rng)
}

/// Add noise drawn from `rng`.
///
/// `intensity` is in (0, 1]:
/// - Gaussian: standard deviation is `intensity * 255`
/// - Salt-and-pepper: fraction of pixels replaced
/// - Poisson: samples are scaled by `1 / (10 * intensity)` before drawing,
///   so higher intensity means fewer virtual photons and more noise
///
/// # Errors
///
/// `InvalidParameter` if `intensity` is not finite or outside (0, 1].
pub fn add_noise_with_rng<R: Rng + ?Sized>(
    image: &RasterImage,
    kind: NoiseKind,
    intensity: f64,
    rng: &mut R,
) -> FilterResult<RasterImage> {
    image.validate()?;
    if !(intensity > 0.0 && intensity <= 1.0) {
        return Err(FilterError::invalid(
            "intensity",
            format!("must be in (0, 1], got {}", intensity),
        ));
    }

    log::debug!("adding {} noise at intensity {}", kind, intensity);
    match kind {
        NoiseKind::Gaussian => gaussian(image, intensity, rng),
        NoiseKind::SaltPepper => Ok(salt_pepper(image, intensity, rng)),
        NoiseKind::Poisson => poisson(image, intensity, rng),
    }
}

fn gaussian<R: Rng + ?Sized>(
    image: &RasterImage,
    intensity: f64,
    rng: &mut R,
) -> FilterResult<RasterImage> {
    let normal = Normal::new(0.0, intensity * 255.0)
        .map_err(|e| FilterError::invalid("intensity", e.to_string()))?;
    let pixels = image
        .pixels
        .iter()
        .map(|&v| clamp_u8((v as f64 + normal.sample(rng)) as f32))
        .collect();
    Ok(image.with_pixels(pixels))
}

fn salt_pepper<R: Rng + ?Sized>(image: &RasterImage, intensity: f64, rng: &mut R) -> RasterImage {
    let mut pixels = image.pixels.clone();
    for px in pixels.chunks_exact_mut(CHANNELS) {
        if rng.random::<f64>() < intensity {
            let v = if rng.random_bool(0.5) { 255 } else { 0 };
            px.fill(v);
        }
    }
    image.with_pixels(pixels)
}

fn poisson<R: Rng + ?Sized>(
    image: &RasterImage,
    intensity: f64,
    rng: &mut R,
) -> FilterResult<RasterImage> {
    let scale = 1.0 / (10.0 * intensity);

    // One distribution per sample value; index 0 stays black
    let mut dists: Vec<Option<Poisson<f64>>> = Vec::with_capacity(256);
    for v in 0..=255u32 {
        let lambda = v as f64 * scale;
        let dist = if v == 0 || lambda > POISSON_MAX_LAMBDA {
            None
        } else {
            Some(
                Poisson::new(lambda)
                    .map_err(|e| FilterError::invalid("intensity", e.to_string()))?,
            )
        };
        dists.push(dist);
    }

    let pixels = image
        .pixels
        .iter()
        .map(|&v| match &dists[v as usize] {
            Some(dist) => clamp_u8((dist.sample(rng) / scale) as f32),
            None => v,
        })
        .collect();
    Ok(image.with_pixels(pixels))
}
