//! Square convolution kernels.

use crate::{FilterError, FilterResult};

/// A square, odd-sized 2D convolution kernel.
///
/// The kernel is centered on its middle element and stored in row-major
/// order. Coefficients are applied as a correlation (no flip).
#[derive(Debug, Clone, PartialEq)]
pub struct Kernel {
    size: usize,
    data: Vec<f32>,
}

impl Kernel {
    /// Create a kernel from row-major coefficients.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` if `size` is even or zero, or if `data` does not
    /// hold `size * size` values.
    pub fn new(size: usize, data: Vec<f32>) -> FilterResult<Self> {
        check_odd_size("kernel_size", size)?;
        if data.len() != size * size {
            return Err(FilterError::invalid(
                "kernel_data",
                format!("expected {} coefficients, got {}", size * size, data.len()),
            ));
        }
        Ok(Self { size, data })
    }

    /// A normalized averaging kernel (every value `1 / size²`).
    pub fn box_kernel(size: usize) -> FilterResult<Self> {
        check_odd_size("kernel_size", size)?;
        let value = 1.0 / (size * size) as f32;
        Ok(Self {
            size,
            data: vec![value; size * size],
        })
    }

    /// A normalized Gaussian kernel with sigma derived from its size.
    pub fn gaussian(size: usize) -> FilterResult<Self> {
        let row = gaussian_weights(size)?;
        let mut data = Vec::with_capacity(size * size);
        for wy in &row {
            for wx in &row {
                data.push(wy * wx);
            }
        }
        Ok(Self { size, data })
    }

    /// High-pass sharpening kernel (center 9, neighbors -1).
    pub fn sharpen() -> Self {
        Self::fixed([[-1.0, -1.0, -1.0], [-1.0, 9.0, -1.0], [-1.0, -1.0, -1.0]])
    }

    /// Horizontal Sobel gradient.
    pub fn sobel_x() -> Self {
        Self::fixed([[-1.0, 0.0, 1.0], [-2.0, 0.0, 2.0], [-1.0, 0.0, 1.0]])
    }

    /// Vertical Sobel gradient.
    pub fn sobel_y() -> Self {
        Self::fixed([[-1.0, -2.0, -1.0], [0.0, 0.0, 0.0], [1.0, 2.0, 1.0]])
    }

    /// Zero-sum diagonal relief kernel. Flat regions map to 0.
    pub fn emboss() -> Self {
        Self::fixed([[-1.0, -1.0, 0.0], [-1.0, 0.0, 1.0], [0.0, 1.0, 1.0]])
    }

    fn fixed(rows: [[f32; 3]; 3]) -> Self {
        Self {
            size: 3,
            data: rows.iter().flatten().copied().collect(),
        }
    }

    /// Side length of the kernel.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Distance from the center to the edge.
    #[inline]
    pub fn radius(&self) -> usize {
        self.size / 2
    }

    /// Coefficient at (x, y) relative to the top-left corner.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> f32 {
        self.data[y * self.size + x]
    }

    /// Sum of all coefficients.
    pub fn sum(&self) -> f32 {
        self.data.iter().sum()
    }
}

/// One-dimensional normalized Gaussian weights for an odd window size.
///
/// Sigma follows the usual size-derived rule
/// `0.3 * ((size - 1) * 0.5 - 1) + 0.8`.
pub fn gaussian_weights(size: usize) -> FilterResult<Vec<f32>> {
    check_odd_size("kernel_size", size)?;
    let sigma = 0.3 * ((size as f32 - 1.0) * 0.5 - 1.0) + 0.8;
    let radius = (size / 2) as i32;
    let denom = 2.0 * sigma * sigma;

    let mut weights: Vec<f32> = (-radius..=radius)
        .map(|i| (-((i * i) as f32) / denom).exp())
        .collect();
    let total: f32 = weights.iter().sum();
    for w in &mut weights {
        *w /= total;
    }
    Ok(weights)
}

pub(crate) fn check_odd_size(name: &'static str, size: usize) -> FilterResult<()> {
    if size == 0 || size % 2 == 0 {
        return Err(FilterError::invalid(
            name,
            format!("must be a positive odd number, got {}", size),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_even_size() {
        assert!(matches!(
            Kernel::new(4, vec![0.0; 16]),
            Err(FilterError::InvalidParameter { .. })
        ));
        assert!(Kernel::new(0, vec![]).is_err());
    }

    #[test]
    fn test_new_rejects_wrong_length() {
        assert!(Kernel::new(3, vec![0.0; 8]).is_err());
        assert!(Kernel::new(3, vec![0.0; 9]).is_ok());
    }

    #[test]
    fn test_box_kernel_normalized() {
        let k = Kernel::box_kernel(5).unwrap();
        assert_eq!(k.size(), 5);
        assert_eq!(k.radius(), 2);
        assert!((k.sum() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_gaussian_normalized_and_peaked() {
        let k = Kernel::gaussian(7).unwrap();
        assert!((k.sum() - 1.0).abs() < 1e-5);
        assert!(k.get(3, 3) > k.get(0, 0));
        // Symmetric about the center
        assert!((k.get(0, 3) - k.get(6, 3)).abs() < 1e-7);
        assert!((k.get(3, 0) - k.get(3, 6)).abs() < 1e-7);
    }

    #[test]
    fn test_gaussian_weights_three() {
        // sigma = 0.8 for size 3
        let w = gaussian_weights(3).unwrap();
        assert_eq!(w.len(), 3);
        assert!((w.iter().sum::<f32>() - 1.0).abs() < 1e-6);
        assert!(w[1] > w[0]);
        assert!((w[0] - w[2]).abs() < 1e-7);
    }

    #[test]
    fn test_fixed_kernel_sums() {
        assert!((Kernel::sharpen().sum() - 1.0).abs() < f32::EPSILON);
        assert!(Kernel::sobel_x().sum().abs() < f32::EPSILON);
        assert!(Kernel::sobel_y().sum().abs() < f32::EPSILON);
        assert!(Kernel::emboss().sum().abs() < f32::EPSILON);
    }

    #[test]
    fn test_get_row_major() {
        let k = Kernel::sobel_x();
        assert_eq!(k.get(0, 1), -2.0);
        assert_eq!(k.get(2, 1), 2.0);
    }
}
