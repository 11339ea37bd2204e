//! Convolution kernels and fixed filter parameters.
//!
//! Everything here is a compile-time constant shared by reference across
//! every invocation of the pipeline.

/// 3x3 convolution weights, indexed `[row][col]`.
pub type Kernel3 = [[f32; 3]; 3];

// ============================================================================
// Kernels
// ============================================================================

/// Laplacian-style edge kernel. Zero-sum, divide by [`EDGE_KERNEL_SCALE`] before use.
pub const EDGE_KERNEL: Kernel3 = [
    [-1.0, -1.0, -1.0],
    [-1.0, 8.0, -1.0],
    [-1.0, -1.0, -1.0],
];

/// Divisor applied to [`EDGE_KERNEL`].
pub const EDGE_KERNEL_SCALE: f32 = 8.0;

/// [`EDGE_KERNEL`] divided by [`EDGE_KERNEL_SCALE`].
pub const EDGE_KERNEL_NORMALIZED: Kernel3 = scale_kernel(&EDGE_KERNEL, EDGE_KERNEL_SCALE);

/// Emboss kernel, applied as-is (no normalization).
pub const EMBOSS_KERNEL: Kernel3 = [
    [-2.0, -1.0, 0.0],
    [-1.0, 1.0, 1.0],
    [0.0, 1.0, 2.0],
];

const fn scale_kernel(kernel: &Kernel3, divisor: f32) -> Kernel3 {
    let mut out = [[0.0f32; 3]; 3];
    let mut row = 0;
    while row < 3 {
        let mut col = 0;
        while col < 3 {
            out[row][col] = kernel[row][col] / divisor;
            col += 1;
        }
        row += 1;
    }
    out
}

// ============================================================================
// Parameter defaults
// ============================================================================

pub const DEFAULT_BRIGHTNESS: f32 = 1.0;
pub const DEFAULT_CONTRAST: f32 = 1.0;

/// Brightness and contrast factors are clamped to `[FACTOR_MIN, FACTOR_MAX]`.
pub const FACTOR_MIN: f32 = 0.0;
pub const FACTOR_MAX: f32 = 2.0;

pub const SEPIA_SATURATION: f32 = 0.5;
pub const SEPIA_HUE_DEGREES: f32 = 90.0;

/// Gaussian sigma of the `blur` filter.
pub const BLUR_SIGMA: f32 = 5.0;

/// Unsharp mask parameters of the `sharpen` filter.
pub const SHARPEN_SIGMA: f32 = 1.0;
pub const SHARPEN_AMOUNT: f32 = 1.0;

/// Lowest output level of a normalized edge map, keeps flat regions visible.
pub const EDGE_BACKGROUND_FLOOR: f32 = 0.2;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_kernel_is_zero_sum() {
        let sum: f32 = EDGE_KERNEL.iter().flatten().sum();
        assert_eq!(sum, 0.0);
    }

    #[test]
    fn test_normalized_edge_kernel_center_is_one() {
        assert_eq!(EDGE_KERNEL_NORMALIZED[1][1], 1.0);
        assert_eq!(EDGE_KERNEL_NORMALIZED[0][0], -0.125);
        let sum: f32 = EDGE_KERNEL_NORMALIZED.iter().flatten().sum();
        assert!(sum.abs() < 1e-6);
    }

    #[test]
    fn test_emboss_kernel_unscaled() {
        let sum: f32 = EMBOSS_KERNEL.iter().flatten().sum();
        assert_eq!(sum, 1.0);
    }
}
