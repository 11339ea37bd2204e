//! Gaussian blur.
//!
//! Separable 2-pass convolution with edge-replicate borders. Every channel,
//! alpha included, is blurred.

use ndarray::{Array3, ArrayView3};

use super::core::{clamp_index, gaussian_kernel_1d};

/// Gaussian blur in f32, before quantization.
///
/// Shared by [`gaussian_blur_u8`] and the unsharp mask, which needs the
/// unquantized blur to compute its difference image.
pub fn gaussian_blur_f32(input: ArrayView3<u8>, sigma: f32) -> Array3<f32> {
    let (height, width, channels) = input.dim();

    if sigma <= 0.0 || height == 0 || width == 0 {
        return input.mapv(|v| v as f32);
    }

    let kernel = gaussian_kernel_1d(sigma);
    let half = kernel.len() as isize / 2;

    let mut temp = Array3::<f32>::zeros((height, width, channels));
    let mut result = Array3::<f32>::zeros((height, width, channels));

    // Horizontal pass
    for y in 0..height {
        for x in 0..width {
            for c in 0..channels {
                let mut sum = 0.0f32;
                for (ki, &kv) in kernel.iter().enumerate() {
                    let sx = clamp_index(x as isize + ki as isize - half, width);
                    sum += input[[y, sx, c]] as f32 * kv;
                }
                temp[[y, x, c]] = sum;
            }
        }
    }

    // Vertical pass
    for y in 0..height {
        for x in 0..width {
            for c in 0..channels {
                let mut sum = 0.0f32;
                for (ki, &kv) in kernel.iter().enumerate() {
                    let sy = clamp_index(y as isize + ki as isize - half, height);
                    sum += temp[[sy, x, c]] * kv;
                }
                result[[y, x, c]] = sum;
            }
        }
    }

    result
}

/// Apply Gaussian blur.
///
/// # Arguments
/// * `input` - Image with 1, 3, or 4 channels (height, width, channels)
/// * `sigma` - Standard deviation of the Gaussian kernel
///
/// # Returns
/// Blurred image with same dimensions
pub fn gaussian_blur_u8(input: ArrayView3<u8>, sigma: f32) -> Array3<u8> {
    gaussian_blur_f32(input, sigma).mapv(|v| v.round().clamp(0.0, 255.0) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blur_uniform_is_stable() {
        let img = Array3::<u8>::from_elem((6, 9, 3), 120);
        let result = gaussian_blur_u8(img.view(), 5.0);
        assert_eq!(result, img);
    }

    #[test]
    fn test_blur_spreads_point() {
        let mut img = Array3::<u8>::zeros((11, 11, 1));
        img[[5, 5, 0]] = 255;

        let result = gaussian_blur_u8(img.view(), 1.0);

        assert!(result[[5, 5, 0]] < 255);
        assert!(result[[5, 6, 0]] > 0);
        assert!(result[[6, 5, 0]] > 0);
        assert_eq!(result[[5, 4, 0]], result[[5, 6, 0]]);
    }

    #[test]
    fn test_blur_zero_sigma_is_copy() {
        let img = Array3::from_shape_fn((3, 2, 4), |(y, x, c)| (y * 8 + x * 4 + c) as u8);
        assert_eq!(gaussian_blur_u8(img.view(), 0.0), img);
    }

    #[test]
    fn test_blur_keeps_size_on_tiny_image() {
        let img = Array3::<u8>::from_elem((1, 2, 3), 10);
        assert_eq!(gaussian_blur_u8(img.view(), 5.0).dim(), (1, 2, 3));
    }
}
