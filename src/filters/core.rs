//! Core utilities shared by the spatial filters:
//! - Gaussian kernel generation
//! - 3x3 "same" convolution with selectable border padding
//! - Border sampling helpers

use ndarray::{Array2, ArrayView2};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::kernels::Kernel3;

/// How a convolution samples pixels outside the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Padding {
    /// Out-of-bounds samples read as 0.
    Zero,
    /// Out-of-bounds samples read the nearest edge pixel.
    #[default]
    Replicate,
}

/// Generate a 1D Gaussian kernel.
///
/// # Arguments
/// * `sigma` - Standard deviation of the Gaussian
///
/// # Returns
/// Normalized 1D kernel as Vec<f32>
pub fn gaussian_kernel_1d(sigma: f32) -> Vec<f32> {
    if sigma <= 0.0 {
        return vec![1.0];
    }

    // Kernel size = 6 sigma (covers 99.7% of distribution), ensure odd
    let kernel_size = ((sigma * 6.0).ceil() as usize) | 1;
    let half = kernel_size / 2;

    let mut kernel: Vec<f32> = (0..kernel_size)
        .map(|i| {
            let x = i as f32 - half as f32;
            (-x * x / (2.0 * sigma * sigma)).exp()
        })
        .collect();

    let sum: f32 = kernel.iter().sum();
    for v in kernel.iter_mut() {
        *v /= sum;
    }

    kernel
}

/// Clamp a possibly out-of-range coordinate onto `[0, len - 1]`.
#[inline]
pub fn clamp_index(i: isize, len: usize) -> usize {
    i.clamp(0, len as isize - 1) as usize
}

#[inline]
fn sample(input: &ArrayView2<f32>, y: isize, x: isize, padding: Padding) -> f32 {
    let (height, width) = input.dim();
    match padding {
        Padding::Zero => {
            if y < 0 || x < 0 || y >= height as isize || x >= width as isize {
                0.0
            } else {
                input[[y as usize, x as usize]]
            }
        }
        Padding::Replicate => input[[clamp_index(y, height), clamp_index(x, width)]],
    }
}

/// Convolve a single-channel plane with a 3x3 kernel.
///
/// Output has the same (height, width) as the input. Rows are computed in
/// parallel.
///
/// # Arguments
/// * `input` - Plane of shape (height, width)
/// * `kernel` - Weights indexed `[ky][kx]`, centered on the output pixel
/// * `padding` - Border policy
pub fn convolve_same(input: ArrayView2<f32>, kernel: &Kernel3, padding: Padding) -> Array2<f32> {
    let (height, width) = input.dim();
    let mut output = Array2::<f32>::zeros((height, width));
    if width == 0 {
        return output;
    }

    // Freshly allocated, so always contiguous
    if let Some(buf) = output.as_slice_mut() {
        buf.par_chunks_mut(width).enumerate().for_each(|(y, row)| {
            for (x, out) in row.iter_mut().enumerate() {
                let mut sum = 0.0f32;
                for (ky, weights) in kernel.iter().enumerate() {
                    for (kx, &w) in weights.iter().enumerate() {
                        let py = y as isize + ky as isize - 1;
                        let px = x as isize + kx as isize - 1;
                        sum += sample(&input, py, px, padding) * w;
                    }
                }
                *out = sum;
            }
        });
    }

    output
}
