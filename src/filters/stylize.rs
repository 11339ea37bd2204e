//! Stylize filters: Emboss.
//!
//! ## Supported Formats
//!
//! Accepts images with 1, 3, or 4 channels. Each color channel is
//! convolved independently; alpha is preserved.

use ndarray::{Array3, ArrayView3, Axis};

use super::core::{convolve_same, Padding};
use crate::kernels::{Kernel3, EMBOSS_KERNEL};

/// Convolve every color channel with a 3x3 kernel and clamp to 0-255.
///
/// The kernel is applied as-is; no scale or offset. Borders replicate the
/// nearest edge pixel so the output keeps the input size.
pub fn convolve_channels_u8(input: ArrayView3<u8>, kernel: &Kernel3) -> Array3<u8> {
    let channels = input.dim().2;
    let mut output = input.to_owned();

    let color_channels = if channels == 4 { 3 } else { channels };

    for c in 0..color_channels {
        let plane = input.index_axis(Axis(2), c).mapv(|v| v as f32);
        let response = convolve_same(plane.view(), kernel, Padding::Replicate);
        output
            .index_axis_mut(Axis(2), c)
            .assign(&response.mapv(|v| v.round().clamp(0.0, 255.0) as u8));
    }

    output
}

/// Apply emboss with [`EMBOSS_KERNEL`].
///
/// # Arguments
/// * `input` - Image with 1, 3, or 4 channels (height, width, channels)
///
/// # Returns
/// Embossed image with same channel count
pub fn emboss_u8(input: ArrayView3<u8>) -> Array3<u8> {
    convolve_channels_u8(input, &EMBOSS_KERNEL)
}
