//! Grayscale conversion filter.
//!
//! Uses ITU-R BT.709 luminosity coefficients. Output keeps the input
//! channel count with R=G=B=luminosity; alpha is preserved.

use ndarray::{Array3, ArrayView3};

/// ITU-R BT.709 luminosity coefficients
pub const LUMA_R: f32 = 0.2126;
pub const LUMA_G: f32 = 0.7152;
pub const LUMA_B: f32 = 0.0722;

/// BT.709 luminosity of one RGB pixel, 0-255 scale.
#[inline]
pub fn luma(r: u8, g: u8, b: u8) -> f32 {
    LUMA_R * r as f32 + LUMA_G * g as f32 + LUMA_B * b as f32
}

/// Desaturate an image (luminosity method).
///
/// # Arguments
/// * `input` - Image with 1, 3, or 4 channels (height, width, channels)
///
/// # Returns
/// Image with the same channel count, every color channel set to the
/// pixel's luminosity. Single-channel input is returned as a copy.
pub fn grayscale_u8(input: ArrayView3<u8>) -> Array3<u8> {
    let (height, width, channels) = input.dim();
    if channels < 3 {
        return input.to_owned();
    }

    let mut output = Array3::<u8>::zeros((height, width, channels));

    for y in 0..height {
        for x in 0..width {
            let gray = luma(input[[y, x, 0]], input[[y, x, 1]], input[[y, x, 2]])
                .round()
                .clamp(0.0, 255.0) as u8;

            output[[y, x, 0]] = gray;
            output[[y, x, 1]] = gray;
            output[[y, x, 2]] = gray;
            if channels == 4 {
                output[[y, x, 3]] = input[[y, x, 3]];
            }
        }
    }

    output
}
