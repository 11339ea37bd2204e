//! Unsharp mask sharpening.
//!
//! ## Supported Formats
//!
//! All filters accept images with 1, 3, or 4 channels:
//! - **Grayscale**: (height, width, 1) - processes the single channel
//! - **RGB**: (height, width, 3) - processes all 3 channels
//! - **RGBA**: (height, width, 4) - processes RGB, alpha preserved

use ndarray::{Array3, ArrayView3};

use super::blur::gaussian_blur_f32;

/// Apply unsharp mask.
///
/// Sharpens by adding back the difference between the image and a blurred
/// copy of itself.
///
/// # Arguments
/// * `input` - Image with 1, 3, or 4 channels (height, width, channels)
/// * `amount` - Sharpening amount (1.0 = 100%)
/// * `radius` - Blur radius for the mask (sigma)
/// * `threshold` - Minimum difference to sharpen (0-255), prevents noise amplification
///
/// # Returns
/// Sharpened image with same channel count
pub fn unsharp_mask_u8(input: ArrayView3<u8>, amount: f32, radius: f32, threshold: u8) -> Array3<u8> {
    let (height, width, channels) = input.dim();
    let mut output = Array3::<u8>::zeros((height, width, channels));

    let blurred = gaussian_blur_f32(input, radius);

    let color_channels = if channels == 4 { 3 } else { channels };

    for y in 0..height {
        for x in 0..width {
            for c in 0..color_channels {
                let orig = input[[y, x, c]] as f32;
                let diff = orig - blurred[[y, x, c]];

                // Only sharpen if difference exceeds threshold
                let sharpened = if diff.abs() > threshold as f32 {
                    orig + diff * amount
                } else {
                    orig
                };

                output[[y, x, c]] = sharpened.round().clamp(0.0, 255.0) as u8;
            }
            if channels == 4 {
                output[[y, x, 3]] = input[[y, x, 3]];
            }
        }
    }

    output
}
