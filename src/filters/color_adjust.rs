//! Color adjustment filters: Brightness/Contrast, Invert.
//!
//! These are pixel-wise operations that don't require spatial context.
//!
//! ## Supported Formats
//!
//! All filters accept images with 1, 3, or 4 channels:
//! - **Grayscale**: (height, width, 1) - single luminance channel
//! - **RGB**: (height, width, 3) - red, green, blue
//! - **RGBA**: (height, width, 4) - red, green, blue, alpha
//!
//! Channel count is inferred from the input array dimensions.
//! Alpha channel (if present) is always preserved unchanged.

use ndarray::{Array3, ArrayView3};

use crate::kernels::{FACTOR_MAX, FACTOR_MIN};

/// Midpoint contrast pivots around.
const CONTRAST_PIVOT: f32 = 128.0;

// ============================================================================
// Brightness / Contrast
// ============================================================================

/// Clamp a brightness or contrast factor into `[FACTOR_MIN, FACTOR_MAX]`.
#[inline]
pub fn clamp_factor(factor: f32) -> f32 {
    factor.clamp(FACTOR_MIN, FACTOR_MAX)
}

/// Multiply brightness, then scale contrast around mid-gray.
///
/// `v' = (v * brightness - 128) * contrast + 128`
///
/// # Arguments
/// * `input` - Image with 1, 3, or 4 channels (height, width, channels)
/// * `brightness` - Multiplier, clamped to 0.0-2.0 (1.0 = no change)
/// * `contrast` - Multiplier, clamped to 0.0-2.0 (1.0 = no change)
///
/// # Returns
/// Adjusted image with same channel count
pub fn brightness_contrast_u8(input: ArrayView3<u8>, brightness: f32, contrast: f32) -> Array3<u8> {
    let (height, width, channels) = input.dim();
    let mut output = Array3::<u8>::zeros((height, width, channels));

    let brightness = clamp_factor(brightness);
    let contrast = clamp_factor(contrast);

    // Determine how many color channels to process (exclude alpha if present)
    let color_channels = if channels == 4 { 3 } else { channels };

    for y in 0..height {
        for x in 0..width {
            for c in 0..color_channels {
                let v = input[[y, x, c]] as f32 * brightness;
                let adjusted = (v - CONTRAST_PIVOT) * contrast + CONTRAST_PIVOT;
                output[[y, x, c]] = adjusted.round().clamp(0.0, 255.0) as u8;
            }
            if channels == 4 {
                output[[y, x, 3]] = input[[y, x, 3]];
            }
        }
    }
    output
}

// ============================================================================
// Invert
// ============================================================================

/// Invert image colors.
///
/// # Arguments
/// * `input` - Image with 1, 3, or 4 channels (height, width, channels)
///
/// # Returns
/// Color-inverted image (alpha preserved if present)
pub fn invert_u8(input: ArrayView3<u8>) -> Array3<u8> {
    let (height, width, channels) = input.dim();
    let mut output = Array3::<u8>::zeros((height, width, channels));

    let color_channels = if channels == 4 { 3 } else { channels };

    for y in 0..height {
        for x in 0..width {
            for c in 0..color_channels {
                output[[y, x, c]] = 255 - input[[y, x, c]];
            }
            if channels == 4 {
                output[[y, x, 3]] = input[[y, x, 3]];
            }
        }
    }
    output
}
