//! HSL modulation, used by the sepia filter.
//!
//! ## Supported Formats
//!
//! - **Grayscale (1 channel)**: No-op (color operations require RGB)
//! - **RGB (3 channels)**: Full color processing
//! - **RGBA (4 channels)**: RGB processed, alpha preserved

use ndarray::{Array3, ArrayView3};

// ============================================================================
// Color Space Conversion Utilities
// ============================================================================

/// Convert RGB to HSL.
/// Input: r, g, b in 0.0-1.0
/// Output: (h, s, l) where h is 0.0-360.0, s and l are 0.0-1.0
#[inline]
fn rgb_to_hsl(r: f32, g: f32, b: f32) -> (f32, f32, f32) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if (max - min).abs() < 1e-6 {
        return (0.0, 0.0, l);
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    let h = if (max - r).abs() < 1e-6 {
        let mut h = (g - b) / d;
        if g < b {
            h += 6.0;
        }
        h * 60.0
    } else if (max - g).abs() < 1e-6 {
        ((b - r) / d + 2.0) * 60.0
    } else {
        ((r - g) / d + 4.0) * 60.0
    };

    (h, s, l)
}

/// Convert HSL to RGB.
/// Input: h in 0.0-360.0, s and l in 0.0-1.0
/// Output: (r, g, b) in 0.0-1.0
#[inline]
fn hsl_to_rgb(h: f32, s: f32, l: f32) -> (f32, f32, f32) {
    if s.abs() < 1e-6 {
        return (l, l, l);
    }

    let q = if l < 0.5 {
        l * (1.0 + s)
    } else {
        l + s - l * s
    };
    let p = 2.0 * l - q;

    let h_norm = h / 360.0;

    fn hue_to_rgb(p: f32, q: f32, mut t: f32) -> f32 {
        if t < 0.0 { t += 1.0; }
        if t > 1.0 { t -= 1.0; }
        if t < 1.0 / 6.0 { return p + (q - p) * 6.0 * t; }
        if t < 0.5 { return q; }
        if t < 2.0 / 3.0 { return p + (q - p) * (2.0 / 3.0 - t) * 6.0; }
        p
    }

    let r = hue_to_rgb(p, q, h_norm + 1.0 / 3.0);
    let g = hue_to_rgb(p, q, h_norm);
    let b = hue_to_rgb(p, q, h_norm - 1.0 / 3.0);

    (r, g, b)
}

// ============================================================================
// Modulate
// ============================================================================

/// Scale saturation and rotate hue.
///
/// Lightness is left untouched. For grayscale input, returns a copy.
///
/// # Arguments
/// * `input` - Image with 1, 3, or 4 channels (height, width, channels)
/// * `saturation` - Saturation multiplier (1.0 = no change, 0.0 = gray)
/// * `hue_degrees` - Hue rotation in degrees (wraps around)
///
/// # Returns
/// Modulated image with same channel count
pub fn modulate_u8(input: ArrayView3<u8>, saturation: f32, hue_degrees: f32) -> Array3<u8> {
    let (height, width, channels) = input.dim();

    // Grayscale: no-op (no hue or saturation on a single channel)
    if channels < 3 {
        return input.to_owned();
    }

    let mut output = Array3::<u8>::zeros((height, width, channels));
    let saturation = saturation.max(0.0);

    for y in 0..height {
        for x in 0..width {
            let r = input[[y, x, 0]] as f32 / 255.0;
            let g = input[[y, x, 1]] as f32 / 255.0;
            let b = input[[y, x, 2]] as f32 / 255.0;

            let (h, s, l) = rgb_to_hsl(r, g, b);
            let new_h = (h + hue_degrees).rem_euclid(360.0);
            let new_s = (s * saturation).clamp(0.0, 1.0);
            let (nr, ng, nb) = hsl_to_rgb(new_h, new_s, l);

            output[[y, x, 0]] = (nr * 255.0).round().clamp(0.0, 255.0) as u8;
            output[[y, x, 1]] = (ng * 255.0).round().clamp(0.0, 255.0) as u8;
            output[[y, x, 2]] = (nb * 255.0).round().clamp(0.0, 255.0) as u8;

            if channels == 4 {
                output[[y, x, 3]] = input[[y, x, 3]];
            }
        }
    }
    output
}
