//! Tensor edge detection.
//!
//! Converts an image to a luminance plane, convolves it with the
//! normalized 8-neighbour Laplacian ([`EDGE_KERNEL_NORMALIZED`]), min-max
//! normalizes the response, lifts the background to
//! [`EDGE_BACKGROUND_FLOOR`] and returns a grayscale-as-RGB image.
//!
//! ## Supported Formats
//!
//! The array entry point accepts images with 1, 3, or 4 channels:
//! - **Grayscale**: (height, width, 1) - uses single channel directly
//! - **RGB**: (height, width, 3) - averages R, G and B
//! - **RGBA**: (height, width, 4) - averages R, G and B, ignores alpha
//!
//! Output is always (height, width, 3) with R=G=B.
//!
//! ## Orientation
//!
//! Every stage keeps (row, column) order, so the output needs no axis
//! permutation and non-square images come back in the input orientation.

use ndarray::{Array2, Array3, ArrayView3, Axis};

use super::core::{convolve_same, Padding};
use crate::codec::{self, OutputFormat};
use crate::error::FilterError;
use crate::kernels::{EDGE_BACKGROUND_FLOOR, EDGE_KERNEL_NORMALIZED};
use crate::tensor::EdgeResponse;

/// Collapse color channels to a single f32 plane by channel average.
pub fn luminance(input: ArrayView3<u8>) -> Array2<f32> {
    let channels = input.dim().2;
    let color_channels = if channels == 4 { 3 } else { channels };

    input.map_axis(Axis(2), |px| {
        let sum: f32 = px.iter().take(color_channels).map(|&v| v as f32).sum();
        sum / color_channels.max(1) as f32
    })
}

/// Run the edge detector on a decoded tensor.
///
/// # Arguments
/// * `input` - Image with 1, 3, or 4 channels (height, width, channels)
/// * `padding` - Border policy of the convolution
///
/// # Returns
/// (height, width, 3) edge map, every value in
/// `[EDGE_BACKGROUND_FLOOR * 255, 255]`
///
/// # Errors
/// [`FilterError::Numeric`] when the convolution response is flat.
pub fn detect_edges_array(input: ArrayView3<u8>, padding: Padding) -> Result<Array3<u8>, FilterError> {
    let plane = luminance(input);
    let response = EdgeResponse::new(convolve_same(plane.view(), &EDGE_KERNEL_NORMALIZED, padding));

    let bytes = response
        .normalize()?
        .with_floor(EDGE_BACKGROUND_FLOOR)
        .to_bytes();

    Ok(bytes.expand_channels())
}

/// Decode `buffer`, detect edges, and encode the result as PNG.
pub fn detect_edges(buffer: &[u8], padding: Padding) -> Result<Vec<u8>, FilterError> {
    let rgb = codec::decode_rgb(buffer)?;
    let edges = detect_edges_array(rgb.view(), padding)?;
    codec::encode(edges.view(), OutputFormat::Png)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checkerboard(height: usize, width: usize) -> Array3<u8> {
        Array3::from_shape_fn((height, width, 3), |(y, x, _)| if (y + x) % 2 == 0 { 0 } else { 255 })
    }

    #[test]
    fn test_luminance_averages_rgb() {
        let mut img = Array3::<u8>::zeros((1, 1, 4));
        img[[0, 0, 0]] = 30;
        img[[0, 0, 1]] = 60;
        img[[0, 0, 2]] = 90;
        img[[0, 0, 3]] = 255;

        let lum = luminance(img.view());
        assert_eq!(lum[[0, 0]], 60.0);
    }

    #[test]
    fn test_checkerboard_2x2_range() {
        for padding in [Padding::Zero, Padding::Replicate] {
            let result = detect_edges_array(checkerboard(2, 2).view(), padding).unwrap();

            assert_eq!(result.dim(), (2, 2, 3));
            assert!(result.iter().all(|&v| v >= 51));
            assert!(result.iter().any(|&v| v == 51));
            assert!(result.iter().any(|&v| v == 255));
            // White cells respond high, black cells low
            assert_eq!(result[[0, 1, 0]], 255);
            assert_eq!(result[[0, 0, 0]], 51);
        }
    }

    #[test]
    fn test_uniform_color_is_numeric_error() {
        let img = Array3::<u8>::from_elem((4, 4, 3), 180);
        let err = detect_edges_array(img.view(), Padding::Replicate).unwrap_err();
        assert!(matches!(err, FilterError::Numeric { .. }));
    }

    #[test]
    fn test_uniform_color_with_zero_padding_has_border_response() {
        let img = Array3::<u8>::from_elem((4, 4, 3), 180);
        let result = detect_edges_array(img.view(), Padding::Zero).unwrap();

        // Interior is flat and lands on the floor; corners see the zero pad
        assert_eq!(result[[1, 1, 0]], 51);
        assert_eq!(result[[0, 0, 0]], 255);
    }

    #[test]
    fn test_black_image_with_zero_padding_is_numeric_error() {
        let img = Array3::<u8>::zeros((3, 5, 3));
        assert!(detect_edges_array(img.view(), Padding::Zero).is_err());
    }

    #[test]
    fn test_single_pixel_is_numeric_error() {
        let img = Array3::<u8>::from_elem((1, 1, 3), 90);
        for padding in [Padding::Zero, Padding::Replicate] {
            let err = detect_edges_array(img.view(), padding).unwrap_err();
            assert!(matches!(err, FilterError::Numeric { .. }));
        }
    }

    #[test]
    fn test_non_square_orientation_preserved() {
        // 3 rows x 5 columns, one bright pixel at row 0, column 4
        let mut img = Array3::<u8>::zeros((3, 5, 3));
        for c in 0..3 {
            img[[0, 4, c]] = 255;
        }

        let result = detect_edges_array(img.view(), Padding::Replicate).unwrap();

        assert_eq!(result.dim(), (3, 5, 3));
        assert_eq!(result[[0, 4, 0]], 255);
        // Far corner is untouched background
        assert_eq!(result[[2, 0, 0]], result[[2, 1, 0]]);
        let peak = result
            .indexed_iter()
            .max_by_key(|(_, v)| **v)
            .map(|((y, x, _), _)| (y, x));
        assert_eq!(peak, Some((0, 4)));
    }

    #[test]
    fn test_detect_edges_encodes_png() {
        let png = codec::encode(checkerboard(3, 4).view(), OutputFormat::Png).unwrap();
        let out = detect_edges(&png, Padding::Replicate).unwrap();

        assert_eq!(OutputFormat::detect(&out), OutputFormat::Png);
        let decoded = codec::decode(&out).unwrap();
        assert_eq!(decoded.dim(), (3, 4, 3));
    }

    #[test]
    fn test_detect_edges_rejects_garbage() {
        let err = detect_edges(&[0u8, 1, 2, 3], Padding::Replicate).unwrap_err();
        assert!(matches!(err, FilterError::Decode(_)));
    }
}
