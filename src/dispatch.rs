//! Routes a [`FilterRequest`] to its filter.
//!
//! | selector | operation |
//! |----------|-----------|
//! | grayscale | BT.709 desaturation |
//! | sepia | saturation x0.5, hue +90 deg |
//! | invert | `255 - v` |
//! | blur | Gaussian, sigma 5 |
//! | sharpen | unsharp mask |
//! | brightness | brightness/contrast multiply |
//! | edges | tensor edge detector, PNG output |
//! | emboss | [`EMBOSS_KERNEL`](crate::kernels::EMBOSS_KERNEL) convolution |
//!
//! Unrecognized selectors follow [`UnknownFilterPolicy`].

use ndarray::{Array3, ArrayView3};

use crate::codec::{self, OutputFormat};
use crate::config::{PipelineConfig, UnknownFilterPolicy};
use crate::error::FilterError;
use crate::filters::{blur, color_adjust, color_science, edge, grayscale, sharpen, stylize};
use crate::kernels::{BLUR_SIGMA, SEPIA_HUE_DEGREES, SEPIA_SATURATION, SHARPEN_AMOUNT, SHARPEN_SIGMA};
use crate::request::{FilterKind, FilterRequest, Selector};

/// Apply a known filter to a decoded tensor.
///
/// `edges` returns (H, W, 3) regardless of the input channel count; every
/// other filter keeps the input shape.
pub fn apply_array(
    input: ArrayView3<u8>,
    kind: FilterKind,
    request: &FilterRequest,
    config: &PipelineConfig,
) -> Result<Array3<u8>, FilterError> {
    let output = match kind {
        FilterKind::Grayscale => grayscale::grayscale_u8(input),
        FilterKind::Sepia => color_science::modulate_u8(input, SEPIA_SATURATION, SEPIA_HUE_DEGREES),
        FilterKind::Invert => color_adjust::invert_u8(input),
        FilterKind::Blur => blur::gaussian_blur_u8(input, BLUR_SIGMA),
        FilterKind::Sharpen => sharpen::unsharp_mask_u8(input, SHARPEN_AMOUNT, SHARPEN_SIGMA, 0),
        FilterKind::Brightness => {
            color_adjust::brightness_contrast_u8(input, request.brightness(), request.contrast())
        }
        FilterKind::Emboss => stylize::emboss_u8(input),
        FilterKind::Edges => edge::detect_edges_array(input, config.edge_padding)?,
    };
    Ok(output)
}

/// Apply the requested filter to an encoded image.
///
/// Canned filters re-encode in the input container (PNG or JPEG, anything
/// else becomes PNG). `edges` always encodes PNG. The input is never
/// modified; an unknown selector under
/// [`UnknownFilterPolicy::Passthrough`] returns a copy of it.
pub fn apply_filter(
    buffer: &[u8],
    request: &FilterRequest,
    config: &PipelineConfig,
) -> Result<Vec<u8>, FilterError> {
    let kind = match request.selector() {
        Selector::Known(kind) => *kind,
        Selector::Unknown(name) => {
            return match config.unknown_filter {
                UnknownFilterPolicy::Passthrough => {
                    tracing::warn!(selector = %name, "unknown filter, returning input unchanged");
                    Ok(buffer.to_vec())
                }
                UnknownFilterPolicy::Reject => Err(FilterError::UnknownFilter(name.clone())),
            };
        }
    };

    if kind == FilterKind::Edges {
        tracing::debug!(filter = %kind, padding = ?config.edge_padding, "detecting edges");
        return edge::detect_edges(buffer, config.edge_padding);
    }

    let format = OutputFormat::detect(buffer);
    let image = codec::decode(buffer)?;
    let (height, width, channels) = image.dim();
    tracing::debug!(
        filter = %kind,
        height,
        width,
        channels,
        brightness = request.brightness(),
        contrast = request.contrast(),
        "applying filter"
    );

    let output = apply_array(image.view(), kind, request, config)?;
    codec::encode(output.view(), format)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn png(image: &Array3<u8>) -> Vec<u8> {
        codec::encode(image.view(), OutputFormat::Png).unwrap()
    }

    fn gradient(height: usize, width: usize) -> Array3<u8> {
        Array3::from_shape_fn((height, width, 3), |(y, x, c)| (y * 30 + x * 20 + c * 5) as u8)
    }

    #[test]
    fn test_every_filter_preserves_size() {
        let input = png(&gradient(5, 7));
        let config = PipelineConfig::default();

        for kind in FilterKind::ALL {
            let out = apply_filter(&input, &FilterRequest::for_kind(kind), &config).unwrap();
            let decoded = codec::decode(&out).unwrap();
            assert_eq!(decoded.dim().0, 5, "{kind}");
            assert_eq!(decoded.dim().1, 7, "{kind}");
        }
    }

    #[test]
    fn test_unknown_passthrough_is_byte_identical() {
        let input = png(&gradient(2, 2));
        let request = FilterRequest::new("unknown_filter_xyz", None, None);

        let out = apply_filter(&input, &request, &PipelineConfig::default()).unwrap();
        assert_eq!(out, input);
    }

    #[test]
    fn test_unknown_passthrough_skips_decoding() {
        let garbage = b"not an image".to_vec();
        let request = FilterRequest::new("nope", None, None);

        let out = apply_filter(&garbage, &request, &PipelineConfig::default()).unwrap();
        assert_eq!(out, garbage);
    }

    #[test]
    fn test_unknown_rejected_when_strict() {
        let input = png(&gradient(2, 2));
        let request = FilterRequest::new("vignette", None, None);

        let err = apply_filter(&input, &request, &PipelineConfig::strict()).unwrap_err();
        assert_eq!(err, FilterError::UnknownFilter("vignette".into()));
    }

    #[test]
    fn test_decode_error_propagates() {
        let request = FilterRequest::for_kind(FilterKind::Blur);
        let err = apply_filter(b"garbage", &request, &PipelineConfig::default()).unwrap_err();
        assert!(matches!(err, FilterError::Decode(_)));
    }

    #[test]
    fn test_edges_on_rgba_array_gives_three_channels() {
        let input = Array3::from_shape_fn((3, 4, 4), |(y, x, c)| if c == 3 { 255 } else { (y * 50 + x * 30) as u8 });
        let request = FilterRequest::for_kind(FilterKind::Edges);

        let out = apply_array(input.view(), FilterKind::Edges, &request, &PipelineConfig::default()).unwrap();
        assert_eq!(out.dim(), (3, 4, 3));
    }

    #[test]
    fn test_jpeg_input_stays_jpeg() {
        let jpeg = codec::encode(gradient(8, 8).view(), OutputFormat::Jpeg).unwrap();
        let out = apply_filter(&jpeg, &FilterRequest::for_kind(FilterKind::Invert), &PipelineConfig::default())
            .unwrap();
        assert_eq!(OutputFormat::detect(&out), OutputFormat::Jpeg);
    }
}
