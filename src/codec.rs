//! Conversion between encoded container bytes and pixel tensors.
//!
//! Decoded tensors are laid out `(height, width, channels)`, row-major,
//! the same layout every filter in [`crate::filters`] expects.

use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{DynamicImage, GrayImage, ImageFormat, RgbImage, RgbaImage};
use ndarray::{Array3, ArrayView3};

use crate::error::FilterError;

/// JPEG quality used when re-encoding JPEG input.
pub const JPEG_QUALITY: u8 = 90;

/// Container written by the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Png,
    Jpeg,
}

impl OutputFormat {
    /// Format to re-encode `bytes` in. Anything that is not JPEG becomes PNG.
    pub fn detect(bytes: &[u8]) -> Self {
        match image::guess_format(bytes) {
            Ok(ImageFormat::Jpeg) => OutputFormat::Jpeg,
            _ => OutputFormat::Png,
        }
    }

    pub fn content_type(self) -> &'static str {
        match self {
            OutputFormat::Png => "image/png",
            OutputFormat::Jpeg => "image/jpeg",
        }
    }
}

/// MIME type of an encoded buffer, for the response header.
///
/// Covers passthrough output too, which may be any container.
pub fn content_type(bytes: &[u8]) -> &'static str {
    image::guess_format(bytes)
        .map(|format| format.to_mime_type())
        .unwrap_or("application/octet-stream")
}

fn load(bytes: &[u8]) -> Result<DynamicImage, FilterError> {
    image::load_from_memory(bytes).map_err(|e| FilterError::Decode(e.to_string()))
}

fn to_array(width: u32, height: u32, channels: usize, raw: Vec<u8>) -> Result<Array3<u8>, FilterError> {
    Array3::from_shape_vec((height as usize, width as usize, channels), raw)
        .map_err(|e| FilterError::Decode(e.to_string()))
}

/// Decode to an RGB tensor of shape (H, W, 3). Alpha is dropped.
pub fn decode_rgb(bytes: &[u8]) -> Result<Array3<u8>, FilterError> {
    let rgb = load(bytes)?.into_rgb8();
    let (width, height) = rgb.dimensions();
    to_array(width, height, 3, rgb.into_raw())
}

/// Decode to (H, W, 3), or (H, W, 4) when the source carries alpha.
pub fn decode(bytes: &[u8]) -> Result<Array3<u8>, FilterError> {
    let image = load(bytes)?;
    if image.color().has_alpha() {
        let rgba = image.into_rgba8();
        let (width, height) = rgba.dimensions();
        to_array(width, height, 4, rgba.into_raw())
    } else {
        let rgb = image.into_rgb8();
        let (width, height) = rgb.dimensions();
        to_array(width, height, 3, rgb.into_raw())
    }
}

/// Encode a (H, W, C) tensor with C in {1, 3, 4}.
///
/// JPEG has no alpha channel, so RGBA input is flattened to RGB first.
pub fn encode(image: ArrayView3<u8>, format: OutputFormat) -> Result<Vec<u8>, FilterError> {
    let (height, width, channels) = image.dim();
    let raw: Vec<u8> = image.iter().copied().collect();
    let (w, h) = (width as u32, height as u32);
    let size_error = || FilterError::Encode(format!("buffer does not match {width}x{height}x{channels}"));

    let dynamic = match channels {
        1 => DynamicImage::ImageLuma8(GrayImage::from_raw(w, h, raw).ok_or_else(size_error)?),
        3 => DynamicImage::ImageRgb8(RgbImage::from_raw(w, h, raw).ok_or_else(size_error)?),
        4 => DynamicImage::ImageRgba8(RgbaImage::from_raw(w, h, raw).ok_or_else(size_error)?),
        n => return Err(FilterError::Encode(format!("unsupported channel count {n}"))),
    };

    let mut out = Vec::new();
    let written = match format {
        OutputFormat::Png => dynamic.write_with_encoder(PngEncoder::new(&mut out)),
        OutputFormat::Jpeg => {
            let flat = if dynamic.color().has_alpha() {
                DynamicImage::ImageRgb8(dynamic.to_rgb8())
            } else {
                dynamic
            };
            flat.write_with_encoder(JpegEncoder::new_with_quality(&mut out, JPEG_QUALITY))
        }
    };
    written.map_err(|e| FilterError::Encode(e.to_string()))?;

    Ok(out)
}
