//! Typed stages of the edge-detection tensor.
//!
//! The edge path moves through three representations, each a distinct type
//! so the float/integer switch happens in exactly one place:
//!
//! | Stage | Type | Values |
//! |-------|------|--------|
//! | Convolution output | [`EdgeResponse`] | `f32`, any range |
//! | Min-max normalized | [`NormalizedMap`] | `f32`, within [0, 1] |
//! | Display levels | [`ByteMap`] | `u8`, 0-255 |
//!
//! All three are (height, width) planes in row-major order.

use ndarray::{Array2, Array3, ArrayView2};

use crate::error::FilterError;

/// Raw convolution output.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeResponse(Array2<f32>);

impl EdgeResponse {
    pub fn new(values: Array2<f32>) -> Self {
        Self(values)
    }

    pub fn values(&self) -> ArrayView2<'_, f32> {
        self.0.view()
    }

    /// Min-max normalize into [0, 1].
    ///
    /// Fails with [`FilterError::Numeric`] when the plane has no dynamic
    /// range: max equals min, or the plane is empty.
    pub fn normalize(self) -> Result<NormalizedMap, FilterError> {
        let (min, max) = self
            .0
            .iter()
            .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));

        // Also rejects the empty plane, where min > max
        if !(max > min) {
            return Err(FilterError::Numeric { min, max });
        }

        let range = max - min;
        Ok(NormalizedMap(self.0.mapv_into(|v| (v - min) / range)))
    }
}

/// Plane with every value in [0, 1].
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedMap(Array2<f32>);

impl NormalizedMap {
    pub fn values(&self) -> ArrayView2<'_, f32> {
        self.0.view()
    }

    /// Compress into `[floor, 1]` via `n * (1 - floor) + floor`.
    pub fn with_floor(self, floor: f32) -> Self {
        let floor = floor.clamp(0.0, 1.0);
        let scale = 1.0 - floor;
        Self(self.0.mapv_into(|n| n * scale + floor))
    }

    /// Rescale to 8-bit: x255, clamp, truncate.
    pub fn to_bytes(&self) -> ByteMap {
        ByteMap(self.0.mapv(|n| (n * 255.0).clamp(0.0, 255.0) as u8))
    }
}

/// 8-bit single-channel plane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ByteMap(Array2<u8>);

impl ByteMap {
    pub fn values(&self) -> ArrayView2<'_, u8> {
        self.0.view()
    }

    /// Replicate the plane into a (height, width, 3) RGB tensor.
    ///
    /// Layout stays (row, column) so the result encodes with the same
    /// orientation as the decoded input.
    pub fn expand_channels(&self) -> Array3<u8> {
        let (height, width) = self.0.dim();
        Array3::from_shape_fn((height, width, 3), |(y, x, _)| self.0[[y, x]])
    }
}
