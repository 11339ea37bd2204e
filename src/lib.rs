//! photofx
//!
//! Fixed-set photo filters over encoded images: grayscale, sepia, invert,
//! blur, sharpen, brightness/contrast, emboss and a tensor edge detector.
//! Python bindings via PyO3 and WASM bindings for JavaScript are available
//! behind the `python` and `wasm` features.
//!
//! ## Image Format
//! Decoded images are `ndarray` tensors of shape (height, width, channels):
//! - **RGB**: (height, width, 3) - 3 color channels
//! - **RGBA**: (height, width, 4) - 3 color channels + alpha
//!
//! All values are `u8` (0-255). The edge detector works in `f32`
//! internally; see [`tensor`] for its typed stages.
//!
//! ## Usage
//! ```no_run
//! let input = std::fs::read("photo.png").unwrap();
//! let output = photofx::run(&input, "edges", None, None).unwrap();
//! std::fs::write("edges.png", output).unwrap();
//! ```

pub mod codec;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod filters;
pub mod kernels;
pub mod pipeline;
pub mod request;
pub mod tensor;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use config::{Padding, PipelineConfig, UnknownFilterPolicy};
pub use error::{FilterError, FilterErrorKind};
pub use pipeline::{run, Pipeline};
pub use request::{FilterKind, FilterRequest, Selector, UploadFields};

// Python bindings (only when python feature is enabled)
#[cfg(feature = "python")]
mod python {
    use numpy::{IntoPyArray, PyArray3, PyReadonlyArray3};
    use pyo3::exceptions::{PyRuntimeError, PyValueError};
    use pyo3::prelude::*;
    use pyo3::types::PyBytes;

    use crate::config::{Padding, PipelineConfig, UnknownFilterPolicy};
    use crate::error::{FilterError, FilterErrorKind};
    use crate::filters::edge;
    use crate::pipeline::Pipeline;

    fn to_py_err(err: FilterError) -> PyErr {
        match err.kind() {
            FilterErrorKind::Decode | FilterErrorKind::UnknownFilter => PyValueError::new_err(err.to_string()),
            FilterErrorKind::Numeric | FilterErrorKind::Encode => PyRuntimeError::new_err(err.to_string()),
        }
    }

    /// Apply a filter to encoded image bytes and return the encoded result.
    ///
    /// Unknown filters return the input unchanged unless `strict` is set.
    #[pyfunction]
    #[pyo3(signature = (image, process_type="grayscale", brightness=None, contrast=None, strict=false))]
    pub fn apply_filter<'py>(
        py: Python<'py>,
        image: &[u8],
        process_type: &str,
        brightness: Option<f32>,
        contrast: Option<f32>,
        strict: bool,
    ) -> PyResult<Bound<'py, PyBytes>> {
        let config = PipelineConfig {
            unknown_filter: if strict { UnknownFilterPolicy::Reject } else { UnknownFilterPolicy::Passthrough },
            ..PipelineConfig::default()
        };
        let output = Pipeline::new(config)
            .run(image, process_type, brightness, contrast)
            .map_err(to_py_err)?;
        Ok(PyBytes::new(py, &output))
    }

    /// Edge-detect an (H, W, C) uint8 array, returning (H, W, 3) uint8.
    #[pyfunction]
    #[pyo3(signature = (image, zero_padding=false))]
    pub fn detect_edges<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
        zero_padding: bool,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        let padding = if zero_padding { Padding::Zero } else { Padding::Replicate };
        let result = edge::detect_edges_array(image.as_array(), padding).map_err(to_py_err)?;
        Ok(result.into_pyarray(py))
    }

    /// photofx Rust extension module
    #[pymodule]
    pub fn photofx(m: &Bound<'_, PyModule>) -> PyResult<()> {
        m.add_function(wrap_pyfunction!(apply_filter, m)?)?;
        m.add_function(wrap_pyfunction!(detect_edges, m)?)?;
        Ok(())
    }
}

#[cfg(feature = "python")]
pub use python::photofx;
