//! Entry point for callers holding an encoded image.
//!
//! A [`Pipeline`] carries only its [`PipelineConfig`]; it is `Copy`, holds
//! no state between calls and can be shared across threads freely. File
//! handling, HTTP and temp-file cleanup stay with the caller.

use tracing::instrument;

use crate::config::PipelineConfig;
use crate::dispatch::apply_filter;
use crate::error::FilterError;
use crate::request::{FilterRequest, UploadFields};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pipeline {
    config: PipelineConfig,
}

impl Pipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Apply a prepared request.
    #[instrument(level = "debug", skip_all, fields(selector = %request.selector(), bytes = buffer.len()))]
    pub fn process(&self, buffer: &[u8], request: &FilterRequest) -> Result<Vec<u8>, FilterError> {
        apply_filter(buffer, request, &self.config)
    }

    /// Apply `selector` with optional brightness and contrast.
    ///
    /// Absent or non-finite factors become 1.0; finite ones are clamped to
    /// [0, 2].
    pub fn run(
        &self,
        buffer: &[u8],
        selector: &str,
        brightness: Option<f32>,
        contrast: Option<f32>,
    ) -> Result<Vec<u8>, FilterError> {
        self.process(buffer, &FilterRequest::new(selector, brightness, contrast))
    }

    /// Apply the filter described by an upload's form fields.
    pub fn process_upload(&self, buffer: &[u8], fields: UploadFields) -> Result<Vec<u8>, FilterError> {
        self.process(buffer, &FilterRequest::from(fields))
    }
}

/// Run with [`PipelineConfig::default`].
pub fn run(
    buffer: &[u8],
    selector: &str,
    brightness: Option<f32>,
    contrast: Option<f32>,
) -> Result<Vec<u8>, FilterError> {
    Pipeline::default().run(buffer, selector, brightness, contrast)
}
