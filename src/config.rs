//! Pipeline configuration.

use serde::{Deserialize, Serialize};

pub use crate::filters::core::Padding;

/// What to do with a selector that names no known filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownFilterPolicy {
    /// Return the input bytes unchanged.
    #[default]
    Passthrough,
    /// Fail with [`FilterError::UnknownFilter`](crate::FilterError::UnknownFilter).
    Reject,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub unknown_filter: UnknownFilterPolicy,
    /// Border policy of the edge detector's convolution.
    pub edge_padding: Padding,
}

impl PipelineConfig {
    /// Config that rejects unknown selectors.
    pub fn strict() -> Self {
        Self {
            unknown_filter: UnknownFilterPolicy::Reject,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PipelineConfig::default();
        assert_eq!(config.unknown_filter, UnknownFilterPolicy::Passthrough);
        assert_eq!(config.edge_padding, Padding::Replicate);
    }

    #[test]
    fn test_partial_deserialize_fills_defaults() {
        let config: PipelineConfig = serde_json::from_str(r#"{"unknown_filter": "reject"}"#).unwrap();
        assert_eq!(config, PipelineConfig::strict());

        let config: PipelineConfig = serde_json::from_str(r#"{"edge_padding": "zero"}"#).unwrap();
        assert_eq!(config.unknown_filter, UnknownFilterPolicy::Passthrough);
        assert_eq!(config.edge_padding, Padding::Zero);
    }

    #[test]
    fn test_serialize_snake_case() {
        let json = serde_json::to_string(&PipelineConfig::strict()).unwrap();
        assert_eq!(json, r#"{"unknown_filter":"reject","edge_padding":"replicate"}"#);
    }
}
