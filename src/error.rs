use thiserror::Error;

/// Failure of a single pipeline call. Exactly one variant is returned per
/// failed call; nothing is retried.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FilterError {
    #[error("failed to decode image: {0}")]
    Decode(String),

    #[error("edge response has no dynamic range (min {min}, max {max})")]
    Numeric { min: f32, max: f32 },

    #[error("failed to encode image: {0}")]
    Encode(String),

    #[error("unknown filter: {0}")]
    UnknownFilter(String),
}

/// Discriminant of [`FilterError`], for callers that map failures to responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterErrorKind {
    Decode,
    Numeric,
    Encode,
    UnknownFilter,
}

impl FilterError {
    pub fn kind(&self) -> FilterErrorKind {
        match self {
            FilterError::Decode(_) => FilterErrorKind::Decode,
            FilterError::Numeric { .. } => FilterErrorKind::Numeric,
            FilterError::Encode(_) => FilterErrorKind::Encode,
            FilterError::UnknownFilter(_) => FilterErrorKind::UnknownFilter,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_matches_variant() {
        assert_eq!(FilterError::Decode("x".into()).kind(), FilterErrorKind::Decode);
        assert_eq!(
            FilterError::Numeric { min: 0.0, max: 0.0 }.kind(),
            FilterErrorKind::Numeric
        );
        assert_eq!(FilterError::Encode("x".into()).kind(), FilterErrorKind::Encode);
        assert_eq!(
            FilterError::UnknownFilter("x".into()).kind(),
            FilterErrorKind::UnknownFilter
        );
    }

    #[test]
    fn test_display_names_selector() {
        let err = FilterError::UnknownFilter("vignette".into());
        assert_eq!(err.to_string(), "unknown filter: vignette");
    }
}
