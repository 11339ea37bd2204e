//! Filter selectors and per-call parameters.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer};

use crate::error::FilterError;
use crate::filters::color_adjust::clamp_factor;
use crate::kernels::{DEFAULT_BRIGHTNESS, DEFAULT_CONTRAST};

/// The fixed filter set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterKind {
    Grayscale,
    Sepia,
    Invert,
    Blur,
    Sharpen,
    Brightness,
    Edges,
    Emboss,
}

impl FilterKind {
    pub const ALL: [FilterKind; 8] = [
        FilterKind::Grayscale,
        FilterKind::Sepia,
        FilterKind::Invert,
        FilterKind::Blur,
        FilterKind::Sharpen,
        FilterKind::Brightness,
        FilterKind::Edges,
        FilterKind::Emboss,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FilterKind::Grayscale => "grayscale",
            FilterKind::Sepia => "sepia",
            FilterKind::Invert => "invert",
            FilterKind::Blur => "blur",
            FilterKind::Sharpen => "sharpen",
            FilterKind::Brightness => "brightness",
            FilterKind::Edges => "edges",
            FilterKind::Emboss => "emboss",
        }
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterKind {
    type Err = FilterError;

    /// Case-insensitive, surrounding whitespace ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        FilterKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| FilterError::UnknownFilter(s.to_string()))
    }
}

/// A parsed selector. Unknown names are kept so the dispatcher can decide
/// between passthrough and rejection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    Known(FilterKind),
    Unknown(String),
}

impl Selector {
    pub fn parse(s: &str) -> Self {
        match s.parse() {
            Ok(kind) => Selector::Known(kind),
            Err(_) => Selector::Unknown(s.to_string()),
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Known(kind) => kind.fmt(f),
            Selector::Unknown(name) => write!(f, "{name:?}"),
        }
    }
}

/// Non-finite or absent factors become `default`; the rest are clamped.
fn sanitize_factor(value: Option<f32>, default: f32) -> f32 {
    match value {
        Some(v) if v.is_finite() => clamp_factor(v),
        _ => default,
    }
}

/// One filter invocation: selector plus brightness/contrast clamped to [0, 2].
#[derive(Debug, Clone, PartialEq)]
pub struct FilterRequest {
    selector: Selector,
    brightness: f32,
    contrast: f32,
}

impl FilterRequest {
    pub fn new(selector: &str, brightness: Option<f32>, contrast: Option<f32>) -> Self {
        Self {
            selector: Selector::parse(selector),
            brightness: sanitize_factor(brightness, DEFAULT_BRIGHTNESS),
            contrast: sanitize_factor(contrast, DEFAULT_CONTRAST),
        }
    }

    /// Request for `kind` with default brightness and contrast.
    pub fn for_kind(kind: FilterKind) -> Self {
        Self {
            selector: Selector::Known(kind),
            brightness: DEFAULT_BRIGHTNESS,
            contrast: DEFAULT_CONTRAST,
        }
    }

    pub fn with_brightness(mut self, brightness: f32) -> Self {
        self.brightness = sanitize_factor(Some(brightness), DEFAULT_BRIGHTNESS);
        self
    }

    pub fn with_contrast(mut self, contrast: f32) -> Self {
        self.contrast = sanitize_factor(Some(contrast), DEFAULT_CONTRAST);
        self
    }

    pub fn selector(&self) -> &Selector {
        &self.selector
    }

    pub fn brightness(&self) -> f32 {
        self.brightness
    }

    pub fn contrast(&self) -> f32 {
        self.contrast
    }
}

fn default_process_type() -> String {
    FilterKind::Grayscale.as_str().to_string()
}

/// Form fields sent alongside an upload.
///
/// Numbers may arrive as JSON numbers or as strings (multipart fields are
/// text); anything unparseable is treated as absent.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadFields {
    #[serde(default = "default_process_type")]
    pub process_type: String,
    #[serde(default, deserialize_with = "lenient_number")]
    pub brightness: Option<f32>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub contrast: Option<f32>,
}

impl Default for UploadFields {
    fn default() -> Self {
        Self {
            process_type: default_process_type(),
            brightness: None,
            contrast: None,
        }
    }
}

impl From<UploadFields> for FilterRequest {
    fn from(fields: UploadFields) -> Self {
        FilterRequest::new(&fields.process_type, fields.brightness, fields.contrast)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(f32),
    Text(String),
    Other(serde::de::IgnoredAny),
}

fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f32>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match NumberOrText::deserialize(deserializer)? {
        NumberOrText::Number(v) => Some(v),
        NumberOrText::Text(s) => s.trim().parse().ok(),
        NumberOrText::Other(_) => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_every_kind() {
        for kind in FilterKind::ALL {
            assert_eq!(kind.as_str().parse::<FilterKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_parse_is_lenient_on_case_and_space() {
        assert_eq!(" Edges ".parse::<FilterKind>().unwrap(), FilterKind::Edges);
        assert_eq!("SEPIA".parse::<FilterKind>().unwrap(), FilterKind::Sepia);
    }

    #[test]
    fn test_unknown_selector_kept_verbatim() {
        assert_eq!(
            Selector::parse("unknown_filter_xyz"),
            Selector::Unknown("unknown_filter_xyz".into())
        );
    }

    #[test]
    fn test_request_clamps_and_defaults() {
        let req = FilterRequest::new("brightness", Some(5.0), Some(-1.0));
        assert_eq!(req.brightness(), 2.0);
        assert_eq!(req.contrast(), 0.0);

        let req = FilterRequest::new("brightness", Some(f32::NAN), None);
        assert_eq!(req.brightness(), 1.0);
        assert_eq!(req.contrast(), 1.0);

        let req = FilterRequest::for_kind(FilterKind::Brightness).with_contrast(f32::INFINITY);
        assert_eq!(req.contrast(), 1.0);
    }

    #[test]
    fn test_upload_fields_defaults() {
        let fields: UploadFields = serde_json::from_str("{}").unwrap();
        assert_eq!(fields, UploadFields::default());

        let req = FilterRequest::from(fields);
        assert_eq!(req.selector(), &Selector::Known(FilterKind::Grayscale));
    }

    #[test]
    fn test_upload_fields_accept_text_numbers() {
        let fields: UploadFields = serde_json::from_str(
            r#"{"processType": "brightness", "brightness": "1.5", "contrast": 0.5}"#,
        )
        .unwrap();

        assert_eq!(fields.brightness, Some(1.5));
        assert_eq!(fields.contrast, Some(0.5));
    }

    #[test]
    fn test_upload_fields_invalid_numbers_become_defaults() {
        let fields: UploadFields =
            serde_json::from_str(r#"{"processType": "brightness", "brightness": "bright", "contrast": null}"#)
                .unwrap();
        let req = FilterRequest::from(fields);

        assert_eq!(req.brightness(), 1.0);
        assert_eq!(req.contrast(), 1.0);
    }
}
