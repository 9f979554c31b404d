//! Output reporters for NBTI results
//!
//! Supports multiple output formats:
//! - `text` - Terminal card with colors
//! - `json` - Machine-readable JSON, record fields in the web client's shape
//! - `markdown` - Shareable Markdown card

mod json;
mod markdown;
mod text;

use crate::classifier::{format_stat, PersonaResult, ProfileResult};
use crate::error::ErrorCode;
use crate::models::{Finger, Measurements};
use crate::share::{persona_card, profile_card, ShareCard};
use anyhow::{anyhow, Result};
use serde::Serialize;
use std::str::FromStr;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Markdown,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" | "terminal" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            _ => Err(anyhow!(
                "Unknown format '{}'. Valid formats: text, json, markdown",
                s
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Markdown => write!(f, "markdown"),
        }
    }
}

/// One finger line on the result screen
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FingerReading {
    pub finger: Finger,
    pub w: f64,
    pub h: f64,
    /// Curvature (or its height/width stand-in) with four decimals
    #[serde(skip_serializing_if = "Option::is_none")]
    pub curvature: Option<String>,
}

impl FingerReading {
    /// Known fingers in `measurements`, in display order
    pub fn from_measurements(measurements: &Measurements) -> Vec<Self> {
        measurements
            .fingers()
            .map(|(finger, m)| FingerReading {
                finger,
                w: m.width,
                h: m.height,
                curvature: m.display_curvature().map(format_stat),
            })
            .collect()
    }
}

/// Everything a result page needs
#[derive(Debug, Clone, Serialize)]
pub struct NbtiReport {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step1: Option<PersonaResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step2: Option<ProfileResult>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fingers: Vec<FingerReading>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub share: Option<ShareCard>,
    /// Annotated photo from the analysis backend (usually a data URL)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl NbtiReport {
    pub fn new(
        step1: Option<PersonaResult>,
        step2: Option<ProfileResult>,
        fingers: Vec<FingerReading>,
        base_url: Option<&str>,
    ) -> Self {
        let share = match (&step1, &step2) {
            (_, Some(d)) => Some(profile_card(step1.as_ref(), d, base_url)),
            (Some(p), None) => Some(persona_card(p, base_url)),
            (None, None) => None,
        };
        Self {
            status: "success",
            step1,
            step2,
            fingers,
            share,
            image: None,
        }
    }

    /// Attach the backend's annotated photo
    pub fn with_image(mut self, image: Option<String>) -> Self {
        self.image = image.filter(|s| !s.is_empty());
        self
    }
}

/// Error object in the proxy's response shape
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorReport {
    pub status: &'static str,
    pub error_code: ErrorCode,
    pub message: String,
}

impl ErrorReport {
    pub fn new(error_code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            status: "error",
            error_code,
            message: message.into(),
        }
    }
}

/// Rendering switches
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    pub color: bool,
}

/// Render a report using an OutputFormat enum
pub fn report_with_format(
    report: &NbtiReport,
    format: OutputFormat,
    options: RenderOptions,
) -> Result<String> {
    match format {
        OutputFormat::Text => text::render(report, options),
        OutputFormat::Json => json::render(report),
        OutputFormat::Markdown => markdown::render(report),
    }
}

/// Render an error in the specified format
pub fn error_with_format(
    error: &ErrorReport,
    format: OutputFormat,
    options: RenderOptions,
) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(text::render_error(error, options)),
        OutputFormat::Json => json::render_error(error),
        OutputFormat::Markdown => Ok(markdown::render_error(error)),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::classifier::{analyze_stage1, analyze_stage2};
    use crate::samples::{stage1_sample, stage2_sample};

    /// Report with both stages from the sample data
    pub(crate) fn test_report() -> NbtiReport {
        let m2 = stage2_sample();
        NbtiReport::new(
            Some(analyze_stage1(&stage1_sample()).unwrap()),
            Some(analyze_stage2(&m2)),
            FingerReading::from_measurements(&m2),
            None,
        )
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!(OutputFormat::from_str("text").unwrap(), OutputFormat::Text);
        assert_eq!(OutputFormat::from_str("JSON").unwrap(), OutputFormat::Json);
        assert_eq!(OutputFormat::from_str("md").unwrap(), OutputFormat::Markdown);
        assert!(OutputFormat::from_str("sarif").is_err());
    }

    #[test]
    fn test_with_image_skips_empty() {
        let report = test_report().with_image(Some(String::new()));
        assert!(report.image.is_none());
        let report = test_report().with_image(Some("data:image/jpeg;base64,AAAA".into()));
        assert_eq!(report.image.as_deref(), Some("data:image/jpeg;base64,AAAA"));
    }

    #[test]
    fn test_share_card_selection() {
        let report = test_report();
        let share = report.share.expect("share card");
        assert!(share.title.contains('×'));

        let only1 = NbtiReport::new(report.step1.clone(), None, vec![], None);
        assert!(only1.share.unwrap().title.starts_with("[N(네일)BTI]"));

        let none = NbtiReport::new(None, None, vec![], None);
        assert!(none.share.is_none());
    }

    #[test]
    fn test_finger_readings() {
        let readings = FingerReading::from_measurements(&stage2_sample());
        assert_eq!(readings.len(), 4);
        assert_eq!(readings[0].finger, Finger::Index);
        assert_eq!(readings[0].curvature.as_deref(), Some("1.1970"));

        let readings = FingerReading::from_measurements(&stage1_sample());
        assert_eq!(readings.len(), 2);
        assert_eq!(readings[1].finger, Finger::Ring);
        assert_eq!(readings[1].curvature.as_deref(), Some("1.2389"));
    }
}
