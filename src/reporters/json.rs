//! JSON reporter
//!
//! Outputs the full NbtiReport as pretty-printed JSON. Result cards keep
//! the web client's field names (`subTitle`, `avgCurvature`, ...).

use super::{ErrorReport, NbtiReport};
use anyhow::Result;

/// Render report as JSON
pub fn render(report: &NbtiReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

pub fn render_error(error: &ErrorReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(error)?)
}
