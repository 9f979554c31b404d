//! Analysis backend payloads
//!
//! The backend (through its proxy) answers with
//! `{ "status": "success", "measurements": { ... }, "vis_image": "..." }`
//! or `{ "status": "error", "error_code": "...", "message": "..." }`.

use crate::error::{ErrorCode, PayloadError};
use crate::models::Measurements;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisPayload {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub measurements: Option<Measurements>,
    #[serde(default)]
    pub error_code: Option<ErrorCode>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processed_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vis_image: Option<String>,
}

impl AnalysisPayload {
    pub fn from_json(json: &str) -> Result<Self, PayloadError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn is_success(&self) -> bool {
        match self.status.as_deref() {
            Some(status) => status == "success",
            None => self.error_code.is_none() && self.measurements.is_some(),
        }
    }

    /// Measurements of a successful analysis.
    ///
    /// An error payload without a code is reported as `AI_SERVER_ERROR`,
    /// the same default the proxy applies.
    pub fn measurements(&self) -> Result<&Measurements, PayloadError> {
        if !self.is_success() {
            let code = self.error_code.clone().unwrap_or(ErrorCode::AiServerError);
            let message = self
                .message
                .clone()
                .unwrap_or_else(|| code.user_message().to_string());
            return Err(PayloadError::Upstream { code, message });
        }
        let measurements = self
            .measurements
            .as_ref()
            .ok_or(PayloadError::MissingMeasurements)?;
        debug!(
            "Payload measurements: [{}]",
            measurements.keys().collect::<Vec<_>>().join(", ")
        );
        Ok(measurements)
    }

    /// Annotated image, preferring `vis_image` when it is non-empty
    pub fn processed_image(&self) -> Option<&str> {
        self.vis_image
            .as_deref()
            .filter(|s| !s.is_empty())
            .or_else(|| self.processed_image.as_deref().filter(|s| !s.is_empty()))
    }
}
