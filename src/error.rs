//! Error types shared by the classifier and payload layers

use crate::models::Finger;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Error codes used by the nail analysis backend and its proxy.
///
/// Codes this crate does not know are kept verbatim in [`ErrorCode::Other`]
/// and written back out unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// No hand or nail found in the photo
    NothingDetected,
    /// Reference card missing, so millimeters cannot be calibrated
    NoCard,
    /// Too few nails were segmented
    InsufficientNails,
    /// Index or ring nail missing
    MissingKeyNails,
    /// Generic analysis failure
    AnalysisFailed,
    /// Backend answered with a non-JSON error (set by the proxy)
    AiServerError,
    /// Any other backend code
    Other(String),
}

impl ErrorCode {
    pub const KNOWN: [ErrorCode; 6] = [
        ErrorCode::NothingDetected,
        ErrorCode::NoCard,
        ErrorCode::InsufficientNails,
        ErrorCode::MissingKeyNails,
        ErrorCode::AnalysisFailed,
        ErrorCode::AiServerError,
    ];

    /// Map a wire code to its variant
    pub fn from_code(code: &str) -> Self {
        match code {
            "NOTHING_DETECTED" => ErrorCode::NothingDetected,
            "NO_CARD" => ErrorCode::NoCard,
            "INSUFFICIENT_NAILS" => ErrorCode::InsufficientNails,
            "MISSING_KEY_NAILS" => ErrorCode::MissingKeyNails,
            "ANALYSIS_FAILED" => ErrorCode::AnalysisFailed,
            "AI_SERVER_ERROR" => ErrorCode::AiServerError,
            other => ErrorCode::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ErrorCode::NothingDetected => "NOTHING_DETECTED",
            ErrorCode::NoCard => "NO_CARD",
            ErrorCode::InsufficientNails => "INSUFFICIENT_NAILS",
            ErrorCode::MissingKeyNails => "MISSING_KEY_NAILS",
            ErrorCode::AnalysisFailed => "ANALYSIS_FAILED",
            ErrorCode::AiServerError => "AI_SERVER_ERROR",
            ErrorCode::Other(code) => code,
        }
    }

    /// Message shown to the end user
    pub fn user_message(&self) -> &'static str {
        match self {
            ErrorCode::NothingDetected => "No nails were detected. Please retake the photo.",
            ErrorCode::NoCard => {
                "The reference card was not found. Place the card next to your hand."
            }
            ErrorCode::InsufficientNails => "Not enough nails were visible. Show all four fingers.",
            ErrorCode::MissingKeyNails => {
                "Index and ring nails are required. Keep both fingers in the frame."
            }
            ErrorCode::AnalysisFailed | ErrorCode::Other(_) => "Analysis failed. Please try again.",
            ErrorCode::AiServerError => {
                "An error occurred during AI analysis. Please retake the photo."
            }
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

impl Serialize for ErrorCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ErrorCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        Ok(ErrorCode::from_code(&code))
    }
}

/// Errors raised while classifying measurements
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClassifyError {
    #[error("Missing measurement for {finger} nail")]
    MissingData { finger: Finger },
}

impl ClassifyError {
    /// Backend error code this failure corresponds to
    pub fn code(&self) -> ErrorCode {
        match self {
            ClassifyError::MissingData { .. } => ErrorCode::MissingKeyNails,
        }
    }
}

/// Errors raised while reading an analysis payload
#[derive(Error, Debug)]
pub enum PayloadError {
    #[error("Failed to parse analysis payload: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Analysis failed ({code}): {message}")]
    Upstream { code: ErrorCode, message: String },

    #[error("Analysis payload has no measurements")]
    MissingMeasurements,
}

impl PayloadError {
    pub fn code(&self) -> ErrorCode {
        match self {
            PayloadError::Parse(_) => ErrorCode::AiServerError,
            PayloadError::Upstream { code, .. } => code.clone(),
            PayloadError::MissingMeasurements => ErrorCode::AnalysisFailed,
        }
    }
}

pub type ClassifyResult<T> = Result<T, ClassifyError>;
