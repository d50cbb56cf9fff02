//! Generation domain types

use std::collections::BTreeMap;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{PNG_CONTENT_TYPE, QR_FILE_TYPE};

/// ISO-8601 UTC timestamp with millisecond precision, e.g. `2024-05-01T10:20:30.123Z`.
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// QR error-correction level, in order of increasing redundancy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCorrectionLevel {
    L,
    #[default]
    M,
    Q,
    H,
}

impl ErrorCorrectionLevel {
    pub const ALL: [ErrorCorrectionLevel; 4] = [
        ErrorCorrectionLevel::L,
        ErrorCorrectionLevel::M,
        ErrorCorrectionLevel::Q,
        ErrorCorrectionLevel::H,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCorrectionLevel::L => "L",
            ErrorCorrectionLevel::M => "M",
            ErrorCorrectionLevel::Q => "Q",
            ErrorCorrectionLevel::H => "H",
        }
    }
}

/// Exact, case-sensitive match on the single-letter name.
impl FromStr for ErrorCorrectionLevel {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "L" => Ok(ErrorCorrectionLevel::L),
            "M" => Ok(ErrorCorrectionLevel::M),
            "Q" => Ok(ErrorCorrectionLevel::Q),
            "H" => Ok(ErrorCorrectionLevel::H),
            _ => Err(()),
        }
    }
}

impl Display for ErrorCorrectionLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// Generation parameters that passed validation.
///
/// Only the request validator constructs this type, so holding one proves that
/// `text`, `size` and `error_correction_level` satisfy every constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedParameters {
    text: String,
    size: u32,
    error_correction_level: ErrorCorrectionLevel,
}

impl ValidatedParameters {
    pub(crate) fn new(
        text: String,
        size: u32,
        error_correction_level: ErrorCorrectionLevel,
    ) -> Self {
        Self {
            text,
            size,
            error_correction_level,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn error_correction_level(&self) -> ErrorCorrectionLevel {
        self.error_correction_level
    }

    /// Wire form of these parameters, as a client would send them.
    pub fn to_request_json(&self) -> serde_json::Value {
        serde_json::json!({
            "text": self.text,
            "size": self.size,
            "errorCorrectionLevel": self.error_correction_level,
        })
    }
}

/// PNG bytes of one rendered QR code together with its storage filename.
#[derive(Debug, Clone)]
pub struct GeneratedArtifact {
    pub image_bytes: Vec<u8>,
    pub filename: String,
    pub content_type: &'static str,
}

impl GeneratedArtifact {
    pub fn png(image_bytes: Vec<u8>, filename: String) -> Self {
        Self {
            image_bytes,
            filename,
            content_type: PNG_CONTENT_TYPE,
        }
    }
}

/// Descriptive metadata attached to a stored artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectMetadata {
    pub generated_text: String,
    pub qr_size: u32,
    pub error_correction_level: ErrorCorrectionLevel,
    /// ISO-8601 timestamp captured when the metadata was built.
    pub generated_at: String,
}

impl ObjectMetadata {
    pub fn for_parameters(params: &ValidatedParameters, generated_at: String) -> Self {
        Self {
            generated_text: params.text().to_string(),
            qr_size: params.size(),
            error_correction_level: params.error_correction_level(),
            generated_at,
        }
    }

    /// Flatten into the key/value pairs written as object user metadata.
    pub fn to_pairs(&self) -> BTreeMap<&'static str, String> {
        BTreeMap::from([
            ("generated-text", self.generated_text.clone()),
            ("qr-size", self.qr_size.to_string()),
            (
                "error-correction-level",
                self.error_correction_level.to_string(),
            ),
            ("generated-at", self.generated_at.clone()),
            ("file-type", QR_FILE_TYPE.to_string()),
        ])
    }
}

/// Location of a persisted artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StorageRecord {
    pub url: String,
    pub bucket: String,
    pub key: String,
}
