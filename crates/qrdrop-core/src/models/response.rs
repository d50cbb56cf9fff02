//! Response payload of the generation endpoint
//!
//! Success and failure bodies are two variants of one type so every code path
//! serializes an explicit `success` flag.

use serde::Serialize;

use super::generation::{ErrorCorrectionLevel, ValidatedParameters};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationSuccess {
    pub success: bool,
    pub qr_code_url: String,
    pub text: String,
    pub size: u32,
    pub error_correction_level: ErrorCorrectionLevel,
    pub timestamp: String,
    pub filename: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationFailure {
    pub success: bool,
    pub error: String,
    /// Underlying failure detail, only present for internal errors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Machine-readable error code for programmatic handling
    pub code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum GenerationResponse {
    Success(GenerationSuccess),
    Failure(GenerationFailure),
}

impl GenerationResponse {
    pub fn success(
        params: &ValidatedParameters,
        qr_code_url: String,
        filename: String,
        timestamp: String,
    ) -> Self {
        GenerationResponse::Success(GenerationSuccess {
            success: true,
            qr_code_url,
            text: params.text().to_string(),
            size: params.size(),
            error_correction_level: params.error_correction_level(),
            timestamp,
            filename,
        })
    }

    pub fn failure(
        error: impl Into<String>,
        message: Option<String>,
        code: impl Into<String>,
    ) -> Self {
        GenerationResponse::Failure(GenerationFailure {
            success: false,
            error: error.into(),
            message,
            code: code.into(),
        })
    }

    pub fn is_success(&self) -> bool {
        matches!(self, GenerationResponse::Success(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate_generation_request;
    use serde_json::json;

    #[test]
    fn success_uses_camel_case_fields() {
        let params = validate_generation_request(&json!({
            "text": "hi",
            "size": 300,
            "errorCorrectionLevel": "Q",
        }))
        .unwrap();
        let body = GenerationResponse::success(
            &params,
            "https://b.s3.us-east-1.amazonaws.com/qr.png".to_string(),
            "qr.png".to_string(),
            "2024-01-01T00:00:00.000Z".to_string(),
        );
        let value = serde_json::to_value(&body).unwrap();

        assert_eq!(value["success"], true);
        assert_eq!(value["qrCodeUrl"], "https://b.s3.us-east-1.amazonaws.com/qr.png");
        assert_eq!(value["size"], 300);
        assert_eq!(value["errorCorrectionLevel"], "Q");
        assert!(value.get("error").is_none());
    }

    #[test]
    fn failure_omits_message_when_absent() {
        let body = GenerationResponse::failure("bad", None, "BAD");
        let value = serde_json::to_value(&body).unwrap();

        assert_eq!(value, json!({"success": false, "error": "bad", "code": "BAD"}));
        assert!(!body.is_success());
    }
}
