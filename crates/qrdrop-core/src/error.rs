//! Error types module
//!
//! All request failures are unified under `AppError`. Client-input errors (400/405)
//! carry the exact message identifying the failed constraint; server faults (500)
//! share a generic top-level message and expose the underlying detail separately.

use crate::validation::ValidationError;

/// Top-level message of every internal failure response.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error while generating QR code";

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for expected errors like validation failures
    Debug,
    /// Error level - for unexpected failures
    Error,
}

/// Metadata for error responses - defines how an error should be presented
pub trait ErrorMetadata {
    /// HTTP status code to return
    fn http_status_code(&self) -> u16;

    /// Machine-readable error code (e.g., "TEXT_TOO_LONG")
    fn error_code(&self) -> &'static str;

    /// Client-facing top-level message
    fn client_message(&self) -> String;

    /// Underlying failure detail, reported only for server faults
    fn detail(&self) -> Option<String>;

    /// Log level for this error
    fn log_level(&self) -> LogLevel;
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid JSON in request body")]
    MalformedRequestBody,

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Method not allowed. Only POST requests are supported.")]
    MethodNotAllowed,

    #[error("{0}")]
    StorageMisconfigured(String),

    #[error("{0}")]
    Encoding(String),

    #[error("{0}")]
    Storage(String),

    #[error("{0}")]
    Internal(String),
}

impl From<serde_json::Error> for AppError {
    fn from(_: serde_json::Error) -> Self {
        AppError::MalformedRequestBody
    }
}

impl AppError {
    /// Short variant name used as a structured logging field
    pub fn error_type(&self) -> &'static str {
        match self {
            AppError::MalformedRequestBody => "MalformedRequestBody",
            AppError::Validation(_) => "ValidationFailure",
            AppError::MethodNotAllowed => "MethodNotAllowed",
            AppError::StorageMisconfigured(_) => "StorageMisconfigured",
            AppError::Encoding(_) => "EncodingFailure",
            AppError::Storage(_) => "StorageFailure",
            AppError::Internal(_) => "Internal",
        }
    }

    pub fn is_client_error(&self) -> bool {
        self.http_status_code() < 500
    }
}

impl ErrorMetadata for AppError {
    fn http_status_code(&self) -> u16 {
        match self {
            AppError::MalformedRequestBody | AppError::Validation(_) => 400,
            AppError::MethodNotAllowed => 405,
            AppError::StorageMisconfigured(_)
            | AppError::Encoding(_)
            | AppError::Storage(_)
            | AppError::Internal(_) => 500,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            AppError::MalformedRequestBody => "MALFORMED_REQUEST_BODY",
            AppError::Validation(err) => err.code(),
            AppError::MethodNotAllowed => "METHOD_NOT_ALLOWED",
            AppError::StorageMisconfigured(_) => "STORAGE_MISCONFIGURED",
            AppError::Encoding(_) => "ENCODING_FAILURE",
            AppError::Storage(_) => "STORAGE_FAILURE",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    fn client_message(&self) -> String {
        if self.is_client_error() {
            self.to_string()
        } else {
            INTERNAL_ERROR_MESSAGE.to_string()
        }
    }

    fn detail(&self) -> Option<String> {
        match self {
            AppError::StorageMisconfigured(msg)
            | AppError::Encoding(msg)
            | AppError::Storage(msg)
            | AppError::Internal(msg) => Some(msg.clone()),
            _ => None,
        }
    }

    fn log_level(&self) -> LogLevel {
        if self.is_client_error() {
            LogLevel::Debug
        } else {
            LogLevel::Error
        }
    }
}
