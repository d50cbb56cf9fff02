//! HTTP error response conversion
//!
//! Handlers return `Result<_, HttpAppError>`; every failure renders as a
//! `GenerationResponse::Failure` body with the status taken from `ErrorMetadata`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use qrdrop_core::{AppError, ErrorMetadata, GenerationResponse, LogLevel};
use qrdrop_processing::EncodeError;
use qrdrop_storage::StorageError;

/// Wrapper type for AppError to implement IntoResponse
///
/// Orphan rules prevent implementing axum's `IntoResponse` for `AppError` here.
#[derive(Debug)]
pub struct HttpAppError(pub AppError);

impl From<AppError> for HttpAppError {
    fn from(err: AppError) -> Self {
        HttpAppError(err)
    }
}

impl From<StorageError> for HttpAppError {
    fn from(err: StorageError) -> Self {
        HttpAppError(storage_failure(err))
    }
}

impl From<EncodeError> for HttpAppError {
    fn from(err: EncodeError) -> Self {
        HttpAppError(encoding_failure(err))
    }
}

/// Map a storage error to the application taxonomy.
///
/// A backend that reports missing configuration is a misconfiguration; anything
/// else that goes wrong while storing is an upload failure.
pub fn storage_failure(err: StorageError) -> AppError {
    match err {
        StorageError::Misconfigured { .. } => AppError::StorageMisconfigured(err.to_string()),
        other => AppError::Storage(other.to_string()),
    }
}

pub fn encoding_failure(err: EncodeError) -> AppError {
    AppError::Encoding(err.to_string())
}

/// Failure body for an error, without logging.
pub fn failure_body(error: &AppError) -> GenerationResponse {
    GenerationResponse::failure(error.client_message(), error.detail(), error.error_code())
}

fn log_error(error: &AppError) {
    let error_type = error.error_type();
    let status = error.http_status_code();
    match error.log_level() {
        LogLevel::Debug => {
            tracing::debug!(error = %error, error_type, status, "Request rejected");
        }
        LogLevel::Error => {
            tracing::error!(error = %error, error_type, status, "Request failed");
        }
    }
}

impl IntoResponse for HttpAppError {
    fn into_response(self) -> Response {
        let app_error = &self.0;

        let status = StatusCode::from_u16(app_error.http_status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        log_error(app_error);

        (status, Json(failure_body(app_error))).into_response()
    }
}
