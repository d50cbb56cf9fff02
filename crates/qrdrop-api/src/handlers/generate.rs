//! `/generate` endpoint

use std::sync::Arc;

use axum::{
    extract::{rejection::BytesRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use bytes::Bytes;
use qrdrop_core::{validate_generation_request, AppError, GenerationResponse};
use serde_json::Value;

use crate::constants::PREFLIGHT_MESSAGE;
use crate::error::HttpAppError;
use crate::state::AppState;

/// Validate the JSON body, then encode and store the QR code.
///
/// The body is parsed as JSON whatever the request's `Content-Type`.
#[tracing::instrument(skip(state, body))]
pub async fn generate_qr(
    State(state): State<Arc<AppState>>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<GenerationResponse>, HttpAppError> {
    let body = body.map_err(|rejection| {
        tracing::debug!(error = %rejection, "Failed to read request body");
        AppError::MalformedRequestBody
    })?;

    let payload: Value = serde_json::from_slice(&body).map_err(AppError::from)?;
    let params = validate_generation_request(&payload).map_err(AppError::from)?;

    tracing::debug!(
        text_chars = params.text().chars().count(),
        size = params.size(),
        error_correction_level = %params.error_correction_level(),
        "Generation request validated"
    );

    let response = state.generation.generate(&params).await?;
    Ok(Json(response))
}

pub async fn preflight() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(serde_json::json!({ "message": PREFLIGHT_MESSAGE })),
    )
}

/// Any method other than POST and OPTIONS.
pub async fn method_not_allowed() -> HttpAppError {
    HttpAppError(AppError::MethodNotAllowed)
}
