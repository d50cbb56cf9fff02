//! Health check handler

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::state::AppState;

#[derive(serde::Serialize)]
pub(crate) struct HealthCheckResponse {
    pub status: &'static str,
    pub storage: String,
    pub storage_configured: bool,
}

/// Liveness probe - process is running. Storage readiness is reported, never fatal.
pub async fn liveness_check(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let storage = state.generation.storage();
    (
        StatusCode::OK,
        Json(HealthCheckResponse {
            status: "alive",
            storage: storage.backend_type().to_string(),
            storage_configured: storage.check_config().is_ok(),
        }),
    )
}
