//! Application setup and initialization

pub mod routes;
pub mod server;
pub mod storage;
pub mod validation;

use crate::constants::SERVICE_NAME;
use crate::services::GenerationService;
use crate::state::AppState;
use anyhow::{Context, Result};
use qrdrop_core::Config;
use qrdrop_processing::QrPngEncoder;
use std::sync::Arc;

/// Initialize the entire application: telemetry, storage, encoder and routes.
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    qrdrop_infra::init_telemetry(
        SERVICE_NAME,
        config.environment(),
        config.server.json_logs,
    )
    .context("Failed to initialize telemetry")?;

    validation::validate_config(&config).context("Configuration validation failed")?;
    tracing::info!("Configuration loaded and validated successfully");

    let storage = storage::setup_storage(&config).await?;
    let generation = GenerationService::new(Arc::new(QrPngEncoder::default()), storage);

    let state = Arc::new(AppState::new(generation));
    let router = routes::setup_routes(&config, state.clone());

    Ok((state, router))
}
