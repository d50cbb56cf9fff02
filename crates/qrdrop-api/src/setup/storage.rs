//! Storage setup and initialization

use anyhow::Result;
use qrdrop_core::Config;
use qrdrop_storage::{create_storage, Storage};
use std::sync::Arc;

/// Build the configured storage backend.
///
/// An S3 backend without a bucket is still returned; each request then fails with
/// a misconfiguration error until the bucket is set.
pub async fn setup_storage(config: &Config) -> Result<Arc<dyn Storage>> {
    tracing::info!("Initializing storage...");
    let storage = create_storage(&config.storage).await?;

    match storage.check_config() {
        Ok(()) => tracing::info!(
            backend = %storage.backend_type(),
            "Storage initialized successfully"
        ),
        Err(e) => tracing::warn!(
            backend = %storage.backend_type(),
            error = %e,
            "Storage initialized but not configured; generation requests will fail"
        ),
    }

    Ok(storage)
}
