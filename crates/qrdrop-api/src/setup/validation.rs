//! Configuration validation
//!
//! Validates configuration values at startup to catch misconfigurations early.

use anyhow::Result;
use qrdrop_core::{Config, StorageBackend};

/// Fail on values the server cannot run with; warn on values that only break
/// generation requests.
pub fn validate_config(config: &Config) -> Result<()> {
    if config.server_port() == 0 {
        return Err(anyhow::anyhow!("PORT cannot be 0"));
    }

    if config.max_request_body_bytes() == 0 {
        return Err(anyhow::anyhow!("MAX_REQUEST_BODY_BYTES cannot be 0"));
    }

    let missing = config.storage.missing_keys();
    if !missing.is_empty() {
        tracing::warn!(
            missing = %missing.join(", "),
            "S3 storage is not fully configured"
        );
    }

    if config.is_production() && config.storage_backend() == StorageBackend::Local {
        tracing::warn!(
            path = %config.storage.local_path,
            "Local storage backend in production - artifacts are not replicated"
        );
    }

    Ok(())
}
