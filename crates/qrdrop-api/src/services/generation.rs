//! QR generation coordinator
//!
//! Runs one validated request through the pipeline:
//! encode → check storage → name → upload → respond

use std::sync::Arc;

use chrono::Utc;
use qrdrop_core::models::format_timestamp;
use qrdrop_core::{
    AppError, GeneratedArtifact, GenerationResponse, ObjectMetadata, ValidatedParameters,
};
use qrdrop_processing::Encoder;
use qrdrop_storage::{generate_artifact_filename, Storage};

use crate::error::{encoding_failure, storage_failure};

/// Stateless coordinator over an encoder and a storage backend.
#[derive(Clone)]
pub struct GenerationService {
    encoder: Arc<dyn Encoder>,
    storage: Arc<dyn Storage>,
}

impl GenerationService {
    pub fn new(encoder: Arc<dyn Encoder>, storage: Arc<dyn Storage>) -> Self {
        Self { encoder, storage }
    }

    pub fn storage(&self) -> &Arc<dyn Storage> {
        &self.storage
    }

    /// Produce and store one QR code, returning the success payload.
    ///
    /// No step is retried; the first failure ends the request.
    pub async fn generate(
        &self,
        params: &ValidatedParameters,
    ) -> Result<GenerationResponse, AppError> {
        let start = std::time::Instant::now();

        let image_bytes = self
            .encoder
            .encode(params.text(), params.size(), params.error_correction_level())
            .await
            .map_err(encoding_failure)?;

        self.storage.check_config().map_err(storage_failure)?;

        let artifact = GeneratedArtifact::png(image_bytes, generate_artifact_filename());
        let metadata = ObjectMetadata::for_parameters(params, format_timestamp(Utc::now()));

        let record = self
            .storage
            .put(
                &artifact.filename,
                artifact.image_bytes,
                artifact.content_type,
                &metadata,
            )
            .await
            .map_err(storage_failure)?;

        tracing::info!(
            filename = %artifact.filename,
            url = %record.url,
            size = params.size(),
            error_correction_level = %params.error_correction_level(),
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "QR code generated"
        );

        Ok(GenerationResponse::success(
            params,
            record.url,
            artifact.filename,
            format_timestamp(Utc::now()),
        ))
    }
}
