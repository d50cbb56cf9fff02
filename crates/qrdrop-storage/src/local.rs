use crate::keys::validate_key;
use crate::traits::{Storage, StorageError, StorageResult};
use crate::StorageBackend;
use async_trait::async_trait;
use qrdrop_core::constants::LOCAL_PATH_ENV_KEY;
use qrdrop_core::{ObjectMetadata, StorageRecord};
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// Suffix of the JSON file holding an object's metadata next to the object itself.
pub const METADATA_SUFFIX: &str = ".metadata.json";

/// Local filesystem storage implementation
///
/// Objects are written as plain files directly under `base_path`; their content type
/// and metadata go to a `{key}.metadata.json` sidecar.
#[derive(Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
    base_url: String,
}

impl LocalStorage {
    /// Create a new LocalStorage instance
    ///
    /// # Arguments
    /// * `base_path` - Root directory for file storage (e.g., "/var/lib/qrdrop")
    /// * `base_url` - Base URL for serving files (e.g., "http://localhost:4000/qr")
    pub async fn new(base_path: impl Into<PathBuf>, base_url: String) -> StorageResult<Self> {
        let base_path = base_path.into();

        fs::create_dir_all(&base_path).await.map_err(|e| {
            StorageError::ConfigError(format!(
                "Failed to create storage directory {}: {}",
                base_path.display(),
                e
            ))
        })?;

        Ok(LocalStorage {
            base_path,
            base_url,
        })
    }

    /// Convert storage key to filesystem path with security validation
    fn key_to_path(&self, storage_key: &str) -> StorageResult<PathBuf> {
        validate_key(storage_key)?;
        if storage_key.contains('/') {
            return Err(StorageError::InvalidKey(
                "Storage key must not contain directories".to_string(),
            ));
        }
        Ok(self.base_path.join(storage_key))
    }

    /// Generate public URL for file
    fn generate_url(&self, key: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), key)
    }

    async fn write_file(path: &Path, data: &[u8]) -> StorageResult<()> {
        let mut file = fs::File::create(path).await.map_err(|e| {
            StorageError::UploadFailed(format!("Failed to create file {}: {}", path.display(), e))
        })?;

        file.write_all(data).await.map_err(|e| {
            StorageError::UploadFailed(format!("Failed to write file {}: {}", path.display(), e))
        })?;

        file.sync_all().await.map_err(|e| {
            StorageError::UploadFailed(format!("Failed to sync file {}: {}", path.display(), e))
        })?;

        Ok(())
    }
}

#[async_trait]
impl Storage for LocalStorage {
    fn check_config(&self) -> StorageResult<()> {
        if !self.base_path.is_dir() {
            return Err(StorageError::Misconfigured {
                backend: "Local storage",
                missing: vec![LOCAL_PATH_ENV_KEY],
            });
        }
        Ok(())
    }

    async fn put(
        &self,
        key: &str,
        data: Vec<u8>,
        content_type: &str,
        metadata: &ObjectMetadata,
    ) -> StorageResult<StorageRecord> {
        let path = self.key_to_path(key)?;
        let meta_path = self.key_to_path(&format!("{}{}", key, METADATA_SUFFIX))?;
        let size = data.len();
        let start = std::time::Instant::now();

        let sidecar = serde_json::json!({
            "content_type": content_type,
            "metadata": metadata.to_pairs(),
        });
        let sidecar = serde_json::to_vec_pretty(&sidecar)
            .map_err(|e| StorageError::UploadFailed(format!("Failed to encode metadata: {}", e)))?;

        Self::write_file(&path, &data).await?;
        Self::write_file(&meta_path, &sidecar).await?;

        tracing::info!(
            key = %key,
            path = %path.display(),
            size_bytes = size,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Local upload successful"
        );

        Ok(StorageRecord {
            url: self.generate_url(key),
            bucket: self.base_path.display().to_string(),
            key: key.to_string(),
        })
    }

    fn backend_type(&self) -> StorageBackend {
        StorageBackend::Local
    }
}
