//! Storage abstraction trait
//!
//! This module defines the Storage trait that all storage backends must implement.

use crate::StorageBackend;
use async_trait::async_trait;
use qrdrop_core::{ObjectMetadata, StorageRecord};
use thiserror::Error;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Configuration the backend needs is absent or unusable.
    #[error("{backend} configuration is invalid. Missing: {}", .missing.join(", "))]
    Misconfigured {
        backend: &'static str,
        missing: Vec<&'static str>,
    },
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Storage abstraction trait
///
/// All storage backends (S3, local filesystem) implement this trait so the
/// generation service never couples to a specific backend. Writes are independent
/// per key; the service relies on unique keys rather than on any locking here.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Confirm that the configuration this backend needs is present.
    ///
    /// Called once per generation request, before upload.
    fn check_config(&self) -> StorageResult<()>;

    /// Store `data` under `key` with the given content type and metadata, returning
    /// where the object now lives.
    async fn put(
        &self,
        key: &str,
        data: Vec<u8>,
        content_type: &str,
        metadata: &ObjectMetadata,
    ) -> StorageResult<StorageRecord>;

    /// Get the storage backend type
    fn backend_type(&self) -> StorageBackend;
}
