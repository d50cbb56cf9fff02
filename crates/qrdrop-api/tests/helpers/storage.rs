//! Fake encoder and storage implementations.

use async_trait::async_trait;
use qrdrop_core::{ErrorCorrectionLevel, ObjectMetadata, StorageBackend, StorageRecord};
use qrdrop_processing::{EncodeError, Encoder};
use qrdrop_storage::{Storage, StorageError, StorageResult};
use std::sync::Mutex;

pub struct StoredObject {
    pub key: String,
    pub data: Vec<u8>,
    pub content_type: String,
    pub metadata: ObjectMetadata,
}

/// In-memory S3 stand-in recording every upload.
#[derive(Default)]
pub struct MemoryStorage {
    pub missing_bucket: bool,
    pub fail_upload: bool,
    pub objects: Mutex<Vec<StoredObject>>,
}

impl MemoryStorage {
    pub fn unconfigured() -> Self {
        Self {
            missing_bucket: true,
            ..Default::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail_upload: true,
            ..Default::default()
        }
    }

    pub fn upload_count(&self) -> usize {
        self.objects.lock().unwrap().len()
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    fn check_config(&self) -> StorageResult<()> {
        if self.missing_bucket {
            return Err(StorageError::Misconfigured {
                backend: "S3",
                missing: vec!["BUCKET_NAME"],
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
        if self.fail_upload {
            return Err(StorageError::UploadFailed("Access Denied".to_string()));
        }
        self.objects.lock().unwrap().push(StoredObject {
            key: key.to_string(),
            data,
            content_type: content_type.to_string(),
            metadata: metadata.clone(),
        });
        Ok(StorageRecord {
            url: format!("https://qr-bucket.s3.us-east-1.amazonaws.com/{}", key),
            bucket: "qr-bucket".to_string(),
            key: key.to_string(),
        })
    }

    fn backend_type(&self) -> StorageBackend {
        StorageBackend::S3
    }
}

/// Encoder that always reports a capacity overflow.
pub struct FailingEncoder;

#[async_trait]
impl Encoder for FailingEncoder {
    async fn encode(
        &self,
        _text: &str,
        _size: u32,
        level: ErrorCorrectionLevel,
    ) -> Result<Vec<u8>, EncodeError> {
        Err(EncodeError::DataTooLong(level))
    }
}
