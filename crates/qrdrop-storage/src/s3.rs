use crate::keys::validate_key;
use crate::traits::{Storage, StorageError, StorageResult};
use crate::StorageBackend;
use async_trait::async_trait;
use bytes::Bytes;
use object_store::aws::{AmazonS3, AmazonS3Builder};
use object_store::path::Path;
use object_store::{
    Attribute, AttributeValue, Attributes, ObjectStore, PutOptions, PutPayload,
    Result as ObjectResult,
};
use qrdrop_core::constants::BUCKET_ENV_KEY;
use qrdrop_core::{ObjectMetadata, StorageConfig, StorageRecord};

/// S3 storage implementation
///
/// The object store client is built once, at construction. When no bucket is
/// configured the instance still exists but `check_config` fails, so requests
/// report the misconfiguration instead of the process refusing to start.
#[derive(Clone)]
pub struct S3Storage {
    store: Option<AmazonS3>,
    bucket: Option<String>,
    region: String,
    endpoint_url: Option<String>, // Custom endpoint for S3-compatible providers
}

impl S3Storage {
    /// Create a new S3Storage instance
    ///
    /// # Arguments
    /// * `bucket` - S3 bucket name, if configured
    /// * `region` - AWS region (or region identifier for S3-compatible providers)
    /// * `endpoint_url` - Optional custom endpoint URL for S3-compatible providers
    ///   (e.g., "http://localhost:9000" for MinIO)
    pub fn new(
        bucket: Option<String>,
        region: String,
        endpoint_url: Option<String>,
    ) -> StorageResult<Self> {
        let store = match bucket {
            Some(ref bucket) => {
                // Credentials come from the standard AWS environment variables.
                let mut builder = AmazonS3Builder::from_env()
                    .with_region(region.clone())
                    .with_bucket_name(bucket.clone());

                if let Some(ref endpoint) = endpoint_url {
                    let allow_http = endpoint.starts_with("http://");
                    builder = builder
                        .with_endpoint(endpoint.clone())
                        .with_allow_http(allow_http);
                }

                Some(
                    builder
                        .build()
                        .map_err(|e| StorageError::ConfigError(e.to_string()))?,
                )
            }
            None => None,
        };

        Ok(S3Storage {
            store,
            bucket,
            region,
            endpoint_url,
        })
    }

    pub fn from_config(config: &StorageConfig) -> StorageResult<Self> {
        Self::new(
            config.bucket.clone(),
            config.region.clone(),
            config.endpoint.clone(),
        )
    }

    /// Generate public URL for S3 object
    ///
    /// For AWS S3, uses the virtual-hosted format: https://{bucket}.s3.{region}.amazonaws.com/{key}
    /// For S3-compatible providers, uses path-style: {endpoint}/{bucket}/{key}
    fn generate_url(&self, bucket: &str, key: &str) -> String {
        object_url(bucket, &self.region, self.endpoint_url.as_deref(), key)
    }
}

/// Public URL of an object; a pure function of bucket, region, endpoint and key.
pub fn object_url(bucket: &str, region: &str, endpoint_url: Option<&str>, key: &str) -> String {
    match endpoint_url {
        Some(endpoint) => format!("{}/{}/{}", endpoint.trim_end_matches('/'), bucket, key),
        None => format!("https://{}.s3.{}.amazonaws.com/{}", bucket, region, key),
    }
}

/// S3 user metadata travels as HTTP headers, so values outside printable ASCII are
/// percent-encoded. Plain ASCII values are stored unchanged.
fn encode_metadata_value(value: &str) -> String {
    if value.chars().all(|c| c == ' ' || c.is_ascii_graphic()) {
        value.to_string()
    } else {
        urlencoding::encode(value).into_owned()
    }
}

fn metadata_attributes(content_type: &str, metadata: &ObjectMetadata) -> Attributes {
    let mut attributes = Attributes::new();
    attributes.insert(
        Attribute::ContentType,
        AttributeValue::from(content_type.to_string()),
    );
    for (name, value) in metadata.to_pairs() {
        attributes.insert(
            Attribute::Metadata(name.into()),
            AttributeValue::from(encode_metadata_value(&value)),
        );
    }
    attributes
}

fn misconfigured() -> StorageError {
    StorageError::Misconfigured {
        backend: "S3",
        missing: vec![BUCKET_ENV_KEY],
    }
}

#[async_trait]
impl Storage for S3Storage {
    fn check_config(&self) -> StorageResult<()> {
        if self.bucket.is_none() || self.store.is_none() {
            return Err(misconfigured());
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
        validate_key(key)?;
        let (store, bucket) = match (&self.store, &self.bucket) {
            (Some(store), Some(bucket)) => (store, bucket),
            _ => {
                return Err(misconfigured())
            }
        };

        let size = data.len() as u64;
        let location = Path::from(key.to_string());
        let options = PutOptions {
            attributes: metadata_attributes(content_type, metadata),
            ..Default::default()
        };

        let start = std::time::Instant::now();

        let result: ObjectResult<_> = store
            .put_opts(&location, PutPayload::from(Bytes::from(data)), options)
            .await;

        result.map_err(|e| {
            tracing::error!(
                error = %e,
                bucket = %bucket,
                key = %key,
                size_bytes = size,
                duration_ms = start.elapsed().as_secs_f64() * 1000.0,
                "S3 upload failed"
            );
            StorageError::UploadFailed(e.to_string())
        })?;

        let url = self.generate_url(bucket, key);

        tracing::info!(
            bucket = %bucket,
            key = %key,
            size_bytes = size,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "S3 upload successful"
        );

        Ok(StorageRecord {
            url,
            bucket: bucket.clone(),
            key: key.to_string(),
        })
    }

    fn backend_type(&self) -> StorageBackend {
        StorageBackend::S3
    }
}
