//! Configuration module
//!
//! Configuration is read once per process (from the environment, after loading an
//! optional `.env` file) and then handed to the storage factory and the API state.
//! Nothing downstream reads environment variables on its own.

use std::collections::HashMap;
use std::env;

use crate::constants::{BUCKET_ENV_KEY, DEFAULT_REGION, LOCAL_PATH_ENV_KEY};
use crate::storage_types::StorageBackend;

const SERVER_PORT: u16 = 4000;
const MAX_REQUEST_BODY_BYTES: usize = 64 * 1024;
const LOCAL_STORAGE_PATH: &str = "./data/qr";
const LOCAL_STORAGE_BASE_URL: &str = "http://localhost:4000/qr";

/// HTTP server settings
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub port: u16,
    pub environment: String,
    pub max_request_body_bytes: usize,
    /// Emit logs as JSON lines instead of the human-readable format
    pub json_logs: bool,
}

/// Object storage settings
///
/// A missing `bucket` does not prevent startup; it is reported per request as a
/// storage misconfiguration.
#[derive(Clone, Debug)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    pub bucket: Option<String>,
    pub region: String,
    pub endpoint: Option<String>, // Custom endpoint for S3-compatible providers (MinIO etc.)
    pub local_path: String,
    pub local_base_url: String,
}

impl StorageConfig {
    /// Names of required configuration keys that are not set.
    pub fn missing_keys(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.backend == StorageBackend::S3 && self.bucket.is_none() {
            missing.push(BUCKET_ENV_KEY);
        }
        missing
    }
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub server: ServerConfig,
    pub storage: StorageConfig,
}

impl Config {
    /// Load configuration from the process environment (and `.env`, if present).
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an explicit key/value map.
    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self, anyhow::Error> {
        Self::from_lookup(|key| vars.get(key).cloned())
    }

    /// Build configuration from an arbitrary lookup function.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, anyhow::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let port = match get("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number"))?,
            None => SERVER_PORT,
        };

        let max_request_body_bytes = get("MAX_REQUEST_BODY_BYTES")
            .and_then(|s| s.parse::<usize>().ok())
            .unwrap_or(MAX_REQUEST_BODY_BYTES);

        let environment = get("ENVIRONMENT")
            .or_else(|| get("APP_ENV"))
            .unwrap_or_else(|| "development".to_string());

        let json_logs = get("LOG_FORMAT")
            .map(|f| f.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        let backend = match get("STORAGE_BACKEND") {
            Some(raw) => raw.parse::<StorageBackend>()?,
            None => StorageBackend::S3,
        };

        let storage = StorageConfig {
            backend,
            bucket: get(BUCKET_ENV_KEY).or_else(|| get("S3_BUCKET")),
            region: get("AWS_REGION")
                .or_else(|| get("S3_REGION"))
                .unwrap_or_else(|| DEFAULT_REGION.to_string()),
            endpoint: get("S3_ENDPOINT"),
            local_path: get(LOCAL_PATH_ENV_KEY).unwrap_or_else(|| LOCAL_STORAGE_PATH.to_string()),
            local_base_url: get("LOCAL_STORAGE_BASE_URL")
                .unwrap_or_else(|| LOCAL_STORAGE_BASE_URL.to_string()),
        };

        Ok(Config {
            server: ServerConfig {
                port,
                environment,
                max_request_body_bytes,
                json_logs,
            },
            storage,
        })
    }

    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        let env = self.server.environment.to_lowercase();
        env == "production" || env == "prod"
    }

    // Convenience getters for common fields
    pub fn server_port(&self) -> u16 {
        self.server.port
    }

    pub fn environment(&self) -> &str {
        &self.server.environment
    }

    pub fn max_request_body_bytes(&self) -> usize {
        self.server.max_request_body_bytes
    }

    pub fn storage_backend(&self) -> StorageBackend {
        self.storage.backend
    }

    pub fn bucket(&self) -> Option<&str> {
        self.storage.bucket.as_deref()
    }

    pub fn region(&self) -> &str {
        &self.storage.region
    }
}
