//! Test helpers: build AppState and router for integration tests.
//!
//! Run from workspace root: `cargo test -p qrdrop-api`.

pub mod storage;

use axum_test::TestServer;
use qrdrop_api::setup::routes;
use qrdrop_api::{AppState, GenerationService};
use qrdrop_core::Config;
use qrdrop_processing::{Encoder, QrPngEncoder};
use qrdrop_storage::{LocalStorage, Storage};
use std::collections::HashMap;
use std::sync::Arc;
use tempfile::TempDir;

pub use storage::{FailingEncoder, MemoryStorage};

pub const GENERATE: &str = "/generate";

/// Test application: server plus the resources it owns.
pub struct TestApp {
    pub server: TestServer,
    pub _temp_dir: Option<TempDir>,
}

impl TestApp {
    pub fn client(&self) -> &TestServer {
        &self.server
    }
}

pub fn test_config(pairs: &[(&str, &str)]) -> Config {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    Config::from_vars(&vars).expect("Failed to build test config")
}

/// Router over the given encoder and storage, served in-process.
pub fn build_server(
    config: Config,
    encoder: Arc<dyn Encoder>,
    storage: Arc<dyn Storage>,
) -> TestServer {
    let generation = GenerationService::new(encoder, storage);
    let state = Arc::new(AppState::new(generation));
    let app = routes::setup_routes(&config, state);
    TestServer::new(app.into_make_service()).expect("Failed to create test server")
}

/// Real encoder, in-memory storage.
pub fn setup_test_app(storage: Arc<MemoryStorage>) -> TestApp {
    let config = test_config(&[("BUCKET_NAME", "qr-bucket"), ("AWS_REGION", "us-east-1")]);
    TestApp {
        server: build_server(config, Arc::new(QrPngEncoder::default()), storage),
        _temp_dir: None,
    }
}

/// Real encoder, local filesystem storage in a temp directory.
pub async fn setup_local_app() -> TestApp {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
    let storage: Arc<dyn Storage> = Arc::new(
        LocalStorage::new(
            temp_dir.path().to_path_buf(),
            "http://localhost:4000/qr".to_string(),
        )
        .await
        .expect("Failed to create local storage"),
    );
    let config = test_config(&[("STORAGE_BACKEND", "local")]);

    TestApp {
        server: build_server(config, Arc::new(QrPngEncoder::default()), storage),
        _temp_dir: Some(temp_dir),
    }
}
