//! qrdrop Core Library
//!
//! This crate provides the domain models, error taxonomy, configuration, and request
//! validation shared by all qrdrop components.

pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod storage_types;
pub mod validation;

// Re-export commonly used types
pub use config::{Config, ServerConfig, StorageConfig};
pub use error::{AppError, ErrorMetadata, LogLevel};
pub use models::{
    ErrorCorrectionLevel, GeneratedArtifact, GenerationResponse, ObjectMetadata, StorageRecord,
    ValidatedParameters,
};
pub use storage_types::StorageBackend;
pub use validation::{validate_generation_request, ValidationError};
