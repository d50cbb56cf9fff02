//! qrdrop Storage Library
//!
//! This crate provides the storage abstraction for generated QR artifacts and its
//! implementations for S3 (and S3-compatible providers) and the local filesystem.
//!
//! # Storage key format
//!
//! Artifacts live at the top level of the bucket (or storage directory) under their
//! generated filename, `qr-{timestamp}-{uuid}.png`. No prefix structure is imposed.
//! Keys must not contain `..` or a leading `/`. Key generation is centralized in the
//! `keys` module so all backends stay consistent.

pub mod factory;
pub mod keys;
#[cfg(feature = "storage-local")]
pub mod local;
#[cfg(feature = "storage-s3")]
pub mod s3;
pub mod traits;

// Re-export commonly used types
pub use factory::create_storage;
pub use keys::generate_artifact_filename;
#[cfg(feature = "storage-local")]
pub use local::LocalStorage;
pub use qrdrop_core::StorageBackend;
#[cfg(feature = "storage-s3")]
pub use s3::S3Storage;
pub use traits::{Storage, StorageError, StorageResult};
