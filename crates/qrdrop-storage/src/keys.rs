//! Shared key generation for storage backends.
//!
//! Key format: `qr-{timestamp}-{uuid}.png` at the bucket root, where `timestamp` is the
//! ISO-8601 generation time with `:` and `.` replaced by `-`.

use crate::{StorageError, StorageResult};
use chrono::{DateTime, Utc};
use qrdrop_core::models::format_timestamp;
use uuid::Uuid;

/// Generate a fresh artifact filename for the current instant.
pub fn generate_artifact_filename() -> String {
    artifact_filename_at(Utc::now(), Uuid::new_v4())
}

/// Build the artifact filename for a given instant and random identifier.
///
/// The random identifier is what keeps concurrent requests with identical
/// parameters from colliding; the timestamp only makes keys sortable.
pub fn artifact_filename_at(at: DateTime<Utc>, id: Uuid) -> String {
    let timestamp = format_timestamp(at).replace([':', '.'], "-");
    format!("qr-{}-{}.png", timestamp, id)
}

/// Reject keys that could escape the bucket root or storage directory.
pub fn validate_key(key: &str) -> StorageResult<()> {
    if key.is_empty() {
        return Err(StorageError::InvalidKey("Storage key is empty".to_string()));
    }
    if key.contains("..") || key.starts_with('/') || key.contains('\\') {
        return Err(StorageError::InvalidKey(
            "Storage key contains invalid characters".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn filename_replaces_separators_in_timestamp() {
        let at = DateTime::parse_from_rfc3339("2024-05-01T10:20:30.123Z")
            .unwrap()
            .with_timezone(&Utc);
        let id = Uuid::parse_str("3f0c6a52-1b1e-4c59-9d43-5a3c8f1f7e01").unwrap();

        assert_eq!(
            artifact_filename_at(at, id),
            "qr-2024-05-01T10-20-30-123Z-3f0c6a52-1b1e-4c59-9d43-5a3c8f1f7e01.png"
        );
    }

    #[test]
    fn filenames_in_same_millisecond_are_distinct() {
        let at = Utc::now();
        let names: HashSet<String> = (0..1000)
            .map(|_| artifact_filename_at(at, Uuid::new_v4()))
            .collect();
        assert_eq!(names.len(), 1000);
    }

    #[test]
    fn generated_filename_is_a_valid_key() {
        let name = generate_artifact_filename();
        assert!(name.starts_with("qr-"));
        assert!(name.ends_with(".png"));
        assert!(!name.contains(':'));
        assert!(validate_key(&name).is_ok());
    }

    #[test]
    fn validate_key_rejects_path_traversal() {
        assert!(validate_key("..").is_err());
        assert!(validate_key("foo/../bar").is_err());
        assert!(validate_key("/etc/passwd").is_err());
        assert!(validate_key("").is_err());
    }
}
