//! Fixed limits and names of the generation contract.

/// Maximum number of characters accepted in `text`.
pub const MAX_TEXT_LENGTH: usize = 2000;

/// Inclusive pixel bounds for `size`.
pub const MIN_SIZE: u32 = 100;
pub const MAX_SIZE: u32 = 1000;
pub const DEFAULT_SIZE: u32 = 200;

/// Content type of every stored artifact.
pub const PNG_CONTENT_TYPE: &str = "image/png";

/// Value of the `file-type` metadata tag on stored artifacts.
pub const QR_FILE_TYPE: &str = "qr-code";

/// Environment key holding the bucket name.
pub const BUCKET_ENV_KEY: &str = "BUCKET_NAME";

/// Environment key holding the local storage directory.
pub const LOCAL_PATH_ENV_KEY: &str = "LOCAL_STORAGE_PATH";

/// Region used when none is configured.
pub const DEFAULT_REGION: &str = "us-east-1";
