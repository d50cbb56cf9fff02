//! Route paths and fixed response headers

pub const GENERATE_PATH: &str = "/generate";
pub const HEALTH_PATH: &str = "/health";

pub const CORS_ALLOW_ORIGIN: &str = "*";
pub const CORS_ALLOW_HEADERS: &str =
    "Content-Type,X-Amz-Date,Authorization,X-Api-Key,X-Amz-Security-Token";
pub const CORS_ALLOW_METHODS: &str = "POST,OPTIONS";

pub const PREFLIGHT_MESSAGE: &str = "CORS preflight successful";

pub const SERVICE_NAME: &str = "qrdrop-api";
