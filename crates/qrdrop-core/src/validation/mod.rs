//! Validation modules

pub mod request;

pub use request::{validate_generation_request, ValidationError};
