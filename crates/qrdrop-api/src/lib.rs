//! qrdrop API Library
//!
//! HTTP surface of the QR generation service: the `/generate` handler, the
//! generation coordinator, error shaping and application setup.

pub mod constants;
pub mod error;
mod handlers;
pub mod services;
pub mod setup;
pub mod state;

pub use error::HttpAppError;
pub use services::GenerationService;
pub use state::AppState;
