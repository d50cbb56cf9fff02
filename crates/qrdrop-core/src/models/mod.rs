pub mod generation;
pub mod response;

pub use generation::{
    format_timestamp, ErrorCorrectionLevel, GeneratedArtifact, ObjectMetadata, StorageRecord,
    ValidatedParameters,
};
pub use response::{GenerationFailure, GenerationResponse, GenerationSuccess};
