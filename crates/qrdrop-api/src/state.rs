//! Application state shared across handlers

use crate::services::GenerationService;

/// Immutable per-process state; handlers receive it as `State<Arc<AppState>>`.
#[derive(Clone)]
pub struct AppState {
    pub generation: GenerationService,
}

impl AppState {
    pub fn new(generation: GenerationService) -> Self {
        Self { generation }
    }
}
