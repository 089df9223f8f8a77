// src/state.rs - Shared state for HTTP handlers

use std::sync::Arc;

use crate::interview::InterviewManager;
use crate::store::SessionStore;

/// Application state handed to every handler via axum's `State` extractor.
#[derive(Clone)]
pub struct AppState {
    pub manager: Arc<InterviewManager>,
}

impl AppState {
    pub fn new(manager: Arc<InterviewManager>) -> Self {
        Self { manager }
    }

    /// Build state directly from a session store.
    pub fn with_store(store: Arc<dyn SessionStore>) -> Self {
        Self::new(Arc::new(InterviewManager::new(store)))
    }
}
