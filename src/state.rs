// src/state.rs
// Application state shared across handlers

use std::sync::Arc;

use crate::project::store::ProjectStore;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub project_store: Arc<ProjectStore>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            project_store: Arc::new(ProjectStore::new()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
