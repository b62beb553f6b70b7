//! Application state for the web layer.

use std::sync::Arc;

use crate::dataset::Dataset;

/// Shared application state.
///
/// The dataset is never mutated after startup, so handlers share it
/// without locking.
#[derive(Clone)]
pub struct AppState {
    pub dataset: Arc<Dataset>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(dataset: Dataset) -> Self {
        Self {
            dataset: Arc::new(dataset),
        }
    }
}
