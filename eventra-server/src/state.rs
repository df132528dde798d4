use std::sync::Arc;

use eventra_core::{MemStorage, Storage};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<dyn Storage>,
}

impl AppState {
    pub fn new(storage: impl Storage + 'static) -> Self {
        AppState {
            storage: Arc::new(storage),
        }
    }

    /// Fresh, empty in-memory storage.
    pub fn in_memory() -> Self {
        Self::new(MemStorage::new())
    }
}
