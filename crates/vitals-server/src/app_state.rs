//! Shared application state.
//!
//! One `MetricStore` per process, shared by every request handler through a
//! cheap clone of this handle.

use std::sync::Arc;

use crate::store::MetricStore;

#[derive(Clone, Default)]
pub struct AppState {
    store: Arc<MetricStore>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            store: Arc::new(MetricStore::new()),
        }
    }

    pub fn store(&self) -> &MetricStore {
        &self.store
    }
}
