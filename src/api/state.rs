//! Application state for the rental engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::CatalogLoader;
use crate::store::InMemoryStore;

/// Shared application state.
///
/// Contains resources that are shared across all request handlers:
/// the loaded fleet catalog and the repository store.
#[derive(Clone)]
pub struct AppState {
    /// The loaded fleet catalog.
    catalog: Arc<CatalogLoader>,
    /// The repository store backing leads, quotations, and jobs.
    store: Arc<InMemoryStore>,
}

impl AppState {
    /// Creates a new application state with the given catalog and an
    /// empty store.
    pub fn new(catalog: CatalogLoader) -> Self {
        Self {
            catalog: Arc::new(catalog),
            store: Arc::new(InMemoryStore::new()),
        }
    }

    /// Returns a reference to the fleet catalog.
    pub fn catalog(&self) -> &CatalogLoader {
        &self.catalog
    }

    /// Returns a reference to the repository store.
    pub fn store(&self) -> &InMemoryStore {
        &self.store
    }
}
