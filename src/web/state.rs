//! Shared application state for the web layer.

use crate::store::TaskStore;

/// State injected into every handler.
///
/// Cloned per request by axum; [`TaskStore`] is a thin wrapper around the
/// shared `PgPool`, so clones are cheap.
#[derive(Debug, Clone)]
pub struct AppState {
    pub store: TaskStore,
}

impl AppState {
    /// Build state around a constructed store
    pub fn new(store: TaskStore) -> Self {
        Self { store }
    }
}
