//! Application state shared across all request handlers.

use std::sync::Arc;

use crate::store::{ConversationStore, StoreConfig, SupabaseStore};

/// Shared application state.
pub struct AppState {
    /// Backing store for conversation queries.
    pub store: Arc<dyn ConversationStore>,
}

impl AppState {
    /// Create application state backed by the hosted conversation table.
    ///
    /// # Errors
    /// Returns an error if the store cannot be created from the
    /// configuration.
    pub fn from_config(
        config: StoreConfig,
    ) -> Result<Arc<Self>, Box<dyn std::error::Error + Send + Sync>> {
        let store = SupabaseStore::new(config)
            .map_err(|e| format!("Failed to create conversation store: {e}"))?;

        Ok(Arc::new(Self {
            store: Arc::new(store),
        }))
    }

    /// Create application state around an existing store.
    #[must_use]
    pub fn with_store(store: Arc<dyn ConversationStore>) -> Arc<Self> {
        Arc::new(Self { store })
    }
}
