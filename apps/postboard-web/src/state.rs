//! Application state - shared across all handlers.

use std::sync::Arc;

use postboard_core::PostStore;
use postboard_infra::InMemoryPostStore;

use crate::config::AppConfig;
use crate::view::ViewController;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn PostStore>,
    pub view: Arc<ViewController>,
}

impl AppState {
    /// Wire the view controller to a store.
    pub fn with_store(store: Arc<dyn PostStore>) -> Self {
        let view = Arc::new(ViewController::new(store.clone()));
        Self { store, view }
    }

    /// Build the application state from configuration.
    pub fn new(config: &AppConfig) -> Self {
        let store: Arc<dyn PostStore> = if config.seed_posts {
            Arc::new(InMemoryPostStore::seeded(config.latency))
        } else {
            tracing::info!("SEED_POSTS disabled - starting with an empty store");
            Arc::new(InMemoryPostStore::new(config.latency))
        };

        tracing::info!(
            list_latency = ?config.latency.list,
            op_latency = ?config.latency.op,
            "Application state initialized"
        );

        Self::with_store(store)
    }
}
