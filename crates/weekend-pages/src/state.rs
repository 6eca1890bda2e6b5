//! Application state shared across all request handlers.

use std::sync::Arc;

use crate::config::Config;
use crate::store::{PageStore, RestStore};

/// Shared application state available to all request handlers.
///
/// Holds no per-request or mutable data.
#[derive(Clone)]
pub struct AppState {
    /// Row store used for slug lookups.
    pub store: Arc<dyn PageStore>,

    /// Application configuration.
    pub config: Arc<Config>,
}

impl AppState {
    /// Create application state backed by the Supabase REST store.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let store = RestStore::from_config(&config)?;
        Ok(Self::with_store(config, Arc::new(store)))
    }

    /// Create application state around an existing store.
    pub fn with_store(config: Config, store: Arc<dyn PageStore>) -> Self {
        tracing::info!(
            store = store.name(),
            tables = config.tables.len(),
            debug_mode = config.debug_mode,
            "application state initialized"
        );

        Self {
            store,
            config: Arc::new(config),
        }
    }
}
