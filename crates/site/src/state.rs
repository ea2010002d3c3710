//! Application state shared across handlers.

use std::sync::Arc;

use tides_core::WeddingStore;

use crate::config::SiteConfig;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// configuration and the wedding store.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: SiteConfig,
    store: WeddingStore,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Arguments
    ///
    /// * `config` - Site configuration
    /// * `store` - The wedding store every handler reads and appends to
    #[must_use]
    pub fn new(config: SiteConfig, store: WeddingStore) -> Self {
        Self {
            inner: Arc::new(AppStateInner { config, store }),
        }
    }

    /// Get a reference to the site configuration.
    #[must_use]
    pub fn config(&self) -> &SiteConfig {
        &self.inner.config
    }

    /// Get a reference to the wedding store.
    #[must_use]
    pub fn store(&self) -> &WeddingStore {
        &self.inner.store
    }
}
