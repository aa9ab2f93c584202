//! Application state shared across handlers

use traceup_core::Config;
use traceup_storage::LocalStorage;

/// Application state
///
/// Holds the configuration and the opened storage directory. Wrapped in an
/// `Arc` and handed to handlers through axum's `State` extractor.
pub struct AppState {
    pub config: Config,
    pub storage: LocalStorage,
}

impl AppState {
    pub fn new(config: Config, storage: LocalStorage) -> Self {
        Self { config, storage }
    }
}
