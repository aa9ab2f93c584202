//! Application setup and initialization

pub mod routes;
pub mod server;

use std::sync::Arc;

use anyhow::{Context, Result};
use traceup_core::Config;
use traceup_storage::LocalStorage;

use crate::state::AppState;

/// Initialize the application: validate configuration, open storage, build
/// the router.
pub fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    config
        .validate()
        .context("Configuration validation failed")?;

    // The storage directory is provisioned by the operator; fail fast when
    // it is absent instead of erroring on the first upload.
    let storage = LocalStorage::open(&config.storage_dir).with_context(|| {
        format!(
            "Storage directory {} must exist and be a directory",
            config.storage_dir.display()
        )
    })?;

    let state = Arc::new(AppState::new(config, storage));
    let router = routes::setup_routes(state.clone());

    Ok((state, router))
}
