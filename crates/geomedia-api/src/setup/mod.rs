//! Application setup: storage backend, shared state, routes, server.

pub mod routes;
pub mod server;

use std::sync::Arc;

use axum::Router;
use geomedia_core::Config;
use geomedia_storage::create_storage;

use crate::state::AppState;

/// Initialize the application: construct the storage backend and shared
/// state, then build the router.
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, Router), anyhow::Error> {
    let storage = create_storage(&config)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to initialize storage backend: {}", e))?;
    tracing::info!(backend = %storage.backend_type(), "Object storage ready");

    let state = Arc::new(AppState::new(config.clone(), storage));
    let router = routes::setup_routes(&config, state.clone())?;

    Ok((state, router))
}
