//! Route configuration and setup.

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method},
    routing::{delete, get, post, put},
    Json, Router,
};
use geomedia_core::constants::API_PREFIX;
use geomedia_core::Config;
use tower::limit::ConcurrencyLimitLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

use crate::api_doc;
use crate::handlers;
use crate::state::AppState;

/// Setup all application routes
pub fn setup_routes(config: &Config, state: Arc<AppState>) -> Result<Router, anyhow::Error> {
    let cors = setup_cors(config)?;

    let http_concurrency_limit = std::env::var("HTTP_CONCURRENCY_LIMIT")
        .ok()
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(10_000)
        .max(1);

    let app = media_routes(state.clone())
        .merge(upload_routes(state.clone()))
        .merge(storage_routes(state.clone()))
        .merge(user_routes(state))
        .merge(docs_routes())
        .merge(health_routes())
        .layer(ConcurrencyLimitLayer::new(http_concurrency_limit))
        .layer(RequestBodyLimitLayer::new(config.max_upload_size_bytes))
        .layer(DefaultBodyLimit::disable())
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    Ok(app)
}

fn setup_cors(config: &Config) -> Result<CorsLayer, anyhow::Error> {
    if config.cors_origins.iter().any(|origin| origin == "*") {
        return Ok(CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any));
    }

    let origins = config
        .cors_origins
        .iter()
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .map_err(|e| anyhow::anyhow!("Invalid CORS origin {}: {}", origin, e))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any))
}

fn media_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            &format!("{}/media", API_PREFIX),
            post(handlers::media_create::create_media).get(handlers::media_get::list_media),
        )
        .route(
            &format!("{}/media/{{id}}", API_PREFIX),
            get(handlers::media_get::get_media),
        )
        .route(
            &format!("{}/media/{{id}}", API_PREFIX),
            put(handlers::media_update::update_media),
        )
        .route(
            &format!("{}/media/{{id}}", API_PREFIX),
            delete(handlers::media_delete::delete_media),
        )
        .with_state(state)
}

fn upload_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            &format!("{}/upload", API_PREFIX),
            post(handlers::upload::upload_media),
        )
        .with_state(state)
}

fn storage_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            &format!("{}/storage/capacity", API_PREFIX),
            get(handlers::capacity::storage_capacity),
        )
        .with_state(state)
}

fn user_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            &format!("{}/users", API_PREFIX),
            post(handlers::users::register_user),
        )
        .route(
            &format!("{}/users/{{id}}", API_PREFIX),
            get(handlers::users::get_user),
        )
        .with_state(state)
}

fn docs_routes() -> Router {
    Router::new().route(
        &format!("{}/openapi.json", API_PREFIX),
        get(|| async { Json(api_doc::get_openapi_spec()) }),
    )
}

fn health_routes() -> Router {
    Router::new().route(
        "/health",
        get(|| async { Json(serde_json::json!({"status": "ok"})) }),
    )
}
