//! Test helpers: build the app router for integration tests.
//!
//! Run from workspace root: `cargo test -p geomedia-api`. No external
//! services are needed; state is in-memory and the default storage backend
//! inlines bytes as data URIs.

use std::sync::Arc;

use axum_test::TestServer;
use geomedia_api::setup::routes::setup_routes;
use geomedia_api::state::AppState;
use geomedia_core::{Config, StorageBackend};
use geomedia_storage::{InlineStorage, LocalStorage, ObjectStorage};
use serde_json::{json, Value};

/// Setup a test app backed by the inline data-URI storage backend.
pub fn setup_test_app() -> TestServer {
    let config = Config::default();
    let storage: Arc<dyn ObjectStorage> = Arc::new(InlineStorage::new());
    build_server(config, storage)
}

/// Setup a test app backed by local filesystem storage rooted in a temp dir.
#[allow(dead_code)] // Not every test binary exercises the local backend
pub async fn setup_test_app_local() -> (TestServer, tempfile::TempDir) {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
    let base_url = "http://localhost:3000/media".to_string();
    let config = Config {
        storage_backend: StorageBackend::Local,
        local_storage_path: Some(temp_dir.path().display().to_string()),
        local_storage_base_url: Some(base_url.clone()),
        ..Config::default()
    };
    let storage: Arc<dyn ObjectStorage> = Arc::new(
        LocalStorage::new(temp_dir.path(), base_url)
            .await
            .expect("Failed to create local storage"),
    );
    (build_server(config, storage), temp_dir)
}

fn build_server(config: Config, storage: Arc<dyn ObjectStorage>) -> TestServer {
    let state = Arc::new(AppState::new(config.clone(), storage));
    let router = setup_routes(&config, state).expect("Failed to build router");
    TestServer::new(router).expect("Failed to create test server")
}

/// Full insertable media body for `POST /api/media`.
#[allow(dead_code)] // Shared across test binaries; not all of them create records
pub fn media_body(title: &str, user_id: Option<&str>, file_size: i64) -> Value {
    json!({
        "title": title,
        "project": "P1",
        "url": "data:image/png;base64,AAAA",
        "storagePath": format!("users/{}/media/1_{}.png", user_id.unwrap_or("global"), title),
        "mimeType": "image/png",
        "fileSize": file_size,
        "lat": 1.0,
        "lng": 2.0,
        "accuracy": 5.0,
        "userId": user_id,
    })
}
