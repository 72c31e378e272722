//! User registration integration tests.
//!
//! Run with: `cargo test -p geomedia-api --test users_test`

mod helpers;

use axum::http::StatusCode;
use helpers::setup_test_app;
use serde_json::{json, Value};

#[tokio::test]
async fn test_register_returns_user_without_credentials() {
    let server = setup_test_app();

    let response = server
        .post("/api/users")
        .json(&json!({"username": "alice", "password": "correct-horse"}))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let user: Value = response.json();
    assert_eq!(user["username"], "alice");
    assert!(user["id"].as_str().is_some());
    assert!(user["createdAt"].as_str().is_some());
    // Neither the password nor its hash may appear in the response.
    assert!(user.get("password").is_none());
    assert!(user.get("passwordHash").is_none());
}

#[tokio::test]
async fn test_register_then_fetch_by_id() {
    let server = setup_test_app();

    let user: Value = server
        .post("/api/users")
        .json(&json!({"username": "alice", "password": "correct-horse"}))
        .await
        .json();
    let id = user["id"].as_str().expect("id").to_string();

    let response = server.get(&format!("/api/users/{}", id)).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let fetched: Value = response.json();
    assert_eq!(fetched["username"], "alice");
}

#[tokio::test]
async fn test_duplicate_username_is_rejected() {
    let server = setup_test_app();

    let response = server
        .post("/api/users")
        .json(&json!({"username": "alice", "password": "correct-horse"}))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let response = server
        .post("/api/users")
        .json(&json!({"username": "alice", "password": "battery-staple"}))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], "Username already taken");
}

#[tokio::test]
async fn test_short_password_reports_field() {
    let server = setup_test_app();

    let response = server
        .post("/api/users")
        .json(&json!({"username": "alice", "password": "short"}))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    let details = body["details"].as_array().expect("details array");
    assert!(details.iter().any(|d| d["field"] == "password"));
}

#[tokio::test]
async fn test_unknown_user_is_404() {
    let server = setup_test_app();

    let response = server.get("/api/users/nonexistent-id").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["error"], "User not found");
}
