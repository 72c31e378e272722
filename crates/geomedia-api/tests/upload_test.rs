//! Multipart upload integration tests.
//!
//! Run with: `cargo test -p geomedia-api --test upload_test`

mod helpers;

use axum::http::StatusCode;
use axum_test::multipart::{MultipartForm, Part};
use helpers::{setup_test_app, setup_test_app_local};
use serde_json::Value;

fn upload_form(file: Option<&'static [u8]>) -> MultipartForm {
    let mut form = MultipartForm::new()
        .add_text("title", "A")
        .add_text("project", "P1")
        .add_text("lat", "1.0")
        .add_text("lng", "2.0")
        .add_text("accuracy", "5.0")
        .add_text("userId", "u1");
    if let Some(data) = file {
        form = form.add_part(
            "file",
            Part::bytes(data).file_name("photo.png").mime_type("image/png"),
        );
    }
    form
}

#[tokio::test]
async fn test_upload_stores_record_and_lists_for_owner() {
    let server = setup_test_app();

    let response = server
        .post("/api/upload")
        .multipart(upload_form(Some(b"0123456789")))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["size"], 10);
    assert!(body["url"]
        .as_str()
        .expect("url")
        .starts_with("data:image/png;base64,"));
    assert!(body["path"]
        .as_str()
        .expect("path")
        .starts_with("users/u1/media/"));

    let media = &body["media"];
    assert_eq!(media["title"], "A");
    assert_eq!(media["project"], "P1");
    assert_eq!(media["fileSize"], 10);
    assert_eq!(media["userId"], "u1");
    assert_eq!(media["lat"], 1.0);
    assert_eq!(media["lng"], 2.0);
    assert_eq!(media["accuracy"], 5.0);
    assert_eq!(media["url"], body["url"]);
    assert_eq!(media["storagePath"], body["path"]);

    // The uploaded record is the only one listed for its owner.
    let records: Vec<Value> = server.get("/api/media?userId=u1").await.json();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["id"], media["id"]);
}

#[tokio::test]
async fn test_upload_without_file_is_400() {
    let server = setup_test_app();

    let response = server.post("/api/upload").multipart(upload_form(None)).await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], "No file uploaded");
}

#[tokio::test]
async fn test_upload_missing_fields_reports_each_field() {
    let server = setup_test_app();

    let form = MultipartForm::new().add_text("project", "P1").add_part(
        "file",
        Part::bytes(b"0123456789".as_slice())
            .file_name("photo.png")
            .mime_type("image/png"),
    );

    let response = server.post("/api/upload").multipart(form).await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    assert_eq!(body["error"], "Missing required fields");
    let details = body["details"].as_array().expect("details array");
    let fields: Vec<&str> = details
        .iter()
        .map(|d| d["field"].as_str().expect("field"))
        .collect();
    for field in ["title", "lat", "lng", "userId"] {
        assert!(fields.contains(&field), "missing problem for {}", field);
    }
    assert!(!fields.contains(&"project"));
}

#[tokio::test]
async fn test_upload_non_numeric_lat_is_400() {
    let server = setup_test_app();

    let form = MultipartForm::new()
        .add_text("title", "A")
        .add_text("project", "P1")
        .add_text("lat", "not-a-number")
        .add_text("lng", "2.0")
        .add_text("userId", "u1")
        .add_part(
            "file",
            Part::bytes(b"0123456789".as_slice())
                .file_name("photo.png")
                .mime_type("image/png"),
        );

    let response = server.post("/api/upload").multipart(form).await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    let details = body["details"].as_array().expect("details array");
    assert!(details.iter().any(|d| d["field"] == "lat"));
}

#[tokio::test]
async fn test_upload_accuracy_is_optional() {
    let server = setup_test_app();

    let form = MultipartForm::new()
        .add_text("title", "A")
        .add_text("project", "P1")
        .add_text("lat", "1.0")
        .add_text("lng", "2.0")
        .add_text("userId", "u1")
        .add_part(
            "file",
            Part::bytes(b"0123456789".as_slice())
                .file_name("photo.png")
                .mime_type("image/png"),
        );

    let response = server.post("/api/upload").multipart(form).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["media"]["accuracy"], Value::Null);
}

#[tokio::test]
async fn test_upload_local_backend_writes_file() {
    let (server, temp_dir) = setup_test_app_local().await;

    let response = server
        .post("/api/upload")
        .multipart(upload_form(Some(b"0123456789")))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    let key = body["path"].as_str().expect("path");
    assert!(body["url"]
        .as_str()
        .expect("url")
        .starts_with("http://localhost:3000/media/users/u1/media/"));

    let on_disk = temp_dir.path().join(key);
    let contents = std::fs::read(&on_disk).expect("uploaded file on disk");
    assert_eq!(contents, b"0123456789");
}
