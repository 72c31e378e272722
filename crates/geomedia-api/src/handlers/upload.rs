//! Multipart upload handler.
//!
//! Accepts one file plus the descriptive form fields, pushes the bytes
//! through the configured object storage backend, and inserts the resulting
//! record through the same validation path as `POST /api/media`.

use std::sync::Arc;

use axum::{
    extract::{Multipart, State},
    Json,
};
use chrono::Utc;
use geomedia_core::models::{CreateMediaRequest, MediaRecord};
use geomedia_core::{validation, AppError, FieldError};
use geomedia_storage::upload_key;
use serde::Serialize;
use utoipa::ToSchema;

use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;

/// Response for `POST /api/upload`: the stored record plus computed
/// location/size metadata.
#[derive(Debug, Serialize, ToSchema)]
pub struct UploadResponse {
    pub success: bool,
    pub media: MediaRecord,
    pub url: String,
    pub path: String,
    pub size: i64,
}

#[derive(Debug, Default)]
struct UploadForm {
    file: Option<UploadedFile>,
    title: Option<String>,
    project: Option<String>,
    lat: Option<String>,
    lng: Option<String>,
    accuracy: Option<String>,
    user_id: Option<String>,
}

#[derive(Debug)]
struct UploadedFile {
    filename: String,
    content_type: String,
    data: Vec<u8>,
}

async fn read_form(mut multipart: Multipart) -> Result<UploadForm, AppError> {
    let mut form = UploadForm::default();
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Invalid multipart body: {}", e)))?
    {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };
        match name.as_str() {
            "file" => {
                let filename = field
                    .file_name()
                    .map(str::to_string)
                    .unwrap_or_else(|| "upload.bin".to_string());
                let content_type = field
                    .content_type()
                    .map(str::to_string)
                    .unwrap_or_else(|| "application/octet-stream".to_string());
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(format!("Failed to read file: {}", e)))?
                    .to_vec();
                form.file = Some(UploadedFile {
                    filename,
                    content_type,
                    data,
                });
            }
            "title" => form.title = field.text().await.ok(),
            "project" => form.project = field.text().await.ok(),
            "lat" => form.lat = field.text().await.ok(),
            "lng" => form.lng = field.text().await.ok(),
            "accuracy" => form.accuracy = field.text().await.ok(),
            "userId" => form.user_id = field.text().await.ok(),
            // Unknown extra fields are ignored, not rejected.
            _ => {}
        }
    }
    Ok(form)
}

fn require_form_text(
    field: &str,
    value: Option<String>,
    problems: &mut Vec<FieldError>,
) -> Option<String> {
    match value {
        Some(s) if !s.is_empty() => Some(s),
        _ => {
            problems.push(FieldError::new(field, format!("{} is required", field)));
            None
        }
    }
}

fn parse_form_number(
    field: &str,
    value: Option<String>,
    problems: &mut Vec<FieldError>,
) -> Option<f64> {
    match value.as_deref() {
        None | Some("") => {
            problems.push(FieldError::new(field, format!("{} is required", field)));
            None
        }
        Some(raw) => match raw.parse::<f64>() {
            Ok(v) if v.is_finite() => Some(v),
            _ => {
                problems.push(FieldError::new(
                    field,
                    format!("{} must be a finite number", field),
                ));
                None
            }
        },
    }
}

#[utoipa::path(
    post,
    path = "/api/upload",
    tag = "upload",
    responses(
        (status = 200, description = "File uploaded and record stored", body = UploadResponse),
        (status = 400, description = "Missing file or form field", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, multipart), fields(operation = "upload_media"))]
pub async fn upload_media(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<Json<UploadResponse>, HttpAppError> {
    let form = read_form(multipart).await?;

    let Some(file) = form.file else {
        return Err(AppError::BadRequest("No file uploaded".to_string()).into());
    };

    let mut problems = Vec::new();
    let title = require_form_text("title", form.title, &mut problems);
    let project = require_form_text("project", form.project, &mut problems);
    let lat = parse_form_number("lat", form.lat, &mut problems);
    let lng = parse_form_number("lng", form.lng, &mut problems);
    let user_id = require_form_text("userId", form.user_id, &mut problems);
    // accuracy is optional on upload, but must be a number when supplied
    let accuracy = match form.accuracy.as_deref() {
        None | Some("") => None,
        Some(raw) => match raw.parse::<f64>() {
            Ok(v) if v.is_finite() => Some(v),
            _ => {
                problems.push(FieldError::new(
                    "accuracy",
                    "accuracy must be a finite number",
                ));
                None
            }
        },
    };
    if !problems.is_empty() {
        let message = if problems.iter().any(|p| p.message.ends_with("is required")) {
            "Missing required fields"
        } else {
            "Invalid media data"
        };
        return Err(AppError::validation(message, problems).into());
    }

    let size = file.data.len() as i64;
    let user_id = user_id.unwrap_or_default();
    let key = upload_key(&user_id, &file.filename, Utc::now());

    let url = state
        .storage
        .put(&key, &file.content_type, file.data)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, key = %key, "Upload error");
            HttpAppError::from(e)
        })?;

    // Same validation path as POST /api/media, so the stored record obeys
    // the full-create contract regardless of which route produced it.
    let candidate = CreateMediaRequest {
        title,
        project,
        url: Some(url.clone()),
        storage_path: Some(key.clone()),
        mime_type: Some(file.content_type),
        file_size: Some(size),
        lat,
        lng,
        accuracy,
        user_id: Some(user_id),
    };
    let new_media = validation::validate_create(candidate)?;
    let media = state.media.create(new_media).map_err(|e| {
        tracing::error!(error = %e, "Upload error");
        e
    })?;

    Ok(Json(UploadResponse {
        success: true,
        media,
        url,
        path: key,
        size,
    }))
}
