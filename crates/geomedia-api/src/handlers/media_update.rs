use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use geomedia_core::models::{MediaRecord, UpdateMediaRequest};
use geomedia_core::{validation, AppError};

use super::parse_opaque_id;
use crate::error::{ErrorResponse, HttpAppError, ValidatedJson};
use crate::state::AppState;

#[utoipa::path(
    put,
    path = "/api/media/{id}",
    tag = "media",
    request_body = UpdateMediaRequest,
    params(
        ("id" = String, Path, description = "Media ID")
    ),
    responses(
        (status = 200, description = "Updated record", body = MediaRecord),
        (status = 400, description = "Invalid media data", body = ErrorResponse),
        (status = 404, description = "Media not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, req), fields(operation = "update_media", media_id = %id))]
pub async fn update_media(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    ValidatedJson(req): ValidatedJson<UpdateMediaRequest>,
) -> Result<Json<MediaRecord>, HttpAppError> {
    let patch = validation::validate_update(req)?;
    let record = match parse_opaque_id(&id) {
        Some(id) => state.media.update(id, &patch).map_err(|e| {
            tracing::error!(error = %e, media_id = %id, "Error updating media");
            e
        })?,
        None => None,
    };
    let record = record.ok_or_else(|| AppError::NotFound("Media not found".to_string()))?;
    Ok(Json(record))
}
