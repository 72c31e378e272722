use std::sync::Arc;

use axum::{extract::State, Json};
use geomedia_core::models::{CreateMediaRequest, MediaRecord};
use geomedia_core::validation;

use crate::error::{ErrorResponse, HttpAppError, ValidatedJson};
use crate::state::AppState;

#[utoipa::path(
    post,
    path = "/api/media",
    tag = "media",
    request_body = CreateMediaRequest,
    responses(
        (status = 200, description = "Record stored", body = MediaRecord),
        (status = 400, description = "Invalid media data", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, req), fields(operation = "create_media"))]
pub async fn create_media(
    State(state): State<Arc<AppState>>,
    ValidatedJson(req): ValidatedJson<CreateMediaRequest>,
) -> Result<Json<MediaRecord>, HttpAppError> {
    let new_media = validation::validate_create(req)?;
    let record = state.media.create(new_media).map_err(|e| {
        tracing::error!(error = %e, "Error creating media");
        e
    })?;
    Ok(Json(record))
}
