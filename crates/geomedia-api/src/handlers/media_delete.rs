use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use geomedia_core::AppError;
use geomedia_storage::StorageError;
use serde::Serialize;
use utoipa::ToSchema;

use super::parse_opaque_id;
use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteResponse {
    pub success: bool,
}

#[utoipa::path(
    delete,
    path = "/api/media/{id}",
    tag = "media",
    params(
        ("id" = String, Path, description = "Media ID")
    ),
    responses(
        (status = 200, description = "Media deleted", body = DeleteResponse),
        (status = 404, description = "Media not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state), fields(operation = "delete_media", media_id = %id))]
pub async fn delete_media(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, HttpAppError> {
    let Some(id) = parse_opaque_id(&id) else {
        return Err(AppError::NotFound("Media not found".to_string()).into());
    };

    // Best-effort cleanup of the backing object before dropping the record;
    // a missing object must not block record deletion.
    let record = state.media.get(id).map_err(|e| {
        tracing::error!(error = %e, media_id = %id, "Error deleting media");
        e
    })?;
    if let Some(key) = record.and_then(|r| r.storage_path) {
        match state.storage.delete(&key).await {
            Ok(()) | Err(StorageError::NotFound(_)) => {}
            Err(e) => {
                tracing::warn!(error = %e, key = %key, "Failed to delete backing object");
            }
        }
    }

    let deleted = state.media.delete(id).map_err(|e| {
        tracing::error!(error = %e, media_id = %id, "Error deleting media");
        e
    })?;
    if !deleted {
        return Err(AppError::NotFound("Media not found".to_string()).into());
    }
    Ok(Json(DeleteResponse { success: true }))
}
