use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use geomedia_core::models::MediaRecord;
use geomedia_core::AppError;
use serde::Deserialize;

use super::parse_opaque_id;
use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;

/// Optional owner scope for listings and the capacity report.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerQuery {
    pub user_id: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/media",
    tag = "media",
    params(
        ("userId" = Option<String>, Query, description = "Restrict to records owned by this user")
    ),
    responses(
        (status = 200, description = "Records, newest first", body = [MediaRecord]),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn list_media(
    State(state): State<Arc<AppState>>,
    Query(query): Query<OwnerQuery>,
) -> Result<Json<Vec<MediaRecord>>, HttpAppError> {
    let records = state
        .media
        .list_by_owner(query.user_id.as_deref())
        .map_err(|e| {
            tracing::error!(error = %e, "Error fetching media");
            e
        })?;
    Ok(Json(records))
}

#[utoipa::path(
    get,
    path = "/api/media/{id}",
    tag = "media",
    params(
        ("id" = String, Path, description = "Media ID")
    ),
    responses(
        (status = 200, description = "Media found", body = MediaRecord),
        (status = 404, description = "Media not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_media(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<MediaRecord>, HttpAppError> {
    let record = match parse_opaque_id(&id) {
        Some(id) => state.media.get(id).map_err(|e| {
            tracing::error!(error = %e, media_id = %id, "Error fetching media");
            e
        })?,
        None => None,
    };
    let record = record.ok_or_else(|| AppError::NotFound("Media not found".to_string()))?;
    Ok(Json(record))
}
