use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use geomedia_core::models::StorageCapacity;

use super::media_get::OwnerQuery;
use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/api/storage/capacity",
    tag = "storage",
    params(
        ("userId" = Option<String>, Query, description = "Restrict to records owned by this user")
    ),
    responses(
        (status = 200, description = "Aggregate usage against the fixed quota", body = StorageCapacity),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn storage_capacity(
    State(state): State<Arc<AppState>>,
    Query(query): Query<OwnerQuery>,
) -> Result<Json<StorageCapacity>, HttpAppError> {
    let usage = state.media.usage(query.user_id.as_deref()).map_err(|e| {
        tracing::error!(error = %e, "Error calculating storage");
        e
    })?;
    Ok(Json(StorageCapacity::from_usage(
        usage,
        state.config.max_storage_bytes,
    )))
}
