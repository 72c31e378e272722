//! User registration and lookup.

use std::sync::Arc;

use argon2::password_hash::SaltString;
use argon2::{Argon2, PasswordHasher};
use axum::{
    extract::{Path, State},
    Json,
};
use geomedia_core::models::{NewUser, RegisterUserRequest, User};
use geomedia_core::AppError;
use rand_core::OsRng;
use validator::Validate;

use super::parse_opaque_id;
use crate::error::{ErrorResponse, HttpAppError, ValidatedJson};
use crate::state::AppState;

/// Hash a password with Argon2id and a fresh random salt.
fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::Internal(format!("Password hashing failed: {}", e)))
}

#[utoipa::path(
    post,
    path = "/api/users",
    tag = "users",
    request_body = RegisterUserRequest,
    responses(
        (status = 200, description = "User registered", body = User),
        (status = 400, description = "Invalid registration data or username taken", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, req), fields(operation = "register_user"))]
pub async fn register_user(
    State(state): State<Arc<AppState>>,
    ValidatedJson(req): ValidatedJson<RegisterUserRequest>,
) -> Result<Json<User>, HttpAppError> {
    req.validate().map_err(AppError::from)?;

    let password_hash = hash_password(&req.password)?;
    let user = state
        .users
        .create(NewUser {
            username: req.username,
            password_hash,
        })
        .map_err(|e| {
            tracing::debug!(error = %e, "Error registering user");
            e
        })?;
    Ok(Json(user))
}

#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = "users",
    params(
        ("id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User found", body = User),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<User>, HttpAppError> {
    let user = match parse_opaque_id(&id) {
        Some(id) => state.users.get(id).map_err(|e| {
            tracing::error!(error = %e, user_id = %id, "Error fetching user");
            e
        })?,
        None => None,
    };
    let user = user.ok_or_else(|| AppError::NotFound("User not found".to_string()))?;
    Ok(Json(user))
}
