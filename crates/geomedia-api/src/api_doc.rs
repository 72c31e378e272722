//! OpenAPI documentation.
//!
//! Served as plain JSON at `/api/openapi.json`.

use utoipa::OpenApi;

use crate::handlers;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Geomedia API",
        version = "0.1.0",
        description = "CRUD backend for geotagged media uploads: multipart upload, record management, and aggregate storage capacity against a fixed quota."
    ),
    paths(
        handlers::upload::upload_media,
        handlers::media_create::create_media,
        handlers::media_get::list_media,
        handlers::media_get::get_media,
        handlers::media_update::update_media,
        handlers::media_delete::delete_media,
        handlers::capacity::storage_capacity,
        handlers::users::register_user,
        handlers::users::get_user,
    ),
    components(schemas(
        geomedia_core::models::MediaRecord,
        geomedia_core::models::CreateMediaRequest,
        geomedia_core::models::UpdateMediaRequest,
        geomedia_core::models::StorageCapacity,
        geomedia_core::models::User,
        geomedia_core::models::RegisterUserRequest,
        geomedia_core::FieldError,
        crate::error::ErrorResponse,
        crate::handlers::upload::UploadResponse,
        crate::handlers::media_delete::DeleteResponse,
    )),
    tags(
        (name = "upload", description = "Multipart file upload"),
        (name = "media", description = "Media record CRUD"),
        (name = "storage", description = "Storage capacity"),
        (name = "users", description = "User registration and lookup")
    )
)]
pub struct ApiDoc;

/// Returns the OpenAPI spec.
pub fn get_openapi_spec() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spec_lists_every_route() {
        let spec = get_openapi_spec();
        for path in [
            "/api/upload",
            "/api/media",
            "/api/media/{id}",
            "/api/storage/capacity",
            "/api/users",
            "/api/users/{id}",
        ] {
            assert!(
                spec.paths.paths.contains_key(path),
                "missing path {} in OpenAPI spec",
                path
            );
        }
    }
}
