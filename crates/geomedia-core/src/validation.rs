//! Media payload validation.
//!
//! Defines the accepted shape for creating and partially updating a media
//! record. Problems are accumulated per field (wire-level field names) so a
//! single 400 response can report every offending field at once. Unknown
//! extra fields are dropped at deserialization, not rejected.

use crate::error::{AppError, FieldError};
use crate::models::{CreateMediaRequest, MediaPatch, NewMedia, UpdateMediaRequest};

fn require_text(
    field: &str,
    value: Option<String>,
    problems: &mut Vec<FieldError>,
) -> Option<String> {
    match value {
        Some(s) if !s.is_empty() => Some(s),
        Some(_) => {
            problems.push(FieldError::new(field, format!("{} must not be empty", field)));
            None
        }
        None => {
            problems.push(FieldError::new(field, format!("{} is required", field)));
            None
        }
    }
}

fn require_coordinate(
    field: &str,
    value: Option<f64>,
    problems: &mut Vec<FieldError>,
) -> Option<f64> {
    match value {
        Some(v) if v.is_finite() => Some(v),
        Some(_) => {
            problems.push(FieldError::new(
                field,
                format!("{} must be a finite number", field),
            ));
            None
        }
        None => {
            problems.push(FieldError::new(field, format!("{} is required", field)));
            None
        }
    }
}

fn optional_finite(
    field: &str,
    value: Option<f64>,
    problems: &mut Vec<FieldError>,
) -> Option<f64> {
    match value {
        Some(v) if !v.is_finite() => {
            problems.push(FieldError::new(
                field,
                format!("{} must be a finite number", field),
            ));
            None
        }
        other => other,
    }
}

fn optional_byte_count(
    field: &str,
    value: Option<i64>,
    problems: &mut Vec<FieldError>,
) -> Option<i64> {
    match value {
        Some(v) if v < 0 => {
            problems.push(FieldError::new(
                field,
                format!("{} must not be negative", field),
            ));
            None
        }
        other => other,
    }
}

fn optional_text(
    field: &str,
    value: Option<String>,
    problems: &mut Vec<FieldError>,
) -> Option<String> {
    match value {
        Some(s) if s.is_empty() => {
            problems.push(FieldError::new(field, format!("{} must not be empty", field)));
            None
        }
        other => other,
    }
}

/// Full-create contract: every required field present and of the correct
/// shape. Returns the insertable payload or the full list of field problems.
pub fn validate_create(req: CreateMediaRequest) -> Result<NewMedia, AppError> {
    let mut problems = Vec::new();

    let title = require_text("title", req.title, &mut problems);
    let project = require_text("project", req.project, &mut problems);
    let url = require_text("url", req.url, &mut problems);
    let mime_type = require_text("mimeType", req.mime_type, &mut problems);
    let lat = require_coordinate("lat", req.lat, &mut problems);
    let lng = require_coordinate("lng", req.lng, &mut problems);
    let accuracy = optional_finite("accuracy", req.accuracy, &mut problems);
    let file_size = optional_byte_count("fileSize", req.file_size, &mut problems);

    match (title, project, url, mime_type, lat, lng) {
        (Some(title), Some(project), Some(url), Some(mime_type), Some(lat), Some(lng))
            if problems.is_empty() =>
        {
            Ok(NewMedia {
                title,
                project,
                url,
                storage_path: req.storage_path,
                mime_type,
                file_size,
                lat,
                lng,
                accuracy,
                user_id: req.user_id,
            })
        }
        _ => Err(AppError::validation("Invalid media data", problems)),
    }
}

/// Partial-update contract: same per-field rules, all fields optional;
/// absent fields are left untouched on the existing record.
pub fn validate_update(req: UpdateMediaRequest) -> Result<MediaPatch, AppError> {
    let mut problems = Vec::new();

    let title = optional_text("title", req.title, &mut problems);
    let project = optional_text("project", req.project, &mut problems);
    let url = optional_text("url", req.url, &mut problems);
    let mime_type = optional_text("mimeType", req.mime_type, &mut problems);
    let lat = optional_finite("lat", req.lat, &mut problems);
    let lng = optional_finite("lng", req.lng, &mut problems);
    let accuracy = optional_finite("accuracy", req.accuracy, &mut problems);
    let file_size = optional_byte_count("fileSize", req.file_size, &mut problems);

    if !problems.is_empty() {
        return Err(AppError::validation("Invalid media data", problems));
    }

    Ok(MediaPatch {
        title,
        project,
        url,
        storage_path: req.storage_path,
        mime_type,
        file_size,
        lat,
        lng,
        accuracy,
        user_id: req.user_id,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_request() -> CreateMediaRequest {
        CreateMediaRequest {
            title: Some("Site survey".to_string()),
            project: Some("P1".to_string()),
            url: Some("data:image/png;base64,AAAA".to_string()),
            storage_path: Some("users/u1/media/1_a.png".to_string()),
            mime_type: Some("image/png".to_string()),
            file_size: Some(42),
            lat: Some(50.85),
            lng: Some(4.35),
            accuracy: Some(5.0),
            user_id: Some("u1".to_string()),
        }
    }

    #[test]
    fn test_validate_create_accepts_full_payload() {
        let media = validate_create(full_request()).expect("valid");
        assert_eq!(media.title, "Site survey");
        assert_eq!(media.file_size, Some(42));
        assert_eq!(media.user_id.as_deref(), Some("u1"));
    }

    #[test]
    fn test_validate_create_missing_lat_names_the_field() {
        let req = CreateMediaRequest {
            lat: None,
            ..full_request()
        };
        let err = validate_create(req).expect_err("should fail");
        let fields = err.field_errors().expect("field errors");
        assert!(fields.iter().any(|f| f.field == "lat"));
    }

    #[test]
    fn test_validate_create_collects_all_problems() {
        let req = CreateMediaRequest {
            title: Some(String::new()),
            lat: None,
            lng: Some(f64::NAN),
            ..full_request()
        };
        let err = validate_create(req).expect_err("should fail");
        let fields = err.field_errors().expect("field errors");
        let names: Vec<&str> = fields.iter().map(|f| f.field.as_str()).collect();
        assert!(names.contains(&"title"));
        assert!(names.contains(&"lat"));
        assert!(names.contains(&"lng"));
    }

    #[test]
    fn test_validate_create_allows_absent_optionals() {
        let req = CreateMediaRequest {
            storage_path: None,
            file_size: None,
            accuracy: None,
            user_id: None,
            ..full_request()
        };
        let media = validate_create(req).expect("valid");
        assert_eq!(media.storage_path, None);
        assert_eq!(media.file_size, None);
        assert_eq!(media.accuracy, None);
        assert_eq!(media.user_id, None);
    }

    #[test]
    fn test_validate_update_empty_body_is_noop_patch() {
        let patch = validate_update(UpdateMediaRequest::default()).expect("valid");
        assert_eq!(patch, MediaPatch::default());
    }

    #[test]
    fn test_validate_update_rejects_non_finite_accuracy() {
        let req = UpdateMediaRequest {
            accuracy: Some(f64::INFINITY),
            ..Default::default()
        };
        let err = validate_update(req).expect_err("should fail");
        let fields = err.field_errors().expect("field errors");
        assert_eq!(fields[0].field, "accuracy");
    }

    #[test]
    fn test_validate_update_rejects_negative_file_size() {
        let req = UpdateMediaRequest {
            file_size: Some(-1),
            ..Default::default()
        };
        assert!(validate_update(req).is_err());
    }
}
