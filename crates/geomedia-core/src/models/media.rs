use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A stored geotagged media record.
///
/// `url` is the object storage locator (a `data:` URI under the inline
/// backend); `storage_path` is the logical key inside the backend. `user_id`
/// is an unchecked owner reference; records without one are global and show
/// up in unfiltered listings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MediaRecord {
    pub id: Uuid,
    pub title: String,
    pub project: String,
    pub url: String,
    pub storage_path: Option<String>,
    pub mime_type: String,
    pub file_size: Option<i64>,
    pub lat: f64,
    pub lng: f64,
    pub accuracy: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub user_id: Option<String>,
}

/// Validated insert payload for a media record. `id` and `created_at` are
/// assigned by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewMedia {
    pub title: String,
    pub project: String,
    pub url: String,
    pub storage_path: Option<String>,
    pub mime_type: String,
    pub file_size: Option<i64>,
    pub lat: f64,
    pub lng: f64,
    pub accuracy: Option<f64>,
    pub user_id: Option<String>,
}

/// Validated partial update. `None` fields are left untouched on the
/// existing record; optional record fields can be set but not cleared.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MediaPatch {
    pub title: Option<String>,
    pub project: Option<String>,
    pub url: Option<String>,
    pub storage_path: Option<String>,
    pub mime_type: Option<String>,
    pub file_size: Option<i64>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub accuracy: Option<f64>,
    pub user_id: Option<String>,
}

impl MediaPatch {
    /// Shallow field overwrite onto an existing record.
    pub fn apply_to(&self, record: &mut MediaRecord) {
        if let Some(title) = &self.title {
            record.title = title.clone();
        }
        if let Some(project) = &self.project {
            record.project = project.clone();
        }
        if let Some(url) = &self.url {
            record.url = url.clone();
        }
        if let Some(storage_path) = &self.storage_path {
            record.storage_path = Some(storage_path.clone());
        }
        if let Some(mime_type) = &self.mime_type {
            record.mime_type = mime_type.clone();
        }
        if let Some(file_size) = self.file_size {
            record.file_size = Some(file_size);
        }
        if let Some(lat) = self.lat {
            record.lat = lat;
        }
        if let Some(lng) = self.lng {
            record.lng = lng;
        }
        if let Some(accuracy) = self.accuracy {
            record.accuracy = Some(accuracy);
        }
        if let Some(user_id) = &self.user_id {
            record.user_id = Some(user_id.clone());
        }
    }
}

/// Raw JSON body for `POST /api/media`. Every field is optional at the serde
/// layer so that missing required fields surface as per-field validation
/// problems instead of a deserialization rejection; unknown extra fields are
/// ignored.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateMediaRequest {
    pub title: Option<String>,
    pub project: Option<String>,
    pub url: Option<String>,
    pub storage_path: Option<String>,
    pub mime_type: Option<String>,
    pub file_size: Option<i64>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub accuracy: Option<f64>,
    pub user_id: Option<String>,
}

/// Raw JSON body for `PUT /api/media/{id}`: any subset of the insertable
/// fields, each individually type-checked when present.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMediaRequest {
    pub title: Option<String>,
    pub project: Option<String>,
    pub url: Option<String>,
    pub storage_path: Option<String>,
    pub mime_type: Option<String>,
    pub file_size: Option<i64>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub accuracy: Option<f64>,
    pub user_id: Option<String>,
}
