//! Media record store.

use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;
use geomedia_core::models::{CapacityUsage, MediaPatch, MediaRecord, NewMedia};
use geomedia_core::AppError;
use uuid::Uuid;

type RecordMap = HashMap<Uuid, MediaRecord>;

/// Keyed store of media records.
///
/// Reads return owned clones; no caller ever holds a reference into the map
/// across requests.
#[derive(Clone, Default)]
pub struct MediaStore {
    records: Arc<RwLock<RecordMap>>,
}

impl MediaStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, RecordMap>, AppError> {
        self.records
            .read()
            .map_err(|_| AppError::Internal("media store lock poisoned".to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, RecordMap>, AppError> {
        self.records
            .write()
            .map_err(|_| AppError::Internal("media store lock poisoned".to_string()))
    }

    /// Insert a new record, assigning a fresh id and creation timestamp.
    /// Unset optional fields are stored as explicit `None`.
    pub fn create(&self, new: NewMedia) -> Result<MediaRecord, AppError> {
        let record = MediaRecord {
            id: Uuid::new_v4(),
            title: new.title,
            project: new.project,
            url: new.url,
            storage_path: new.storage_path,
            mime_type: new.mime_type,
            file_size: new.file_size,
            lat: new.lat,
            lng: new.lng,
            accuracy: new.accuracy,
            created_at: Utc::now(),
            user_id: new.user_id,
        };
        self.write()?.insert(record.id, record.clone());
        tracing::debug!(media_id = %record.id, "Media record created");
        Ok(record)
    }

    pub fn get(&self, id: Uuid) -> Result<Option<MediaRecord>, AppError> {
        Ok(self.read()?.get(&id).cloned())
    }

    /// All records, most recent first.
    pub fn list_all(&self) -> Result<Vec<MediaRecord>, AppError> {
        let mut records: Vec<MediaRecord> = self.read()?.values().cloned().collect();
        sort_newest_first(&mut records);
        Ok(records)
    }

    /// Records for the given owner, most recent first. With no owner this is
    /// identical to [`list_all`](Self::list_all).
    pub fn list_by_owner(&self, owner: Option<&str>) -> Result<Vec<MediaRecord>, AppError> {
        let Some(owner) = owner else {
            return self.list_all();
        };
        let mut records: Vec<MediaRecord> = self
            .read()?
            .values()
            .filter(|r| r.user_id.as_deref() == Some(owner))
            .cloned()
            .collect();
        sort_newest_first(&mut records);
        Ok(records)
    }

    /// Merge partial fields onto the existing record (shallow overwrite).
    /// Returns `None` if the id is unknown.
    pub fn update(&self, id: Uuid, patch: &MediaPatch) -> Result<Option<MediaRecord>, AppError> {
        let mut records = self.write()?;
        let Some(record) = records.get_mut(&id) else {
            return Ok(None);
        };
        patch.apply_to(record);
        Ok(Some(record.clone()))
    }

    /// Remove a record; true if it existed.
    pub fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let removed = self.write()?.remove(&id).is_some();
        if removed {
            tracing::debug!(media_id = %id, "Media record deleted");
        }
        Ok(removed)
    }

    /// Aggregate file count and byte total for the (optionally owner-scoped)
    /// record set. Records without a known size count as zero bytes.
    pub fn usage(&self, owner: Option<&str>) -> Result<CapacityUsage, AppError> {
        let records = self.read()?;
        let scoped = records
            .values()
            .filter(|r| owner.is_none() || r.user_id.as_deref() == owner);
        let mut usage = CapacityUsage::default();
        for record in scoped {
            usage.total_files += 1;
            usage.total_size += record.file_size.unwrap_or(0);
        }
        Ok(usage)
    }
}

fn sort_newest_first(records: &mut [MediaRecord]) {
    records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}
