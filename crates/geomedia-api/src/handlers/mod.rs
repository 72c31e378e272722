//! HTTP handlers, one module per operation group.

pub mod capacity;
pub mod media_create;
pub mod media_delete;
pub mod media_get;
pub mod media_update;
pub mod upload;
pub mod users;

use uuid::Uuid;

/// Record ids are opaque to clients: a path segment that does not parse as a
/// UUID cannot name a known record, so lookups treat it as absent (404)
/// rather than malformed (400).
pub(crate) fn parse_opaque_id(id: &str) -> Option<Uuid> {
    id.parse().ok()
}
