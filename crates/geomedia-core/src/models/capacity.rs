use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::constants::NEAR_LIMIT_PERCENT;

/// Aggregate usage for a (possibly owner-scoped) record set, as computed by
/// the store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CapacityUsage {
    pub total_files: i64,
    pub total_size: i64,
}

/// Storage capacity report for `GET /api/storage/capacity`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StorageCapacity {
    pub total_files: i64,
    pub total_size: i64,
    pub max_storage: i64,
    pub used_percentage: i64,
    pub remaining_storage: i64,
    pub is_near_limit: bool,
}

impl StorageCapacity {
    /// Build the report from raw usage against a fixed quota.
    ///
    /// `used_percentage` is an integer rounding of used/max x 100;
    /// `remaining_storage` may go negative when usage exceeds the quota.
    pub fn from_usage(usage: CapacityUsage, max_storage: i64) -> Self {
        let used_percentage =
            ((usage.total_size as f64 / max_storage as f64) * 100.0).round() as i64;
        StorageCapacity {
            total_files: usage.total_files,
            total_size: usage.total_size,
            max_storage,
            used_percentage,
            remaining_storage: max_storage - usage.total_size,
            is_near_limit: used_percentage > NEAR_LIMIT_PERCENT,
        }
    }
}
