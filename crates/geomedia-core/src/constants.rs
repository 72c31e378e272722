//! Shared constants.

/// API base path prefix; every route except the health check lives under it.
pub const API_PREFIX: &str = "/api";

/// Fixed aggregate storage quota: 1 GiB.
pub const MAX_STORAGE_BYTES: i64 = 1024 * 1024 * 1024;

/// Usage percentage above which the capacity report flags `isNearLimit`.
pub const NEAR_LIMIT_PERCENT: i64 = 80;
