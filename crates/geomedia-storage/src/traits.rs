//! Storage abstraction trait
//!
//! This module defines the ObjectStorage trait that all storage backends
//! must implement.

use async_trait::async_trait;
use geomedia_core::StorageBackend;
use thiserror::Error;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("Download failed: {0}")]
    DownloadFailed(String),

    #[error("Delete failed: {0}")]
    DeleteFailed(String),

    #[error("File not found: {0}")]
    NotFound(String),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("Storage backend error: {0}")]
    BackendError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Storage abstraction trait
///
/// All storage backends (inline data-URI, local filesystem) must implement
/// this trait. The upload path works with any backend without coupling to
/// where bytes actually land.
///
/// **Key format:** keys are owner-scoped, `users/{userId}/media/{filename}`.
/// See the crate root documentation.
#[async_trait]
pub trait ObjectStorage: Send + Sync {
    /// Store bytes under the given key and return the public locator URL.
    async fn put(&self, key: &str, content_type: &str, data: Vec<u8>) -> StorageResult<String>;

    /// Fetch bytes by locator (or bare storage key, for backends where the
    /// locator is derived from the key).
    async fn get(&self, locator: &str) -> StorageResult<Vec<u8>>;

    /// Delete the object under the given key.
    async fn delete(&self, key: &str) -> StorageResult<()>;

    /// Check whether an object exists under the given key.
    async fn exists(&self, key: &str) -> StorageResult<bool>;

    /// Get the storage backend type
    fn backend_type(&self) -> StorageBackend;
}
