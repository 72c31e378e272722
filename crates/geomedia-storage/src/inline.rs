//! Inline data-URI storage backend.
//!
//! Stores nothing server-side: `put` encodes the uploaded bytes directly
//! into a `data:` URI, which becomes the record's locator. This reproduces
//! the passthrough upload policy; the local backend is the integration path
//! for real external storage.

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use geomedia_core::StorageBackend;

use crate::traits::{ObjectStorage, StorageError, StorageResult};

#[derive(Debug, Clone, Default)]
pub struct InlineStorage;

impl InlineStorage {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ObjectStorage for InlineStorage {
    async fn put(&self, key: &str, content_type: &str, data: Vec<u8>) -> StorageResult<String> {
        let locator = format!("data:{};base64,{}", content_type, BASE64.encode(&data));
        tracing::debug!(key, size = data.len(), "Encoded upload as data URI");
        Ok(locator)
    }

    async fn get(&self, locator: &str) -> StorageResult<Vec<u8>> {
        let Some(rest) = locator.strip_prefix("data:") else {
            return Err(StorageError::NotFound(format!(
                "inline backend retains no object for key {}",
                locator
            )));
        };
        let Some((_, payload)) = rest.split_once(";base64,") else {
            return Err(StorageError::DownloadFailed(
                "data URI is not base64-encoded".to_string(),
            ));
        };
        BASE64
            .decode(payload)
            .map_err(|e| StorageError::DownloadFailed(format!("invalid base64 payload: {}", e)))
    }

    async fn delete(&self, _key: &str) -> StorageResult<()> {
        // Nothing is retained, so there is nothing to delete.
        Ok(())
    }

    async fn exists(&self, key: &str) -> StorageResult<bool> {
        Ok(key.starts_with("data:"))
    }

    fn backend_type(&self) -> StorageBackend {
        StorageBackend::Inline
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_put_builds_data_uri_and_get_round_trips() {
        let storage = InlineStorage::new();
        let data = b"0123456789".to_vec();
        let locator = storage
            .put("users/u1/media/1_a.png", "image/png", data.clone())
            .await
            .unwrap();
        assert!(locator.starts_with("data:image/png;base64,"));

        let fetched = storage.get(&locator).await.unwrap();
        assert_eq!(fetched, data);
    }

    #[tokio::test]
    async fn test_get_bare_key_is_not_found() {
        let storage = InlineStorage::new();
        let err = storage.get("users/u1/media/1_a.png").await.unwrap_err();
        assert!(matches!(err, StorageError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_get_malformed_data_uri_fails() {
        let storage = InlineStorage::new();
        let err = storage.get("data:image/png;base64,!!!").await.unwrap_err();
        assert!(matches!(err, StorageError::DownloadFailed(_)));
    }
}
