//! Configuration module
//!
//! Environment-driven configuration for the API server and storage layer.
//! `.env` files are honored via dotenvy; every knob has a default so a bare
//! environment boots a working in-memory service.

use std::env;
use std::str::FromStr;

use crate::constants::MAX_STORAGE_BYTES;
use crate::storage_types::StorageBackend;

const DEFAULT_SERVER_PORT: u16 = 3000;
const DEFAULT_MAX_UPLOAD_SIZE_BYTES: usize = 50 * 1024 * 1024;

/// Application configuration.
#[derive(Clone, Debug)]
pub struct Config {
    pub server_port: u16,
    pub cors_origins: Vec<String>,
    pub environment: String,
    /// Object storage backend for uploaded file bytes.
    pub storage_backend: StorageBackend,
    pub local_storage_path: Option<String>,
    pub local_storage_base_url: Option<String>,
    /// Per-request body limit for the multipart upload route.
    pub max_upload_size_bytes: usize,
    /// Aggregate quota used by the capacity report.
    pub max_storage_bytes: i64,
}

fn env_parse<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

fn env_list(key: &str, default: &str) -> Vec<String> {
    env::var(key)
        .unwrap_or_else(|_| default.to_string())
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

impl Config {
    /// Load configuration from the environment (and `.env` when present).
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        let storage_backend = match env::var("STORAGE_BACKEND") {
            Ok(value) => value
                .parse::<StorageBackend>()
                .map_err(|e| anyhow::anyhow!("STORAGE_BACKEND: {}", e))?,
            Err(_) => StorageBackend::Inline,
        };

        Ok(Config {
            server_port: env_parse("SERVER_PORT", DEFAULT_SERVER_PORT),
            cors_origins: env_list("CORS_ORIGINS", "*"),
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            storage_backend,
            local_storage_path: env::var("LOCAL_STORAGE_PATH").ok(),
            local_storage_base_url: env::var("LOCAL_STORAGE_BASE_URL").ok(),
            max_upload_size_bytes: env_parse("MAX_UPLOAD_SIZE_BYTES", DEFAULT_MAX_UPLOAD_SIZE_BYTES),
            max_storage_bytes: env_parse("MAX_STORAGE_BYTES", MAX_STORAGE_BYTES),
        })
    }

    pub fn is_production(&self) -> bool {
        matches!(self.environment.as_str(), "production" | "prod")
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server_port: DEFAULT_SERVER_PORT,
            cors_origins: vec!["*".to_string()],
            environment: "development".to_string(),
            storage_backend: StorageBackend::Inline,
            local_storage_path: None,
            local_storage_base_url: None,
            max_upload_size_bytes: DEFAULT_MAX_UPLOAD_SIZE_BYTES,
            max_storage_bytes: MAX_STORAGE_BYTES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_list_splits_and_trims() {
        // Exercised through the default path to avoid mutating process env in tests.
        let origins = env_list("GEOMEDIA_TEST_UNSET_VAR", "a, b ,,c");
        assert_eq!(origins, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_default_config_uses_inline_backend_and_gib_quota() {
        let config = Config::default();
        assert_eq!(config.storage_backend, StorageBackend::Inline);
        assert_eq!(config.max_storage_bytes, 1024 * 1024 * 1024);
        assert!(!config.is_production());
    }
}
