//! Storage backend selection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Available object storage backends.
///
/// `Inline` embeds uploaded bytes in a `data:` URI (no external storage);
/// `Local` writes to a directory on the local filesystem and serves files
/// from a configured base URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    Inline,
    Local,
}

impl FromStr for StorageBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "inline" => Ok(StorageBackend::Inline),
            "local" => Ok(StorageBackend::Local),
            other => Err(format!("unknown storage backend: {}", other)),
        }
    }
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageBackend::Inline => write!(f, "inline"),
            StorageBackend::Local => write!(f, "local"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_from_str() {
        assert_eq!("inline".parse::<StorageBackend>(), Ok(StorageBackend::Inline));
        assert_eq!("LOCAL".parse::<StorageBackend>(), Ok(StorageBackend::Local));
        assert!("s3".parse::<StorageBackend>().is_err());
    }
}
