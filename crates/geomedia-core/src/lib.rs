//! Geomedia Core Library
//!
//! Shared types for the geomedia services: the unified `AppError` type,
//! environment-driven configuration, domain models, and payload validation.

pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod storage_types;
pub mod validation;

pub use config::Config;
pub use error::{AppError, ErrorMetadata, FieldError, LogLevel};
pub use storage_types::StorageBackend;
