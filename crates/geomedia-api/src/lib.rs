//! Geomedia API Library
//!
//! This crate provides the HTTP API handlers and application setup.

mod api_doc;
mod handlers;
mod logging;

// Public modules
pub mod error;
pub mod setup;
pub mod state;

// Re-exports
pub use error::ErrorResponse;
pub use logging::init_tracing;
