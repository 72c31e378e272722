//! Geomedia Store Library
//!
//! The authoritative in-memory record store. `MediaStore` and `UserStore`
//! are cheap-to-clone handles over mutex-guarded maps; handlers share one
//! instance constructed at process start. Each operation takes and releases
//! its lock within the call, so every call fully succeeds or fails with no
//! intermediate visible state.

pub mod media;
pub mod users;

pub use media::MediaStore;
pub use users::UserStore;
