//! Domain models and request payloads.

pub mod capacity;
pub mod media;
pub mod user;

pub use capacity::{CapacityUsage, StorageCapacity};
pub use media::{CreateMediaRequest, MediaPatch, MediaRecord, NewMedia, UpdateMediaRequest};
pub use user::{NewUser, RegisterUserRequest, User};
