//! Application state.
//!
//! One `AppState` is constructed at process start and shared by every
//! handler behind an `Arc`; the stores own all record state, the storage
//! handle owns file bytes. Handlers never retain record references across
//! requests — store reads hand out owned clones.

use std::sync::Arc;

use geomedia_core::Config;
use geomedia_storage::ObjectStorage;
use geomedia_store::{MediaStore, UserStore};

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub media: MediaStore,
    pub users: UserStore,
    pub storage: Arc<dyn ObjectStorage>,
}

impl AppState {
    pub fn new(config: Config, storage: Arc<dyn ObjectStorage>) -> Self {
        AppState {
            config,
            media: MediaStore::new(),
            users: UserStore::new(),
            storage,
        }
    }
}
