//! User store.

use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;
use geomedia_core::models::{NewUser, User};
use geomedia_core::AppError;
use uuid::Uuid;

type UserMap = HashMap<Uuid, User>;

/// Keyed store of registered users.
#[derive(Clone, Default)]
pub struct UserStore {
    users: Arc<RwLock<UserMap>>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, UserMap>, AppError> {
        self.users
            .read()
            .map_err(|_| AppError::Internal("user store lock poisoned".to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, UserMap>, AppError> {
        self.users
            .write()
            .map_err(|_| AppError::Internal("user store lock poisoned".to_string()))
    }

    /// Register a user with a fresh id. Usernames are unique; the check and
    /// insert happen under one write lock so concurrent registrations of the
    /// same name cannot both succeed.
    pub fn create(&self, new: NewUser) -> Result<User, AppError> {
        let mut users = self.write()?;
        if users.values().any(|u| u.username == new.username) {
            return Err(AppError::BadRequest("Username already taken".to_string()));
        }
        let user = User {
            id: Uuid::new_v4(),
            username: new.username,
            password_hash: new.password_hash,
            created_at: Utc::now(),
        };
        users.insert(user.id, user.clone());
        tracing::debug!(user_id = %user.id, "User registered");
        Ok(user)
    }

    pub fn get(&self, id: Uuid) -> Result<Option<User>, AppError> {
        Ok(self.read()?.get(&id).cloned())
    }

    /// Linear scan by username.
    pub fn get_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        Ok(self
            .read()?
            .values()
            .find(|u| u.username == username)
            .cloned())
    }
}
