//! User directory trait and in-memory implementation.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use domain::{User, UserId};

use crate::error::{Result, StoreError};
use crate::lock;

/// Lookup of registered users.
pub trait UserRepository: Send + Sync {
    /// Returns a copy of the user record.
    fn get_user(&self, id: &UserId) -> Result<User>;
}

/// In-memory user directory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserDirectory {
    users: Arc<RwLock<HashMap<UserId, User>>>,
}

impl InMemoryUserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a directory holding the given users.
    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        let directory = Self::new();
        for user in users {
            directory.insert(user);
        }
        directory
    }

    /// Adds a user, replacing any user with the same ID.
    pub fn insert(&self, user: User) {
        lock::write(&self.users).insert(user.id.clone(), user);
    }
}

impl UserRepository for InMemoryUserDirectory {
    fn get_user(&self, id: &UserId) -> Result<User> {
        lock::read(&self.users)
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::UserNotFound(id.clone()))
    }
}
