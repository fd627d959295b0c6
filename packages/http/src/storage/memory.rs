//! In-memory storage implementation.
//!
//! All data is held in RAM behind a [`RwLock`] and is lost when the process
//! exits. Users live in a [`BTreeMap`] so listing is already in id order.

use std::collections::BTreeMap;
use std::sync::RwLock;

use async_trait::async_trait;

use super::{NewUser, Storage, StorageError, User};

struct Inner {
    next_id: u64,
    users: BTreeMap<u64, User>,
}

/// Thread-safe, in-memory implementation of [`Storage`].
pub struct MemoryStorage {
    inner: RwLock<Inner>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                next_id: 1,
                users: BTreeMap::new(),
            }),
        }
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

fn poisoned<T>(_: T) -> StorageError {
    StorageError::Internal("memory storage lock poisoned".into())
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn create_user(&self, user: NewUser) -> Result<User, StorageError> {
        let mut inner = self.inner.write().map_err(poisoned)?;
        if inner.users.values().any(|u| u.email == user.email) {
            return Err(StorageError::Conflict(format!(
                "a user with email {} already exists",
                user.email
            )));
        }
        let id = inner.next_id;
        inner.next_id += 1;
        let stored = User {
            id,
            name: user.name,
            email: user.email,
        };
        inner.users.insert(id, stored.clone());
        Ok(stored)
    }

    async fn get_user(&self, id: u64) -> Result<User, StorageError> {
        let inner = self.inner.read().map_err(poisoned)?;
        inner.users.get(&id).cloned().ok_or(StorageError::NotFound)
    }

    async fn list_users(&self) -> Result<Vec<User>, StorageError> {
        let inner = self.inner.read().map_err(poisoned)?;
        Ok(inner.users.values().cloned().collect())
    }

    async fn delete_user(&self, id: u64) -> Result<(), StorageError> {
        let mut inner = self.inner.write().map_err(poisoned)?;
        inner
            .users
            .remove(&id)
            .map(|_| ())
            .ok_or(StorageError::NotFound)
    }
}
