//! Storage abstraction for the demo user service.
//!
//! Handlers decide which [`boom`] error a failure becomes; storage only
//! reports what went wrong through [`StorageError`].

pub mod memory;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// StorageError
// ---------------------------------------------------------------------------

/// Errors that storage operations can return.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The requested item does not exist.
    #[error("not found")]
    NotFound,

    /// An item with the same unique key already exists.
    #[error("conflict: {0}")]
    Conflict(String),

    /// An unexpected error in the underlying storage backend.
    #[error("internal storage error: {0}")]
    Internal(String),
}

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// A stored user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
}

/// A validated user that has not been assigned an id yet.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
}

// ---------------------------------------------------------------------------
// Storage trait
// ---------------------------------------------------------------------------

#[async_trait]
pub trait Storage: Send + Sync {
    /// Insert a user and return it with its assigned id.
    ///
    /// Returns [`StorageError::Conflict`] if the email is already registered.
    async fn create_user(&self, user: NewUser) -> Result<User, StorageError>;

    /// Fetch a user by id.
    async fn get_user(&self, id: u64) -> Result<User, StorageError>;

    /// All users in ascending id order.
    async fn list_users(&self) -> Result<Vec<User>, StorageError>;

    /// Remove a user by id.
    async fn delete_user(&self, id: u64) -> Result<(), StorageError>;
}
