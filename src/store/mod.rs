//! Store Module
//!
//! This module defines the persistence seam of the backend: record models and
//! narrow repository traits with explicit methods, so any relational or
//! key-value backend can sit underneath.
//!
//! # Backends
//!
//! - **`postgres`** - `PgStore`, the production backend (sqlx)
//! - **`memory`** - `MemoryStore`, a mutex-guarded map used by tests and for
//!   running the server without a database
//!
//! # Consistency
//!
//! The store is the only shared mutable resource in the system. Email
//! uniqueness is enforced atomically by each backend (unique index in
//! PostgreSQL, a lock around the map in memory), which is what resolves races
//! between concurrent signups for the same email: exactly one succeeds, the
//! rest observe `StoreError::DuplicateEmail`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

/// PostgreSQL store backend
pub mod postgres;

/// In-memory store backend
pub mod memory;

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// A persisted credential record
///
/// `password_hash` is never the plaintext and must never be serialized to a
/// client or written to the log; this type intentionally does not implement
/// `Serialize`.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    /// Unique user ID
    pub id: Uuid,
    /// Email address (unique, case-sensitive)
    pub email: String,
    /// Salted bcrypt hash of the password
    pub password_hash: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields required to create a credential record
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub password_hash: String,
}

/// Partial update of a user's profile; `None` fields are left unchanged
#[derive(Debug, Clone, Default)]
pub struct UserChanges {
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// A bookmark record, owned by exactly one user
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Bookmark {
    pub id: Uuid,
    /// The user that created this bookmark; only they can read or mutate it
    pub owner_id: Uuid,
    pub title: String,
    pub link: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields required to create a bookmark
#[derive(Debug, Clone)]
pub struct NewBookmark {
    pub title: String,
    pub link: String,
    pub description: Option<String>,
}

/// Partial update of a bookmark; `None` fields are left unchanged
#[derive(Debug, Clone, Default)]
pub struct BookmarkChanges {
    pub title: Option<String>,
    pub link: Option<String>,
    pub description: Option<String>,
}

/// Errors surfaced by store backends
#[derive(Debug, Error)]
pub enum StoreError {
    /// Email uniqueness conflict on create or update
    #[error("duplicate email")]
    DuplicateEmail,

    /// Underlying database failure
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Credential store operations
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Persist a new credential record; fails with `DuplicateEmail` if the
    /// email is already taken.
    async fn create_user(&self, new: NewUser) -> Result<User, StoreError>;

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    async fn find_user_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError>;

    /// Apply a partial profile update; returns `None` if the user no longer
    /// exists. Changing the email to one already taken fails with
    /// `DuplicateEmail`.
    async fn update_user(&self, id: Uuid, changes: UserChanges) -> Result<Option<User>, StoreError>;
}

/// Bookmark store operations
///
/// Every method is scoped by `owner_id`; a record owned by another user is
/// treated exactly like a record that does not exist.
#[async_trait]
pub trait BookmarkStore: Send + Sync {
    async fn create_bookmark(
        &self,
        owner_id: Uuid,
        new: NewBookmark,
    ) -> Result<Bookmark, StoreError>;

    async fn list_bookmarks(&self, owner_id: Uuid) -> Result<Vec<Bookmark>, StoreError>;

    async fn find_bookmark(&self, owner_id: Uuid, id: Uuid)
        -> Result<Option<Bookmark>, StoreError>;

    async fn update_bookmark(
        &self,
        owner_id: Uuid,
        id: Uuid,
        changes: BookmarkChanges,
    ) -> Result<Option<Bookmark>, StoreError>;

    /// Delete a bookmark; returns `false` when nothing owned by `owner_id`
    /// matched `id`.
    async fn delete_bookmark(&self, owner_id: Uuid, id: Uuid) -> Result<bool, StoreError>;
}

/// Combined store handle held by the application state
pub trait Store: UserStore + BookmarkStore {}

impl<T: UserStore + BookmarkStore> Store for T {}
