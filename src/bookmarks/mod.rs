//! Bookmarks Module
//!
//! Ownership-scoped CRUD over bookmark records, all behind the auth
//! middleware:
//!
//! - `POST /bookmarks` - create, stamped with the caller as owner
//! - `GET /bookmarks` - list the caller's bookmarks
//! - `GET /bookmarks/{id}` - fetch one
//! - `PATCH /bookmarks/{id}` - partial edit
//! - `DELETE /bookmarks/{id}` - delete (204)
//!
//! A bookmark owned by another user is indistinguishable from one that does
//! not exist: every mismatch is a 404, never a 403, so record existence is
//! not revealed across tenants.

pub mod handlers;

pub use handlers::{
    create_bookmark, delete_bookmark, edit_bookmark, get_bookmark, list_bookmarks,
    CreateBookmarkRequest, EditBookmarkRequest,
};
