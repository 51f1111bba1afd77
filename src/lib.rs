//! Linkstash - Multi-Tenant Bookmark Backend
//!
//! Linkstash is a small REST backend for managing per-user bookmark collections.
//! It provides password-based signup/signin, short-lived JWT bearer tokens, and
//! ownership-scoped CRUD access to bookmark records.
//!
//! # Module Structure
//!
//! The library is organized around the authentication boundary:
//!
//! - **`auth`** - Password hashing, token issuance/verification, and the
//!   signup/signin service and handlers
//! - **`middleware`** - Request identity resolution (bearer token guard)
//! - **`store`** - Repository traits with PostgreSQL and in-memory backends
//! - **`users`** - Current-user profile endpoints
//! - **`bookmarks`** - Ownership-scoped bookmark CRUD endpoints
//! - **`validation`** - Input-shape checks run before the core
//! - **`error`** - API error taxonomy and HTTP response conversion
//! - **`routes`** - Router assembly (public and protected route groups)
//! - **`server`** - Configuration, shared state, and app construction
//!
//! # Authentication Flow
//!
//! 1. **Signup**: email + password → credential record created → JWT returned
//! 2. **Signin**: email + password → credentials verified → JWT returned
//! 3. **Protected request**: `Authorization: Bearer <token>` → token verified →
//!    resolved identity attached to the request → handler runs
//!
//! Tokens are deliberately short-lived and there is no refresh or revocation
//! mechanism; clients re-authenticate when a token expires.

pub mod auth;
pub mod bookmarks;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod store;
pub mod users;
pub mod validation;
