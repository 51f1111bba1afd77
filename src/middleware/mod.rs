//! Middleware Module
//!
//! HTTP middleware applied to the protected route group.
//!
//! - **`auth`** - bearer-token identity resolution; rejects unauthenticated
//!   requests before any handler runs

pub mod auth;

pub use auth::{auth_middleware, CurrentUser};
