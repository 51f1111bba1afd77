//! Authentication Handlers
//!
//! HTTP handlers for the public authentication endpoints.
//!
//! - **`signup`** - `POST /auth/signup` - register and receive a token
//! - **`signin`** - `POST /auth/signin` - authenticate and receive a token
//!
//! Both handlers validate input shape (email format, password policy) before
//! the auth service runs, and both respond with `{"access_token": "<jwt>"}`.

/// Request and response types
pub mod types;

/// Signup handler
pub mod signup;

/// Signin handler
pub mod signin;

pub use signin::signin;
pub use signup::signup;
pub use types::{AuthRequest, TokenResponse};
