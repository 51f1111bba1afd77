//! Authentication Module
//!
//! This module implements the authentication boundary of the backend:
//! credential handling, token issuance/verification, and the signup/signin
//! endpoints.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── password.rs     - bcrypt hashing and verification
//! ├── tokens.rs       - JWT issuance and verification
//! ├── service.rs      - Signup/signin orchestration
//! └── handlers/       - HTTP handlers
//!     ├── mod.rs      - Handler exports
//!     ├── types.rs    - Request/response types
//!     ├── signup.rs   - POST /auth/signup
//!     └── signin.rs   - POST /auth/signin
//! ```
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt (random salt per hash) before storage
//!   and are never logged or returned
//! - Tokens are HS256-signed JWTs carrying `{sub, email, iat, exp}` and expire
//!   after a short, configurable TTL; there is no refresh or revocation
//! - Signin failures never reveal whether the email or the password was wrong

/// Password hashing and verification
pub mod password;

/// JWT issuance and verification
pub mod tokens;

/// Signup/signin orchestration
pub mod service;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use handlers::types::{AuthRequest, TokenResponse};
pub use handlers::{signin, signup};
pub use service::AuthService;
pub use tokens::{Claims, TokenKeys};
