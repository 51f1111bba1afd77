/**
 * API Error Types
 *
 * This module defines the error enum used throughout the backend. Handlers
 * return `Result<_, ApiError>` and rely on the `IntoResponse` implementation
 * in `conversion.rs` to produce the wire format.
 *
 * # Design Notes
 *
 * - `InvalidCredentials` is a single variant with a single message so that a
 *   signin against an unknown email and a signin with a wrong password are
 *   indistinguishable to the caller.
 * - `NotFound` is used both for genuinely absent records and for records owned
 *   by another user, so existence of other users' data is never revealed.
 * - `Config` is only produced at startup; it is fatal and never reaches a
 *   per-request response in practice.
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::store::StoreError;

/// Backend error taxonomy
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed input shape (bad email format, weak password, etc.)
    #[error("Validation error in field '{field}': {message}")]
    Validation {
        /// The field that failed validation
        field: &'static str,
        /// Human-readable error message
        message: String,
    },

    /// Signup attempted with an email that already has a credential record
    #[error("User already exists")]
    DuplicateUser,

    /// Signin failed; deliberately identical for unknown email and wrong password
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Missing, malformed, invalid, or expired bearer token
    #[error("Unauthenticated")]
    Unauthenticated,

    /// Record does not exist, or is owned by someone else
    #[error("Not found")]
    NotFound,

    /// Missing or invalid process configuration; fatal at startup
    #[error("Configuration error: {0}")]
    Config(String),

    /// Password hashing failure
    #[error("Password hashing error: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    /// Token signing failure
    #[error("Token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),

    /// Store fault other than a uniqueness conflict
    #[error("Store error: {0}")]
    Store(StoreError),
}

impl ApiError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::DuplicateUser | Self::InvalidCredentials => StatusCode::FORBIDDEN,
            Self::Unauthenticated => StatusCode::UNAUTHORIZED,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Config(_) | Self::Hash(_) | Self::Token(_) | Self::Store(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the message exposed to the client
    ///
    /// Internal faults return a generic message; their details only go to the
    /// log, never over the wire.
    pub fn public_message(&self) -> String {
        match self {
            Self::Validation { .. }
            | Self::DuplicateUser
            | Self::InvalidCredentials
            | Self::Unauthenticated
            | Self::NotFound => self.to_string(),
            Self::Config(_) | Self::Hash(_) | Self::Token(_) | Self::Store(_) => {
                "Internal server error".to_string()
            }
        }
    }
}

/// A uniqueness conflict from the store is a signup conflict; anything else is
/// an internal fault that must propagate.
impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateEmail => Self::DuplicateUser,
            other => Self::Store(other),
        }
    }
}
