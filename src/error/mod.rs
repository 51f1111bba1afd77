//! API Error Module
//!
//! This module defines the error taxonomy for the backend and the conversion
//! of errors into HTTP responses.
//!
//! # Module Structure
//!
//! - **`types`** - Error type definitions and status-code mapping
//! - **`conversion`** - `IntoResponse` implementation
//!
//! # Taxonomy
//!
//! Expected, per-request outcomes carry a stable status code:
//!
//! - `Validation` - malformed input shape (400)
//! - `DuplicateUser` - signup conflict on email (403)
//! - `InvalidCredentials` - signin failure, identical for unknown email and
//!   wrong password (403)
//! - `Unauthenticated` - missing/malformed/invalid/expired bearer token (401)
//! - `NotFound` - absent record or ownership mismatch, indistinguishable (404)
//!
//! Everything else (store faults, hashing or signing failures) is an internal
//! fault surfaced as a 500 with a generic body. Internal faults are never
//! silently absorbed: they propagate to the response layer and are logged there.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

pub use types::ApiError;
