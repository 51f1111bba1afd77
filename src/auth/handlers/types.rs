/**
 * Authentication Handler Types
 *
 * Request and response bodies shared by the signup and signin handlers.
 */

use serde::{Deserialize, Serialize};

/// Body of a signup or signin request
#[derive(Debug, Deserialize, Serialize)]
pub struct AuthRequest {
    /// Email address identifying the account
    pub email: String,
    /// Plaintext password; hashed on signup, verified on signin, never stored
    pub password: String,
}

/// Successful authentication response
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    /// Short-lived signed bearer token
    pub access_token: String,
}
