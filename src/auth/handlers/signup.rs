/**
 * Signup Handler
 *
 * `POST /auth/signup`
 *
 * 1. Validate input shape (email format, password policy)
 * 2. Hash the password and create the credential record
 * 3. Issue a token for the new identity
 *
 * # Errors
 *
 * - `400 Bad Request` - malformed email or weak password
 * - `403 Forbidden` - email already registered
 * - `500 Internal Server Error` - store fault, hashing or signing failure
 */

use axum::{extract::State, http::StatusCode, response::Json};

use crate::auth::handlers::types::{AuthRequest, TokenResponse};
use crate::error::ApiError;
use crate::server::state::AppState;
use crate::validation::{validate_email, validate_password};

/// Register a new user and return a bearer token
pub async fn signup(
    State(state): State<AppState>,
    Json(request): Json<AuthRequest>,
) -> Result<(StatusCode, Json<TokenResponse>), ApiError> {
    validate_email(&request.email)?;
    validate_password(&request.password)?;

    let access_token = state.auth.signup(&request.email, &request.password).await?;

    Ok((StatusCode::CREATED, Json(TokenResponse { access_token })))
}
