/**
 * Signin Handler
 *
 * `POST /auth/signin`
 *
 * Looks the user up by email, verifies the password against the stored hash,
 * and issues a fresh token.
 *
 * # Errors
 *
 * - `400 Bad Request` - malformed email or empty password
 * - `403 Forbidden` - unknown email or wrong password (same error either way)
 * - `500 Internal Server Error` - store fault or signing failure
 */

use axum::{extract::State, response::Json};

use crate::auth::handlers::types::{AuthRequest, TokenResponse};
use crate::error::ApiError;
use crate::server::state::AppState;
use crate::validation::{validate_email, validate_not_empty};

/// Authenticate an existing user and return a bearer token
pub async fn signin(
    State(state): State<AppState>,
    Json(request): Json<AuthRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    validate_email(&request.email)?;
    validate_not_empty("password", &request.password)?;

    let access_token = state.auth.signin(&request.email, &request.password).await?;

    Ok(Json(TokenResponse { access_token }))
}
