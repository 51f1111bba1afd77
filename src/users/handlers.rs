/**
 * User Profile Handlers
 *
 * `GET /users/me` and `PATCH /users`, both behind the auth middleware.
 *
 * Responses use `UserResponse`, which carries no password hash; the store's
 * `User` record never crosses the wire.
 */

use axum::{extract::State, response::Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ApiError;
use crate::middleware::CurrentUser;
use crate::server::state::AppState;
use crate::store::{User, UserChanges, UserStore};
use crate::validation::validate_email;

/// User profile as returned to clients (no sensitive fields)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            created_at: user.created_at,
        }
    }
}

/// Body of a profile edit; absent fields are left unchanged
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct EditUserRequest {
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Return the authenticated caller's profile
pub async fn get_me(
    user: CurrentUser,
    State(state): State<AppState>,
) -> Result<Json<UserResponse>, ApiError> {
    let record = state
        .store
        .find_user_by_id(user.user_id)
        .await
        .map_err(ApiError::from)?
        .ok_or(ApiError::Unauthenticated)?;

    Ok(Json(record.into()))
}

/// Apply a partial update to the caller's profile
///
/// Changing the email to one already registered fails with the same 403 as a
/// duplicate signup.
pub async fn edit_user(
    user: CurrentUser,
    State(state): State<AppState>,
    Json(request): Json<EditUserRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    if let Some(email) = &request.email {
        validate_email(email)?;
    }

    let changes = UserChanges {
        email: request.email,
        first_name: request.first_name,
        last_name: request.last_name,
    };

    let record = state
        .store
        .update_user(user.user_id, changes)
        .await
        .map_err(ApiError::from)?
        .ok_or(ApiError::Unauthenticated)?;

    Ok(Json(record.into()))
}
