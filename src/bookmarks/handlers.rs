/**
 * Bookmark Handlers
 *
 * CRUD over the caller's own bookmarks. The ownership rule lives in the
 * store: every query is scoped by owner id, so these handlers only translate
 * `None`/`false` results into `404 Not Found`.
 */

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ApiError;
use crate::middleware::CurrentUser;
use crate::server::state::AppState;
use crate::store::{Bookmark, BookmarkChanges, BookmarkStore, NewBookmark};
use crate::validation::validate_not_empty;

/// Body of a bookmark creation request
#[derive(Debug, Deserialize, Serialize)]
pub struct CreateBookmarkRequest {
    pub title: String,
    pub link: String,
    pub description: Option<String>,
}

/// Body of a bookmark edit; absent fields are left unchanged
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct EditBookmarkRequest {
    pub title: Option<String>,
    pub link: Option<String>,
    pub description: Option<String>,
}

/// Create a bookmark owned by the caller
pub async fn create_bookmark(
    user: CurrentUser,
    State(state): State<AppState>,
    Json(request): Json<CreateBookmarkRequest>,
) -> Result<(StatusCode, Json<Bookmark>), ApiError> {
    validate_not_empty("title", &request.title)?;
    validate_not_empty("link", &request.link)?;

    let bookmark = state
        .store
        .create_bookmark(
            user.user_id,
            NewBookmark {
                title: request.title,
                link: request.link,
                description: request.description,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok((StatusCode::CREATED, Json(bookmark)))
}

/// List the caller's bookmarks
pub async fn list_bookmarks(
    user: CurrentUser,
    State(state): State<AppState>,
) -> Result<Json<Vec<Bookmark>>, ApiError> {
    let bookmarks = state
        .store
        .list_bookmarks(user.user_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(bookmarks))
}

/// Fetch one of the caller's bookmarks by id
pub async fn get_bookmark(
    user: CurrentUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Bookmark>, ApiError> {
    let bookmark = state
        .store
        .find_bookmark(user.user_id, id)
        .await
        .map_err(ApiError::from)?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(bookmark))
}

/// Apply a partial update to one of the caller's bookmarks
pub async fn edit_bookmark(
    user: CurrentUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<EditBookmarkRequest>,
) -> Result<Json<Bookmark>, ApiError> {
    let changes = BookmarkChanges {
        title: request.title,
        link: request.link,
        description: request.description,
    };

    let bookmark = state
        .store
        .update_bookmark(user.user_id, id, changes)
        .await
        .map_err(ApiError::from)?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(bookmark))
}

/// Delete one of the caller's bookmarks
pub async fn delete_bookmark(
    user: CurrentUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let deleted = state
        .store
        .delete_bookmark(user.user_id, id)
        .await
        .map_err(ApiError::from)?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound)
    }
}
