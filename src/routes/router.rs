/**
 * Router Configuration
 *
 * Two route groups:
 *
 * - Public: `POST /auth/signup`, `POST /auth/signin`
 * - Protected: the `/users` and `/bookmarks` routes, wrapped by the identity
 *   resolution middleware so no handler in the group runs unauthenticated
 *
 * Request tracing is applied to everything; unknown routes fall back to a
 * JSON 404.
 */

use axum::{
    middleware,
    routing::{get, patch, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::auth::handlers::{signin, signup};
use crate::bookmarks::handlers::{
    create_bookmark, delete_bookmark, edit_bookmark, get_bookmark, list_bookmarks,
};
use crate::error::ApiError;
use crate::middleware::auth::auth_middleware;
use crate::server::state::AppState;
use crate::users::handlers::{edit_user, get_me};

/// Build the application router
pub fn create_router(state: AppState) -> Router {
    let public = Router::new()
        .route("/auth/signup", post(signup))
        .route("/auth/signin", post(signin));

    let protected = Router::new()
        .route("/users/me", get(get_me))
        .route("/users", patch(edit_user))
        .route("/bookmarks", post(create_bookmark).get(list_bookmarks))
        .route(
            "/bookmarks/{id}",
            get(get_bookmark).patch(edit_bookmark).delete(delete_bookmark),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    Router::new()
        .merge(public)
        .merge(protected)
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn not_found() -> ApiError {
    ApiError::NotFound
}
