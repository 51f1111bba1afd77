/**
 * Identity Resolution Middleware
 *
 * Runs before every protected handler. It extracts the bearer token from the
 * `Authorization` header, verifies it, re-fetches the credential record by
 * the claim subject (so a deleted account stops authenticating immediately),
 * and attaches the resolved identity to the request extensions.
 *
 * The guard is a pure gate: its only side effect is the read-only user
 * lookup. Every failure mode - missing header, malformed scheme, bad or
 * expired token, unknown subject - yields `401 Unauthorized`.
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::error::ApiError;
use crate::server::state::AppState;
use crate::store::UserStore;

/// Resolved caller identity, scoped to a single request
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub user_id: Uuid,
    pub email: String,
}

/// Bearer-token guard for the protected route group
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            tracing::warn!("missing Authorization header");
            ApiError::Unauthenticated
        })?;

    let token = header.strip_prefix("Bearer ").ok_or_else(|| {
        tracing::warn!("malformed Authorization header");
        ApiError::Unauthenticated
    })?;

    let claims = state.tokens.verify(token)?;

    let user_id = Uuid::parse_str(&claims.sub).map_err(|_| {
        tracing::warn!("token subject is not a valid id");
        ApiError::Unauthenticated
    })?;

    // Re-fetch the credential record so a deleted account is reflected.
    let user = state
        .store
        .find_user_by_id(user_id)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| {
            tracing::warn!("token subject {user_id} no longer exists");
            ApiError::Unauthenticated
        })?;

    request.extensions_mut().insert(CurrentUser {
        user_id: user.id,
        email: user.email,
    });

    Ok(next.run(request).await)
}

/// Extractor giving handlers the identity resolved by `auth_middleware`
impl<S: Send + Sync> FromRequestParts<S> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CurrentUser>()
            .cloned()
            .ok_or(ApiError::Unauthenticated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request as HttpRequest;

    #[tokio::test]
    async fn extractor_returns_identity_from_extensions() {
        let identity = CurrentUser {
            user_id: Uuid::new_v4(),
            email: "test@example.com".to_string(),
        };

        let mut request = HttpRequest::builder()
            .uri("http://localhost/bookmarks")
            .body(())
            .unwrap();
        request.extensions_mut().insert(identity.clone());

        let (mut parts, _) = request.into_parts();
        let extracted = CurrentUser::from_request_parts(&mut parts, &()).await.unwrap();
        assert_eq!(extracted.user_id, identity.user_id);
        assert_eq!(extracted.email, identity.email);
    }

    #[tokio::test]
    async fn extractor_rejects_when_guard_did_not_run() {
        let request = HttpRequest::builder()
            .uri("http://localhost/bookmarks")
            .body(())
            .unwrap();

        let (mut parts, _) = request.into_parts();
        let result = CurrentUser::from_request_parts(&mut parts, &()).await;
        assert!(matches!(result, Err(ApiError::Unauthenticated)));
    }
}
