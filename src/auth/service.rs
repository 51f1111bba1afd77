/**
 * Authentication Service
 *
 * Orchestrates signup (hash, persist, issue token) and signin (lookup,
 * verify, issue token). This is the only component with business-logic
 * branching: everything else is a thin adapter around it.
 *
 * # Error Policy
 *
 * - Signup on a taken email fails with `DuplicateUser`; any other store error
 *   propagates as an internal fault rather than being swallowed.
 * - Signin failures return `InvalidCredentials` with one kind and one message
 *   regardless of whether the email was unknown or the password wrong, so the
 *   response cannot be used to enumerate accounts.
 */

use std::sync::Arc;

use crate::auth::password::{hash_password, verify_password};
use crate::auth::tokens::TokenKeys;
use crate::error::ApiError;
use crate::store::{NewUser, Store, StoreError, UserStore};

/// Signup/signin orchestration over the credential store and token keys
#[derive(Clone)]
pub struct AuthService {
    store: Arc<dyn Store>,
    tokens: Arc<TokenKeys>,
}

impl AuthService {
    pub fn new(store: Arc<dyn Store>, tokens: Arc<TokenKeys>) -> Self {
        Self { store, tokens }
    }

    /// Register a new credential record and issue a token for it
    pub async fn signup(&self, email: &str, password: &str) -> Result<String, ApiError> {
        let password_hash = hash_password(password)?;

        let user = match self
            .store
            .create_user(NewUser {
                email: email.to_owned(),
                password_hash,
            })
            .await
        {
            Ok(user) => user,
            Err(StoreError::DuplicateEmail) => {
                tracing::warn!("signup conflict for {email}");
                return Err(ApiError::DuplicateUser);
            }
            Err(err) => return Err(err.into()),
        };

        tracing::info!("user created: {}", user.id);
        self.tokens.issue(user.id, &user.email)
    }

    /// Verify credentials and issue a token
    pub async fn signin(&self, email: &str, password: &str) -> Result<String, ApiError> {
        let user = self
            .store
            .find_user_by_email(email)
            .await
            .map_err(ApiError::from)?
            .ok_or_else(|| {
                tracing::warn!("signin rejected for {email}");
                ApiError::InvalidCredentials
            })?;

        if !verify_password(&user.password_hash, password) {
            tracing::warn!("signin rejected for {email}");
            return Err(ApiError::InvalidCredentials);
        }

        self.tokens.issue(user.id, &user.email)
    }
}
