/**
 * Application State
 *
 * `AppState` is the shared, clonable state handed to every handler and to
 * the auth middleware:
 *
 * - `store` - the repository backend (PostgreSQL in production, in-memory in
 *   tests)
 * - `tokens` - process-wide token signing/verification keys
 * - `auth` - the signup/signin service built over the two above
 *
 * All fields are cheap to clone (`Arc`s) and safe for concurrent use; no
 * request-scoped data lives here.
 */

use std::sync::Arc;

use crate::auth::service::AuthService;
use crate::auth::tokens::TokenKeys;
use crate::store::Store;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
    pub tokens: Arc<TokenKeys>,
    pub auth: AuthService,
}

impl AppState {
    pub fn new(store: Arc<dyn Store>, tokens: Arc<TokenKeys>) -> Self {
        let auth = AuthService::new(store.clone(), tokens.clone());
        Self {
            store,
            tokens,
            auth,
        }
    }
}
