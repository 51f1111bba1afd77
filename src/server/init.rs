/**
 * Server Initialization
 *
 * Builds the running application from a `ServerConfig`:
 *
 * 1. Connect the PostgreSQL pool
 * 2. Run sqlx migrations
 * 3. Build token keys and shared state
 * 4. Assemble the router
 *
 * Unlike configuration loading, nothing here degrades gracefully: a missing
 * database or failed migration aborts startup, since the service is useless
 * without its store.
 */

use std::sync::Arc;

use axum::Router;
use sqlx::PgPool;

use crate::auth::tokens::TokenKeys;
use crate::error::ApiError;
use crate::routes::create_router;
use crate::server::config::ServerConfig;
use crate::server::state::AppState;
use crate::store::{PgStore, Store, StoreError};

/// Connect the store, run migrations, and build the application router
pub async fn create_app(config: &ServerConfig) -> Result<Router, ApiError> {
    tracing::info!("connecting to database");
    let pool = PgPool::connect(&config.database_url)
        .await
        .map_err(|e| ApiError::from(StoreError::Database(e)))?;

    tracing::info!("running database migrations");
    sqlx::migrate!()
        .run(&pool)
        .await
        .map_err(|e| ApiError::Config(format!("failed to run migrations: {e}")))?;

    let store: Arc<dyn Store> = Arc::new(PgStore::new(pool));
    let tokens = Arc::new(TokenKeys::new(&config.jwt_secret, config.token_ttl_secs));

    Ok(create_router(AppState::new(store, tokens)))
}
