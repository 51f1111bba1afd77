//! Shared test fixtures
//!
//! Builds a `TestServer` over the real router with the in-memory store, so
//! integration tests exercise routing, middleware, and handlers end to end
//! without a database.

// Not every test binary uses every helper.
#![allow(dead_code)]

use std::sync::Arc;

use axum_test::TestServer;
use linkstash::auth::tokens::TokenKeys;
use linkstash::routes::create_router;
use linkstash::server::state::AppState;
use linkstash::store::{MemoryStore, Store};

pub const TEST_SECRET: &str = "integration-test-secret";

/// Spin up a test server with an empty in-memory store
pub fn test_server() -> TestServer {
    test_server_with_ttl(300)
}

/// Spin up a test server issuing tokens with the given TTL
pub fn test_server_with_ttl(ttl_secs: i64) -> TestServer {
    let store: Arc<dyn Store> = Arc::new(MemoryStore::new());
    let tokens = Arc::new(TokenKeys::new(TEST_SECRET, ttl_secs));
    let app = create_router(AppState::new(store, tokens));
    TestServer::new(app).expect("failed to start test server")
}

/// Sign up a user and return their bearer token
pub async fn signup(server: &TestServer, email: &str, password: &str) -> String {
    let response = server
        .post("/auth/signup")
        .json(&serde_json::json!({ "email": email, "password": password }))
        .await;

    assert_eq!(response.status_code().as_u16(), 201, "signup failed");
    let body: serde_json::Value = response.json();
    body["access_token"]
        .as_str()
        .expect("missing access_token")
        .to_string()
}
