//! User profile API integration tests

mod common;

use axum::http::StatusCode;
use common::{signup, test_server};
use pretty_assertions::assert_eq;

const PASSWORD: &str = "Teste@123";

#[tokio::test]
async fn me_returns_profile_without_hash() {
    let server = test_server();
    let token = signup(&server, "me@teste.com", PASSWORD).await;

    let response = server.get("/users/me").authorization_bearer(&token).await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: serde_json::Value = response.json();
    assert_eq!(body["email"], "me@teste.com");
    assert!(body.get("password_hash").is_none());
    assert!(body.get("id").is_some());
}

#[tokio::test]
async fn edit_user_updates_profile_fields() {
    let server = test_server();
    let token = signup(&server, "edit@teste.com", PASSWORD).await;

    let response = server
        .patch("/users")
        .authorization_bearer(&token)
        .json(&serde_json::json!({
            "first_name": "Ada",
            "last_name": "Lovelace"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["first_name"], "Ada");
    assert_eq!(body["last_name"], "Lovelace");
    assert_eq!(body["email"], "edit@teste.com");

    // The change is visible on subsequent reads.
    let me: serde_json::Value = server
        .get("/users/me")
        .authorization_bearer(&token)
        .await
        .json();
    assert_eq!(me["first_name"], "Ada");
}

#[tokio::test]
async fn edit_user_rejects_taken_email() {
    let server = test_server();
    signup(&server, "a@teste.com", PASSWORD).await;
    let token_b = signup(&server, "b@teste.com", PASSWORD).await;

    let response = server
        .patch("/users")
        .authorization_bearer(&token_b)
        .json(&serde_json::json!({ "email": "a@teste.com" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn edit_user_rejects_malformed_email() {
    let server = test_server();
    let token = signup(&server, "c@teste.com", PASSWORD).await;

    let response = server
        .patch("/users")
        .authorization_bearer(&token)
        .json(&serde_json::json!({ "email": "not-an-email" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn edit_user_requires_authentication() {
    let server = test_server();

    let response = server
        .patch("/users")
        .json(&serde_json::json!({ "first_name": "Nobody" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}
