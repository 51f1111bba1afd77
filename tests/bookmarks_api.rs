//! Bookmark API integration tests
//!
//! Covers the CRUD surface and, in particular, the ownership rule: a
//! bookmark owned by another user is a 404 for every verb, never a 403.

mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use common::{signup, test_server};
use pretty_assertions::assert_eq;

const PASSWORD: &str = "Teste@123";

async fn create(server: &TestServer, token: &str, title: &str) -> serde_json::Value {
    let response = server
        .post("/bookmarks")
        .authorization_bearer(token)
        .json(&serde_json::json!({
            "title": title,
            "link": "https://example.com",
            "description": "an example"
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
    response.json()
}

#[tokio::test]
async fn create_stamps_the_caller_as_owner() {
    let server = test_server();
    let token = signup(&server, "owner@teste.com", PASSWORD).await;

    let bookmark = create(&server, &token, "First bookmark").await;
    assert_eq!(bookmark["title"], "First bookmark");
    assert!(bookmark.get("owner_id").is_some());

    let me: serde_json::Value = server
        .get("/users/me")
        .authorization_bearer(&token)
        .await
        .json();
    assert_eq!(bookmark["owner_id"], me["id"]);
}

#[tokio::test]
async fn create_rejects_empty_fields() {
    let server = test_server();
    let token = signup(&server, "owner@teste.com", PASSWORD).await;

    let response = server
        .post("/bookmarks")
        .authorization_bearer(&token)
        .json(&serde_json::json!({ "title": "", "link": "https://example.com" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn list_returns_only_own_bookmarks() {
    let server = test_server();
    let token_a = signup(&server, "a@teste.com", PASSWORD).await;
    let token_b = signup(&server, "b@teste.com", PASSWORD).await;

    create(&server, &token_a, "A's bookmark").await;
    create(&server, &token_b, "B's bookmark").await;

    let list_a: Vec<serde_json::Value> = server
        .get("/bookmarks")
        .authorization_bearer(&token_a)
        .await
        .json();

    assert_eq!(list_a.len(), 1);
    assert_eq!(list_a[0]["title"], "A's bookmark");
}

#[tokio::test]
async fn get_edit_delete_round_trip() {
    let server = test_server();
    let token = signup(&server, "crud@teste.com", PASSWORD).await;

    let bookmark = create(&server, &token, "Original title").await;
    let id = bookmark["id"].as_str().unwrap();

    let fetched: serde_json::Value = server
        .get(&format!("/bookmarks/{id}"))
        .authorization_bearer(&token)
        .await
        .json();
    assert_eq!(fetched["title"], "Original title");

    let edited = server
        .patch(&format!("/bookmarks/{id}"))
        .authorization_bearer(&token)
        .json(&serde_json::json!({ "title": "Edited title" }))
        .await;
    assert_eq!(edited.status_code(), StatusCode::OK);
    let edited: serde_json::Value = edited.json();
    assert_eq!(edited["title"], "Edited title");
    // Untouched fields survive a partial edit.
    assert_eq!(edited["link"], "https://example.com");

    let deleted = server
        .delete(&format!("/bookmarks/{id}"))
        .authorization_bearer(&token)
        .await;
    assert_eq!(deleted.status_code(), StatusCode::NO_CONTENT);

    let gone = server
        .get(&format!("/bookmarks/{id}"))
        .authorization_bearer(&token)
        .await;
    assert_eq!(gone.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn other_users_records_look_absent() {
    let server = test_server();
    let token_a = signup(&server, "a@teste.com", PASSWORD).await;
    let token_b = signup(&server, "b@teste.com", PASSWORD).await;

    let bookmark = create(&server, &token_b, "B's secret").await;
    let id = bookmark["id"].as_str().unwrap();

    // Read, edit, and delete as A all see a 404, not a 403.
    let read = server
        .get(&format!("/bookmarks/{id}"))
        .authorization_bearer(&token_a)
        .await;
    assert_eq!(read.status_code(), StatusCode::NOT_FOUND);

    let edit = server
        .patch(&format!("/bookmarks/{id}"))
        .authorization_bearer(&token_a)
        .json(&serde_json::json!({ "title": "hijacked" }))
        .await;
    assert_eq!(edit.status_code(), StatusCode::NOT_FOUND);

    let delete = server
        .delete(&format!("/bookmarks/{id}"))
        .authorization_bearer(&token_a)
        .await;
    assert_eq!(delete.status_code(), StatusCode::NOT_FOUND);

    // B still owns an intact record.
    let still_there = server
        .get(&format!("/bookmarks/{id}"))
        .authorization_bearer(&token_b)
        .await;
    assert_eq!(still_there.status_code(), StatusCode::OK);
    let body: serde_json::Value = still_there.json();
    assert_eq!(body["title"], "B's secret");
}

#[tokio::test]
async fn bookmark_routes_require_authentication() {
    let server = test_server();

    let response = server.get("/bookmarks").await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}
