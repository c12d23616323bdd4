//! Tweet API integration tests
//!
//! Creation, listing order, and ownership enforcement on update/delete.

use std::time::Duration;

use axum::http::StatusCode;
use serde_json::{json, Value};
use tweet_api::backend::auth::TokenKeys;

use crate::assert_error_body;
use crate::common::{auth_header, create_test_server, create_test_user, post_tweet, TEST_SECRET};

#[tokio::test]
async fn test_post_tweet_returns_id() {
    let server = create_test_server().await;
    let alice = create_test_user(&server, "alice", "pw1").await;

    let (name, value) = alice.auth_header();
    let response = server
        .post("/tweet")
        .add_header(name, value)
        .json(&json!({ "content": "hello" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let body: Value = response.json();
    assert_eq!(body["message"], "Tweet posted successfully");
    assert!(body["tweet_id"].as_i64().is_some());
}

#[tokio::test]
async fn test_post_tweet_without_token() {
    let server = create_test_server().await;

    let response = server
        .post("/tweet")
        .json(&json!({ "content": "hello" }))
        .await;
    assert_error_body!(response, StatusCode::UNAUTHORIZED, "unauthenticated");

    let listed: Value = server.get("/tweets").await.json();
    assert_eq!(listed, json!([]));
}

#[tokio::test]
async fn test_post_tweet_content_bounds() {
    let server = create_test_server().await;
    let alice = create_test_user(&server, "alice", "pw1").await;

    for content in [String::new(), "x".repeat(281)] {
        let (name, value) = alice.auth_header();
        let response = server
            .post("/tweet")
            .add_header(name, value)
            .json(&json!({ "content": content }))
            .await;
        assert_error_body!(response, StatusCode::BAD_REQUEST, "invalid_content");
    }

    let (name, value) = alice.auth_header();
    let response = server.post("/tweet").add_header(name, value).json(&json!({})).await;
    assert_error_body!(response, StatusCode::BAD_REQUEST, "invalid_content");

    post_tweet(&server, &alice, "x").await;
    post_tweet(&server, &alice, &"x".repeat(280)).await;
    post_tweet(&server, &alice, &"é".repeat(280)).await;
}

#[tokio::test]
async fn test_list_is_public_and_newest_first() {
    let server = create_test_server().await;
    let alice = create_test_user(&server, "alice", "pw1").await;
    let bob = create_test_user(&server, "bob", "pw2").await;

    let p1 = post_tweet(&server, &alice, "P1").await;
    let p2 = post_tweet(&server, &bob, "P2").await;
    let p3 = post_tweet(&server, &alice, "P3").await;

    let response = server.get("/tweets").await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(
        body,
        json!([
            { "id": p3, "user": "alice", "content": "P3" },
            { "id": p2, "user": "bob", "content": "P2" },
            { "id": p1, "user": "alice", "content": "P1" },
        ])
    );
}

#[tokio::test]
async fn test_update_ownership_and_errors() {
    let server = create_test_server().await;
    let alice = create_test_user(&server, "alice", "pw1").await;
    let bob = create_test_user(&server, "bob", "pw2").await;
    let id = post_tweet(&server, &alice, "hello").await;

    let (name, value) = bob.auth_header();
    let response = server
        .put(&format!("/tweet/{}", id))
        .add_header(name, value)
        .json(&json!({ "content": "hijacked" }))
        .await;
    assert_error_body!(response, StatusCode::FORBIDDEN, "forbidden");

    let (name, value) = alice.auth_header();
    let response = server
        .put("/tweet/9999")
        .add_header(name, value)
        .json(&json!({ "content": "ghost" }))
        .await;
    assert_error_body!(response, StatusCode::NOT_FOUND, "not_found");

    let (name, value) = alice.auth_header();
    let response = server
        .put(&format!("/tweet/{}", id))
        .add_header(name, value)
        .json(&json!({ "content": "" }))
        .await;
    assert_error_body!(response, StatusCode::BAD_REQUEST, "invalid_content");

    let (name, value) = alice.auth_header();
    let response = server
        .put(&format!("/tweet/{}", id))
        .add_header(name, value)
        .json(&json!({ "content": "edited" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["message"], "Tweet updated successfully");

    let listed: Value = server.get("/tweets").await.json();
    assert_eq!(listed, json!([{ "id": id, "user": "alice", "content": "edited" }]));
}

#[tokio::test]
async fn test_delete_ownership_and_errors() {
    let server = create_test_server().await;
    let alice = create_test_user(&server, "alice", "pw1").await;
    let bob = create_test_user(&server, "bob", "pw2").await;
    let id = post_tweet(&server, &alice, "hello").await;

    let (name, value) = bob.auth_header();
    let response = server
        .delete(&format!("/tweet/{}", id))
        .add_header(name, value)
        .await;
    assert_error_body!(response, StatusCode::FORBIDDEN, "forbidden");

    let response = server.delete(&format!("/tweet/{}", id)).await;
    assert_error_body!(response, StatusCode::UNAUTHORIZED, "unauthenticated");

    let (name, value) = alice.auth_header();
    let response = server
        .delete(&format!("/tweet/{}", id))
        .add_header(name, value)
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["message"], "Tweet deleted successfully");

    let (name, value) = alice.auth_header();
    let response = server
        .delete(&format!("/tweet/{}", id))
        .add_header(name, value)
        .await;
    assert_error_body!(response, StatusCode::NOT_FOUND, "not_found");
}

#[tokio::test]
async fn test_tampered_token_is_rejected() {
    let server = create_test_server().await;
    let alice = create_test_user(&server, "alice", "pw1").await;

    let mut tampered = alice.token.clone();
    tampered.push('x');

    let (name, value) = auth_header(&tampered);
    let response = server
        .post("/tweet")
        .add_header(name, value)
        .json(&json!({ "content": "hello" }))
        .await;
    assert_error_body!(response, StatusCode::UNAUTHORIZED, "unauthenticated");
}

#[tokio::test]
async fn test_null_content_is_invalid_content() {
    let server = create_test_server().await;
    let alice = create_test_user(&server, "alice", "pw1").await;
    let id = post_tweet(&server, &alice, "hello").await;

    let (name, value) = alice.auth_header();
    let response = server
        .post("/tweet")
        .add_header(name, value)
        .json(&json!({ "content": null }))
        .await;
    assert_error_body!(response, StatusCode::BAD_REQUEST, "invalid_content");

    let (name, value) = alice.auth_header();
    let response = server
        .put(&format!("/tweet/{}", id))
        .add_header(name, value)
        .json(&json!({ "content": null }))
        .await;
    assert_error_body!(response, StatusCode::BAD_REQUEST, "invalid_content");

    let listed: Value = server.get("/tweets").await.json();
    assert_eq!(listed, json!([{ "id": id, "user": "alice", "content": "hello" }]));
}

#[tokio::test]
async fn test_expired_token_is_rejected() {
    let server = create_test_server().await;
    create_test_user(&server, "alice", "pw1").await;

    let expired = TokenKeys::new(TEST_SECRET, Duration::from_secs(60))
        .create_token_at("alice", 1_000_000)
        .expect("token signs");

    let (name, value) = auth_header(&expired);
    let response = server
        .post("/tweet")
        .add_header(name, value)
        .json(&json!({ "content": "hello" }))
        .await;
    assert_error_body!(response, StatusCode::UNAUTHORIZED, "unauthenticated");

    let (name, value) = auth_header(&expired);
    let response = server.get("/users").add_header(name, value).await;
    assert_error_body!(response, StatusCode::UNAUTHORIZED, "unauthenticated");
}

#[tokio::test]
async fn test_malformed_requests_get_json_errors() {
    let server = create_test_server().await;
    let alice = create_test_user(&server, "alice", "pw1").await;

    let (name, value) = alice.auth_header();
    let response = server
        .put("/tweet/abc")
        .add_header(name, value)
        .json(&json!({ "content": "edited" }))
        .await;
    assert_error_body!(response, StatusCode::BAD_REQUEST, "invalid_request");

    let (name, value) = alice.auth_header();
    let response = server
        .delete("/tweet/abc")
        .add_header(name, value)
        .await;
    assert_error_body!(response, StatusCode::BAD_REQUEST, "invalid_request");

    let (name, value) = alice.auth_header();
    let response = server
        .post("/tweet")
        .add_header(name, value)
        .content_type("application/json")
        .bytes("{not json".into())
        .await;
    assert_error_body!(response, StatusCode::BAD_REQUEST, "invalid_request");

    let response = server
        .post("/signup")
        .content_type("application/json")
        .bytes("{\"username\": 5}".into())
        .await;
    assert_error_body!(response, StatusCode::UNPROCESSABLE_ENTITY, "invalid_request");
}
