//! Authentication API integration tests
//!
//! Signup, login, bearer-token resolution and `GET /users`.

use axum::http::StatusCode;
use serde_json::{json, Value};

use crate::common::{auth_header, create_test_server, create_test_user, signup};
use crate::{assert_contains, assert_error_body};

#[tokio::test]
async fn test_signup_success() {
    let server = create_test_server().await;

    let response = server
        .post("/signup")
        .json(&json!({ "username": "alice", "password": "pw1" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let body: Value = response.json();
    assert_eq!(body["message"], "User created successfully");
}

#[tokio::test]
async fn test_signup_duplicate_username() {
    let server = create_test_server().await;
    assert_eq!(signup(&server, "alice", "pw1").await, StatusCode::CREATED);

    let response = server
        .post("/signup")
        .json(&json!({ "username": "alice", "password": "other" }))
        .await;

    assert_error_body!(response, StatusCode::CONFLICT, "user_exists");
}

#[tokio::test]
async fn test_signup_empty_fields() {
    let server = create_test_server().await;

    let response = server
        .post("/signup")
        .json(&json!({ "username": "", "password": "pw1" }))
        .await;
    assert_error_body!(response, StatusCode::BAD_REQUEST, "invalid_input");

    let response = server
        .post("/signup")
        .json(&json!({ "username": "alice" }))
        .await;
    assert_error_body!(response, StatusCode::BAD_REQUEST, "invalid_input");
}

#[tokio::test]
async fn test_login_success() {
    let server = create_test_server().await;
    signup(&server, "alice", "pw1").await;

    let response = server
        .post("/login")
        .json(&json!({ "username": "alice", "password": "pw1" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["message"], "Login successful");
    assert!(!body["token"].as_str().unwrap_or_default().is_empty());
}

#[tokio::test]
async fn test_login_wrong_password_and_unknown_user() {
    let server = create_test_server().await;
    signup(&server, "alice", "pw1").await;

    let response = server
        .post("/login")
        .json(&json!({ "username": "alice", "password": "wrong" }))
        .await;
    assert_error_body!(response, StatusCode::UNAUTHORIZED, "invalid_credentials");

    let response = server
        .post("/login")
        .json(&json!({ "username": "nobody", "password": "pw1" }))
        .await;
    assert_error_body!(response, StatusCode::UNAUTHORIZED, "invalid_credentials");
}

#[tokio::test]
async fn test_users_requires_token() {
    let server = create_test_server().await;

    let response = server.get("/users").await;
    assert_error_body!(response, StatusCode::UNAUTHORIZED, "unauthenticated");

    let (name, value) = auth_header("not-a-jwt");
    let response = server.get("/users").add_header(name, value).await;
    assert_error_body!(response, StatusCode::UNAUTHORIZED, "unauthenticated");
}

#[tokio::test]
async fn test_users_lists_everyone_ascending() {
    let server = create_test_server().await;
    let alice = create_test_user(&server, "alice", "pw1").await;
    create_test_user(&server, "bob", "pw2").await;

    let (name, value) = alice.auth_header();
    let response = server.get("/users").add_header(name, value).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["current_user"], alice.username.as_str());

    let usernames: Vec<&str> = body["users"]
        .as_array()
        .expect("users array")
        .iter()
        .filter_map(|u| u["username"].as_str())
        .collect();
    assert_eq!(usernames, vec!["alice", "bob"]);

    let serialized = body.to_string();
    assert!(!serialized.contains("password"));
    assert_contains!(serialized, "\"id\"");
}

#[tokio::test]
async fn test_banner_and_unknown_route() {
    let server = create_test_server().await;

    let response = server.get("/").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.text(), "Tweet API: CRUD with JWT");

    let response = server.get("/does-not-exist").await;
    assert_error_body!(response, StatusCode::NOT_FOUND, "not_found");
}
