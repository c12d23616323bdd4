/**
 * Signup Handler
 *
 * This module implements the user registration handler for POST /signup.
 *
 * # Registration Process
 *
 * 1. Validate that username and password are non-empty
 * 2. Check if the username already exists
 * 3. Hash password using bcrypt
 * 4. Create user in database
 *
 * Signup does not log the user in; the client calls /login next.
 */

use axum::{extract::State, http::StatusCode, response::Json};

use crate::backend::auth::handlers::types::SignupRequest;
use crate::backend::auth::service::AuthService;
use crate::backend::error::BackendError;
use crate::backend::middleware::ApiJson;
use crate::shared::MessageResponse;

/// Sign up handler
///
/// # Errors
///
/// * `400 Bad Request` - If username or password is empty
/// * `409 Conflict` - If the username is already taken
/// * `500 Internal Server Error` - If hashing or the database fails
///
/// # Example Request
///
/// ```http
/// POST /signup HTTP/1.1
/// Content-Type: application/json
///
/// { "username": "alice", "password": "pw1" }
/// ```
///
/// # Example Response
///
/// ```json
/// { "message": "User created successfully" }
/// ```
pub async fn signup(
    State(auth): State<AuthService>,
    ApiJson(request): ApiJson<SignupRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), BackendError> {
    tracing::info!("Signup request for username: {}", request.username);

    let user_id = auth.register(&request.username, &request.password).await?;

    tracing::info!("User created successfully: {} (id {})", request.username, user_id);

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("User created successfully")),
    ))
}
