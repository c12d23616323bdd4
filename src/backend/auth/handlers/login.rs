/**
 * Login Handler
 *
 * This module implements the user authentication handler for POST /login.
 *
 * # Authentication Process
 *
 * 1. Look up user by username
 * 2. Verify password using bcrypt
 * 3. Generate JWT token
 *
 * Unknown user and wrong password produce the same 401 response.
 */

use axum::{extract::State, response::Json};

use crate::backend::auth::handlers::types::{LoginRequest, LoginResponse};
use crate::backend::auth::service::AuthService;
use crate::backend::error::BackendError;
use crate::backend::middleware::ApiJson;

/// Login handler
///
/// # Errors
///
/// * `401 Unauthorized` (`invalid_credentials`) - unknown user or wrong password
/// * `500 Internal Server Error` - database or token signing failure
///
/// # Example Response
///
/// ```json
/// { "message": "Login successful", "token": "eyJhbGciOiJIUzI1NiIs..." }
/// ```
pub async fn login(
    State(auth): State<AuthService>,
    ApiJson(request): ApiJson<LoginRequest>,
) -> Result<Json<LoginResponse>, BackendError> {
    tracing::info!("Login request for: {}", request.username);

    let token = auth.login(&request.username, &request.password).await?;

    tracing::info!("User logged in successfully: {}", request.username);

    Ok(Json(LoginResponse {
        message: "Login successful".to_string(),
        token,
    }))
}
