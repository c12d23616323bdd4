/**
 * List Users Handler
 *
 * GET /users returns the caller's username alongside every registered
 * user. Requires a bearer token; the auth middleware has already resolved
 * the caller's identity by the time this handler runs.
 */

use axum::{extract::State, response::Json};

use crate::backend::auth::handlers::types::UsersResponse;
use crate::backend::auth::service::AuthService;
use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;

/// List users handler
///
/// # Example Response
///
/// ```json
/// {
///   "current_user": "alice",
///   "users": [{ "id": 1, "username": "alice" }, { "id": 2, "username": "bob" }]
/// }
/// ```
pub async fn list_users(
    State(auth): State<AuthService>,
    AuthUser(user): AuthUser,
) -> Result<Json<UsersResponse>, BackendError> {
    let users = auth.list_users().await?;

    Ok(Json(UsersResponse {
        current_user: user.identity.into_inner(),
        users,
    }))
}
