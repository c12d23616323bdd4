/**
 * Authentication Middleware
 *
 * This module provides the guard for routes that require a logged-in
 * caller. It extracts the bearer token from the Authorization header,
 * resolves it through `AuthService`, and attaches the resulting identity
 * to the request extensions for handlers to pick up with `AuthUser`.
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::backend::auth::identity::Identity;
use crate::backend::auth::service::AuthService;
use crate::backend::error::BackendError;

/// Authenticated user data resolved from the bearer token
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub identity: Identity,
}

/// Extract the token from an `Authorization: Bearer <token>` header
///
/// Returns `None` if the header is missing, not valid UTF-8, or uses a
/// different scheme.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
}

/// Authentication middleware
///
/// This middleware:
/// 1. Extracts the bearer token from the Authorization header
/// 2. Verifies signature and expiry
/// 3. Attaches the caller's identity to request extensions
///
/// Returns 401 (`unauthenticated`) if the token is missing or invalid.
pub async fn auth_middleware(
    State(auth): State<AuthService>,
    mut request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    let identity = auth
        .resolve_identity(bearer_token(request.headers()))
        .inspect_err(|e| tracing::warn!("Rejected request to {}: {}", request.uri().path(), e))?;

    request
        .extensions_mut()
        .insert(AuthenticatedUser { identity });

    Ok(next.run(request).await)
}

/// Axum extractor for the authenticated user
///
/// Reads the `AuthenticatedUser` placed in request extensions by
/// `auth_middleware`; only usable on routes behind that middleware.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                BackendError::unauthenticated("No authenticated user on request")
            })?;

        Ok(AuthUser(user))
    }
}
