/**
 * JSON and Path Extractors
 *
 * Thin wrappers over axum's `Json` and `Path` whose rejections are
 * `BackendError`, so a malformed body or a non-numeric id gets the same
 * `{"error","message","status"}` body as every other failure.
 */

use axum::{
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
    Json,
};
use serde::de::DeserializeOwned;

use crate::backend::error::BackendError;

/// `Json<T>` with a `BackendError` rejection
#[derive(Debug, Clone)]
pub struct ApiJson<T>(pub T);

impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request(request: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(request, state)
            .await
            .inspect_err(|e| tracing::debug!("Rejected JSON body: {}", e.body_text()))?;
        Ok(ApiJson(value))
    }
}

/// `Path<T>` with a `BackendError` rejection
#[derive(Debug, Clone)]
pub struct ApiPath<T>(pub T);

impl<T, S> FromRequestParts<S> for ApiPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state).await?;
        Ok(ApiPath(value))
    }
}
