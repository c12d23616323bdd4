/**
 * Error Conversion
 *
 * `BackendError` implements `IntoResponse` so handlers can return it
 * directly.
 *
 * # Response Format
 *
 * ```json
 * {
 *   "error": "not_found",
 *   "message": "Tweet not found",
 *   "status": 404
 * }
 * ```
 */

use axum::response::{IntoResponse, Json, Response};

use crate::backend::error::types::BackendError;

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if self.is_internal() {
            tracing::error!("Request failed: {}", self);
        } else {
            tracing::debug!("Request rejected ({}): {}", status, self);
        }

        let body = serde_json::json!({
            "error": self.code(),
            "message": self.message(),
            "status": status.as_u16(),
        });

        (status, Json(body)).into_response()
    }
}
