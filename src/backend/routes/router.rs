/**
 * Router Configuration
 *
 * Combines the banner, the API routes and a JSON 404 fallback into one
 * router, then applies request tracing and permissive CORS to all of it.
 */

use axum::{http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde_json::json;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;

pub const BANNER: &str = "Tweet API: CRUD with JWT";

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = Router::new().route("/", get(|| async { BANNER }));

    let router = configure_api_routes(router, app_state.clone());

    router
        .fallback(route_not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(app_state)
}

async fn route_not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "error": "not_found",
            "message": "Route not found",
            "status": StatusCode::NOT_FOUND.as_u16(),
        })),
    )
}
