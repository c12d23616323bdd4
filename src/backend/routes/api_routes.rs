/**
 * API Route Handlers
 *
 * Public routes are added straight to the router. Protected routes are
 * collected in their own router with `auth_middleware` applied through
 * `route_layer`, so the middleware only runs for requests that match one of
 * them and unknown paths still reach the fallback.
 */

use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};

use crate::backend::auth::{list_users, login, signup};
use crate::backend::middleware::auth_middleware;
use crate::backend::server::state::AppState;
use crate::backend::tweets::{delete_tweet, list_tweets, post_tweet, update_tweet};

/// Configure API routes
///
/// ## Public
/// - `POST /signup`
/// - `POST /login`
/// - `GET /tweets`
///
/// ## Requires `Authorization: Bearer <token>`
/// - `POST /tweet`
/// - `PUT /tweet/{id}`, `DELETE /tweet/{id}`
/// - `GET /users`
pub fn configure_api_routes(router: Router<AppState>, app_state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/tweet", post(post_tweet))
        .route("/tweet/{id}", put(update_tweet).delete(delete_tweet))
        .route("/users", get(list_users))
        .route_layer(middleware::from_fn_with_state(app_state, auth_middleware));

    router
        .route("/signup", post(signup))
        .route("/login", post(login))
        .route("/tweets", get(list_tweets))
        .merge(protected)
}
