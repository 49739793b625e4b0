//! Application route configuration.

use axum::{middleware, routing::get, Router};
use tower_http::trace::TraceLayer;

use super::handlers::{home, user_routes};
use super::middleware::fail_fast_middleware;
use super::AppState;

/// Create the application router with all routes configured
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .merge(user_routes())
        .layer(middleware::from_fn_with_state(
            state.clone(),
            fail_fast_middleware,
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
