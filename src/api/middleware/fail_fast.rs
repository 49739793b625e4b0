//! Stops the server as soon as a request fails.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::api::AppState;
use crate::errors::FatalError;

/// Trigger shutdown when a handler returned an [`AppError`](crate::errors::AppError).
///
/// The failed response is still sent; the server then stops accepting
/// connections and `serve` returns the error.
pub async fn fail_fast_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let response = next.run(request).await;

    if let Some(FatalError(reason)) = response.extensions().get::<FatalError>() {
        tracing::error!("Stopping server: {}", reason);
        state.shutdown.trigger(reason.clone());
    }

    response
}
