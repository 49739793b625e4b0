//! Serve command - Starts the HTTP server.

use std::sync::Arc;

use tokio::net::TcpListener;

use crate::api::{create_router, AppState, Views};
use crate::cli::args::ServeArgs;
use crate::config::Config;
use crate::errors::{AppError, AppResult};

use super::open_store;

/// Execute the serve command
pub async fn execute(args: ServeArgs, mut config: Config) -> AppResult<()> {
    tracing::info!("Starting server...");

    let users = Arc::new(open_store(&config, args.timestamp_format).await?);
    tracing::info!("Users table ready");

    let views = Arc::new(Views::new()?);
    let app_state = AppState::new(users, views);

    if let Some(host) = args.host {
        config.server_host = host;
    }
    if let Some(port) = args.port {
        config.server_port = port;
    }
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind to {}: {}", addr, e)))?;

    tracing::info!("Server running on http://{}", addr);

    run(listener, app_state).await
}

/// Serve on `listener` until a request fails or Ctrl+C is pressed.
///
/// A failed request resolves to [`AppError::Aborted`] once in-flight
/// requests have drained.
pub async fn run(listener: TcpListener, app_state: AppState) -> AppResult<()> {
    let shutdown = app_state.shutdown.clone();
    let app = create_router(app_state);

    let signal = shutdown.clone();
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            tokio::select! {
                _ = signal.wait() => {}
                _ = tokio::signal::ctrl_c() => {
                    tracing::info!("Received shutdown signal, stopping server...");
                }
            }
        })
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    match shutdown.reason() {
        Some(reason) => Err(AppError::Aborted(reason)),
        None => {
            tracing::info!("Server stopped.");
            Ok(())
        }
    }
}
