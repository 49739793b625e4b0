//! API layer - HTTP handlers and middleware
//!
//! This module contains all HTTP-related concerns:
//! - Request handlers
//! - Fail-fast middleware
//! - HTML views
//! - Route definitions

pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod views;

pub use routes::create_router;
pub use state::{AppState, Shutdown};
pub use views::Views;
