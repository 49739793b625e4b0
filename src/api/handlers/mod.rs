//! HTTP request handlers.

pub mod home_handler;
pub mod user_handler;

pub use home_handler::home;
pub use user_handler::user_routes;
