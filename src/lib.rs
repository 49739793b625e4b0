//! pg-users - A PostgreSQL users table behind a CLI and a small web front-end
//!
//! Both front-ends share one repository over one explicitly passed
//! database handle.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Core entities (users, timestamp formats)
//! - **infra**: Connection provider and user repository
//! - **api**: HTTP handlers, views, middleware, and routes
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Insert a sample user and list everything
//! cargo run -- demo
//!
//! # Start the web front-end
//! cargo run -- serve
//!
//! # Single operations
//! cargo run -- add --username alice --password secret
//! cargo run -- list
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{NewUser, TimestampFormat, User};
pub use errors::{AppError, AppResult};
pub use infra::{Database, UserRepository, UserStore};
