//! CLI module - Command-line interface for the application.
//!
//! Provides commands for:
//! - `serve` - Start the HTTP server
//! - `demo` - Create, insert and list in one go
//! - `add` / `list` - Single repository operations

pub mod args;

pub use args::{Cli, Commands};
