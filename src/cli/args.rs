//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use clap::{Parser, Subcommand};

use crate::domain::TimestampFormat;

/// PostgreSQL users table, from the command line or the browser
#[derive(Parser, Debug)]
#[command(name = "pg-users")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Connection string (`key=value` pairs or a postgres:// URL)
    #[arg(short, long, global = true, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP server
    Serve(ServeArgs),

    /// Create the table, insert a sample user and print every user
    Demo(DemoArgs),

    /// Insert a single user
    Add(AddArgs),

    /// Print every user
    List,
}

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Host to bind to (defaults to SERVER_HOST or 127.0.0.1)
    #[arg(short = 'H', long)]
    pub host: Option<String>,

    /// Port to listen on (defaults to SERVER_PORT or 8080)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// How creation times are written on insert
    #[arg(long, value_enum, default_value_t = TimestampFormat::DateTime)]
    pub timestamp_format: TimestampFormat,
}

/// Arguments for the demo command
#[derive(Parser, Debug)]
pub struct DemoArgs {
    /// How creation times are written on insert
    #[arg(long, value_enum, default_value_t = TimestampFormat::Date)]
    pub timestamp_format: TimestampFormat,
}

/// Arguments for the add command
#[derive(Parser, Debug)]
pub struct AddArgs {
    /// Username of the new user
    #[arg(short, long)]
    pub username: String,

    /// Password of the new user (stored as given)
    #[arg(short = 'P', long)]
    pub password: String,

    /// How creation times are written on insert
    #[arg(long, value_enum, default_value_t = TimestampFormat::Date)]
    pub timestamp_format: TimestampFormat,
}
