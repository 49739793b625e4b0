//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address (local only)
pub const DEFAULT_SERVER_HOST: &str = "127.0.0.1";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

// =============================================================================
// Database
// =============================================================================

/// Default connection string (for development).
///
/// Assumes a database named `example` already exists and is reachable
/// through the local Unix socket.
pub const DEFAULT_DATABASE_URL: &str =
    "user=postgres dbname=example sslmode=disable port=5432 host=/var/run/postgresql";

// =============================================================================
// Timestamps
// =============================================================================

/// Date-only pattern bound on insert by the CLI commands (month-day-year)
pub const DATE_PATTERN: &str = "%m-%d-%Y";

/// Date-and-time pattern bound on insert by the web front-end
pub const DATE_TIME_PATTERN: &str = "%Y-%m-%d %H:%M:%S";

// =============================================================================
// Demo
// =============================================================================

/// Username inserted by the `demo` command
pub const DEMO_USERNAME: &str = "johdoe";

/// Password inserted by the `demo` command
pub const DEMO_PASSWORD: &str = "secret";
