//! Database connection and initialization.

use std::sync::Arc;

use sea_orm::sqlx::postgres::PgPoolOptions;
use sea_orm::{DatabaseConnection, SqlxPostgresConnector};

use crate::errors::AppResult;

mod connection_string;

pub use connection_string::parse_connect_options;

/// Database wrapper for connection management
#[derive(Clone)]
pub struct Database {
    connection: Arc<DatabaseConnection>,
}

impl Database {
    /// Open a handle from a connection string.
    ///
    /// Only the string is validated here. The pool is created lazily, so an
    /// unreachable server is reported by the first query, not by `open`.
    /// Must be called from within a Tokio runtime.
    pub fn open(connection_string: &str) -> AppResult<Self> {
        let options = parse_connect_options(connection_string)?;
        let pool = PgPoolOptions::new().connect_lazy_with(options);

        tracing::debug!("Database handle opened");

        Ok(Self {
            connection: Arc::new(SqlxPostgresConnector::from_sqlx_postgres_pool(pool)),
        })
    }

    /// Get a reference to the database connection.
    pub fn connection(&self) -> &DatabaseConnection {
        &self.connection
    }

    /// Get a shared handle to the database connection.
    pub fn get_connection(&self) -> Arc<DatabaseConnection> {
        Arc::clone(&self.connection)
    }
}
