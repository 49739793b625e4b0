//! User repository implementation.

use std::sync::Arc;

use async_trait::async_trait;
use futures::{pin_mut, TryStreamExt};
use sea_orm::{ConnectionTrait, DatabaseConnection, EntityTrait, Statement};

use super::entities::UserEntity;
use crate::domain::{NewUser, TimestampFormat, User};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Idempotent DDL for the users table
pub const CREATE_USERS_TABLE: &str = "CREATE TABLE IF NOT EXISTS users (
    id SERIAL PRIMARY KEY,
    username TEXT NOT NULL,
    password TEXT NOT NULL,
    created_at TIMESTAMP
)";

/// Insert with the creation time bound as pre-formatted text
pub const INSERT_USER: &str =
    "INSERT INTO users(username, password, created_at) VALUES($1, $2, CAST($3 AS TIMESTAMP))";

/// User repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Create the users table if it does not exist yet. Safe on every startup.
    async fn ensure_users_table(&self) -> AppResult<()>;

    /// Insert a new row. The generated id is not returned.
    async fn create_user(&self, user: &NewUser) -> AppResult<()>;

    /// Fetch every row in the order the database returns them.
    async fn get_all_users(&self) -> AppResult<Vec<User>>;
}

/// Concrete implementation of UserRepository over a SeaORM connection
pub struct UserStore {
    db: Arc<DatabaseConnection>,
    timestamp_format: TimestampFormat,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: Arc<DatabaseConnection>, timestamp_format: TimestampFormat) -> Self {
        Self {
            db,
            timestamp_format,
        }
    }

    /// Give back the shared connection
    pub fn into_connection(self) -> Arc<DatabaseConnection> {
        self.db
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn ensure_users_table(&self) -> AppResult<()> {
        let backend = self.db.get_database_backend();
        self.db
            .execute(Statement::from_string(backend, CREATE_USERS_TABLE))
            .await
            .map_err(AppError::Schema)?;

        tracing::debug!("Users table ready");
        Ok(())
    }

    async fn create_user(&self, user: &NewUser) -> AppResult<()> {
        let backend = self.db.get_database_backend();
        let created_at = self.timestamp_format.format(&user.created_at);

        self.db
            .execute(Statement::from_sql_and_values(
                backend,
                INSERT_USER,
                [
                    user.username.clone().into(),
                    user.password.clone().into(),
                    created_at.into(),
                ],
            ))
            .await
            .map_err(AppError::Write)?;

        tracing::debug!(username = %user.username, "User inserted");
        Ok(())
    }

    async fn get_all_users(&self) -> AppResult<Vec<User>> {
        // The stream holds the cursor; it is dropped on every return below.
        let rows = UserEntity::find()
            .stream(self.db.as_ref())
            .await
            .map_err(AppError::Read)?;
        pin_mut!(rows);

        let mut users = Vec::new();
        while let Some(model) = rows.try_next().await.map_err(AppError::Read)? {
            users.push(User::from(model));
        }

        Ok(users)
    }
}
