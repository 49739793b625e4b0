//! Commands module - CLI command implementations.
//!
//! Each command is implemented in its own module for separation of concerns.

pub mod demo;
pub mod serve;
pub mod users;

use crate::config::Config;
use crate::domain::TimestampFormat;
use crate::errors::AppResult;
use crate::infra::{Database, UserRepository, UserStore};

/// Open the database and make sure the users table exists.
pub(crate) async fn open_store(
    config: &Config,
    timestamp_format: TimestampFormat,
) -> AppResult<UserStore> {
    let db = Database::open(&config.database_url)?;
    let store = UserStore::new(db.get_connection(), timestamp_format);
    store.ensure_users_table().await?;
    Ok(store)
}
