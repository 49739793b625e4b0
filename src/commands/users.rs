//! Add and list commands - Single repository operations.

use crate::cli::args::AddArgs;
use crate::config::Config;
use crate::domain::{NewUser, TimestampFormat, User};
use crate::errors::AppResult;
use crate::infra::UserRepository;

use super::open_store;

/// Execute the add command
pub async fn add(args: AddArgs, config: Config) -> AppResult<()> {
    let store = open_store(&config, args.timestamp_format).await?;

    let user = NewUser::new(args.username, args.password);
    store.create_user(&user).await?;

    tracing::info!(username = %user.username, "User created");
    Ok(())
}

/// Execute the list command
pub async fn list(config: Config) -> AppResult<()> {
    // The format only matters for inserts
    let store = open_store(&config, TimestampFormat::Date).await?;
    let users = store.get_all_users().await?;

    print!("{}", format_users(&users));
    Ok(())
}

/// Render users as a plain text table
pub fn format_users(users: &[User]) -> String {
    if users.is_empty() {
        return "No users found.\n".to_string();
    }

    let mut out = format!("{:<6} {:<24} {}\n", "ID", "USERNAME", "CREATED AT");
    for user in users {
        let created_at = user
            .created_at
            .map(|at| at.to_string())
            .unwrap_or_else(|| "-".to_string());
        out.push_str(&format!("{:<6} {:<24} {}\n", user.id, user.username, created_at));
    }
    out
}
