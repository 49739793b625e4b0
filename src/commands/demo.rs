//! Demo command - Create the table, insert one user, read everything back.

use crate::cli::args::DemoArgs;
use crate::config::{Config, DEMO_PASSWORD, DEMO_USERNAME};
use crate::domain::{NewUser, User};
use crate::errors::AppResult;
use crate::infra::UserRepository;

use super::open_store;

/// Execute the demo command
pub async fn execute(args: DemoArgs, config: Config) -> AppResult<()> {
    let store = open_store(&config, args.timestamp_format).await?;
    run(&store).await?;
    Ok(())
}

/// Insert the sample user and return every stored user.
pub async fn run(users: &dyn UserRepository) -> AppResult<Vec<User>> {
    let john = NewUser::new(DEMO_USERNAME, DEMO_PASSWORD);
    users.create_user(&john).await?;
    tracing::info!(user = ?john, "Inserted user");

    let all = users.get_all_users().await?;
    tracing::info!(users = ?all, "Fetched {} user(s)", all.len());

    Ok(all)
}
