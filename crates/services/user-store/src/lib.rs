//! User Store Library
//!
//! A generic SeaORM repository ([`BaseRepository`]) and the user repository
//! built on it ([`UserStore`]): create, update, remove, get and list plus
//! case-insensitive lookup by email and substring search by email or name.
//!
//! The `user-store` binary wraps these operations and the schema migrations
//! in a small CLI.

pub mod cli;
pub mod commands;
pub mod config;
pub mod infra;
pub mod repository;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_support;

pub use config::StoreConfig;
pub use infra::Database;
pub use repository::{BaseRepository, Table, UserRepository, UserStore};

use common::AppResult;

use crate::cli::{Commands, MigrateAction, UserAction};

/// Run a migration action (for CLI commands).
pub async fn run_migrations(action: MigrateAction, config: &StoreConfig) -> AppResult<String> {
    commands::migrate::execute(action, &config.database).await
}

/// Connect, apply pending migrations and run a user action.
pub async fn run_user_action(action: UserAction, config: &StoreConfig) -> AppResult<String> {
    let db = Database::connect(&config.database).await?;
    let users = UserStore::new(db.get_connection());

    commands::users::execute(action, &users).await
}

/// Dispatch a parsed CLI command; returns the output to print.
pub async fn run(command: Commands, config: &StoreConfig) -> AppResult<String> {
    match command {
        Commands::Migrate { action } => run_migrations(action, config).await,
        Commands::Users { action } => run_user_action(action, config).await,
    }
}
