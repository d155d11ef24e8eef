//! Helpers for tests that need a real store.

use common::DatabaseConfig;

use crate::infra::Database;
use crate::repository::UserStore;

/// Fresh in-memory SQLite database with every migration applied.
///
/// The pool is pinned to a single connection: each SQLite in-memory
/// connection is its own database.
pub async fn memory_database() -> Database {
    let config = DatabaseConfig {
        max_connections: 1,
        min_connections: 1,
        ..DatabaseConfig::with_url("sqlite::memory:")
    };

    Database::connect(&config)
        .await
        .expect("in-memory database should open")
}

/// User store over a fresh in-memory database.
pub async fn memory_store() -> UserStore {
    UserStore::new(memory_database().await.get_connection())
}
