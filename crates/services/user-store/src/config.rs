//! User store configuration.

use std::env;
use std::str::FromStr;

use common::{DatabaseConfig, LogConfig};

/// User store configuration.
#[derive(Debug, Clone, Default)]
pub struct StoreConfig {
    /// Database connection and pool settings
    pub database: DatabaseConfig,
    /// Log filter used when `RUST_LOG` is not set
    pub log: LogConfig,
}

impl StoreConfig {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` first to pick up a `.env` file.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from any key lookup, falling back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = DatabaseConfig::default();

        let database = DatabaseConfig {
            url: lookup("USER_STORE_DATABASE_URL")
                .or_else(|| lookup("DATABASE_URL"))
                .unwrap_or(defaults.url),
            max_connections: parse_or(&lookup, "DATABASE_MAX_CONNECTIONS", defaults.max_connections),
            min_connections: parse_or(&lookup, "DATABASE_MIN_CONNECTIONS", defaults.min_connections),
            connect_timeout_secs: parse_or(
                &lookup,
                "DATABASE_CONNECT_TIMEOUT_SECS",
                defaults.connect_timeout_secs,
            ),
            acquire_timeout_secs: parse_or(
                &lookup,
                "DATABASE_ACQUIRE_TIMEOUT_SECS",
                defaults.acquire_timeout_secs,
            ),
            sql_logging: parse_or(&lookup, "DATABASE_SQL_LOGGING", defaults.sql_logging),
        };

        let log = LogConfig {
            level: lookup("RUST_LOG").unwrap_or_else(|| LogConfig::default().level),
        };

        Self { database, log }
    }
}

/// Parse `key` into its field type; missing or unparsable values keep the default.
fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key).map(|value| value.parse::<T>()) {
        Some(Ok(value)) => value,
        Some(Err(_)) => {
            tracing::warn!(key, "Ignoring invalid configuration value");
            default
        }
        None => default,
    }
}
