//! Infrastructure layer - database connection and schema.

mod db;
pub mod migrations;

pub use db::Database;
pub use migrations::Migrator;
