//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use clap::{Parser, Subcommand};

use domain::EntityId;

/// User store - manage user records and the database schema
#[derive(Parser, Debug)]
#[command(name = "user-store")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Database migration commands
    Migrate {
        #[command(subcommand)]
        action: MigrateAction,
    },

    /// User record commands
    Users {
        #[command(subcommand)]
        action: UserAction,
    },
}

/// Migration actions
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MigrateAction {
    /// Run pending migrations
    Up,
    /// Rollback last migration
    Down,
    /// Show migration status
    Status,
    /// Reset database and run all migrations
    Fresh,
}

/// User record actions
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    /// Create a user
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Show a user by id
    Get { id: EntityId },
    /// List every user
    List,
    /// Replace fields of an existing user
    Update {
        id: EntityId,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        password: Option<String>,
    },
    /// Remove a user by id
    Remove { id: EntityId },
    /// Find the user with this email, ignoring case
    FindEmail { email: String },
    /// Users whose email contains the fragment
    SearchEmail { fragment: String },
    /// Users whose name contains the fragment
    SearchName { fragment: String },
}
