//! Migrate command - Database migration management.

use common::{AppError, AppResult, DatabaseConfig};

use crate::cli::MigrateAction;
use crate::infra::Database;

/// Execute the migrate command and render a summary to print.
pub async fn execute(action: MigrateAction, config: &DatabaseConfig) -> AppResult<String> {
    tracing::info!("Running migration command...");

    // Connect without auto-running migrations for manual control
    let db = Database::connect_without_migrations(config)
        .await
        .map_err(|e| AppError::internal(format!("Database connection failed: {}", e)))?;
    db.ping()
        .await
        .map_err(|e| AppError::internal(format!("Database is not reachable: {}", e)))?;

    let output = match action {
        MigrateAction::Up => {
            tracing::info!("Running pending migrations...");
            db.run_migrations().await?;
            tracing::info!("Migrations completed successfully");
            "Migrations applied".to_string()
        }
        MigrateAction::Down => {
            tracing::info!("Rolling back last migration...");
            db.rollback_migration().await?;
            tracing::info!("Rollback completed successfully");
            "Rolled back last migration".to_string()
        }
        MigrateAction::Status => render_status(&db.migration_status().await?),
        MigrateAction::Fresh => {
            tracing::warn!("Resetting database and running all migrations...");
            db.fresh_migrations().await?;
            tracing::info!("Fresh migrations completed successfully");
            "Database reset and migrations applied".to_string()
        }
    };

    Ok(output)
}

/// One `[x] name` or `[ ] name` line per migration.
fn render_status(status: &[(String, bool)]) -> String {
    status
        .iter()
        .map(|(name, applied)| {
            let marker = if *applied { "[x]" } else { "[ ]" };
            format!("{} {}", marker, name)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
