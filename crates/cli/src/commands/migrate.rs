//! Database migration command.
//!
//! Migrations are embedded from `crates/server/migrations/` at compile time
//! and applied in order. Running twice is a no-op.

use super::CliError;

/// Run all pending migrations.
///
/// # Errors
///
/// Returns an error if the database is unreachable or a migration fails.
pub async fn run() -> Result<(), CliError> {
    let pool = super::connect().await?;

    tracing::info!("Running migrations...");
    sqlx::migrate!("../server/migrations").run(&pool).await?;

    tracing::info!("Migrations complete");
    Ok(())
}
