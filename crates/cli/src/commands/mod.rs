//! CLI command implementations.

pub mod admin;
pub mod migrate;
pub mod seed;

use secrecy::SecretString;
use sqlx::PgPool;
use thiserror::Error;

/// Errors from CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Required environment variable missing.
    #[error("missing environment variable: {0}")]
    MissingEnvVar(&'static str),

    /// Database connection or query failure.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Migration failure.
    #[error("migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    /// Repository-level failure (e.g., account not found).
    #[error("{0}")]
    Repository(#[from] maru_server::db::RepositoryError),

    /// Invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Connect to the database named by `MARU_DATABASE_URL`.
///
/// # Errors
///
/// Returns `CliError::MissingEnvVar` if the variable is unset, or a
/// `Database` error if the connection fails.
pub async fn connect() -> Result<PgPool, CliError> {
    dotenvy::dotenv().ok();

    let database_url = std::env::var("MARU_DATABASE_URL")
        .map(SecretString::from)
        .map_err(|_| CliError::MissingEnvVar("MARU_DATABASE_URL"))?;

    let pool = maru_server::db::create_pool(&database_url).await?;
    Ok(pool)
}
