//! Database repositories.
//!
//! One module per table family, all using the runtime `sqlx` query API with
//! `FromRow` row types. Queries are plain functions taking a `&PgPool`
//! (transactions take `&mut PgConnection` so checkout can compose them).
//!
//! # Migrations
//!
//! Migrations are stored in `crates/server/migrations/` and run via:
//! ```bash
//! cargo run -p maru-cli -- migrate
//! ```

pub mod banners;
pub mod brands;
pub mod carts;
pub mod gallery;
pub mod orders;
pub mod products;
pub mod recycle;
pub mod rentals;
pub mod resources;
pub mod reviews;
pub mod users;

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

pub use users::UserRepository;

/// How long a guarded query may run before the handler gives up on it.
///
/// Applied to admin list endpoints, which aggregate several tables and must
/// not hang the dashboard when the database is slow. The underlying query is
/// abandoned, not cancelled; there is deliberately no retry.
pub const QUERY_TIMEOUT: Duration = Duration::from_secs(3);

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Data in the database is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// Requested entity was not found.
    #[error("not found")]
    NotFound,

    /// Constraint violation (e.g., unique email).
    #[error("constraint violation: {0}")]
    Conflict(String),

    /// A guarded query exceeded [`QUERY_TIMEOUT`].
    #[error("query timed out")]
    Timeout,
}

impl RepositoryError {
    /// Map sqlx unique-constraint violations to `Conflict`, everything else
    /// to `Database`.
    #[must_use]
    pub fn from_sqlx(err: sqlx::Error, conflict_message: &str) -> Self {
        if let sqlx::Error::Database(ref db_err) = err {
            if db_err.is_unique_violation() {
                return Self::Conflict(conflict_message.to_string());
            }
        }
        Self::Database(err)
    }
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Arguments
///
/// * `database_url` - `PostgreSQL` connection string (wrapped in `SecretString`)
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}

/// Race a repository future against [`QUERY_TIMEOUT`].
///
/// This is the single shared replacement for the copy-pasted per-page
/// timeout races the admin dashboard used to do. Elapse maps to
/// [`RepositoryError::Timeout`], which surfaces as HTTP 504.
///
/// # Errors
///
/// Returns `RepositoryError::Timeout` if the future does not settle in time,
/// or the future's own error if it fails first.
pub async fn with_timeout<T, F>(fut: F) -> Result<T, RepositoryError>
where
    F: Future<Output = Result<T, RepositoryError>>,
{
    match tokio::time::timeout(QUERY_TIMEOUT, fut).await {
        Ok(result) => result,
        Err(_elapsed) => Err(RepositoryError::Timeout),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn with_timeout_passes_through_fast_results() {
        let result = with_timeout(async { Ok::<_, RepositoryError>(42) }).await;
        assert!(matches!(result, Ok(42)));
    }

    #[tokio::test]
    async fn with_timeout_passes_through_errors() {
        let result =
            with_timeout(async { Err::<i32, _>(RepositoryError::NotFound) }).await;
        assert!(matches!(result, Err(RepositoryError::NotFound)));
    }

    #[tokio::test(start_paused = true)]
    async fn with_timeout_maps_elapse_to_timeout() {
        let result = with_timeout(async {
            tokio::time::sleep(Duration::from_secs(10)).await;
            Ok::<_, RepositoryError>(42)
        })
        .await;
        assert!(matches!(result, Err(RepositoryError::Timeout)));
    }
}
