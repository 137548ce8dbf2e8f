//! Administrator account management.

use maru_core::{Email, UserRole};
use maru_server::db::UserRepository;

use super::CliError;

/// Set an existing account's role.
///
/// # Errors
///
/// Returns `InvalidArgument` for a malformed email and `Repository` if no
/// account has that email.
pub async fn set_role(email: &str, role: UserRole) -> Result<(), CliError> {
    let email = Email::parse(email).map_err(|e| CliError::InvalidArgument(e.to_string()))?;

    let pool = super::connect().await?;
    UserRepository::new(&pool).set_role(&email, role).await?;

    tracing::info!(email = %email, role = %role, "role updated");
    Ok(())
}
