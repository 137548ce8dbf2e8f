//! User model.

use chrono::{DateTime, Utc};
use serde::Serialize;

use maru_core::{Email, UserId, UserRole};

/// A storefront account.
///
/// The password hash never leaves the `db::users` module; this struct is
/// what the rest of the application sees.
#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: UserId,
    pub email: Email,
    pub display_name: String,
    pub phone: Option<String>,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Whether this account may use the back-office.
    #[must_use]
    pub const fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}
