//! Session-stored types and keys.

use serde::{Deserialize, Serialize};

use maru_core::{UserId, UserRole};

use super::user::User;

/// Session keys used by the auth middleware.
pub mod session_keys {
    /// Key under which the logged-in user is stored.
    pub const CURRENT_USER: &str = "current_user";
}

/// The logged-in user, as stored in the session cookie's server-side record.
///
/// A trimmed copy of [`User`](super::user::User): enough to authorize
/// requests without a database round trip per request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUser {
    pub id: UserId,
    pub email: String,
    pub display_name: String,
    pub role: UserRole,
}

impl CurrentUser {
    /// Whether this session belongs to an administrator.
    #[must_use]
    pub const fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

impl From<&User> for CurrentUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.as_str().to_owned(),
            display_name: user.display_name.clone(),
            role: user.role,
        }
    }
}
