//! Status enums for various entities.
//!
//! The rental-request workflow is the only status machine with transition
//! rules; the rules live here so route handlers, repositories, and tests all
//! agree on what is legal.

use serde::{Deserialize, Serialize};

/// Rental/demo request status.
///
/// Lifecycle:
///
/// ```text
/// pending ---> approved ---> completed
///    |  ^
///    v  |
/// rejected (reopenable by an administrator)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "postgres", derive(sqlx::Type))]
#[cfg_attr(
    feature = "postgres",
    sqlx(type_name = "request_status", rename_all = "lowercase")
)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    /// Submitted and awaiting an administrator's decision.
    #[default]
    Pending,
    /// Accepted; the rental is being arranged.
    Approved,
    /// Declined. May be reopened to `Pending` by an administrator.
    Rejected,
    /// The rental ran its course. Terminal.
    Completed,
}

impl RequestStatus {
    /// Whether a transition from `self` to `to` is legal.
    ///
    /// Only administrators perform transitions at all; this answers whether
    /// the transition itself is valid, not who may request it.
    #[must_use]
    pub const fn can_transition_to(self, to: Self) -> bool {
        matches!(
            (self, to),
            (Self::Pending, Self::Approved | Self::Rejected)
                | (Self::Approved, Self::Completed)
                | (Self::Rejected, Self::Pending)
        )
    }

    /// Whether no further transitions are possible.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Completed)
    }
}

impl std::fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
            Self::Completed => "completed",
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for RequestStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            "completed" => Ok(Self::Completed),
            _ => Err(format!("invalid request status: {s}")),
        }
    }
}

/// Order lifecycle status.
///
/// Payment is simulated, so there is no `authorized`/`partially_paid`
/// ladder: an order is created, then paid or cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "postgres", derive(sqlx::Type))]
#[cfg_attr(
    feature = "postgres",
    sqlx(type_name = "order_status", rename_all = "lowercase")
)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Created,
    Paid,
    Cancelled,
}

/// Listing status for secondhand marketplace items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "postgres", derive(sqlx::Type))]
#[cfg_attr(
    feature = "postgres",
    sqlx(type_name = "recycle_status", rename_all = "lowercase")
)]
#[serde(rename_all = "lowercase")]
pub enum RecycleStatus {
    #[default]
    Listed,
    Reserved,
    Sold,
}

/// Declared condition of a secondhand item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::Type))]
#[cfg_attr(
    feature = "postgres",
    sqlx(type_name = "recycle_condition", rename_all = "snake_case")
)]
#[serde(rename_all = "snake_case")]
pub enum RecycleCondition {
    LikeNew,
    Good,
    Fair,
}

/// Kind of downloadable resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::Type))]
#[cfg_attr(
    feature = "postgres",
    sqlx(type_name = "resource_kind", rename_all = "lowercase")
)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Catalog,
    Manual,
    Certificate,
}

/// Account role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "postgres", derive(sqlx::Type))]
#[cfg_attr(
    feature = "postgres",
    sqlx(type_name = "user_role", rename_all = "lowercase")
)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Regular storefront customer.
    #[default]
    User,
    /// Full access to the back-office.
    Admin,
}

impl UserRole {
    /// Whether this role may manage content and rental requests.
    #[must_use]
    pub const fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::User => write!(f, "user"),
            Self::Admin => write!(f, "admin"),
        }
    }
}

impl std::str::FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Self::User),
            "admin" => Ok(Self::Admin),
            _ => Err(format!("invalid user role: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_splits_to_approved_or_rejected() {
        assert!(RequestStatus::Pending.can_transition_to(RequestStatus::Approved));
        assert!(RequestStatus::Pending.can_transition_to(RequestStatus::Rejected));
        assert!(!RequestStatus::Pending.can_transition_to(RequestStatus::Completed));
    }

    #[test]
    fn approved_only_completes() {
        assert!(RequestStatus::Approved.can_transition_to(RequestStatus::Completed));
        assert!(!RequestStatus::Approved.can_transition_to(RequestStatus::Pending));
        assert!(!RequestStatus::Approved.can_transition_to(RequestStatus::Rejected));
    }

    #[test]
    fn rejected_reopens_to_pending() {
        assert!(RequestStatus::Rejected.can_transition_to(RequestStatus::Pending));
        assert!(!RequestStatus::Rejected.can_transition_to(RequestStatus::Approved));
    }

    #[test]
    fn completed_is_terminal() {
        assert!(RequestStatus::Completed.is_terminal());
        for to in [
            RequestStatus::Pending,
            RequestStatus::Approved,
            RequestStatus::Rejected,
            RequestStatus::Completed,
        ] {
            assert!(!RequestStatus::Completed.can_transition_to(to));
        }
    }

    #[test]
    fn self_transitions_are_rejected() {
        for status in [
            RequestStatus::Pending,
            RequestStatus::Approved,
            RequestStatus::Rejected,
        ] {
            assert!(!status.can_transition_to(status));
        }
    }

    #[test]
    fn request_status_round_trips_via_str() {
        for status in [
            RequestStatus::Pending,
            RequestStatus::Approved,
            RequestStatus::Rejected,
            RequestStatus::Completed,
        ] {
            let parsed: RequestStatus = status.to_string().parse().expect("round trip");
            assert_eq!(parsed, status);
        }
        assert!("unknown".parse::<RequestStatus>().is_err());
    }

    #[test]
    fn roles_know_their_privileges() {
        assert!(UserRole::Admin.is_admin());
        assert!(!UserRole::User.is_admin());
    }
}
