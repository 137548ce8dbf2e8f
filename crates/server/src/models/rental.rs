//! Rental item and rental request models.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use maru_core::{ProductId, RentalItemId, RentalRequestId, RequestStatus, UserId};

/// A product offered for monthly rental or in-home demo.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct RentalItem {
    pub id: RentalItemId,
    pub product_id: ProductId,
    pub monthly_fee: Decimal,
    pub deposit: Decimal,
    pub min_months: i32,
    pub is_available: bool,
    pub created_at: DateTime<Utc>,
}

/// A customer's request to rent or demo an item.
///
/// Guests may submit requests, so `requester_id` is optional; `name` and
/// `phone` are the follow-up channel and are always required. Status moves
/// through the workflow in [`RequestStatus`], admin-only.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct RentalRequest {
    pub id: RentalRequestId,
    pub rental_item_id: RentalItemId,
    pub requester_id: Option<UserId>,
    pub name: String,
    pub phone: String,
    pub message: Option<String>,
    pub preferred_date: Option<NaiveDate>,
    pub status: RequestStatus,
    /// Admin who made the most recent status decision.
    pub decided_by: Option<UserId>,
    pub decided_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
