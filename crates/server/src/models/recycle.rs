//! Secondhand marketplace model.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use maru_core::{RecycleCondition, RecycleItemId, RecycleStatus, UserId};

/// A customer-listed secondhand item.
///
/// Items go live immediately as `listed`; administrators can override the
/// status (e.g., mark `sold`, or pull a listing) from the back-office.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct RecycleItem {
    pub id: RecycleItemId,
    pub seller_id: UserId,
    pub title: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub condition: RecycleCondition,
    pub images: Vec<String>,
    pub status: RecycleStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
