//! Product review model.

use chrono::{DateTime, Utc};
use serde::Serialize;

use maru_core::{ProductId, ReviewId, UserId};

/// Rating bounds, inclusive.
pub const MIN_RATING: i16 = 1;
pub const MAX_RATING: i16 = 5;

/// A customer review of a product.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Review {
    pub id: ReviewId,
    pub product_id: ProductId,
    pub author_id: UserId,
    /// 1-5, validated at the route boundary and by a DB check constraint.
    pub rating: i16,
    pub title: Option<String>,
    pub body: String,
    pub created_at: DateTime<Utc>,
}
