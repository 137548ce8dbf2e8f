//! Category banner model.

use chrono::{DateTime, Utc};
use serde::Serialize;

use maru_core::BannerId;

/// A promotional banner shown at the top of a category listing.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct CategoryBanner {
    pub id: BannerId,
    pub category: String,
    pub image_url: String,
    pub headline: Option<String>,
    pub link_url: Option<String>,
    pub is_active: bool,
    pub sort_order: i32,
    pub updated_at: DateTime<Utc>,
}
