//! Gallery model.

use chrono::{DateTime, Utc};
use serde::Serialize;

use maru_core::{GalleryItemId, ProductId};

/// A curated interior shot shown on the gallery page, optionally linking to
/// the product pictured.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct GalleryItem {
    pub id: GalleryItemId,
    pub title: String,
    pub image_url: String,
    pub caption: Option<String>,
    pub product_id: Option<ProductId>,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
}
