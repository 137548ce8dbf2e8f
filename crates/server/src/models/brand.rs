//! Brand model.

use chrono::{DateTime, Utc};
use serde::Serialize;

use maru_core::BrandId;

/// A furniture brand carried by the store.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Brand {
    pub id: BrandId,
    /// URL slug, unique (`/api/brands/{slug}`).
    pub slug: String,
    pub name: String,
    pub country: Option<String>,
    pub description: Option<String>,
    pub logo_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
