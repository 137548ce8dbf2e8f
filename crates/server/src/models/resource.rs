//! Downloadable resource model.

use chrono::{DateTime, Utc};
use serde::Serialize;

use maru_core::{ResourceId, ResourceKind};

/// A downloadable file: product catalogs, care manuals, certificates.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Resource {
    pub id: ResourceId,
    pub title: String,
    pub kind: ResourceKind,
    pub file_url: String,
    pub file_size_bytes: i64,
    pub download_count: i32,
    pub created_at: DateTime<Utc>,
}
