//! Category banner route handlers.

use axum::{
    extract::{Query, State},
    response::IntoResponse,
};
use serde::Deserialize;

use crate::db;
use crate::error::Result;
use crate::state::AppState;

use super::data;

/// Banner query parameters.
#[derive(Debug, Deserialize)]
pub struct BannerQuery {
    pub category: Option<String>,
}

/// List active banners, optionally for one category.
///
/// Served through the 5-minute TTL cache; banner edits in the back-office
/// can take up to that long to appear.
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<BannerQuery>,
) -> Result<impl IntoResponse> {
    let key = query.category;

    if let Some(banners) = state.banner_cache().get(&key).await {
        return Ok(data(banners));
    }

    let banners = db::banners::list_active(state.pool(), key.as_deref()).await?;
    state.banner_cache().insert(key, banners.clone()).await;

    Ok(data(banners))
}
