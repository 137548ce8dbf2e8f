//! Back-office category banner CRUD.
//!
//! Writes invalidate the storefront banner cache so edits show up without
//! waiting out the TTL.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use maru_core::BannerId;

use crate::db::{self, banners::BannerParams, with_timeout};
use crate::error::{AppError, Result};
use crate::middleware::RequireAdmin;
use crate::routes::data;
use crate::state::AppState;

/// Body for creating or replacing a banner.
#[derive(Debug, Deserialize)]
pub struct BannerBody {
    pub category: Option<String>,
    pub image_url: Option<String>,
    pub headline: Option<String>,
    pub link_url: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub sort_order: i32,
}

const fn default_active() -> bool {
    true
}

impl BannerBody {
    fn into_params(self) -> Result<BannerParams> {
        let category = self
            .category
            .map(|c| c.trim().to_owned())
            .filter(|c| !c.is_empty())
            .ok_or_else(|| AppError::BadRequest("category is required".to_string()))?;

        let image_url = self
            .image_url
            .filter(|u| !u.trim().is_empty())
            .ok_or_else(|| AppError::BadRequest("image_url is required".to_string()))?;

        Ok(BannerParams {
            category,
            image_url,
            headline: self.headline,
            link_url: self.link_url,
            is_active: self.is_active,
            sort_order: self.sort_order,
        })
    }
}

/// List every banner.
pub async fn list(
    RequireAdmin(_): RequireAdmin,
    State(state): State<AppState>,
) -> Result<impl IntoResponse> {
    let banners = with_timeout(db::banners::list_all(state.pool())).await?;
    Ok(data(banners))
}

/// Create a banner.
pub async fn create(
    RequireAdmin(_): RequireAdmin,
    State(state): State<AppState>,
    Json(body): Json<BannerBody>,
) -> Result<impl IntoResponse> {
    let banner = db::banners::create(state.pool(), body.into_params()?).await?;
    state.banner_cache().invalidate_all();
    Ok((StatusCode::CREATED, data(banner)))
}

/// Replace a banner.
pub async fn update(
    RequireAdmin(_): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(body): Json<BannerBody>,
) -> Result<impl IntoResponse> {
    let banner = db::banners::update(state.pool(), BannerId::new(id), body.into_params()?).await?;
    state.banner_cache().invalidate_all();
    Ok(data(banner))
}

/// Delete a banner.
pub async fn delete(
    RequireAdmin(_): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse> {
    db::banners::delete(state.pool(), BannerId::new(id)).await?;
    state.banner_cache().invalidate_all();
    Ok(StatusCode::NO_CONTENT)
}
