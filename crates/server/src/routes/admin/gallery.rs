//! Back-office gallery CRUD.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use maru_core::{GalleryItemId, ProductId};

use crate::db::{self, gallery::GalleryItemParams, with_timeout};
use crate::error::{AppError, Result};
use crate::middleware::RequireAdmin;
use crate::routes::data;
use crate::state::AppState;

/// Body for creating or replacing a gallery item.
#[derive(Debug, Deserialize)]
pub struct GalleryItemBody {
    pub title: Option<String>,
    pub image_url: Option<String>,
    pub caption: Option<String>,
    pub product_id: Option<i32>,
    #[serde(default)]
    pub sort_order: i32,
}

impl GalleryItemBody {
    fn into_params(self) -> Result<GalleryItemParams> {
        let title = self
            .title
            .map(|t| t.trim().to_owned())
            .filter(|t| !t.is_empty())
            .ok_or_else(|| AppError::BadRequest("title is required".to_string()))?;

        let image_url = self
            .image_url
            .filter(|u| !u.trim().is_empty())
            .ok_or_else(|| AppError::BadRequest("image_url is required".to_string()))?;

        Ok(GalleryItemParams {
            title,
            image_url,
            caption: self.caption,
            product_id: self.product_id.map(ProductId::new),
            sort_order: self.sort_order,
        })
    }
}

/// List gallery items.
pub async fn list(
    RequireAdmin(_): RequireAdmin,
    State(state): State<AppState>,
) -> Result<impl IntoResponse> {
    let items = with_timeout(db::gallery::list_all(state.pool())).await?;
    Ok(data(items))
}

/// Create a gallery item.
pub async fn create(
    RequireAdmin(_): RequireAdmin,
    State(state): State<AppState>,
    Json(body): Json<GalleryItemBody>,
) -> Result<impl IntoResponse> {
    let item = db::gallery::create(state.pool(), body.into_params()?).await?;
    Ok((StatusCode::CREATED, data(item)))
}

/// Replace a gallery item.
pub async fn update(
    RequireAdmin(_): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(body): Json<GalleryItemBody>,
) -> Result<impl IntoResponse> {
    let item =
        db::gallery::update(state.pool(), GalleryItemId::new(id), body.into_params()?).await?;
    Ok(data(item))
}

/// Delete a gallery item.
pub async fn delete(
    RequireAdmin(_): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse> {
    db::gallery::delete(state.pool(), GalleryItemId::new(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}
