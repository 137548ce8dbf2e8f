//! Back-office brand CRUD.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use maru_core::{BrandId, Slug};

use crate::db::{self, brands::BrandParams, with_timeout};
use crate::error::{AppError, Result};
use crate::middleware::RequireAdmin;
use crate::routes::data;
use crate::state::AppState;

/// Body for creating or replacing a brand.
#[derive(Debug, Deserialize)]
pub struct BrandBody {
    pub slug: Option<String>,
    pub name: Option<String>,
    pub country: Option<String>,
    pub description: Option<String>,
    pub logo_url: Option<String>,
}

impl BrandBody {
    fn into_params(self) -> Result<BrandParams> {
        let slug = self
            .slug
            .ok_or_else(|| AppError::BadRequest("slug is required".to_string()))?;
        let slug = Slug::parse(&slug)
            .map_err(|e| AppError::BadRequest(format!("invalid slug: {e}")))?;

        let name = self
            .name
            .map(|n| n.trim().to_owned())
            .filter(|n| !n.is_empty())
            .ok_or_else(|| AppError::BadRequest("name is required".to_string()))?;

        Ok(BrandParams {
            slug: slug.into_inner(),
            name,
            country: self.country,
            description: self.description,
            logo_url: self.logo_url,
        })
    }
}

/// List all brands.
pub async fn list(
    RequireAdmin(_): RequireAdmin,
    State(state): State<AppState>,
) -> Result<impl IntoResponse> {
    let brands = with_timeout(db::brands::list_all(state.pool())).await?;
    Ok(data(brands))
}

/// Create a brand.
pub async fn create(
    RequireAdmin(_): RequireAdmin,
    State(state): State<AppState>,
    Json(body): Json<BrandBody>,
) -> Result<impl IntoResponse> {
    let brand = db::brands::create(state.pool(), body.into_params()?).await?;
    Ok((StatusCode::CREATED, data(brand)))
}

/// Replace a brand.
pub async fn update(
    RequireAdmin(_): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(body): Json<BrandBody>,
) -> Result<impl IntoResponse> {
    let brand = db::brands::update(state.pool(), BrandId::new(id), body.into_params()?).await?;
    Ok(data(brand))
}

/// Delete a brand.
pub async fn delete(
    RequireAdmin(_): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse> {
    db::brands::delete(state.pool(), BrandId::new(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}
