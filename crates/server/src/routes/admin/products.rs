//! Back-office product CRUD.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use rust_decimal::Decimal;
use serde::Deserialize;

use maru_core::{BrandId, ProductId, Slug};

use crate::db::{self, products::ProductParams, with_timeout};
use crate::error::{AppError, Result};
use crate::middleware::RequireAdmin;
use crate::routes::data;
use crate::state::AppState;

/// Body for creating or replacing a product.
#[derive(Debug, Deserialize)]
pub struct ProductBody {
    pub brand_id: Option<i32>,
    pub slug: Option<String>,
    pub name: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub discount_price: Option<Decimal>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub is_published: bool,
}

impl ProductBody {
    fn into_params(self) -> Result<ProductParams> {
        let brand_id = self
            .brand_id
            .ok_or_else(|| AppError::BadRequest("brand_id is required".to_string()))?;

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

        let category = self
            .category
            .map(|c| c.trim().to_owned())
            .filter(|c| !c.is_empty())
            .ok_or_else(|| AppError::BadRequest("category is required".to_string()))?;

        let price = self
            .price
            .ok_or_else(|| AppError::BadRequest("price is required".to_string()))?;
        if price < Decimal::ZERO {
            return Err(AppError::BadRequest("price cannot be negative".to_string()));
        }
        if let Some(discount) = self.discount_price {
            if discount < Decimal::ZERO || discount > price {
                return Err(AppError::BadRequest(
                    "discount_price must be between 0 and price".to_string(),
                ));
            }
        }

        Ok(ProductParams {
            brand_id: BrandId::new(brand_id),
            slug: slug.into_inner(),
            name,
            category,
            description: self.description,
            price,
            discount_price: self.discount_price,
            images: self.images,
            is_published: self.is_published,
        })
    }
}

/// List every product, published or not.
pub async fn list(
    RequireAdmin(_): RequireAdmin,
    State(state): State<AppState>,
) -> Result<impl IntoResponse> {
    let products = with_timeout(db::products::list_all(state.pool())).await?;
    Ok(data(products))
}

/// Create a product.
pub async fn create(
    RequireAdmin(_): RequireAdmin,
    State(state): State<AppState>,
    Json(body): Json<ProductBody>,
) -> Result<impl IntoResponse> {
    let params = body.into_params()?;

    // A product can't point at a brand that isn't there
    db::brands::get(state.pool(), params.brand_id)
        .await?
        .ok_or_else(|| AppError::BadRequest(format!("brand {} not found", params.brand_id)))?;

    let product = db::products::create(state.pool(), params).await?;
    Ok((StatusCode::CREATED, data(product)))
}

/// Replace a product.
pub async fn update(
    RequireAdmin(_): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(body): Json<ProductBody>,
) -> Result<impl IntoResponse> {
    let params = body.into_params()?;

    db::brands::get(state.pool(), params.brand_id)
        .await?
        .ok_or_else(|| AppError::BadRequest(format!("brand {} not found", params.brand_id)))?;

    let product = db::products::update(state.pool(), ProductId::new(id), params).await?;
    Ok(data(product))
}

/// Delete a product.
pub async fn delete(
    RequireAdmin(_): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse> {
    db::products::delete(state.pool(), ProductId::new(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}
