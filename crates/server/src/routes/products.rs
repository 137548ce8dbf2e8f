//! Product route handlers (storefront side).

use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};

use crate::db::{self, products::ProductFilter};
use crate::error::{AppError, Result};
use crate::models::Product;
use crate::state::AppState;

use super::data;

/// Listing query parameters.
#[derive(Debug, Deserialize)]
pub struct ProductListQuery {
    /// Brand slug filter.
    pub brand: Option<String>,
    /// Category filter.
    pub category: Option<String>,
    /// 1-based page number.
    pub page: Option<u32>,
}

/// Paginated listing payload.
#[derive(Debug, Serialize)]
pub struct ProductListPayload {
    pub products: Vec<Product>,
    pub page: u32,
    pub total: i64,
    pub total_pages: i64,
}

/// List published products, filtered and paginated.
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ProductListQuery>,
) -> Result<impl IntoResponse> {
    let filter = ProductFilter {
        brand_slug: query.brand,
        category: query.category,
        page: query.page.unwrap_or(1),
    };

    let page = db::products::list_published(state.pool(), &filter).await?;

    Ok(data(ProductListPayload {
        page: page.page,
        total: page.total,
        total_pages: page.total_pages(),
        products: page.products,
    }))
}

/// Product detail by slug.
pub async fn show(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse> {
    let product = db::products::get_published_by_slug(state.pool(), &slug)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("product '{slug}' not found")))?;

    Ok(data(product))
}
