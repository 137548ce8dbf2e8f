//! Secondhand marketplace route handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use rust_decimal::Decimal;
use serde::Deserialize;

use maru_core::{RecycleCondition, RecycleItemId};

use crate::db::{self, recycle::RecycleItemParams};
use crate::error::{AppError, Result};
use crate::middleware::RequireAuth;
use crate::state::AppState;

use super::data;

/// Body for creating a listing.
#[derive(Debug, Deserialize)]
pub struct CreateRecycleItemBody {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub condition: Option<RecycleCondition>,
    #[serde(default)]
    pub images: Vec<String>,
}

impl CreateRecycleItemBody {
    fn into_params(self) -> Result<RecycleItemParams> {
        let title = self
            .title
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| AppError::BadRequest("title is required".to_string()))?;

        let price = self
            .price
            .ok_or_else(|| AppError::BadRequest("price is required".to_string()))?;
        if price < Decimal::ZERO {
            return Err(AppError::BadRequest("price cannot be negative".to_string()));
        }

        let condition = self
            .condition
            .ok_or_else(|| AppError::BadRequest("condition is required".to_string()))?;

        Ok(RecycleItemParams {
            title,
            description: self.description,
            price,
            condition,
            images: self.images,
        })
    }
}

/// List storefront-visible listings.
pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let items = db::recycle::list_visible(state.pool()).await?;
    Ok(data(items))
}

/// Listing detail.
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse> {
    let item = db::recycle::get(state.pool(), RecycleItemId::new(id))
        .await?
        .ok_or_else(|| AppError::NotFound(format!("recycle item {id} not found")))?;

    Ok(data(item))
}

/// Create a listing owned by the signed-in user.
pub async fn create(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    Json(body): Json<CreateRecycleItemBody>,
) -> Result<impl IntoResponse> {
    let params = body.into_params()?;
    let item = db::recycle::create(state.pool(), user.id, params).await?;

    Ok((StatusCode::CREATED, data(item)))
}
