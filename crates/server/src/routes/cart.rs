//! Cart route handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use maru_core::{CartItemId, ProductId};

use crate::db;
use crate::error::{AppError, Result};
use crate::middleware::RequireAuth;
use crate::models::CartLine;
use crate::state::AppState;

use super::data;

/// Cart payload with per-line and grand totals.
#[derive(Debug, Serialize)]
pub struct CartPayload {
    pub items: Vec<CartLineView>,
    pub total: Decimal,
}

/// A cart line as the client sees it.
#[derive(Debug, Serialize)]
pub struct CartLineView {
    #[serde(flatten)]
    pub line: CartLine,
    pub line_total: Decimal,
}

/// Body for adding a product to the cart.
#[derive(Debug, Deserialize)]
pub struct AddItemBody {
    pub product_id: Option<i32>,
    pub quantity: Option<i32>,
}

/// Body for setting a line's quantity.
#[derive(Debug, Deserialize)]
pub struct UpdateItemBody {
    pub quantity: Option<i32>,
}

fn validate_quantity(quantity: i32) -> Result<i32> {
    if quantity < 1 {
        return Err(AppError::BadRequest(
            "quantity must be at least 1".to_string(),
        ));
    }
    Ok(quantity)
}

async fn cart_payload(state: &AppState, user_id: maru_core::UserId) -> Result<CartPayload> {
    let lines = db::carts::list_lines(state.pool(), user_id).await?;
    let total = lines.iter().map(CartLine::line_total).sum();
    let items = lines
        .into_iter()
        .map(|line| CartLineView {
            line_total: line.line_total(),
            line,
        })
        .collect();

    Ok(CartPayload { items, total })
}

/// Show the signed-in user's cart.
pub async fn show(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
) -> Result<impl IntoResponse> {
    Ok(data(cart_payload(&state, user.id).await?))
}

/// Add a product; an existing line for the same product gains the quantity.
pub async fn add_item(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    Json(body): Json<AddItemBody>,
) -> Result<impl IntoResponse> {
    let product_id = body
        .product_id
        .ok_or_else(|| AppError::BadRequest("product_id is required".to_string()))?;
    let quantity = validate_quantity(body.quantity.unwrap_or(1))?;

    let product_id = ProductId::new(product_id);
    db::products::get(state.pool(), product_id)
        .await?
        .filter(|p| p.is_published)
        .ok_or_else(|| AppError::NotFound(format!("product {product_id} not found")))?;

    db::carts::add_item(state.pool(), user.id, product_id, quantity).await?;

    Ok((StatusCode::CREATED, data(cart_payload(&state, user.id).await?)))
}

/// Set a line's quantity.
pub async fn update_item(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(body): Json<UpdateItemBody>,
) -> Result<impl IntoResponse> {
    let quantity = body
        .quantity
        .ok_or_else(|| AppError::BadRequest("quantity is required".to_string()))?;
    let quantity = validate_quantity(quantity)?;

    db::carts::set_quantity(state.pool(), user.id, CartItemId::new(id), quantity).await?;

    Ok(data(cart_payload(&state, user.id).await?))
}

/// Remove a line.
pub async fn remove_item(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse> {
    db::carts::remove_item(state.pool(), user.id, CartItemId::new(id)).await?;

    Ok(data(cart_payload(&state, user.id).await?))
}
