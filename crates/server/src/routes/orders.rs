//! Checkout, order, and payment route handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use serde::Serialize;

use maru_core::OrderId;

use crate::db;
use crate::error::{AppError, Result};
use crate::middleware::RequireAuth;
use crate::models::{Order, OrderItem};
use crate::services::payments;
use crate::state::AppState;

use super::data;

/// Order detail payload.
#[derive(Debug, Serialize)]
pub struct OrderPayload {
    #[serde(flatten)]
    pub order: Order,
    pub items: Vec<OrderItem>,
}

/// Generate a human-readable order number, e.g. `MR-20250401-A7F3`.
fn generate_order_no() -> String {
    let suffix: u16 = rand::random();
    format!("MR-{}-{suffix:04X}", Utc::now().format("%Y%m%d"))
}

/// Create an order from the cart.
///
/// Order, items, and cart clear commit atomically; an empty (or fully
/// unpublished) cart is a 409.
pub async fn checkout(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
) -> Result<impl IntoResponse> {
    let order_no = generate_order_no();
    let order = db::orders::create_from_cart(state.pool(), user.id, &order_no).await?;
    let items = db::orders::list_items(state.pool(), order.id).await?;

    tracing::info!(order_no = %order.order_no, total = %order.total, "order created");

    Ok((StatusCode::CREATED, data(OrderPayload { order, items })))
}

/// List the signed-in user's orders.
pub async fn list(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
) -> Result<impl IntoResponse> {
    let orders = db::orders::list_for_user(state.pool(), user.id).await?;
    Ok(data(orders))
}

/// Order detail with items.
pub async fn show(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse> {
    let order_id = OrderId::new(id);
    let order = db::orders::get_for_user(state.pool(), user.id, order_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("order {id} not found")))?;
    let items = db::orders::list_items(state.pool(), order.id).await?;

    Ok(data(OrderPayload { order, items }))
}

/// Pay an order via the simulated Naver Pay provider.
///
/// Paying anything but a `created` order is a 409.
pub async fn pay(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse> {
    let order_id = OrderId::new(id);
    let order = db::orders::get_for_user(state.pool(), user.id, order_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("order {id} not found")))?;

    let receipt = payments::approve(&order)?;

    let paid = db::orders::mark_paid(state.pool(), user.id, order_id, &receipt.payment_id)
        .await?
        .ok_or_else(|| {
            AppError::Conflict("order status changed concurrently; reload and retry".to_string())
        })?;

    tracing::info!(
        order_no = %paid.order_no,
        payment_id = %receipt.payment_id,
        provider = receipt.provider,
        "order paid"
    );

    Ok(data(OrderPayload {
        items: db::orders::list_items(state.pool(), paid.id).await?,
        order: paid,
    }))
}
