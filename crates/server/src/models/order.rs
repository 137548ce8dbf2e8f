//! Order models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use maru_core::{OrderId, OrderItemId, OrderStatus, ProductId, UserId};

/// A placed order.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Order {
    pub id: OrderId,
    pub user_id: UserId,
    /// Human-readable order number, e.g. `MR-20250401-A7F3`.
    pub order_no: String,
    pub status: OrderStatus,
    pub total: Decimal,
    /// Payment reference from the (simulated) payment provider.
    pub payment_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A line on an order.
///
/// Name and unit price are denormalised at checkout time so later catalog
/// edits do not rewrite order history.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct OrderItem {
    pub id: OrderItemId,
    pub order_id: OrderId,
    pub product_id: ProductId,
    pub product_name: String,
    pub unit_price: Decimal,
    pub quantity: i32,
}
