//! Cart models.

use rust_decimal::Decimal;
use serde::Serialize;

use maru_core::{CartItemId, ProductId};

/// A cart row joined with its product, as returned to the client.
///
/// One row exists per (user, product); the raw table is never exposed
/// unjoined.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct CartLine {
    pub id: CartItemId,
    pub product_id: ProductId,
    pub product_name: String,
    pub product_slug: String,
    pub unit_price: Decimal,
    pub quantity: i32,
}

impl CartLine {
    /// Line total (unit price times quantity).
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }
}
