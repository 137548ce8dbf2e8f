//! Product model.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use maru_core::{BrandId, ProductId};

/// A catalog product.
///
/// Prices are KRW. `discount_price`, when set, is the price actually charged;
/// `price` remains the list price for strikethrough display.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Product {
    pub id: ProductId,
    pub brand_id: BrandId,
    /// URL slug, unique (`/api/products/{slug}`).
    pub slug: String,
    pub name: String,
    pub category: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub discount_price: Option<Decimal>,
    /// Image URLs in display order.
    pub images: Vec<String>,
    /// Unpublished products are only visible in the back-office.
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// The price actually charged at checkout.
    #[must_use]
    pub fn effective_price(&self) -> Decimal {
        self.discount_price.unwrap_or(self.price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(price: i64, discount: Option<i64>) -> Product {
        Product {
            id: ProductId::new(1),
            brand_id: BrandId::new(1),
            slug: "walnut-dining-table".to_string(),
            name: "Walnut Dining Table".to_string(),
            category: "dining".to_string(),
            description: None,
            price: Decimal::from(price),
            discount_price: discount.map(Decimal::from),
            images: vec![],
            is_published: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn effective_price_prefers_discount() {
        assert_eq!(
            product(1_200_000, Some(990_000)).effective_price(),
            Decimal::from(990_000)
        );
        assert_eq!(
            product(1_200_000, None).effective_price(),
            Decimal::from(1_200_000)
        );
    }
}
