//! Simulated Naver Pay integration.
//!
//! There is no live payment provider: approval always succeeds and produces
//! a sandbox payment reference. The only rule enforced is that an order can
//! be paid exactly once, from the `created` status.

use thiserror::Error;
use uuid::Uuid;

use maru_core::OrderStatus;

use crate::models::Order;

/// Provider tag recorded on receipts.
pub const PROVIDER: &str = "naver-pay-sandbox";

/// Errors from the payment flow.
#[derive(Debug, Error)]
pub enum PaymentError {
    /// The order has already been paid or cancelled.
    #[error("order cannot be paid from status {status:?}")]
    NotPayable {
        /// The order's current status.
        status: OrderStatus,
    },
}

/// A successful (simulated) payment approval.
#[derive(Debug, Clone)]
pub struct PaymentReceipt {
    /// Provider-side payment reference.
    pub payment_id: String,
    /// Which provider approved the payment.
    pub provider: &'static str,
}

/// Approve payment for an order.
///
/// # Errors
///
/// Returns `PaymentError::NotPayable` unless the order is `created`.
pub fn approve(order: &Order) -> Result<PaymentReceipt, PaymentError> {
    if order.status != OrderStatus::Created {
        return Err(PaymentError::NotPayable {
            status: order.status,
        });
    }

    Ok(PaymentReceipt {
        payment_id: format!("npay-{}", Uuid::new_v4().simple()),
        provider: PROVIDER,
    })
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use rust_decimal::Decimal;

    use maru_core::{OrderId, UserId};

    use super::*;

    fn order(status: OrderStatus) -> Order {
        Order {
            id: OrderId::new(1),
            user_id: UserId::new(1),
            order_no: "MR-20250401-A7F3".to_string(),
            status,
            total: Decimal::from(990_000),
            payment_id: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn created_orders_are_approved() {
        let receipt = approve(&order(OrderStatus::Created)).expect("approval");
        assert!(receipt.payment_id.starts_with("npay-"));
        assert_eq!(receipt.provider, PROVIDER);
    }

    #[test]
    fn paid_and_cancelled_orders_are_not_payable() {
        for status in [OrderStatus::Paid, OrderStatus::Cancelled] {
            assert!(matches!(
                approve(&order(status)),
                Err(PaymentError::NotPayable { .. })
            ));
        }
    }

    #[test]
    fn receipts_are_unique() {
        let order = order(OrderStatus::Created);
        let a = approve(&order).expect("first");
        let b = approve(&order).expect("second");
        assert_ne!(a.payment_id, b.payment_id);
    }
}
