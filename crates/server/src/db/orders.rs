//! Database operations for orders and checkout.

use rust_decimal::Decimal;
use sqlx::PgPool;

use maru_core::{OrderId, UserId};

use super::RepositoryError;
use crate::models::{CartLine, Order, OrderItem};

const ORDER_COLUMNS: &str = "id, user_id, order_no, status, total, payment_id, created_at, \
                             updated_at";

const ITEM_COLUMNS: &str = "id, order_id, product_id, product_name, unit_price, quantity";

/// Create an order from the user's cart.
///
/// The order row, its items, and the cart clear all happen in one
/// transaction: a crash mid-checkout leaves either a complete order or no
/// order, never an order without items or a cart that outlived its order.
///
/// # Errors
///
/// Returns `Conflict` if the cart is empty, or error if any statement fails.
pub async fn create_from_cart(
    pool: &PgPool,
    user_id: UserId,
    order_no: &str,
) -> Result<Order, RepositoryError> {
    let mut tx = pool.begin().await?;

    // Only published products are sellable at the moment of checkout.
    let lines = sqlx::query_as::<_, CartLine>(
        "SELECT c.id, c.product_id, p.name AS product_name, p.slug AS product_slug,
                COALESCE(p.discount_price, p.price) AS unit_price, c.quantity
         FROM cart_items c
         JOIN products p ON p.id = c.product_id
         WHERE c.user_id = $1 AND p.is_published
         ORDER BY c.created_at",
    )
    .bind(user_id)
    .fetch_all(&mut *tx)
    .await?;

    if lines.is_empty() {
        return Err(RepositoryError::Conflict(
            "cart has no purchasable items".to_string(),
        ));
    }

    let total: Decimal = lines.iter().map(CartLine::line_total).sum();

    let order = sqlx::query_as::<_, Order>(&format!(
        "INSERT INTO orders (user_id, order_no, total)
         VALUES ($1, $2, $3)
         RETURNING {ORDER_COLUMNS}"
    ))
    .bind(user_id)
    .bind(order_no)
    .bind(total)
    .fetch_one(&mut *tx)
    .await?;

    for line in &lines {
        sqlx::query(
            "INSERT INTO order_items (order_id, product_id, product_name, unit_price, quantity)
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(order.id)
        .bind(line.product_id)
        .bind(&line.product_name)
        .bind(line.unit_price)
        .bind(line.quantity)
        .execute(&mut *tx)
        .await?;
    }

    sqlx::query("DELETE FROM cart_items WHERE user_id = $1")
        .bind(user_id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    Ok(order)
}

/// List a user's orders, newest first.
///
/// # Errors
///
/// Returns error if the database query fails.
pub async fn list_for_user(pool: &PgPool, user_id: UserId) -> Result<Vec<Order>, RepositoryError> {
    let orders = sqlx::query_as::<_, Order>(&format!(
        "SELECT {ORDER_COLUMNS} FROM orders WHERE user_id = $1 ORDER BY created_at DESC"
    ))
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(orders)
}

/// Get one of the user's orders.
///
/// # Errors
///
/// Returns error if the database query fails.
pub async fn get_for_user(
    pool: &PgPool,
    user_id: UserId,
    order_id: OrderId,
) -> Result<Option<Order>, RepositoryError> {
    let order = sqlx::query_as::<_, Order>(&format!(
        "SELECT {ORDER_COLUMNS} FROM orders WHERE id = $1 AND user_id = $2"
    ))
    .bind(order_id)
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    Ok(order)
}

/// List the items on an order.
///
/// # Errors
///
/// Returns error if the database query fails.
pub async fn list_items(pool: &PgPool, order_id: OrderId) -> Result<Vec<OrderItem>, RepositoryError> {
    let items = sqlx::query_as::<_, OrderItem>(&format!(
        "SELECT {ITEM_COLUMNS} FROM order_items WHERE order_id = $1 ORDER BY id"
    ))
    .bind(order_id)
    .fetch_all(pool)
    .await?;

    Ok(items)
}

/// Mark one of the user's orders paid, guarded on `created` status.
///
/// Returns `None` when the order does not exist, belongs to someone else, or
/// has already left `created`.
///
/// # Errors
///
/// Returns error if the database update fails.
pub async fn mark_paid(
    pool: &PgPool,
    user_id: UserId,
    order_id: OrderId,
    payment_id: &str,
) -> Result<Option<Order>, RepositoryError> {
    let order = sqlx::query_as::<_, Order>(&format!(
        "UPDATE orders
         SET status = 'paid', payment_id = $3, updated_at = NOW()
         WHERE id = $1 AND user_id = $2 AND status = 'created'
         RETURNING {ORDER_COLUMNS}"
    ))
    .bind(order_id)
    .bind(user_id)
    .bind(payment_id)
    .fetch_optional(pool)
    .await?;

    Ok(order)
}
