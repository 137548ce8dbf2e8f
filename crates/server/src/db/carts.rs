//! Database operations for carts.

use sqlx::PgPool;

use maru_core::{CartItemId, ProductId, UserId};

use super::RepositoryError;
use crate::models::CartLine;

/// List a user's cart joined with product data, oldest first.
///
/// Only published products are priced and sellable, but cart rows for since-
/// unpublished products are still returned so the client can show them as
/// unavailable; checkout re-checks publication.
///
/// # Errors
///
/// Returns error if the database query fails.
pub async fn list_lines(pool: &PgPool, user_id: UserId) -> Result<Vec<CartLine>, RepositoryError> {
    let lines = sqlx::query_as::<_, CartLine>(
        "SELECT c.id, c.product_id, p.name AS product_name, p.slug AS product_slug,
                COALESCE(p.discount_price, p.price) AS unit_price, c.quantity
         FROM cart_items c
         JOIN products p ON p.id = c.product_id
         WHERE c.user_id = $1
         ORDER BY c.created_at",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(lines)
}

/// Add a product to the cart, merging with an existing row for the same
/// product.
///
/// # Errors
///
/// Returns error if the database upsert fails.
pub async fn add_item(
    pool: &PgPool,
    user_id: UserId,
    product_id: ProductId,
    quantity: i32,
) -> Result<(), RepositoryError> {
    sqlx::query(
        "INSERT INTO cart_items (user_id, product_id, quantity)
         VALUES ($1, $2, $3)
         ON CONFLICT (user_id, product_id)
         DO UPDATE SET quantity = cart_items.quantity + EXCLUDED.quantity",
    )
    .bind(user_id)
    .bind(product_id)
    .bind(quantity)
    .execute(pool)
    .await?;

    Ok(())
}

/// Set the quantity on a cart row the user owns.
///
/// # Errors
///
/// Returns `NotFound` if the row does not exist or belongs to someone else.
pub async fn set_quantity(
    pool: &PgPool,
    user_id: UserId,
    item_id: CartItemId,
    quantity: i32,
) -> Result<(), RepositoryError> {
    let result = sqlx::query(
        "UPDATE cart_items SET quantity = $3 WHERE id = $1 AND user_id = $2",
    )
    .bind(item_id)
    .bind(user_id)
    .bind(quantity)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(RepositoryError::NotFound);
    }

    Ok(())
}

/// Remove a cart row the user owns.
///
/// # Errors
///
/// Returns `NotFound` if the row does not exist or belongs to someone else.
pub async fn remove_item(
    pool: &PgPool,
    user_id: UserId,
    item_id: CartItemId,
) -> Result<(), RepositoryError> {
    let result = sqlx::query("DELETE FROM cart_items WHERE id = $1 AND user_id = $2")
        .bind(item_id)
        .bind(user_id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(RepositoryError::NotFound);
    }

    Ok(())
}
