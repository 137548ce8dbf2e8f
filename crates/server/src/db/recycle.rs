//! Database operations for the secondhand marketplace.

use rust_decimal::Decimal;
use sqlx::PgPool;

use maru_core::{RecycleCondition, RecycleItemId, RecycleStatus, UserId};

use super::RepositoryError;
use crate::models::RecycleItem;

const COLUMNS: &str = "id, seller_id, title, description, price, condition, images, status, \
                       created_at, updated_at";

/// Parameters for listing a secondhand item.
#[derive(Debug, Clone)]
pub struct RecycleItemParams {
    pub title: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub condition: RecycleCondition,
    pub images: Vec<String>,
}

/// List items visible on the storefront (`listed` and `reserved`).
///
/// # Errors
///
/// Returns error if the database query fails.
pub async fn list_visible(pool: &PgPool) -> Result<Vec<RecycleItem>, RepositoryError> {
    let items = sqlx::query_as::<_, RecycleItem>(&format!(
        "SELECT {COLUMNS} FROM recycle_items
         WHERE status IN ('listed', 'reserved')
         ORDER BY created_at DESC"
    ))
    .fetch_all(pool)
    .await?;

    Ok(items)
}

/// List every item regardless of status (back-office).
///
/// # Errors
///
/// Returns error if the database query fails.
pub async fn list_all(pool: &PgPool) -> Result<Vec<RecycleItem>, RepositoryError> {
    let items = sqlx::query_as::<_, RecycleItem>(&format!(
        "SELECT {COLUMNS} FROM recycle_items ORDER BY created_at DESC"
    ))
    .fetch_all(pool)
    .await?;

    Ok(items)
}

/// Get an item by ID.
///
/// # Errors
///
/// Returns error if the database query fails.
pub async fn get(pool: &PgPool, id: RecycleItemId) -> Result<Option<RecycleItem>, RepositoryError> {
    let item = sqlx::query_as::<_, RecycleItem>(&format!(
        "SELECT {COLUMNS} FROM recycle_items WHERE id = $1"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(item)
}

/// Create a listing owned by `seller_id`, always starting as `listed`.
///
/// # Errors
///
/// Returns error if the database insert fails.
pub async fn create(
    pool: &PgPool,
    seller_id: UserId,
    params: RecycleItemParams,
) -> Result<RecycleItem, RepositoryError> {
    let item = sqlx::query_as::<_, RecycleItem>(&format!(
        "INSERT INTO recycle_items (seller_id, title, description, price, condition, images)
         VALUES ($1, $2, $3, $4, $5, $6)
         RETURNING {COLUMNS}"
    ))
    .bind(seller_id)
    .bind(&params.title)
    .bind(&params.description)
    .bind(params.price)
    .bind(params.condition)
    .bind(&params.images)
    .fetch_one(pool)
    .await?;

    Ok(item)
}

/// Set an item's status (back-office moderation).
///
/// # Errors
///
/// Returns `NotFound` if the item does not exist.
pub async fn set_status(
    pool: &PgPool,
    id: RecycleItemId,
    status: RecycleStatus,
) -> Result<RecycleItem, RepositoryError> {
    let item = sqlx::query_as::<_, RecycleItem>(&format!(
        "UPDATE recycle_items
         SET status = $2, updated_at = NOW()
         WHERE id = $1
         RETURNING {COLUMNS}"
    ))
    .bind(id)
    .bind(status)
    .fetch_optional(pool)
    .await?;

    item.ok_or(RepositoryError::NotFound)
}

/// Delete a listing.
///
/// # Errors
///
/// Returns `NotFound` if the item does not exist.
pub async fn delete(pool: &PgPool, id: RecycleItemId) -> Result<(), RepositoryError> {
    let result = sqlx::query("DELETE FROM recycle_items WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(RepositoryError::NotFound);
    }

    Ok(())
}
