//! Database operations for gallery items.

use sqlx::PgPool;

use maru_core::{GalleryItemId, ProductId};

use super::RepositoryError;
use crate::models::GalleryItem;

const COLUMNS: &str = "id, title, image_url, caption, product_id, sort_order, created_at";

/// Parameters for creating or replacing a gallery item.
#[derive(Debug, Clone)]
pub struct GalleryItemParams {
    pub title: String,
    pub image_url: String,
    pub caption: Option<String>,
    pub product_id: Option<ProductId>,
    pub sort_order: i32,
}

/// List gallery items in display order.
///
/// # Errors
///
/// Returns error if the database query fails.
pub async fn list_all(pool: &PgPool) -> Result<Vec<GalleryItem>, RepositoryError> {
    let items = sqlx::query_as::<_, GalleryItem>(&format!(
        "SELECT {COLUMNS} FROM gallery_items ORDER BY sort_order, id"
    ))
    .fetch_all(pool)
    .await?;

    Ok(items)
}

/// Get a gallery item by ID.
///
/// # Errors
///
/// Returns error if the database query fails.
pub async fn get(pool: &PgPool, id: GalleryItemId) -> Result<Option<GalleryItem>, RepositoryError> {
    let item = sqlx::query_as::<_, GalleryItem>(&format!(
        "SELECT {COLUMNS} FROM gallery_items WHERE id = $1"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(item)
}

/// Create a gallery item.
///
/// # Errors
///
/// Returns error if the database insert fails.
pub async fn create(
    pool: &PgPool,
    params: GalleryItemParams,
) -> Result<GalleryItem, RepositoryError> {
    let item = sqlx::query_as::<_, GalleryItem>(&format!(
        "INSERT INTO gallery_items (title, image_url, caption, product_id, sort_order)
         VALUES ($1, $2, $3, $4, $5)
         RETURNING {COLUMNS}"
    ))
    .bind(&params.title)
    .bind(&params.image_url)
    .bind(&params.caption)
    .bind(params.product_id)
    .bind(params.sort_order)
    .fetch_one(pool)
    .await?;

    Ok(item)
}

/// Replace a gallery item's fields.
///
/// # Errors
///
/// Returns `NotFound` if the item does not exist.
pub async fn update(
    pool: &PgPool,
    id: GalleryItemId,
    params: GalleryItemParams,
) -> Result<GalleryItem, RepositoryError> {
    let item = sqlx::query_as::<_, GalleryItem>(&format!(
        "UPDATE gallery_items
         SET title = $2, image_url = $3, caption = $4, product_id = $5, sort_order = $6
         WHERE id = $1
         RETURNING {COLUMNS}"
    ))
    .bind(id)
    .bind(&params.title)
    .bind(&params.image_url)
    .bind(&params.caption)
    .bind(params.product_id)
    .bind(params.sort_order)
    .fetch_optional(pool)
    .await?;

    item.ok_or(RepositoryError::NotFound)
}

/// Delete a gallery item.
///
/// # Errors
///
/// Returns `NotFound` if the item does not exist.
pub async fn delete(pool: &PgPool, id: GalleryItemId) -> Result<(), RepositoryError> {
    let result = sqlx::query("DELETE FROM gallery_items WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(RepositoryError::NotFound);
    }

    Ok(())
}
