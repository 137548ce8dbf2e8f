//! Database operations for category banners.

use sqlx::PgPool;

use maru_core::BannerId;

use super::RepositoryError;
use crate::models::CategoryBanner;

const COLUMNS: &str = "id, category, image_url, headline, link_url, is_active, sort_order, \
                       updated_at";

/// Parameters for creating or replacing a banner.
#[derive(Debug, Clone)]
pub struct BannerParams {
    pub category: String,
    pub image_url: String,
    pub headline: Option<String>,
    pub link_url: Option<String>,
    pub is_active: bool,
    pub sort_order: i32,
}

/// List active banners, optionally restricted to one category.
///
/// This is the hot storefront read; the route in front of it caches the
/// result for five minutes.
///
/// # Errors
///
/// Returns error if the database query fails.
pub async fn list_active(
    pool: &PgPool,
    category: Option<&str>,
) -> Result<Vec<CategoryBanner>, RepositoryError> {
    let banners = sqlx::query_as::<_, CategoryBanner>(&format!(
        "SELECT {COLUMNS} FROM category_banners
         WHERE is_active AND ($1 IS NULL OR category = $1)
         ORDER BY sort_order, id"
    ))
    .bind(category)
    .fetch_all(pool)
    .await?;

    Ok(banners)
}

/// List every banner (back-office).
///
/// # Errors
///
/// Returns error if the database query fails.
pub async fn list_all(pool: &PgPool) -> Result<Vec<CategoryBanner>, RepositoryError> {
    let banners = sqlx::query_as::<_, CategoryBanner>(&format!(
        "SELECT {COLUMNS} FROM category_banners ORDER BY category, sort_order, id"
    ))
    .fetch_all(pool)
    .await?;

    Ok(banners)
}

/// Create a banner.
///
/// # Errors
///
/// Returns error if the database insert fails.
pub async fn create(
    pool: &PgPool,
    params: BannerParams,
) -> Result<CategoryBanner, RepositoryError> {
    let banner = sqlx::query_as::<_, CategoryBanner>(&format!(
        "INSERT INTO category_banners
             (category, image_url, headline, link_url, is_active, sort_order)
         VALUES ($1, $2, $3, $4, $5, $6)
         RETURNING {COLUMNS}"
    ))
    .bind(&params.category)
    .bind(&params.image_url)
    .bind(&params.headline)
    .bind(&params.link_url)
    .bind(params.is_active)
    .bind(params.sort_order)
    .fetch_one(pool)
    .await?;

    Ok(banner)
}

/// Replace a banner's fields.
///
/// # Errors
///
/// Returns `NotFound` if the banner does not exist.
pub async fn update(
    pool: &PgPool,
    id: BannerId,
    params: BannerParams,
) -> Result<CategoryBanner, RepositoryError> {
    let banner = sqlx::query_as::<_, CategoryBanner>(&format!(
        "UPDATE category_banners
         SET category = $2, image_url = $3, headline = $4, link_url = $5,
             is_active = $6, sort_order = $7, updated_at = NOW()
         WHERE id = $1
         RETURNING {COLUMNS}"
    ))
    .bind(id)
    .bind(&params.category)
    .bind(&params.image_url)
    .bind(&params.headline)
    .bind(&params.link_url)
    .bind(params.is_active)
    .bind(params.sort_order)
    .fetch_optional(pool)
    .await?;

    banner.ok_or(RepositoryError::NotFound)
}

/// Delete a banner.
///
/// # Errors
///
/// Returns `NotFound` if the banner does not exist.
pub async fn delete(pool: &PgPool, id: BannerId) -> Result<(), RepositoryError> {
    let result = sqlx::query("DELETE FROM category_banners WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(RepositoryError::NotFound);
    }

    Ok(())
}
