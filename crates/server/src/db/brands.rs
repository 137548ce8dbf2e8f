//! Database operations for brands.

use sqlx::PgPool;

use maru_core::BrandId;

use super::RepositoryError;
use crate::models::Brand;

const COLUMNS: &str = "id, slug, name, country, description, logo_url, created_at, updated_at";

/// Parameters for creating or replacing a brand.
#[derive(Debug, Clone)]
pub struct BrandParams {
    pub slug: String,
    pub name: String,
    pub country: Option<String>,
    pub description: Option<String>,
    pub logo_url: Option<String>,
}

/// List all brands, alphabetically.
///
/// # Errors
///
/// Returns error if the database query fails.
pub async fn list_all(pool: &PgPool) -> Result<Vec<Brand>, RepositoryError> {
    let brands = sqlx::query_as::<_, Brand>(&format!(
        "SELECT {COLUMNS} FROM brands ORDER BY name"
    ))
    .fetch_all(pool)
    .await?;

    Ok(brands)
}

/// Get a brand by slug.
///
/// # Errors
///
/// Returns error if the database query fails.
pub async fn get_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Brand>, RepositoryError> {
    let brand = sqlx::query_as::<_, Brand>(&format!(
        "SELECT {COLUMNS} FROM brands WHERE slug = $1"
    ))
    .bind(slug)
    .fetch_optional(pool)
    .await?;

    Ok(brand)
}

/// Get a brand by ID.
///
/// # Errors
///
/// Returns error if the database query fails.
pub async fn get(pool: &PgPool, id: BrandId) -> Result<Option<Brand>, RepositoryError> {
    let brand = sqlx::query_as::<_, Brand>(&format!(
        "SELECT {COLUMNS} FROM brands WHERE id = $1"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(brand)
}

/// Create a brand.
///
/// # Errors
///
/// Returns `Conflict` if the slug is already taken.
pub async fn create(pool: &PgPool, params: BrandParams) -> Result<Brand, RepositoryError> {
    let brand = sqlx::query_as::<_, Brand>(&format!(
        "INSERT INTO brands (slug, name, country, description, logo_url)
         VALUES ($1, $2, $3, $4, $5)
         RETURNING {COLUMNS}"
    ))
    .bind(&params.slug)
    .bind(&params.name)
    .bind(&params.country)
    .bind(&params.description)
    .bind(&params.logo_url)
    .fetch_one(pool)
    .await
    .map_err(|e| RepositoryError::from_sqlx(e, "a brand with this slug already exists"))?;

    Ok(brand)
}

/// Replace a brand's fields.
///
/// # Errors
///
/// Returns `NotFound` if the brand does not exist, `Conflict` on slug clash.
pub async fn update(
    pool: &PgPool,
    id: BrandId,
    params: BrandParams,
) -> Result<Brand, RepositoryError> {
    let brand = sqlx::query_as::<_, Brand>(&format!(
        "UPDATE brands
         SET slug = $2, name = $3, country = $4, description = $5, logo_url = $6,
             updated_at = NOW()
         WHERE id = $1
         RETURNING {COLUMNS}"
    ))
    .bind(id)
    .bind(&params.slug)
    .bind(&params.name)
    .bind(&params.country)
    .bind(&params.description)
    .bind(&params.logo_url)
    .fetch_optional(pool)
    .await
    .map_err(|e| RepositoryError::from_sqlx(e, "a brand with this slug already exists"))?;

    brand.ok_or(RepositoryError::NotFound)
}

/// Delete a brand.
///
/// # Errors
///
/// Returns `NotFound` if the brand does not exist.
pub async fn delete(pool: &PgPool, id: BrandId) -> Result<(), RepositoryError> {
    let result = sqlx::query("DELETE FROM brands WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(RepositoryError::NotFound);
    }

    Ok(())
}
