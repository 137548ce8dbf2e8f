//! Database operations for products.

use sqlx::PgPool;

use maru_core::{BrandId, ProductId};

use super::RepositoryError;
use crate::models::Product;

const COLUMNS: &str = "id, brand_id, slug, name, category, description, price, discount_price, \
                       images, is_published, created_at, updated_at";

/// Storefront page size.
pub const PAGE_SIZE: i64 = 20;

/// Storefront listing filter.
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    /// Restrict to a brand, by slug.
    pub brand_slug: Option<String>,
    /// Restrict to a category.
    pub category: Option<String>,
    /// 1-based page number.
    pub page: u32,
}

/// A page of products plus the total match count.
#[derive(Debug, Clone)]
pub struct ProductPage {
    pub products: Vec<Product>,
    pub total: i64,
    pub page: u32,
}

impl ProductPage {
    /// Number of pages at [`PAGE_SIZE`].
    #[must_use]
    pub const fn total_pages(&self) -> i64 {
        (self.total + PAGE_SIZE - 1) / PAGE_SIZE
    }
}

/// Parameters for creating or replacing a product.
#[derive(Debug, Clone)]
pub struct ProductParams {
    pub brand_id: BrandId,
    pub slug: String,
    pub name: String,
    pub category: String,
    pub description: Option<String>,
    pub price: rust_decimal::Decimal,
    pub discount_price: Option<rust_decimal::Decimal>,
    pub images: Vec<String>,
    pub is_published: bool,
}

/// List published products for the storefront, filtered and paginated.
///
/// # Errors
///
/// Returns error if the database query fails.
pub async fn list_published(
    pool: &PgPool,
    filter: &ProductFilter,
) -> Result<ProductPage, RepositoryError> {
    let page = filter.page.max(1);
    let offset = i64::from(page - 1) * PAGE_SIZE;

    let products = sqlx::query_as::<_, Product>(&format!(
        "SELECT p.id, p.brand_id, p.slug, p.name, p.category, p.description, p.price,
                p.discount_price, p.images, p.is_published, p.created_at, p.updated_at
         FROM products p
         JOIN brands b ON b.id = p.brand_id
         WHERE p.is_published
           AND ($1 IS NULL OR b.slug = $1)
           AND ($2 IS NULL OR p.category = $2)
         ORDER BY p.created_at DESC
         LIMIT {PAGE_SIZE} OFFSET $3"
    ))
    .bind(&filter.brand_slug)
    .bind(&filter.category)
    .bind(offset)
    .fetch_all(pool)
    .await?;

    let total = sqlx::query_scalar::<_, i64>(
        "SELECT COUNT(*)
         FROM products p
         JOIN brands b ON b.id = p.brand_id
         WHERE p.is_published
           AND ($1 IS NULL OR b.slug = $1)
           AND ($2 IS NULL OR p.category = $2)",
    )
    .bind(&filter.brand_slug)
    .bind(&filter.category)
    .fetch_one(pool)
    .await?;

    Ok(ProductPage {
        products,
        total,
        page,
    })
}

/// Get a published product by slug (storefront detail page).
///
/// # Errors
///
/// Returns error if the database query fails.
pub async fn get_published_by_slug(
    pool: &PgPool,
    slug: &str,
) -> Result<Option<Product>, RepositoryError> {
    let product = sqlx::query_as::<_, Product>(&format!(
        "SELECT {COLUMNS} FROM products WHERE slug = $1 AND is_published"
    ))
    .bind(slug)
    .fetch_optional(pool)
    .await?;

    Ok(product)
}

/// List every product, including unpublished (back-office).
///
/// # Errors
///
/// Returns error if the database query fails.
pub async fn list_all(pool: &PgPool) -> Result<Vec<Product>, RepositoryError> {
    let products = sqlx::query_as::<_, Product>(&format!(
        "SELECT {COLUMNS} FROM products ORDER BY created_at DESC"
    ))
    .fetch_all(pool)
    .await?;

    Ok(products)
}

/// Get a product by ID.
///
/// # Errors
///
/// Returns error if the database query fails.
pub async fn get(pool: &PgPool, id: ProductId) -> Result<Option<Product>, RepositoryError> {
    let product = sqlx::query_as::<_, Product>(&format!(
        "SELECT {COLUMNS} FROM products WHERE id = $1"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(product)
}

/// Create a product.
///
/// # Errors
///
/// Returns `Conflict` if the slug is taken.
pub async fn create(pool: &PgPool, params: ProductParams) -> Result<Product, RepositoryError> {
    let product = sqlx::query_as::<_, Product>(&format!(
        "INSERT INTO products
             (brand_id, slug, name, category, description, price, discount_price, images,
              is_published)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
         RETURNING {COLUMNS}"
    ))
    .bind(params.brand_id)
    .bind(&params.slug)
    .bind(&params.name)
    .bind(&params.category)
    .bind(&params.description)
    .bind(params.price)
    .bind(params.discount_price)
    .bind(&params.images)
    .bind(params.is_published)
    .fetch_one(pool)
    .await
    .map_err(|e| RepositoryError::from_sqlx(e, "a product with this slug already exists"))?;

    Ok(product)
}

/// Replace a product's fields.
///
/// # Errors
///
/// Returns `NotFound` if the product does not exist, `Conflict` on slug clash.
pub async fn update(
    pool: &PgPool,
    id: ProductId,
    params: ProductParams,
) -> Result<Product, RepositoryError> {
    let product = sqlx::query_as::<_, Product>(&format!(
        "UPDATE products
         SET brand_id = $2, slug = $3, name = $4, category = $5, description = $6,
             price = $7, discount_price = $8, images = $9, is_published = $10,
             updated_at = NOW()
         WHERE id = $1
         RETURNING {COLUMNS}"
    ))
    .bind(id)
    .bind(params.brand_id)
    .bind(&params.slug)
    .bind(&params.name)
    .bind(&params.category)
    .bind(&params.description)
    .bind(params.price)
    .bind(params.discount_price)
    .bind(&params.images)
    .bind(params.is_published)
    .fetch_optional(pool)
    .await
    .map_err(|e| RepositoryError::from_sqlx(e, "a product with this slug already exists"))?;

    product.ok_or(RepositoryError::NotFound)
}

/// Delete a product.
///
/// # Errors
///
/// Returns `NotFound` if the product does not exist.
pub async fn delete(pool: &PgPool, id: ProductId) -> Result<(), RepositoryError> {
    let result = sqlx::query("DELETE FROM products WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(RepositoryError::NotFound);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_rounds_up() {
        let page = |total| ProductPage {
            products: vec![],
            total,
            page: 1,
        };
        assert_eq!(page(0).total_pages(), 0);
        assert_eq!(page(20).total_pages(), 1);
        assert_eq!(page(21).total_pages(), 2);
    }
}
