//! Database operations for product reviews.

use sqlx::PgPool;

use maru_core::{ProductId, UserId};

use super::RepositoryError;
use crate::models::Review;

const COLUMNS: &str = "id, product_id, author_id, rating, title, body, created_at";

/// Parameters for posting a review.
#[derive(Debug, Clone)]
pub struct CreateReview {
    pub product_id: ProductId,
    pub author_id: UserId,
    /// 1-5, validated by the route before it gets here.
    pub rating: i16,
    pub title: Option<String>,
    pub body: String,
}

/// List reviews for a product, newest first.
///
/// # Errors
///
/// Returns error if the database query fails.
pub async fn list_for_product(
    pool: &PgPool,
    product_id: ProductId,
) -> Result<Vec<Review>, RepositoryError> {
    let reviews = sqlx::query_as::<_, Review>(&format!(
        "SELECT {COLUMNS} FROM reviews WHERE product_id = $1 ORDER BY created_at DESC"
    ))
    .bind(product_id)
    .fetch_all(pool)
    .await?;

    Ok(reviews)
}

/// Post a review.
///
/// # Errors
///
/// Returns error if the database insert fails.
pub async fn create(pool: &PgPool, params: CreateReview) -> Result<Review, RepositoryError> {
    let review = sqlx::query_as::<_, Review>(&format!(
        "INSERT INTO reviews (product_id, author_id, rating, title, body)
         VALUES ($1, $2, $3, $4, $5)
         RETURNING {COLUMNS}"
    ))
    .bind(params.product_id)
    .bind(params.author_id)
    .bind(params.rating)
    .bind(&params.title)
    .bind(&params.body)
    .fetch_one(pool)
    .await?;

    Ok(review)
}
