//! Product review route handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::db::{self, reviews::CreateReview};
use crate::error::{AppError, Result};
use crate::middleware::RequireAuth;
use crate::models::review::{MAX_RATING, MIN_RATING};
use crate::state::AppState;

use super::data;

/// Body for posting a review.
#[derive(Debug, Deserialize)]
pub struct CreateReviewBody {
    pub rating: Option<i16>,
    pub title: Option<String>,
    pub body: Option<String>,
}

/// List reviews for a product.
pub async fn list(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse> {
    let product = db::products::get_published_by_slug(state.pool(), &slug)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("product '{slug}' not found")))?;

    let reviews = db::reviews::list_for_product(state.pool(), product.id).await?;
    Ok(data(reviews))
}

/// Post a review. Rating must be 1-5.
pub async fn create(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Json(body): Json<CreateReviewBody>,
) -> Result<impl IntoResponse> {
    let rating = body
        .rating
        .ok_or_else(|| AppError::BadRequest("rating is required".to_string()))?;
    if !(MIN_RATING..=MAX_RATING).contains(&rating) {
        return Err(AppError::BadRequest(format!(
            "rating must be between {MIN_RATING} and {MAX_RATING}"
        )));
    }

    let text = body
        .body
        .map(|b| b.trim().to_owned())
        .filter(|b| !b.is_empty())
        .ok_or_else(|| AppError::BadRequest("body is required".to_string()))?;

    let product = db::products::get_published_by_slug(state.pool(), &slug)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("product '{slug}' not found")))?;

    let review = db::reviews::create(
        state.pool(),
        CreateReview {
            product_id: product.id,
            author_id: user.id,
            rating,
            title: body.title,
            body: text,
        },
    )
    .await?;

    Ok((StatusCode::CREATED, data(review)))
}
