//! Brand route handlers.

use axum::{
    extract::{Path, State},
    response::IntoResponse,
};

use crate::db;
use crate::error::{AppError, Result};
use crate::state::AppState;

use super::data;

/// List all brands.
pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let brands = db::brands::list_all(state.pool()).await?;
    Ok(data(brands))
}

/// Brand detail by slug. Unknown slugs are a 404 envelope, not an error page.
pub async fn show(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse> {
    let brand = db::brands::get_by_slug(state.pool(), &slug)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("brand '{slug}' not found")))?;

    Ok(data(brand))
}
