//! Back-office moderation of secondhand listings.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use maru_core::{RecycleItemId, RecycleStatus};

use crate::db::{self, with_timeout};
use crate::error::{AppError, Result};
use crate::middleware::RequireAdmin;
use crate::routes::data;
use crate::state::AppState;

/// Body for overriding a listing's status.
#[derive(Debug, Deserialize)]
pub struct SetStatusBody {
    pub status: Option<RecycleStatus>,
}

/// List every listing regardless of status.
pub async fn list(
    RequireAdmin(_): RequireAdmin,
    State(state): State<AppState>,
) -> Result<impl IntoResponse> {
    let items = with_timeout(db::recycle::list_all(state.pool())).await?;
    Ok(data(items))
}

/// Override a listing's status (mark reserved/sold, or relist).
pub async fn set_status(
    RequireAdmin(_): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(body): Json<SetStatusBody>,
) -> Result<impl IntoResponse> {
    let status = body
        .status
        .ok_or_else(|| AppError::BadRequest("status is required".to_string()))?;

    let item = db::recycle::set_status(state.pool(), RecycleItemId::new(id), status).await?;
    Ok(data(item))
}

/// Pull a listing entirely.
pub async fn delete(
    RequireAdmin(_): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse> {
    db::recycle::delete(state.pool(), RecycleItemId::new(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}
