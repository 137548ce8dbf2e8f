//! Downloadable resource route handlers.

use axum::{
    extract::{Path, State},
    response::IntoResponse,
};
use serde::Serialize;

use maru_core::ResourceId;

use crate::db::{self, RepositoryError};
use crate::error::{AppError, Result};
use crate::state::AppState;

use super::data;

/// Download response payload.
#[derive(Debug, Serialize)]
pub struct DownloadPayload {
    pub file_url: String,
}

/// List resources, newest first.
pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let resources = db::resources::list_all(state.pool()).await?;
    Ok(data(resources))
}

/// Count a download and hand back the file URL.
pub async fn download(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse> {
    let file_url = db::resources::record_download(state.pool(), ResourceId::new(id))
        .await
        .map_err(|e| match e {
            RepositoryError::NotFound => AppError::NotFound(format!("resource {id} not found")),
            other => AppError::Database(other),
        })?;

    Ok(data(DownloadPayload { file_url }))
}
