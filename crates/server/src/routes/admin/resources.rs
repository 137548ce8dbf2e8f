//! Back-office resource CRUD.
//!
//! The file itself arrives via `POST /api/admin/uploads/resources`; these
//! handlers manage the catalog entry pointing at it.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use maru_core::{ResourceId, ResourceKind};

use crate::db::{self, resources::ResourceParams, with_timeout};
use crate::error::{AppError, Result};
use crate::middleware::RequireAdmin;
use crate::routes::data;
use crate::state::AppState;

/// Body for creating or replacing a resource.
#[derive(Debug, Deserialize)]
pub struct ResourceBody {
    pub title: Option<String>,
    pub kind: Option<ResourceKind>,
    pub file_url: Option<String>,
    pub file_size_bytes: Option<i64>,
}

impl ResourceBody {
    fn into_params(self) -> Result<ResourceParams> {
        let title = self
            .title
            .map(|t| t.trim().to_owned())
            .filter(|t| !t.is_empty())
            .ok_or_else(|| AppError::BadRequest("title is required".to_string()))?;

        let kind = self
            .kind
            .ok_or_else(|| AppError::BadRequest("kind is required".to_string()))?;

        let file_url = self
            .file_url
            .filter(|u| !u.trim().is_empty())
            .ok_or_else(|| AppError::BadRequest("file_url is required".to_string()))?;

        let file_size_bytes = self.file_size_bytes.unwrap_or(0);
        if file_size_bytes < 0 {
            return Err(AppError::BadRequest(
                "file_size_bytes cannot be negative".to_string(),
            ));
        }

        Ok(ResourceParams {
            title,
            kind,
            file_url,
            file_size_bytes,
        })
    }
}

/// List resources.
pub async fn list(
    RequireAdmin(_): RequireAdmin,
    State(state): State<AppState>,
) -> Result<impl IntoResponse> {
    let resources = with_timeout(db::resources::list_all(state.pool())).await?;
    Ok(data(resources))
}

/// Create a resource entry.
pub async fn create(
    RequireAdmin(_): RequireAdmin,
    State(state): State<AppState>,
    Json(body): Json<ResourceBody>,
) -> Result<impl IntoResponse> {
    let resource = db::resources::create(state.pool(), body.into_params()?).await?;
    Ok((StatusCode::CREATED, data(resource)))
}

/// Replace a resource entry.
pub async fn update(
    RequireAdmin(_): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(body): Json<ResourceBody>,
) -> Result<impl IntoResponse> {
    let resource =
        db::resources::update(state.pool(), ResourceId::new(id), body.into_params()?).await?;
    Ok(data(resource))
}

/// Delete a resource entry.
pub async fn delete(
    RequireAdmin(_): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse> {
    db::resources::delete(state.pool(), ResourceId::new(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}
