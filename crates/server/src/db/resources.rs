//! Database operations for downloadable resources.

use sqlx::PgPool;

use maru_core::{ResourceId, ResourceKind};

use super::RepositoryError;
use crate::models::Resource;

const COLUMNS: &str = "id, title, kind, file_url, file_size_bytes, download_count, created_at";

/// Parameters for creating or replacing a resource.
#[derive(Debug, Clone)]
pub struct ResourceParams {
    pub title: String,
    pub kind: ResourceKind,
    pub file_url: String,
    pub file_size_bytes: i64,
}

/// List all resources, newest first.
///
/// # Errors
///
/// Returns error if the database query fails.
pub async fn list_all(pool: &PgPool) -> Result<Vec<Resource>, RepositoryError> {
    let resources = sqlx::query_as::<_, Resource>(&format!(
        "SELECT {COLUMNS} FROM resources ORDER BY created_at DESC"
    ))
    .fetch_all(pool)
    .await?;

    Ok(resources)
}

/// Get a resource by ID.
///
/// # Errors
///
/// Returns error if the database query fails.
pub async fn get(pool: &PgPool, id: ResourceId) -> Result<Option<Resource>, RepositoryError> {
    let resource = sqlx::query_as::<_, Resource>(&format!(
        "SELECT {COLUMNS} FROM resources WHERE id = $1"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(resource)
}

/// Record a download and return the file URL.
///
/// # Errors
///
/// Returns `NotFound` if the resource does not exist.
pub async fn record_download(pool: &PgPool, id: ResourceId) -> Result<String, RepositoryError> {
    let file_url = sqlx::query_scalar::<_, String>(
        "UPDATE resources
         SET download_count = download_count + 1
         WHERE id = $1
         RETURNING file_url",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    file_url.ok_or(RepositoryError::NotFound)
}

/// Create a resource.
///
/// # Errors
///
/// Returns error if the database insert fails.
pub async fn create(pool: &PgPool, params: ResourceParams) -> Result<Resource, RepositoryError> {
    let resource = sqlx::query_as::<_, Resource>(&format!(
        "INSERT INTO resources (title, kind, file_url, file_size_bytes)
         VALUES ($1, $2, $3, $4)
         RETURNING {COLUMNS}"
    ))
    .bind(&params.title)
    .bind(params.kind)
    .bind(&params.file_url)
    .bind(params.file_size_bytes)
    .fetch_one(pool)
    .await?;

    Ok(resource)
}

/// Replace a resource's fields. The download count is preserved.
///
/// # Errors
///
/// Returns `NotFound` if the resource does not exist.
pub async fn update(
    pool: &PgPool,
    id: ResourceId,
    params: ResourceParams,
) -> Result<Resource, RepositoryError> {
    let resource = sqlx::query_as::<_, Resource>(&format!(
        "UPDATE resources
         SET title = $2, kind = $3, file_url = $4, file_size_bytes = $5
         WHERE id = $1
         RETURNING {COLUMNS}"
    ))
    .bind(id)
    .bind(&params.title)
    .bind(params.kind)
    .bind(&params.file_url)
    .bind(params.file_size_bytes)
    .fetch_optional(pool)
    .await?;

    resource.ok_or(RepositoryError::NotFound)
}

/// Delete a resource.
///
/// # Errors
///
/// Returns `NotFound` if the resource does not exist.
pub async fn delete(pool: &PgPool, id: ResourceId) -> Result<(), RepositoryError> {
    let result = sqlx::query("DELETE FROM resources WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(RepositoryError::NotFound);
    }

    Ok(())
}
