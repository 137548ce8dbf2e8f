//! Back-office file uploads.
//!
//! Multipart with a single `file` field. Limits: 5 MiB for images (image/*
//! only), 50 MiB for resource files. Stored files are served from
//! `/uploads/{filename}`.

use axum::{
    Json,
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::error::{AppError, Result};
use crate::middleware::RequireAdmin;
use crate::routes::{DataEnvelope, data};
use crate::services::storage::{StorageError, StoredFile, UploadKind};
use crate::state::AppState;

/// The multipart field the file must arrive in.
const FILE_FIELD: &str = "file";

/// Pull the `file` field out of the multipart body and store it.
async fn store_upload(
    state: &AppState,
    kind: UploadKind,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<DataEnvelope<StoredFile>>)> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("malformed multipart body: {e}")))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let original_name = field.file_name().unwrap_or("upload").to_owned();
        let content_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_owned();

        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(format!("failed to read upload: {e}")))?;

        let stored = state
            .storage()
            .save(kind, &original_name, &content_type, &bytes)
            .await?;

        tracing::info!(
            filename = %stored.filename,
            size_bytes = stored.size_bytes,
            "file uploaded"
        );

        return Ok((StatusCode::CREATED, data(stored)));
    }

    Err(AppError::BadRequest(format!(
        "multipart field '{FILE_FIELD}' is required"
    )))
}

/// Upload an image (5 MiB, image/* only).
pub async fn upload_image(
    RequireAdmin(_): RequireAdmin,
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<impl IntoResponse> {
    store_upload(&state, UploadKind::Image, multipart).await
}

/// Upload a resource file (50 MiB).
pub async fn upload_resource(
    RequireAdmin(_): RequireAdmin,
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<impl IntoResponse> {
    store_upload(&state, UploadKind::Resource, multipart).await
}

/// Delete an uploaded file from disk.
pub async fn delete_file(
    RequireAdmin(_): RequireAdmin,
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> Result<impl IntoResponse> {
    state.storage().delete(&filename).await.map_err(|e| {
        if let StorageError::Io(ref io) = e {
            if io.kind() == std::io::ErrorKind::NotFound {
                return AppError::NotFound(format!("no uploaded file named '{filename}'"));
            }
        }
        AppError::Storage(e)
    })?;

    Ok(StatusCode::NO_CONTENT)
}
