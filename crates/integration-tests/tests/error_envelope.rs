//! Error-to-HTTP mapping and the JSON error envelope.

use axum::http::StatusCode;
use axum::response::IntoResponse;

use maru_server::db::RepositoryError;
use maru_server::error::{AppError, ErrorCode};
use maru_server::services::storage::{MAX_IMAGE_BYTES, StorageError};

fn status_of(err: AppError) -> StatusCode {
    err.into_response().status()
}

#[test]
fn client_errors_map_to_4xx() {
    assert_eq!(
        status_of(AppError::BadRequest("x".into())),
        StatusCode::BAD_REQUEST
    );
    assert_eq!(
        status_of(AppError::Unauthorized("x".into())),
        StatusCode::UNAUTHORIZED
    );
    assert_eq!(
        status_of(AppError::Forbidden("x".into())),
        StatusCode::FORBIDDEN
    );
    assert_eq!(
        status_of(AppError::NotFound("x".into())),
        StatusCode::NOT_FOUND
    );
    assert_eq!(
        status_of(AppError::Conflict("x".into())),
        StatusCode::CONFLICT
    );
}

#[test]
fn repository_not_found_is_404() {
    assert_eq!(
        status_of(AppError::Database(RepositoryError::NotFound)),
        StatusCode::NOT_FOUND
    );
}

#[test]
fn query_timeout_is_504_with_its_own_code() {
    let err = AppError::Database(RepositoryError::Timeout);
    assert_eq!(err.error_code(), ErrorCode::UpstreamTimeout);
    assert_eq!(status_of(err), StatusCode::GATEWAY_TIMEOUT);
}

#[test]
fn oversize_upload_is_400_payload_too_large() {
    let err = AppError::Storage(StorageError::TooLarge {
        limit_bytes: MAX_IMAGE_BYTES,
    });
    assert_eq!(err.error_code(), ErrorCode::PayloadTooLarge);
    assert_eq!(status_of(err), StatusCode::BAD_REQUEST);
}

#[test]
fn internal_details_are_not_leaked() {
    let response = AppError::Internal("password hash column corrupt".into()).into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    // The body is built from the client message, which for internal errors
    // is a fixed string; the detailed message stays in logs/Sentry only.
    // (Serialization is covered in the server crate's unit tests.)
}

#[test]
fn error_codes_serialize_snake_case() {
    assert_eq!(
        serde_json::to_string(&ErrorCode::UpstreamTimeout).expect("serialize"),
        "\"upstream_timeout\""
    );
    assert_eq!(
        serde_json::to_string(&ErrorCode::PayloadTooLarge).expect("serialize"),
        "\"payload_too_large\""
    );
}
