//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type that captures server errors to Sentry
//! before responding to the client. All route handlers return
//! `Result<T, AppError>`, and every error response uses the same JSON
//! envelope: `{ "error": { "code": ..., "message": ... } }`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::db::RepositoryError;
use crate::services::auth::AuthError;
use crate::services::payments::PaymentError;
use crate::services::storage::StorageError;

/// Machine-readable error codes returned to clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    Validation,
    Unauthorized,
    Forbidden,
    NotFound,
    Conflict,
    PayloadTooLarge,
    RateLimited,
    UpstreamTimeout,
    Internal,
}

/// The JSON error envelope body.
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    pub error: ErrorBody,
}

/// The inner error object of the envelope.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: ErrorCode,
    pub message: String,
}

/// Application-level error type for the server.
#[derive(Debug, Error)]
pub enum AppError {
    /// Database operation failed.
    #[error("Database error: {0}")]
    Database(#[from] RepositoryError),

    /// Authentication operation failed.
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    /// File storage operation failed.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Payment operation failed.
    #[error("Payment error: {0}")]
    Payment(#[from] PaymentError),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// User is not authenticated.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// User is authenticated but lacks permission.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Bad request from client.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Request conflicts with current state (e.g., illegal status transition).
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// The HTTP status code this error maps to.
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Database(err) => match err {
                RepositoryError::NotFound => StatusCode::NOT_FOUND,
                RepositoryError::Conflict(_) => StatusCode::CONFLICT,
                RepositoryError::Timeout => StatusCode::GATEWAY_TIMEOUT,
                RepositoryError::Database(_) | RepositoryError::DataCorruption(_) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            },
            Self::Auth(err) => match err {
                AuthError::InvalidCredentials => StatusCode::UNAUTHORIZED,
                AuthError::UserAlreadyExists => StatusCode::CONFLICT,
                AuthError::WeakPassword(_) | AuthError::InvalidEmail(_) => StatusCode::BAD_REQUEST,
                AuthError::Repository(_) | AuthError::PasswordHash => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            },
            Self::Storage(err) => match err {
                StorageError::TooLarge { .. }
                | StorageError::UnsupportedType(_)
                | StorageError::InvalidFilename(_) => StatusCode::BAD_REQUEST,
                StorageError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::Payment(PaymentError::NotPayable { .. }) => StatusCode::CONFLICT,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The machine-readable code for the envelope.
    #[must_use]
    pub fn error_code(&self) -> ErrorCode {
        match self {
            Self::Database(err) => match err {
                RepositoryError::NotFound => ErrorCode::NotFound,
                RepositoryError::Conflict(_) => ErrorCode::Conflict,
                RepositoryError::Timeout => ErrorCode::UpstreamTimeout,
                RepositoryError::Database(_) | RepositoryError::DataCorruption(_) => {
                    ErrorCode::Internal
                }
            },
            Self::Auth(err) => match err {
                AuthError::InvalidCredentials => ErrorCode::Unauthorized,
                AuthError::UserAlreadyExists => ErrorCode::Conflict,
                AuthError::WeakPassword(_) | AuthError::InvalidEmail(_) => ErrorCode::Validation,
                AuthError::Repository(_) | AuthError::PasswordHash => ErrorCode::Internal,
            },
            Self::Storage(err) => match err {
                StorageError::TooLarge { .. } => ErrorCode::PayloadTooLarge,
                StorageError::UnsupportedType(_) | StorageError::InvalidFilename(_) => {
                    ErrorCode::Validation
                }
                StorageError::Io(_) => ErrorCode::Internal,
            },
            Self::Payment(PaymentError::NotPayable { .. }) => ErrorCode::Conflict,
            Self::NotFound(_) => ErrorCode::NotFound,
            Self::Unauthorized(_) => ErrorCode::Unauthorized,
            Self::Forbidden(_) => ErrorCode::Forbidden,
            Self::BadRequest(_) => ErrorCode::Validation,
            Self::Conflict(_) => ErrorCode::Conflict,
            Self::Internal(_) => ErrorCode::Internal,
        }
    }

    /// The client-facing message. Internal details are never exposed.
    fn client_message(&self) -> String {
        match self {
            Self::Database(err) => match err {
                RepositoryError::NotFound => "Resource not found".to_string(),
                RepositoryError::Conflict(msg) => msg.clone(),
                RepositoryError::Timeout => "The request took too long to complete".to_string(),
                RepositoryError::Database(_) | RepositoryError::DataCorruption(_) => {
                    "Internal server error".to_string()
                }
            },
            Self::Auth(err) => match err {
                AuthError::InvalidCredentials => "Invalid email or password".to_string(),
                AuthError::UserAlreadyExists => {
                    "An account with this email already exists".to_string()
                }
                AuthError::WeakPassword(msg) => msg.clone(),
                AuthError::InvalidEmail(e) => e.to_string(),
                AuthError::Repository(_) | AuthError::PasswordHash => {
                    "Internal server error".to_string()
                }
            },
            Self::Storage(err) => match err {
                StorageError::Io(_) => "Internal server error".to_string(),
                other => other.to_string(),
            },
            Self::Payment(err) => err.to_string(),
            Self::Internal(_) => "Internal server error".to_string(),
            Self::NotFound(msg)
            | Self::Unauthorized(msg)
            | Self::Forbidden(msg)
            | Self::BadRequest(msg)
            | Self::Conflict(msg) => msg.clone(),
        }
    }

    /// Whether this error should be captured to Sentry.
    fn is_server_error(&self) -> bool {
        self.status_code().is_server_error()
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Capture server errors to Sentry before building the response
        if self.is_server_error() {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        let status = self.status_code();
        let body = ErrorEnvelope {
            error: ErrorBody {
                code: self.error_code(),
                message: self.client_message(),
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn get_status(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_app_error_display() {
        let err = AppError::NotFound("brand 'artek'".to_string());
        assert_eq!(err.to_string(), "Not found: brand 'artek'");

        let err = AppError::BadRequest("name is required".to_string());
        assert_eq!(err.to_string(), "Bad request: name is required");
    }

    #[test]
    fn test_app_error_status_codes() {
        assert_eq!(
            get_status(AppError::NotFound("test".to_string())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            get_status(AppError::Unauthorized("test".to_string())),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            get_status(AppError::Forbidden("test".to_string())),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            get_status(AppError::BadRequest("test".to_string())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_status(AppError::Conflict("test".to_string())),
            StatusCode::CONFLICT
        );
        assert_eq!(
            get_status(AppError::Internal("test".to_string())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_repository_errors_map_through() {
        assert_eq!(
            get_status(AppError::Database(RepositoryError::NotFound)),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            get_status(AppError::Database(RepositoryError::Timeout)),
            StatusCode::GATEWAY_TIMEOUT
        );
        assert_eq!(
            AppError::Database(RepositoryError::Timeout).error_code(),
            ErrorCode::UpstreamTimeout
        );
    }

    #[test]
    fn test_storage_limits_are_client_errors() {
        let err = AppError::Storage(StorageError::TooLarge {
            limit_bytes: 5 * 1024 * 1024,
        });
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.error_code(), ErrorCode::PayloadTooLarge);
    }

    #[test]
    fn test_error_envelope_shape() {
        let body = ErrorEnvelope {
            error: ErrorBody {
                code: ErrorCode::Validation,
                message: "rating must be between 1 and 5".to_string(),
            },
        };
        let json = serde_json::to_value(&body).expect("serialize");
        assert_eq!(json["error"]["code"], "validation");
        assert_eq!(json["error"]["message"], "rating must be between 1 and 5");
    }
}
