//! Authentication extractors.
//!
//! Route handlers declare their auth requirement by extractor:
//! [`RequireAuth`] for any signed-in user, [`RequireAdmin`] for back-office
//! routes, [`OptionalAuth`] where guests are fine (e.g., rental requests).

use axum::{extract::FromRequestParts, http::request::Parts};
use tower_sessions::Session;

use crate::error::AppError;
use crate::models::{CurrentUser, session_keys};

/// Extractor that requires a signed-in user.
///
/// # Example
///
/// ```rust,ignore
/// async fn my_requests(
///     RequireAuth(user): RequireAuth,
/// ) -> impl IntoResponse {
///     format!("Hello, {}!", user.display_name)
/// }
/// ```
pub struct RequireAuth(pub CurrentUser);

impl<S> FromRequestParts<S> for RequireAuth
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let user = current_user(parts, state).await?;
        user.map(Self)
            .ok_or_else(|| AppError::Unauthorized("sign in required".to_string()))
    }
}

/// Extractor that requires an administrator.
///
/// Unauthenticated requests get 401; signed-in non-admins get 403.
pub struct RequireAdmin(pub CurrentUser);

impl<S> FromRequestParts<S> for RequireAdmin
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let user = current_user(parts, state)
            .await?
            .ok_or_else(|| AppError::Unauthorized("sign in required".to_string()))?;

        if !user.is_admin() {
            return Err(AppError::Forbidden(
                "administrator access required".to_string(),
            ));
        }

        Ok(Self(user))
    }
}

/// Extractor that optionally gets the current user.
///
/// Unlike [`RequireAuth`], this never rejects the request.
pub struct OptionalAuth(pub Option<CurrentUser>);

impl<S> FromRequestParts<S> for OptionalAuth
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(current_user(parts, state).await?))
    }
}

/// Read the current user out of the session, if any.
async fn current_user<S>(parts: &mut Parts, _state: &S) -> Result<Option<CurrentUser>, AppError>
where
    S: Send + Sync,
{
    // The session is placed in extensions by SessionManagerLayer
    let Some(session) = parts.extensions.get::<Session>() else {
        return Ok(None);
    };

    let user = session
        .get::<CurrentUser>(session_keys::CURRENT_USER)
        .await
        .map_err(|e| AppError::Internal(format!("session read failed: {e}")))?;

    Ok(user)
}

/// Write the current user into the session after login/registration.
///
/// # Errors
///
/// Returns `AppError::Internal` if the session store write fails.
pub async fn set_current_user(session: &Session, user: &CurrentUser) -> Result<(), AppError> {
    session
        .insert(session_keys::CURRENT_USER, user)
        .await
        .map_err(|e| AppError::Internal(format!("session write failed: {e}")))
}

/// Drop the session on logout.
///
/// # Errors
///
/// Returns `AppError::Internal` if the session store delete fails.
pub async fn clear_current_user(session: &Session) -> Result<(), AppError> {
    session
        .delete()
        .await
        .map_err(|e| AppError::Internal(format!("session delete failed: {e}")))
}
