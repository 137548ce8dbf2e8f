//! Authentication route handlers.

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::Deserialize;
use tower_sessions::Session;

use crate::error::{AppError, Result};
use crate::middleware::{RequireAuth, clear_current_user, set_current_user};
use crate::models::CurrentUser;
use crate::services::auth::AuthService;
use crate::state::AppState;

use super::data;

/// Registration body.
#[derive(Debug, Deserialize)]
pub struct RegisterBody {
    pub email: Option<String>,
    pub password: Option<String>,
    pub display_name: Option<String>,
    pub phone: Option<String>,
}

/// Login body.
#[derive(Debug, Deserialize)]
pub struct LoginBody {
    pub email: Option<String>,
    pub password: Option<String>,
}

fn required<'a>(value: Option<&'a String>, field: &str) -> Result<&'a str> {
    value
        .map(String::as_str)
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| AppError::BadRequest(format!("{field} is required")))
}

/// Register a new account and sign it in.
pub async fn register(
    State(state): State<AppState>,
    session: Session,
    Json(body): Json<RegisterBody>,
) -> Result<impl IntoResponse> {
    let email = required(body.email.as_ref(), "email")?;
    let password = required(body.password.as_ref(), "password")?;
    let display_name = required(body.display_name.as_ref(), "display_name")?;

    let auth = AuthService::new(state.pool());
    let user = auth
        .register_with_password(email, password, display_name, body.phone.as_deref())
        .await?;

    let current = CurrentUser::from(&user);
    set_current_user(&session, &current).await?;

    tracing::info!(user_id = %user.id, "account registered");

    Ok((StatusCode::CREATED, data(current)))
}

/// Sign in with email and password.
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(body): Json<LoginBody>,
) -> Result<impl IntoResponse> {
    let email = required(body.email.as_ref(), "email")?;
    let password = required(body.password.as_ref(), "password")?;

    let auth = AuthService::new(state.pool());
    let user = auth.login_with_password(email, password).await?;

    // A fresh session id on login limits fixation
    session
        .cycle_id()
        .await
        .map_err(|e| AppError::Internal(format!("session cycle failed: {e}")))?;

    let current = CurrentUser::from(&user);
    set_current_user(&session, &current).await?;

    Ok(data(current))
}

/// Sign out.
pub async fn logout(session: Session) -> Result<impl IntoResponse> {
    clear_current_user(&session).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// The signed-in user.
pub async fn me(RequireAuth(user): RequireAuth) -> Result<impl IntoResponse> {
    Ok(data(user))
}
