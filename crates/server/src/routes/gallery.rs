//! Gallery route handlers.

use axum::{extract::State, response::IntoResponse};

use crate::db;
use crate::error::Result;
use crate::state::AppState;

use super::data;

/// List gallery items in display order.
pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let items = db::gallery::list_all(state.pool()).await?;
    Ok(data(items))
}
