//! Back-office rental management: item CRUD, request listing, and the
//! status workflow actions.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use rust_decimal::Decimal;
use serde::Deserialize;

use maru_core::{ProductId, RentalItemId, RentalRequestId, RequestStatus};

use crate::db::{self, rentals::RentalItemParams, with_timeout};
use crate::error::{AppError, Result};
use crate::middleware::RequireAdmin;
use crate::models::CurrentUser;
use crate::routes::{data, rentals::apply_transition};
use crate::state::AppState;

/// Body for creating or replacing a rental item.
#[derive(Debug, Deserialize)]
pub struct RentalItemBody {
    pub product_id: Option<i32>,
    pub monthly_fee: Option<Decimal>,
    pub deposit: Option<Decimal>,
    pub min_months: Option<i32>,
    #[serde(default = "default_available")]
    pub is_available: bool,
}

const fn default_available() -> bool {
    true
}

impl RentalItemBody {
    fn into_params(self) -> Result<RentalItemParams> {
        let product_id = self
            .product_id
            .ok_or_else(|| AppError::BadRequest("product_id is required".to_string()))?;

        let monthly_fee = self
            .monthly_fee
            .ok_or_else(|| AppError::BadRequest("monthly_fee is required".to_string()))?;
        let deposit = self.deposit.unwrap_or(Decimal::ZERO);
        if monthly_fee < Decimal::ZERO || deposit < Decimal::ZERO {
            return Err(AppError::BadRequest(
                "fees cannot be negative".to_string(),
            ));
        }

        let min_months = self.min_months.unwrap_or(1);
        if min_months < 1 {
            return Err(AppError::BadRequest(
                "min_months must be at least 1".to_string(),
            ));
        }

        Ok(RentalItemParams {
            product_id: ProductId::new(product_id),
            monthly_fee,
            deposit,
            min_months,
            is_available: self.is_available,
        })
    }
}

/// Request-list query parameters.
#[derive(Debug, Deserialize)]
pub struct RequestListQuery {
    pub status: Option<String>,
}

// =============================================================================
// Rental items
// =============================================================================

/// List every rental item.
pub async fn list_items(
    RequireAdmin(_): RequireAdmin,
    State(state): State<AppState>,
) -> Result<impl IntoResponse> {
    let items = with_timeout(db::rentals::list_all_items(state.pool())).await?;
    Ok(data(items))
}

/// Create a rental item.
pub async fn create_item(
    RequireAdmin(_): RequireAdmin,
    State(state): State<AppState>,
    Json(body): Json<RentalItemBody>,
) -> Result<impl IntoResponse> {
    let params = body.into_params()?;

    db::products::get(state.pool(), params.product_id)
        .await?
        .ok_or_else(|| AppError::BadRequest(format!("product {} not found", params.product_id)))?;

    let item = db::rentals::create_item(state.pool(), params).await?;
    Ok((StatusCode::CREATED, data(item)))
}

/// Replace a rental item.
pub async fn update_item(
    RequireAdmin(_): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(body): Json<RentalItemBody>,
) -> Result<impl IntoResponse> {
    let params = body.into_params()?;

    db::products::get(state.pool(), params.product_id)
        .await?
        .ok_or_else(|| AppError::BadRequest(format!("product {} not found", params.product_id)))?;

    let item = db::rentals::update_item(state.pool(), RentalItemId::new(id), params).await?;
    Ok(data(item))
}

/// Delete a rental item.
pub async fn delete_item(
    RequireAdmin(_): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse> {
    db::rentals::delete_item(state.pool(), RentalItemId::new(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
// Rental requests
// =============================================================================

/// List requests, optionally filtered by status.
pub async fn list_requests(
    RequireAdmin(_): RequireAdmin,
    State(state): State<AppState>,
    Query(query): Query<RequestListQuery>,
) -> Result<impl IntoResponse> {
    let status = query
        .status
        .map(|s| s.parse::<RequestStatus>())
        .transpose()
        .map_err(AppError::BadRequest)?;

    let requests = with_timeout(db::rentals::list_requests(state.pool(), status)).await?;
    Ok(data(requests))
}

async fn act(
    admin: &CurrentUser,
    state: &AppState,
    id: i32,
    to: RequestStatus,
) -> Result<Json<crate::routes::DataEnvelope<crate::models::RentalRequest>>> {
    let request = apply_transition(state, RentalRequestId::new(id), to, admin).await?;
    Ok(data(request))
}

/// `pending` -> `approved`.
pub async fn approve(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse> {
    act(&admin, &state, id, RequestStatus::Approved).await
}

/// `pending` -> `rejected`.
pub async fn reject(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse> {
    act(&admin, &state, id, RequestStatus::Rejected).await
}

/// `approved` -> `completed`.
pub async fn complete(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse> {
    act(&admin, &state, id, RequestStatus::Completed).await
}

/// `rejected` -> `pending` (give a declined request another look).
pub async fn reopen(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse> {
    act(&admin, &state, id, RequestStatus::Pending).await
}
