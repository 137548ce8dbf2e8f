//! Rental route handlers: item browsing, request submission, owner edits,
//! and (for administrators) in-place status changes.
//!
//! Who may do what:
//! - anyone, including guests, may submit a request (`name` and `phone`
//!   are mandatory - they are the follow-up channel)
//! - a signed-in owner may edit the contact fields of their own request
//!   while it is still `pending`
//! - only administrators may touch `status`, and only along the legal
//!   transitions of [`RequestStatus`]

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::NaiveDate;
use serde::Deserialize;

use maru_core::{PhoneNumber, RentalItemId, RentalRequestId, RequestStatus};

use crate::db::{self, rentals::CreateRentalRequest, rentals::RequestContactParams};
use crate::error::{AppError, Result};
use crate::middleware::{OptionalAuth, RequireAuth};
use crate::models::CurrentUser;
use crate::state::AppState;

use super::data;

/// Body for submitting a rental request.
#[derive(Debug, Deserialize)]
pub struct CreateRequestBody {
    pub rental_item_id: Option<i32>,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub message: Option<String>,
    pub preferred_date: Option<NaiveDate>,
}

/// Body for updating a rental request.
///
/// `status` is only honoured for administrators; everyone else gets 403 for
/// even naming it.
#[derive(Debug, Deserialize)]
pub struct UpdateRequestBody {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub message: Option<String>,
    pub preferred_date: Option<NaiveDate>,
    pub status: Option<String>,
}

/// Validate the mandatory contact fields shared by create and update.
fn contact_fields(
    name: Option<String>,
    phone: Option<String>,
) -> Result<(String, PhoneNumber)> {
    let name = name
        .map(|n| n.trim().to_owned())
        .filter(|n| !n.is_empty())
        .ok_or_else(|| AppError::BadRequest("name is required".to_string()))?;

    let phone = phone
        .filter(|p| !p.trim().is_empty())
        .ok_or_else(|| AppError::BadRequest("phone is required".to_string()))?;
    let phone = PhoneNumber::parse(&phone)
        .map_err(|e| AppError::BadRequest(format!("invalid phone: {e}")))?;

    Ok((name, phone))
}

/// List items currently offered for rental.
pub async fn list_items(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let items = db::rentals::list_available_items(state.pool()).await?;
    Ok(data(items))
}

/// Submit a rental request. Guests are welcome; the request is tied to the
/// account only when one is signed in.
pub async fn create_request(
    OptionalAuth(user): OptionalAuth,
    State(state): State<AppState>,
    Json(body): Json<CreateRequestBody>,
) -> Result<impl IntoResponse> {
    let (name, phone) = contact_fields(body.name, body.phone)?;

    let item_id = body
        .rental_item_id
        .ok_or_else(|| AppError::BadRequest("rental_item_id is required".to_string()))?;
    let item_id = RentalItemId::new(item_id);

    let item = db::rentals::get_item(state.pool(), item_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("rental item {item_id} not found")))?;
    if !item.is_available {
        return Err(AppError::Conflict(
            "this item is not currently offered for rental".to_string(),
        ));
    }

    let request = db::rentals::create_request(
        state.pool(),
        CreateRentalRequest {
            rental_item_id: item_id,
            requester_id: user.map(|u| u.id),
            name,
            phone: phone.as_str().to_owned(),
            message: body.message,
            preferred_date: body.preferred_date,
        },
    )
    .await?;

    Ok((StatusCode::CREATED, data(request)))
}

/// List the signed-in user's own requests.
pub async fn my_requests(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
) -> Result<impl IntoResponse> {
    let requests = db::rentals::list_requests_for(state.pool(), user.id).await?;
    Ok(data(requests))
}

/// Update a rental request.
///
/// Two distinct operations share this endpoint, as they did in the original
/// application: owners editing their contact details, and administrators
/// moving the status along the workflow.
pub async fn update_request(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(body): Json<UpdateRequestBody>,
) -> Result<impl IntoResponse> {
    let id = RentalRequestId::new(id);

    if let Some(status) = body.status {
        return transition_by_admin(&user, &state, id, &status).await;
    }

    update_contact_by_owner(&user, &state, id, body).await
}

/// Admin path: move the request's status.
async fn transition_by_admin(
    user: &CurrentUser,
    state: &AppState,
    id: RentalRequestId,
    status: &str,
) -> Result<axum::response::Response> {
    if !user.is_admin() {
        return Err(AppError::Forbidden(
            "only administrators may change request status".to_string(),
        ));
    }

    let to: RequestStatus = status.parse().map_err(AppError::BadRequest)?;

    let request = apply_transition(state, id, to, user).await?;
    Ok(data(request).into_response())
}

/// Owner path: edit contact fields of an own, still-pending request.
async fn update_contact_by_owner(
    user: &CurrentUser,
    state: &AppState,
    id: RentalRequestId,
    body: UpdateRequestBody,
) -> Result<axum::response::Response> {
    let (name, phone) = contact_fields(body.name, body.phone)?;

    let updated = db::rentals::update_request_contact(
        state.pool(),
        id,
        user.id,
        RequestContactParams {
            name,
            phone: phone.as_str().to_owned(),
            message: body.message,
            preferred_date: body.preferred_date,
        },
    )
    .await?;

    if let Some(request) = updated {
        return Ok(data(request).into_response());
    }

    // Zero rows matched: work out which refusal this is.
    let request = db::rentals::get_request(state.pool(), id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("rental request {id} not found")))?;

    if request.requester_id != Some(user.id) {
        return Err(AppError::Forbidden(
            "you may only edit your own requests".to_string(),
        ));
    }

    Err(AppError::Conflict(format!(
        "request is {} and can no longer be edited",
        request.status
    )))
}

/// Shared transition application with legality check and guarded update.
///
/// Also used by the back-office action endpoints.
pub(crate) async fn apply_transition(
    state: &AppState,
    id: RentalRequestId,
    to: RequestStatus,
    admin: &CurrentUser,
) -> Result<crate::models::RentalRequest> {
    let request = db::rentals::get_request(state.pool(), id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("rental request {id} not found")))?;

    let from = request.status;
    if !from.can_transition_to(to) {
        return Err(AppError::Conflict(format!(
            "cannot move request from {from} to {to}"
        )));
    }

    let updated = db::rentals::transition_request(state.pool(), id, from, to, admin.id).await?;

    // None here means another admin got there first.
    updated.ok_or_else(|| {
        AppError::Conflict("request status changed concurrently; reload and retry".to_string())
    })
}
