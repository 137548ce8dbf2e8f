//! Database operations for rental items and rental requests.
//!
//! Status transitions are guarded with a `WHERE status = $expected` clause so
//! two administrators acting at once cannot double-apply a decision; the
//! loser of the race simply matches zero rows.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::PgPool;

use maru_core::{ProductId, RentalItemId, RentalRequestId, RequestStatus, UserId};

use super::RepositoryError;
use crate::models::{RentalItem, RentalRequest};

const ITEM_COLUMNS: &str = "id, product_id, monthly_fee, deposit, min_months, is_available, \
                            created_at";

const REQUEST_COLUMNS: &str = "id, rental_item_id, requester_id, name, phone, message, \
                               preferred_date, status, decided_by, decided_at, created_at, \
                               updated_at";

/// Parameters for creating or replacing a rental item.
#[derive(Debug, Clone)]
pub struct RentalItemParams {
    pub product_id: ProductId,
    pub monthly_fee: Decimal,
    pub deposit: Decimal,
    pub min_months: i32,
    pub is_available: bool,
}

/// Parameters for submitting a rental request.
#[derive(Debug, Clone)]
pub struct CreateRentalRequest {
    pub rental_item_id: RentalItemId,
    /// `None` for guest submissions.
    pub requester_id: Option<UserId>,
    pub name: String,
    pub phone: String,
    pub message: Option<String>,
    pub preferred_date: Option<NaiveDate>,
}

/// Contact fields an owner may edit while the request is `pending`.
#[derive(Debug, Clone)]
pub struct RequestContactParams {
    pub name: String,
    pub phone: String,
    pub message: Option<String>,
    pub preferred_date: Option<NaiveDate>,
}

// =============================================================================
// Rental items
// =============================================================================

/// List items currently offered for rental.
///
/// # Errors
///
/// Returns error if the database query fails.
pub async fn list_available_items(pool: &PgPool) -> Result<Vec<RentalItem>, RepositoryError> {
    let items = sqlx::query_as::<_, RentalItem>(&format!(
        "SELECT {ITEM_COLUMNS} FROM rental_items WHERE is_available ORDER BY created_at DESC"
    ))
    .fetch_all(pool)
    .await?;

    Ok(items)
}

/// List every rental item (back-office).
///
/// # Errors
///
/// Returns error if the database query fails.
pub async fn list_all_items(pool: &PgPool) -> Result<Vec<RentalItem>, RepositoryError> {
    let items = sqlx::query_as::<_, RentalItem>(&format!(
        "SELECT {ITEM_COLUMNS} FROM rental_items ORDER BY created_at DESC"
    ))
    .fetch_all(pool)
    .await?;

    Ok(items)
}

/// Get a rental item by ID.
///
/// # Errors
///
/// Returns error if the database query fails.
pub async fn get_item(
    pool: &PgPool,
    id: RentalItemId,
) -> Result<Option<RentalItem>, RepositoryError> {
    let item = sqlx::query_as::<_, RentalItem>(&format!(
        "SELECT {ITEM_COLUMNS} FROM rental_items WHERE id = $1"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(item)
}

/// Create a rental item.
///
/// # Errors
///
/// Returns error if the database insert fails.
pub async fn create_item(
    pool: &PgPool,
    params: RentalItemParams,
) -> Result<RentalItem, RepositoryError> {
    let item = sqlx::query_as::<_, RentalItem>(&format!(
        "INSERT INTO rental_items (product_id, monthly_fee, deposit, min_months, is_available)
         VALUES ($1, $2, $3, $4, $5)
         RETURNING {ITEM_COLUMNS}"
    ))
    .bind(params.product_id)
    .bind(params.monthly_fee)
    .bind(params.deposit)
    .bind(params.min_months)
    .bind(params.is_available)
    .fetch_one(pool)
    .await?;

    Ok(item)
}

/// Replace a rental item's fields.
///
/// # Errors
///
/// Returns `NotFound` if the item does not exist.
pub async fn update_item(
    pool: &PgPool,
    id: RentalItemId,
    params: RentalItemParams,
) -> Result<RentalItem, RepositoryError> {
    let item = sqlx::query_as::<_, RentalItem>(&format!(
        "UPDATE rental_items
         SET product_id = $2, monthly_fee = $3, deposit = $4, min_months = $5, is_available = $6
         WHERE id = $1
         RETURNING {ITEM_COLUMNS}"
    ))
    .bind(id)
    .bind(params.product_id)
    .bind(params.monthly_fee)
    .bind(params.deposit)
    .bind(params.min_months)
    .bind(params.is_available)
    .fetch_optional(pool)
    .await?;

    item.ok_or(RepositoryError::NotFound)
}

/// Delete a rental item.
///
/// # Errors
///
/// Returns `NotFound` if the item does not exist.
pub async fn delete_item(pool: &PgPool, id: RentalItemId) -> Result<(), RepositoryError> {
    let result = sqlx::query("DELETE FROM rental_items WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(RepositoryError::NotFound);
    }

    Ok(())
}

// =============================================================================
// Rental requests
// =============================================================================

/// Create a rental request. New requests always start `pending`.
///
/// # Errors
///
/// Returns error if the database insert fails.
pub async fn create_request(
    pool: &PgPool,
    params: CreateRentalRequest,
) -> Result<RentalRequest, RepositoryError> {
    let request = sqlx::query_as::<_, RentalRequest>(&format!(
        "INSERT INTO rental_requests
             (rental_item_id, requester_id, name, phone, message, preferred_date)
         VALUES ($1, $2, $3, $4, $5, $6)
         RETURNING {REQUEST_COLUMNS}"
    ))
    .bind(params.rental_item_id)
    .bind(params.requester_id)
    .bind(&params.name)
    .bind(&params.phone)
    .bind(&params.message)
    .bind(params.preferred_date)
    .fetch_one(pool)
    .await?;

    Ok(request)
}

/// Get a rental request by ID.
///
/// # Errors
///
/// Returns error if the database query fails.
pub async fn get_request(
    pool: &PgPool,
    id: RentalRequestId,
) -> Result<Option<RentalRequest>, RepositoryError> {
    let request = sqlx::query_as::<_, RentalRequest>(&format!(
        "SELECT {REQUEST_COLUMNS} FROM rental_requests WHERE id = $1"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(request)
}

/// List a customer's own requests, newest first.
///
/// # Errors
///
/// Returns error if the database query fails.
pub async fn list_requests_for(
    pool: &PgPool,
    requester_id: UserId,
) -> Result<Vec<RentalRequest>, RepositoryError> {
    let requests = sqlx::query_as::<_, RentalRequest>(&format!(
        "SELECT {REQUEST_COLUMNS} FROM rental_requests
         WHERE requester_id = $1
         ORDER BY created_at DESC"
    ))
    .bind(requester_id)
    .fetch_all(pool)
    .await?;

    Ok(requests)
}

/// List requests for the back-office, optionally filtered by status.
///
/// # Errors
///
/// Returns error if the database query fails.
pub async fn list_requests(
    pool: &PgPool,
    status: Option<RequestStatus>,
) -> Result<Vec<RentalRequest>, RepositoryError> {
    let requests = sqlx::query_as::<_, RentalRequest>(&format!(
        "SELECT {REQUEST_COLUMNS} FROM rental_requests
         WHERE ($1 IS NULL OR status = $1)
         ORDER BY created_at DESC"
    ))
    .bind(status)
    .fetch_all(pool)
    .await?;

    Ok(requests)
}

/// Update the contact fields of a `pending` request owned by `requester_id`.
///
/// Returns `None` when no row matched - the request may not exist, may
/// belong to someone else, or may have left `pending`; the caller
/// disambiguates.
///
/// # Errors
///
/// Returns error if the database update fails.
pub async fn update_request_contact(
    pool: &PgPool,
    id: RentalRequestId,
    requester_id: UserId,
    params: RequestContactParams,
) -> Result<Option<RentalRequest>, RepositoryError> {
    let request = sqlx::query_as::<_, RentalRequest>(&format!(
        "UPDATE rental_requests
         SET name = $3, phone = $4, message = $5, preferred_date = $6, updated_at = NOW()
         WHERE id = $1 AND requester_id = $2 AND status = 'pending'
         RETURNING {REQUEST_COLUMNS}"
    ))
    .bind(id)
    .bind(requester_id)
    .bind(&params.name)
    .bind(&params.phone)
    .bind(&params.message)
    .bind(params.preferred_date)
    .fetch_optional(pool)
    .await?;

    Ok(request)
}

/// Apply a status transition, guarded on the expected current status.
///
/// Returns `None` when the request was not in `from` (lost race or illegal
/// call) or does not exist.
///
/// # Errors
///
/// Returns error if the database update fails.
pub async fn transition_request(
    pool: &PgPool,
    id: RentalRequestId,
    from: RequestStatus,
    to: RequestStatus,
    decided_by: UserId,
) -> Result<Option<RentalRequest>, RepositoryError> {
    let request = sqlx::query_as::<_, RentalRequest>(&format!(
        "UPDATE rental_requests
         SET status = $3, decided_by = $4, decided_at = NOW(), updated_at = NOW()
         WHERE id = $1 AND status = $2
         RETURNING {REQUEST_COLUMNS}"
    ))
    .bind(id)
    .bind(from)
    .bind(to)
    .bind(decided_by)
    .fetch_optional(pool)
    .await?;

    Ok(request)
}
