//! Back-office route handlers.
//!
//! Every handler takes the [`RequireAdmin`](crate::middleware::RequireAdmin)
//! extractor: unauthenticated callers get 401, signed-in non-admins 403.
//! List endpoints wrap their queries in
//! [`db::with_timeout`](crate::db::with_timeout) so a slow database cannot
//! hang the dashboard.

pub mod banners;
pub mod brands;
pub mod gallery;
pub mod products;
pub mod recycle;
pub mod rentals;
pub mod resources;
pub mod uploads;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{delete, get, patch, post, put},
};

use crate::services::storage::MAX_RESOURCE_BYTES;
use crate::state::AppState;

/// Slack for multipart framing on top of the largest accepted file.
const UPLOAD_BODY_LIMIT: usize = MAX_RESOURCE_BYTES + 1024 * 1024;

/// Create the back-office router (nested under `/api/admin`).
pub fn router() -> Router<AppState> {
    let uploads = Router::new()
        .route("/uploads/images", post(uploads::upload_image))
        .route("/uploads/resources", post(uploads::upload_resource))
        .route("/uploads/{filename}", delete(uploads::delete_file))
        .layer(DefaultBodyLimit::max(UPLOAD_BODY_LIMIT));

    Router::new()
        .route("/brands", get(brands::list).post(brands::create))
        .route("/brands/{id}", put(brands::update).delete(brands::delete))
        .route("/products", get(products::list).post(products::create))
        .route(
            "/products/{id}",
            put(products::update).delete(products::delete),
        )
        .route("/gallery", get(gallery::list).post(gallery::create))
        .route(
            "/gallery/{id}",
            put(gallery::update).delete(gallery::delete),
        )
        .route("/banners", get(banners::list).post(banners::create))
        .route(
            "/banners/{id}",
            put(banners::update).delete(banners::delete),
        )
        .route("/resources", get(resources::list).post(resources::create))
        .route(
            "/resources/{id}",
            put(resources::update).delete(resources::delete),
        )
        .route("/recycle", get(recycle::list))
        .route("/recycle/{id}", delete(recycle::delete))
        .route("/recycle/{id}/status", patch(recycle::set_status))
        .route(
            "/rental-items",
            get(rentals::list_items).post(rentals::create_item),
        )
        .route(
            "/rental-items/{id}",
            put(rentals::update_item).delete(rentals::delete_item),
        )
        .route("/rental-requests", get(rentals::list_requests))
        .route("/rental-requests/{id}/approve", post(rentals::approve))
        .route("/rental-requests/{id}/reject", post(rentals::reject))
        .route("/rental-requests/{id}/complete", post(rentals::complete))
        .route("/rental-requests/{id}/reopen", post(rentals::reopen))
        .merge(uploads)
}
