//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                      - Liveness check
//! GET  /health/ready                - Readiness check (DB ping)
//!
//! # Catalog
//! GET  /api/brands                  - Brand listing
//! GET  /api/brands/{slug}           - Brand detail
//! GET  /api/products                - Published products (?brand=&category=&page=)
//! GET  /api/products/{slug}         - Product detail
//! GET  /api/products/{slug}/reviews - Reviews for a product
//! POST /api/products/{slug}/reviews - Post a review (auth)
//! GET  /api/gallery                 - Gallery items
//! GET  /api/banners                 - Active category banners (?category=, cached)
//! GET  /api/resources               - Downloadable resources
//! POST /api/resources/{id}/download - Count a download, return the file URL
//!
//! # Recycle marketplace
//! GET  /api/recycle                 - Visible listings
//! GET  /api/recycle/{id}            - Listing detail
//! POST /api/recycle                 - Create a listing (auth)
//!
//! # Rentals
//! GET  /api/rentals                 - Available rental items
//! POST /api/rental-requests         - Submit a request (guests allowed)
//! GET  /api/rental-requests         - Own requests (auth)
//! PATCH /api/rental-requests/{id}   - Owner edit / admin status change
//!
//! # Cart & checkout (auth)
//! GET    /api/cart                  - Cart with totals
//! POST   /api/cart/items            - Add product (merges quantities)
//! PATCH  /api/cart/items/{id}       - Set quantity
//! DELETE /api/cart/items/{id}       - Remove line
//! POST   /api/checkout              - Create order from cart (transactional)
//! GET    /api/orders                - Own orders
//! GET    /api/orders/{id}           - Order detail with items
//! POST   /api/orders/{id}/pay       - Simulated Naver Pay approval
//!
//! # Auth
//! POST /api/auth/register           - Register (rate limited)
//! POST /api/auth/login              - Login (rate limited)
//! POST /api/auth/logout             - Logout
//! GET  /api/auth/me                 - Current user
//!
//! # Back-office (admin role)
//! /api/admin/...                    - CRUD for all content, rental-request
//!                                     moderation, image/resource uploads
//! ```
//!
//! Responses use a uniform envelope: `{ "data": ... }` on success,
//! `{ "error": { "code", "message" } }` on failure.

pub mod admin;
pub mod auth;
pub mod banners;
pub mod brands;
pub mod cart;
pub mod gallery;
pub mod orders;
pub mod products;
pub mod recycle;
pub mod rentals;
pub mod resources;
pub mod reviews;

use axum::{
    Json, Router,
    routing::{get, patch, post},
};
use serde::Serialize;

use crate::middleware::auth_rate_limiter;
use crate::state::AppState;

/// The success envelope.
#[derive(Debug, Serialize)]
pub struct DataEnvelope<T> {
    pub data: T,
}

/// Wrap a payload in the `{ "data": ... }` envelope.
pub fn data<T: Serialize>(value: T) -> Json<DataEnvelope<T>> {
    Json(DataEnvelope { data: value })
}

/// Create the storefront routes router.
pub fn storefront_routes() -> Router<AppState> {
    Router::new()
        .route("/api/brands", get(brands::list))
        .route("/api/brands/{slug}", get(brands::show))
        .route("/api/products", get(products::list))
        .route("/api/products/{slug}", get(products::show))
        .route(
            "/api/products/{slug}/reviews",
            get(reviews::list).post(reviews::create),
        )
        .route("/api/gallery", get(gallery::list))
        .route("/api/banners", get(banners::list))
        .route("/api/resources", get(resources::list))
        .route("/api/resources/{id}/download", post(resources::download))
        .route("/api/recycle", get(recycle::list).post(recycle::create))
        .route("/api/recycle/{id}", get(recycle::show))
        .route("/api/rentals", get(rentals::list_items))
        .route(
            "/api/rental-requests",
            get(rentals::my_requests).post(rentals::create_request),
        )
        .route("/api/rental-requests/{id}", patch(rentals::update_request))
        .route("/api/cart", get(cart::show))
        .route("/api/cart/items", post(cart::add_item))
        .route(
            "/api/cart/items/{id}",
            patch(cart::update_item).delete(cart::remove_item),
        )
        .route("/api/checkout", post(orders::checkout))
        .route("/api/orders", get(orders::list))
        .route("/api/orders/{id}", get(orders::show))
        .route("/api/orders/{id}/pay", post(orders::pay))
}

/// Create the auth routes router.
///
/// Login and registration sit behind the strict per-IP rate limiter.
pub fn auth_routes() -> Router<AppState> {
    let limited = Router::new()
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        .layer(auth_rate_limiter());

    Router::new()
        .merge(limited)
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/me", get(auth::me))
}

/// Assemble every application route.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(storefront_routes())
        .merge(auth_routes())
        .nest("/api/admin", admin::router())
}
