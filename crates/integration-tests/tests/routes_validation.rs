//! Router-level contract checks.
//!
//! Each request here is resolved by validation or auth extraction before any
//! database query would run, so the lazily-connected pool is never used.

use axum::{
    body::Body,
    http::{Request, StatusCode, header},
};
use serde_json::{Value, json};
use tower::ServiceExt;

use maru_integration_tests::app;

async fn send(request: Request<Body>) -> (StatusCode, Value) {
    let response = app().oneshot(request).await.expect("infallible");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };
    (status, body)
}

fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

// =============================================================================
// Rental request validation (guest-accessible)
// =============================================================================

#[tokio::test]
async fn rental_request_without_name_is_400() {
    let (status, body) = send(post_json(
        "/api/rental-requests",
        &json!({ "rental_item_id": 1, "phone": "010-1234-5678" }),
    ))
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "validation");
    assert_eq!(body["error"]["message"], "name is required");
}

#[tokio::test]
async fn rental_request_without_phone_is_400() {
    let (status, body) = send(post_json(
        "/api/rental-requests",
        &json!({ "rental_item_id": 1, "name": "Kim Jiyoon" }),
    ))
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["message"], "phone is required");
}

#[tokio::test]
async fn rental_request_with_malformed_phone_is_400() {
    let (status, body) = send(post_json(
        "/api/rental-requests",
        &json!({ "rental_item_id": 1, "name": "Kim Jiyoon", "phone": "call me" }),
    ))
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "validation");
}

#[tokio::test]
async fn rental_request_without_item_is_400() {
    let (status, body) = send(post_json(
        "/api/rental-requests",
        &json!({ "name": "Kim Jiyoon", "phone": "010-1234-5678" }),
    ))
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["message"], "rental_item_id is required");
}

// =============================================================================
// Auth boundaries
// =============================================================================

#[tokio::test]
async fn cart_requires_sign_in() {
    let request = Request::builder()
        .uri("/api/cart")
        .body(Body::empty())
        .expect("request");

    let (status, body) = send(request).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"]["code"], "unauthorized");
}

#[tokio::test]
async fn admin_routes_reject_anonymous_callers() {
    for uri in [
        "/api/admin/brands",
        "/api/admin/products",
        "/api/admin/rental-requests",
    ] {
        let request = Request::builder()
            .uri(uri)
            .body(Body::empty())
            .expect("request");

        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{uri}");
        assert_eq!(body["error"]["code"], "unauthorized", "{uri}");
    }
}

#[tokio::test]
async fn status_change_requires_sign_in() {
    let request = Request::builder()
        .method("PATCH")
        .uri("/api/rental-requests/1")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(json!({ "status": "approved" }).to_string()))
        .expect("request");

    let (status, _) = send(request).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}
