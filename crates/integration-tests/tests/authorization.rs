//! Authorization checks that run above the repository layer.
//!
//! The status-change permission check fires before any query, so the
//! handlers can be driven directly with a lazily-connected pool.

use axum::{
    Json,
    extract::{Path, State},
};

use maru_core::{UserId, UserRole};
use maru_integration_tests::test_state;
use maru_server::error::AppError;
use maru_server::middleware::RequireAuth;
use maru_server::models::CurrentUser;
use maru_server::routes::rentals::{UpdateRequestBody, update_request};
use maru_server::routes::reviews::{CreateReviewBody, create as create_review};

fn customer() -> CurrentUser {
    CurrentUser {
        id: UserId::new(7),
        email: "jiyoon@example.com".to_string(),
        display_name: "Kim Jiyoon".to_string(),
        role: UserRole::User,
    }
}

#[tokio::test]
async fn non_admin_cannot_change_status() {
    let body = UpdateRequestBody {
        name: None,
        phone: None,
        message: None,
        preferred_date: None,
        status: Some("approved".to_string()),
    };

    let result = update_request(
        RequireAuth(customer()),
        State(test_state()),
        Path(1),
        Json(body),
    )
    .await;

    match result {
        Err(AppError::Forbidden(msg)) => {
            assert!(msg.contains("administrators"), "got: {msg}");
        }
        Err(other) => panic!("expected Forbidden, got {other}"),
        Ok(_) => panic!("expected Forbidden, got success"),
    }
}

#[tokio::test]
async fn owner_edit_still_validates_contact_fields() {
    // No status in the body routes to the owner-edit path, which requires
    // name and phone before it consults the database.
    let body = UpdateRequestBody {
        name: None,
        phone: None,
        message: Some("please call after 6pm".to_string()),
        preferred_date: None,
        status: None,
    };

    let result = update_request(
        RequireAuth(customer()),
        State(test_state()),
        Path(1),
        Json(body),
    )
    .await;

    match result {
        Err(AppError::BadRequest(msg)) => assert_eq!(msg, "name is required"),
        Err(other) => panic!("expected BadRequest, got {other}"),
        Ok(_) => panic!("expected BadRequest, got success"),
    }
}

#[tokio::test]
async fn review_rating_must_be_one_to_five() {
    for rating in [Some(0), Some(6), Some(-3), None] {
        let body = CreateReviewBody {
            rating,
            title: None,
            body: Some("Sturdy and beautiful.".to_string()),
        };

        let result = create_review(
            RequireAuth(customer()),
            State(test_state()),
            Path("stool-60".to_string()),
            Json(body),
        )
        .await;

        assert!(
            matches!(result, Err(AppError::BadRequest(_))),
            "rating {rating:?} should be rejected"
        );
    }
}

#[tokio::test]
async fn admin_rejects_unknown_status_values() {
    let admin = CurrentUser {
        role: UserRole::Admin,
        ..customer()
    };

    let body = UpdateRequestBody {
        name: None,
        phone: None,
        message: None,
        preferred_date: None,
        status: Some("done".to_string()),
    };

    let result = update_request(
        RequireAuth(admin),
        State(test_state()),
        Path(1),
        Json(body),
    )
    .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
}
