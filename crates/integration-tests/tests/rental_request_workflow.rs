//! Tests for the rental-request status workflow.
//!
//! These verify the transition rules without requiring a database; the
//! repository enforces the same rules again with a guarded UPDATE.

use maru_core::RequestStatus;

// =============================================================================
// Transition Rules
// =============================================================================

/// Valid transitions:
/// Pending -> Approved -> Completed
/// Pending -> Rejected -> Pending (admin reopen)
#[test]
fn test_valid_transitions() {
    let valid = [
        (RequestStatus::Pending, RequestStatus::Approved),
        (RequestStatus::Pending, RequestStatus::Rejected),
        (RequestStatus::Approved, RequestStatus::Completed),
        (RequestStatus::Rejected, RequestStatus::Pending),
    ];

    for (from, to) in valid {
        assert!(
            from.can_transition_to(to),
            "{from} -> {to} should be allowed"
        );
    }
}

#[test]
fn test_invalid_transitions() {
    let invalid = [
        (RequestStatus::Pending, RequestStatus::Completed), // must approve first
        (RequestStatus::Approved, RequestStatus::Rejected), // no late rejection
        (RequestStatus::Approved, RequestStatus::Pending),  // no un-approving
        (RequestStatus::Rejected, RequestStatus::Approved), // reopen, then approve
        (RequestStatus::Rejected, RequestStatus::Completed),
    ];

    for (from, to) in invalid {
        assert!(
            !from.can_transition_to(to),
            "{from} -> {to} should be rejected"
        );
    }
}

// =============================================================================
// Terminal State
// =============================================================================

/// Completed requests are closed for good: no transition out, in any
/// direction, for any caller.
#[test]
fn test_completed_is_terminal() {
    assert!(RequestStatus::Completed.is_terminal());

    for to in [
        RequestStatus::Pending,
        RequestStatus::Approved,
        RequestStatus::Rejected,
        RequestStatus::Completed,
    ] {
        assert!(
            !RequestStatus::Completed.can_transition_to(to),
            "completed -> {to} should be rejected"
        );
    }
}

#[test]
fn test_non_terminal_states_have_an_exit() {
    let all = [
        RequestStatus::Pending,
        RequestStatus::Approved,
        RequestStatus::Rejected,
        RequestStatus::Completed,
    ];

    for from in [
        RequestStatus::Pending,
        RequestStatus::Approved,
        RequestStatus::Rejected,
    ] {
        assert!(!from.is_terminal());
        assert!(
            all.iter().any(|&to| from.can_transition_to(to)),
            "{from} should have at least one legal transition"
        );
    }
}

// =============================================================================
// Wire Format
// =============================================================================

#[test]
fn test_status_serializes_lowercase() {
    for (status, expected) in [
        (RequestStatus::Pending, "\"pending\""),
        (RequestStatus::Approved, "\"approved\""),
        (RequestStatus::Rejected, "\"rejected\""),
        (RequestStatus::Completed, "\"completed\""),
    ] {
        assert_eq!(serde_json::to_string(&status).expect("serialize"), expected);
    }
}

#[test]
fn test_status_parses_from_query_strings() {
    assert_eq!(
        "approved".parse::<RequestStatus>().expect("parse"),
        RequestStatus::Approved
    );
    assert!("APPROVED".parse::<RequestStatus>().is_err());
    assert!("done".parse::<RequestStatus>().is_err());
}
