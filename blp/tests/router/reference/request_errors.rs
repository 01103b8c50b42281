use blp::json::JsonMessage;
use blp::{BlpError, Event, EventKind, Options, RequestKind};
use blp_mock::{INVALID, fixtures};
use serde_json::json;

use crate::helpers::{IBM, connected, disconnected};

#[test]
fn unknown_security_fails_the_whole_batch() {
    let (mut svc, _) = connected();
    let err = svc
        .point_lookup([IBM, INVALID], "PX_LAST", &Options::new())
        .unwrap_err();
    let BlpError::Request { payload } = err else {
        panic!("expected request error, got {err:?}");
    };
    assert!(payload.starts_with("securityError = {"));
    assert!(payload.contains(INVALID));
}

#[test]
fn unknown_field_fails_with_the_field_exceptions() {
    let (mut svc, _) = connected();
    let err = svc
        .point_lookup(IBM, ["PX_LAST", "NOT_A_FIELD"], &Options::new())
        .unwrap_err();
    let BlpError::Request { payload } = err else {
        panic!("expected request error, got {err:?}");
    };
    assert!(payload.starts_with("fieldExceptions[] = {"));
    assert!(payload.contains("NOT_A_FIELD"));
}

#[test]
fn service_is_usable_after_a_failed_request() {
    let (mut svc, _) = connected();
    // the error arrives in a partial event; the unread rest is dropped on the next send
    let err = svc
        .bulk_lookup([INVALID, IBM], "DVD_HIST_ALL", &Options::new())
        .unwrap_err();
    assert!(err.is_request());

    let t = svc.point_lookup(IBM, "PX_LAST", &Options::new()).unwrap();
    assert_eq!(t.height(), 1);
}

#[test]
fn errors_in_unrelated_message_types_are_fatal() {
    let (mut svc, controller) = connected();
    let mut events = vec![Event::new(
        EventKind::PartialResponse,
        vec![JsonMessage::new(
            "RequestFailure",
            json!({"responseError": {"category": "LIMIT", "message": "daily capacity reached"}}),
        )],
    )];
    events.extend(fixtures::frame(
        RequestKind::ReferenceData,
        vec![json!({"securityData": [{"security": IBM, "fieldData": {"PX_LAST": 1.0}}]})],
    ));
    controller.script(events);

    let err = svc.point_lookup(IBM, "PX_LAST", &Options::new()).unwrap_err();
    assert!(matches!(err, BlpError::Request { ref payload } if payload.contains("LIMIT")));
}

#[test]
fn empty_inputs_are_rejected_before_sending() {
    let (mut svc, controller) = connected();
    let none: Vec<&str> = Vec::new();
    let err = svc.point_lookup(none, "PX_LAST", &Options::new()).unwrap_err();
    assert!(matches!(err, BlpError::InvalidArg(_)));
    assert!(controller.sent_requests().is_empty());
}

#[test]
fn lookups_require_a_connection() {
    let (mut svc, controller) = disconnected();
    let err = svc.point_lookup(IBM, "PX_LAST", &Options::new()).unwrap_err();
    assert_eq!(err, BlpError::NotConnected);
    assert!(controller.sent_requests().is_empty());
}
