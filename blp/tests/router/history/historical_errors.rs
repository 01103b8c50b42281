use blp::{BlpError, Options};
use blp_mock::INVALID;

use crate::helpers::{IBM, connected};

#[test]
fn unknown_field_is_a_request_error() {
    let (mut svc, _) = connected();
    let err = svc
        .historical_lookup(IBM, ["PX_LAST", "NOPE"], "20150101", "20150109", &Options::new())
        .unwrap_err();
    let BlpError::Request { payload } = err else {
        panic!("expected request error, got {err:?}");
    };
    assert!(payload.contains("NOPE"));
}

#[test]
fn invalid_security_is_a_request_error() {
    let (mut svc, _) = connected();
    let err = svc
        .historical_lookup([IBM, INVALID], "PX_LAST", "20150101", "20150109", &Options::new())
        .unwrap_err();
    assert!(err.is_request());
}

#[test]
fn unreadable_dates_are_rejected_by_the_service() {
    let (mut svc, _) = connected();
    let err = svc
        .historical_lookup(IBM, "PX_LAST", "2015", "20150109", &Options::new())
        .unwrap_err();
    let BlpError::Request { payload } = err else {
        panic!("expected request error, got {err:?}");
    };
    assert!(payload.starts_with("responseError = {"));

    // the session survives
    assert!(svc
        .historical_lookup(IBM, "PX_LAST", "20150105", "20150105", &Options::new())
        .is_ok());
}
