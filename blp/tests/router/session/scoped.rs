use std::panic::{AssertUnwindSafe, catch_unwind};

use blp::{BlpError, Options};

use crate::helpers::{IBM, disconnected};

#[test]
fn with_session_disconnects_after_success() {
    let (mut svc, controller) = disconnected();
    let t = svc
        .with_session(|s| s.point_lookup(IBM, "PX_LAST", &Options::new()))
        .unwrap();
    assert_eq!(t.height(), 1);
    assert!(!svc.is_connected());
    assert!(!controller.is_started());
}

#[test]
fn with_session_disconnects_after_an_error() {
    let (mut svc, controller) = disconnected();
    let err = svc
        .with_session(|s| s.point_lookup(IBM, "NOT_A_FIELD", &Options::new()))
        .unwrap_err();
    assert!(err.is_request());
    assert!(!svc.is_connected());
    assert_eq!(controller.stop_count(), 1);
}

#[test]
fn with_session_disconnects_on_panic() {
    let (mut svc, controller) = disconnected();
    let outcome = catch_unwind(AssertUnwindSafe(|| {
        svc.with_session(|_| -> Result<(), BlpError> { panic!("caller bug") })
    }));
    assert!(outcome.is_err());
    assert!(!svc.is_connected());
    assert!(!controller.is_started());
}

#[test]
fn with_session_surfaces_connection_failures() {
    let (mut svc, controller) = disconnected();
    controller.fail_start("refused");
    let mut ran = false;
    let err = svc
        .with_session(|_| {
            ran = true;
            Ok(())
        })
        .unwrap_err();
    assert!(matches!(err, BlpError::Connection { .. }));
    assert!(!ran);
}

#[test]
fn session_guard_disconnects_when_dropped() {
    let (mut svc, controller) = disconnected();
    {
        let mut session = svc.session().unwrap();
        assert!(session.is_connected());
        session.point_lookup(IBM, "PX_LAST", &Options::new()).unwrap();
        session
            .bulk_lookup(IBM, "DVD_HIST_ALL", &Options::new())
            .unwrap();
    }
    assert!(!svc.is_connected());
    assert_eq!(controller.start_count(), 1);
    assert_eq!(controller.stop_count(), 1);
}
