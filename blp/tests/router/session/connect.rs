use blp::{BlpError, BlpService, Options, SessionConfig};
use blp_mock::MockTransport;

use crate::helpers::{IBM, disconnected};

#[test]
fn connect_starts_the_session_and_opens_the_service() {
    let (mut svc, controller) = disconnected();
    assert!(!svc.is_connected());
    svc.connect().unwrap();
    assert!(svc.is_connected());
    assert!(controller.is_started());
    assert_eq!(controller.service().as_deref(), Some("//blp/refdata"));

    // idempotent
    svc.connect().unwrap();
    assert_eq!(controller.start_count(), 1);
}

#[test]
fn builder_settings_reach_the_transport() {
    let (transport, controller) = MockTransport::new_with_controller();
    let svc = BlpService::builder(transport)
        .host("10.0.0.5")
        .port(8195)
        .service("//blp/refdata-beta")
        .connect()
        .unwrap();
    assert_eq!(
        svc.config(),
        &SessionConfig {
            host: "10.0.0.5".into(),
            port: 8195,
            service: "//blp/refdata-beta".into(),
        }
    );
    assert_eq!(controller.service().as_deref(), Some("//blp/refdata-beta"));
}

#[test]
fn start_failure_is_a_connection_error() {
    let (transport, controller) = MockTransport::new_with_controller();
    controller.fail_start("connection refused");
    let Err(err) = BlpService::builder(transport).port(8194).connect() else {
        panic!("connect should fail");
    };
    let BlpError::Connection { host, port, msg } = err else {
        panic!("expected connection error, got {err:?}");
    };
    assert_eq!((host.as_str(), port), ("localhost", 8194));
    assert!(msg.contains("refused"));
}

#[test]
fn open_service_failure_stops_the_session() {
    let (mut svc, controller) = disconnected();
    controller.fail_open_service("no entitlement");
    let err = svc.connect().unwrap_err();
    assert!(matches!(err, BlpError::Connection { .. }));
    assert!(!svc.is_connected());
    assert!(!controller.is_started());
    assert_eq!(controller.stop_count(), 1);

    controller.heal();
    svc.connect().unwrap();
    assert!(svc.point_lookup(IBM, "PX_LAST", &Options::new()).is_ok());
}

#[test]
fn disconnect_is_idempotent_and_blocks_lookups() {
    let (mut svc, controller) = disconnected();
    svc.connect().unwrap();
    svc.disconnect();
    svc.disconnect();
    assert_eq!(controller.stop_count(), 1);
    assert_eq!(
        svc.point_lookup(IBM, "PX_LAST", &Options::new()).unwrap_err(),
        BlpError::NotConnected
    );
}

#[test]
fn dropping_the_service_disconnects() {
    let (mut svc, controller) = disconnected();
    svc.connect().unwrap();
    drop(svc);
    assert!(!controller.is_started());
}
