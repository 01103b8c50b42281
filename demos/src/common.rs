use blp::BlpService;
use blp_mock::MockTransport;

/// Return a disconnected service for demos.
///
/// The service runs over the fixture-backed mock transport. `BLP_HOST` and
/// `BLP_PORT` override the endpoint recorded in the session configuration.
#[must_use]
pub fn get_service() -> BlpService<MockTransport> {
    let mut builder = BlpService::builder(MockTransport::new());
    if let Ok(host) = std::env::var("BLP_HOST") {
        builder = builder.host(host);
    }
    if let Some(port) = std::env::var("BLP_PORT").ok().and_then(|p| p.parse().ok()) {
        builder = builder.port(port);
    }
    println!("--- (Using Mock Transport) ---");
    builder.build()
}
