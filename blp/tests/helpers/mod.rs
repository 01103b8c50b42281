// Shared fixtures for the lookup tests.

use blp::BlpService;
use blp_mock::{MockController, MockTransport};
use chrono::NaiveDate;

pub const IBM: &str = "IBM US Equity";
pub const VOD: &str = "VOD LN Equity";
pub const JPM: &str = "JPM US Equity";

/// Connected service over a fixture-backed mock, plus its controller.
pub fn connected() -> (BlpService<MockTransport>, MockController) {
    let (transport, controller) = MockTransport::new_with_controller();
    let svc = BlpService::builder(transport).connect().unwrap();
    (svc, controller)
}

/// Disconnected service over a fixture-backed mock, plus its controller.
pub fn disconnected() -> (BlpService<MockTransport>, MockController) {
    let (transport, controller) = MockTransport::new_with_controller();
    (BlpService::builder(transport).build(), controller)
}

pub fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}
