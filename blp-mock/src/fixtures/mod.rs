//! Deterministic responses synthesized from the request itself.

/// Historical time-series fixtures.
pub mod history;
/// Point and bulk reference fixtures.
pub mod reference;

use blp_core::json::JsonMessage;
use blp_core::{Event, EventKind, Request, RequestKind};
use serde_json::{Value as Json, json};

/// Security that is always rejected with a security error.
pub const INVALID: &str = "INVALID US Equity";
/// Security that is known but never has data.
pub const NODATA: &str = "NODATA US Equity";

/// Events the service would emit for `req`.
pub fn respond(req: &Request) -> Vec<Event<JsonMessage>> {
    let kind = req.kind();
    let bodies: Vec<Json> = match kind {
        RequestKind::ReferenceData => req
            .securities()
            .iter()
            .map(|s| json!({ "securityData": [reference::security_entry(s, req.fields())] }))
            .collect(),
        RequestKind::HistoricalData => match history::Window::from_request(req) {
            Ok(window) => req
                .securities()
                .iter()
                .enumerate()
                .map(|(seq, s)| json!({ "securityData": history::security_entry(s, seq, req.fields(), &window) }))
                .collect(),
            Err(msg) => vec![response_error("BAD_ARGS", &msg)],
        },
    };
    frame(kind, bodies)
}

/// Split message bodies into partial events plus one terminal event, after a
/// leading status event that carries no response data.
pub fn frame(kind: RequestKind, bodies: Vec<Json>) -> Vec<Event<JsonMessage>> {
    let mut events = vec![Event::new(
        EventKind::RequestStatus,
        vec![JsonMessage::new("RequestAccepted", json!({}))],
    )];
    let last = bodies.len().saturating_sub(1);
    let mut partial = Vec::new();
    let mut terminal = Vec::new();
    for (i, body) in bodies.into_iter().enumerate() {
        let msg = JsonMessage::new(kind.response_name(), body);
        if i == last {
            terminal.push(msg);
        } else {
            partial.push(msg);
        }
    }
    for msg in partial {
        events.push(Event::new(EventKind::PartialResponse, vec![msg]));
    }
    events.push(Event::new(EventKind::Response, terminal));
    events
}

/// Body of a request-level failure.
pub fn response_error(subcategory: &str, message: &str) -> Json {
    json!({
        "responseError": {
            "source": "mock",
            "code": 1,
            "category": "BAD_ARGS",
            "message": message,
            "subcategory": subcategory
        }
    })
}

pub(crate) fn security_error(security: &str) -> Json {
    json!({
        "source": "mock",
        "code": 15,
        "category": "BAD_SEC",
        "message": format!("Unknown/Invalid security [{security}]"),
        "subcategory": "INVALID_SECURITY"
    })
}

pub(crate) fn field_exception(field: &str) -> Json {
    json!({
        "fieldId": field,
        "errorInfo": {
            "source": "mock",
            "code": 9,
            "category": "BAD_FLD",
            "message": "Field not valid",
            "subcategory": "INVALID_FIELD"
        }
    })
}
