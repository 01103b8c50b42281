//! Blocking receive loop that classifies every message of a response.

use crate::element::Element;
use crate::request::RequestKind;
use crate::transport::{Message, Transport};
use crate::BlpError;

/// Poll `transport` until the terminal response event and return the
/// retained response messages in delivery order.
///
/// Every message is scanned for errors before it is retained, including
/// messages of intermediate events and messages of unrelated types:
/// - a top-level `responseError` fails the request;
/// - reference responses fail if any security entry carries non-empty
///   `fieldExceptions` or `securityError`;
/// - historical responses fail on non-empty `fieldExceptions` or any
///   `securityError` on the single security entry.
///
/// There is no partial-success mode: the first error discards everything
/// collected so far and returns at once, without polling further. Events
/// still queued for the failed request are discarded by the transport on the
/// next [`Transport::send_request`].
///
/// # Errors
/// Returns `BlpError::Request` with the rendered error element, or the
/// transport's own error if polling fails.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        name = "blp_core::collect",
        skip(transport),
        fields(response = kind.response_name()),
    )
)]
pub fn collect<T: Transport>(
    transport: &mut T,
    kind: RequestKind,
) -> Result<Vec<T::Message>, BlpError> {
    let mut retained = Vec::new();
    loop {
        let event = transport.next_event()?;
        #[cfg(feature = "tracing")]
        tracing::debug!(kind = ?event.kind, messages = event.messages.len(), "event received");

        let terminal = event.kind.is_terminal();
        for msg in event.messages {
            check_message(&msg, kind)?;
            if msg.message_type() == kind.response_name() {
                retained.push(msg);
            }
        }

        if terminal {
            break;
        }
    }
    Ok(retained)
}

fn check_message<M: Message>(msg: &M, kind: RequestKind) -> Result<(), BlpError> {
    let root = msg.root();
    if let Some(err) = root.field("responseError") {
        return Err(fail(&err));
    }
    let Some(security_data) = root.field("securityData") else {
        return Ok(());
    };
    match kind {
        RequestKind::ReferenceData => {
            for sec in security_data.values() {
                if let Some(e) = non_empty(&sec, "fieldExceptions") {
                    return Err(fail(&e));
                }
                if let Some(e) = non_empty(&sec, "securityError") {
                    return Err(fail(&e));
                }
            }
        }
        RequestKind::HistoricalData => {
            if let Some(e) = non_empty(&security_data, "fieldExceptions") {
                return Err(fail(&e));
            }
            if let Some(e) = security_data.field("securityError") {
                return Err(fail(&e));
            }
        }
    }
    Ok(())
}

fn non_empty<E: Element>(parent: &E, name: &str) -> Option<E> {
    parent.field(name).filter(|e| e.value_count() > 0)
}

fn fail<E: Element>(e: &E) -> BlpError {
    let payload = e.render();
    #[cfg(feature = "tracing")]
    tracing::warn!(element = e.name(), "request rejected by service");
    BlpError::request(payload.trim_end())
}
