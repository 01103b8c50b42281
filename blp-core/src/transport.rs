use crate::element::Element;
use crate::request::Request;
use crate::{BlpError, SessionConfig};

/// One unit of vendor-delivered data.
pub trait Message {
    /// Element handle type borrowed from the message.
    type Element<'a>: Element
    where
        Self: 'a;

    /// Declared type of the message, e.g. `ReferenceDataResponse`.
    fn message_type(&self) -> &str;

    /// Root of the message's element tree.
    fn root(&self) -> Self::Element<'_>;
}

/// Transport-level classification of an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum EventKind {
    /// Session lifecycle notifications.
    SessionStatus,
    /// Service open/close notifications.
    ServiceStatus,
    /// Request-level status (e.g. failure to route).
    RequestStatus,
    /// Intermediate slice of a response; more events follow.
    PartialResponse,
    /// Final slice of a response; nothing else belongs to the request.
    Response,
    /// The poll returned without data.
    Timeout,
    /// Anything else the transport surfaces.
    Other,
}

impl EventKind {
    /// Whether this event closes the current response transaction.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Response)
    }
}

/// A batch of messages delivered together by the transport.
#[derive(Debug, Clone)]
pub struct Event<M> {
    /// Event classification.
    pub kind: EventKind,
    /// Messages carried by the event, in delivery order.
    pub messages: Vec<M>,
}

impl<M> Event<M> {
    /// Build an event from its kind and messages.
    #[must_use]
    pub const fn new(kind: EventKind, messages: Vec<M>) -> Self {
        Self { kind, messages }
    }
}

/// Blocking request/response transport to the backend service.
///
/// The transport owns connection handling and the wire protocol. This crate
/// only drives it through the calls below.
pub trait Transport {
    /// Message type produced by [`next_event`](Transport::next_event).
    type Message: Message;

    /// Start the session against the configured endpoint.
    ///
    /// # Errors
    /// Returns an error if the session cannot be started.
    fn start(&mut self, config: &SessionConfig) -> Result<(), BlpError>;

    /// Open a named service on a started session.
    ///
    /// # Errors
    /// Returns an error if the service cannot be opened.
    fn open_service(&mut self, service: &str) -> Result<(), BlpError>;

    /// Send a request on the opened service.
    ///
    /// Events still queued from an earlier request are discarded first, so a
    /// request abandoned after an error never leaks into the next response.
    ///
    /// # Errors
    /// Returns an error if the request cannot be sent.
    fn send_request(&mut self, request: &Request) -> Result<(), BlpError>;

    /// Block until the next event is available.
    ///
    /// # Errors
    /// Returns an error if the transport fails while polling.
    fn next_event(&mut self) -> Result<Event<Self::Message>, BlpError>;

    /// Stop the session. Must be safe to call on a stopped session.
    fn stop(&mut self);
}
