//! Mock transport for CI-safe tests and examples.
//!
//! [`MockTransport`] answers requests from deterministic fixtures unless a
//! test has scripted the events for the next request through its
//! [`MockController`].
#![warn(missing_docs)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use blp_core::json::JsonMessage;
use blp_core::{BlpError, Event, Request, SessionConfig, Transport};

/// Fixture data and response framing.
pub mod fixtures;

pub use fixtures::{INVALID, NODATA};

#[derive(Default)]
struct InternalState {
    scripts: VecDeque<Vec<Event<JsonMessage>>>,
    pending: VecDeque<Event<JsonMessage>>,
    start_failure: Option<String>,
    open_failure: Option<String>,
    started: bool,
    service: Option<String>,
    start_count: usize,
    stop_count: usize,
    sent: Vec<Request>,
}

fn lock(state: &Mutex<InternalState>) -> MutexGuard<'_, InternalState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Controller handle used by tests to drive the mock from the outside.
#[derive(Clone)]
pub struct MockController {
    state: Arc<Mutex<InternalState>>,
}

impl MockController {
    /// Queue the events to emit for the next request, instead of fixtures.
    pub fn script(&self, events: Vec<Event<JsonMessage>>) {
        lock(&self.state).scripts.push_back(events);
    }

    /// Make every subsequent `start` fail with `msg`.
    pub fn fail_start(&self, msg: impl Into<String>) {
        lock(&self.state).start_failure = Some(msg.into());
    }

    /// Make every subsequent `open_service` fail with `msg`.
    pub fn fail_open_service(&self, msg: impl Into<String>) {
        lock(&self.state).open_failure = Some(msg.into());
    }

    /// Clear injected start/open failures.
    pub fn heal(&self) {
        let mut guard = lock(&self.state);
        guard.start_failure = None;
        guard.open_failure = None;
    }

    /// Requests sent so far, in order.
    #[must_use]
    pub fn sent_requests(&self) -> Vec<Request> {
        lock(&self.state).sent.clone()
    }

    /// Whether the session is currently started.
    #[must_use]
    pub fn is_started(&self) -> bool {
        lock(&self.state).started
    }

    /// Name of the currently opened service, if any.
    #[must_use]
    pub fn service(&self) -> Option<String> {
        lock(&self.state).service.clone()
    }

    /// Number of successful `start` calls.
    #[must_use]
    pub fn start_count(&self) -> usize {
        lock(&self.state).start_count
    }

    /// Number of `stop` calls that stopped a started session.
    #[must_use]
    pub fn stop_count(&self) -> usize {
        lock(&self.state).stop_count
    }
}

/// In-memory transport. Responses are framed the way the service frames
/// them: a status event, one partial event per extra message, then the
/// terminal response event.
pub struct MockTransport {
    state: Arc<Mutex<InternalState>>,
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl MockTransport {
    /// Fixture-backed transport without an external controller.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(InternalState::default())),
        }
    }

    /// Create a transport and the controller that drives it.
    #[must_use]
    pub fn new_with_controller() -> (Self, MockController) {
        let me = Self::new();
        let controller = MockController {
            state: Arc::clone(&me.state),
        };
        (me, controller)
    }
}

impl Transport for MockTransport {
    type Message = JsonMessage;

    fn start(&mut self, config: &SessionConfig) -> Result<(), BlpError> {
        let mut guard = lock(&self.state);
        if let Some(msg) = &guard.start_failure {
            return Err(BlpError::connection(&config.host, config.port, msg.clone()));
        }
        guard.started = true;
        guard.start_count += 1;
        Ok(())
    }

    fn open_service(&mut self, service: &str) -> Result<(), BlpError> {
        let mut guard = lock(&self.state);
        if !guard.started {
            return Err(BlpError::Transport("session not started".into()));
        }
        if let Some(msg) = &guard.open_failure {
            return Err(BlpError::Transport(format!("failed to open {service}: {msg}")));
        }
        guard.service = Some(service.to_string());
        Ok(())
    }

    fn send_request(&mut self, request: &Request) -> Result<(), BlpError> {
        let mut guard = lock(&self.state);
        if guard.service.is_none() {
            return Err(BlpError::Transport("service not opened".into()));
        }
        guard.sent.push(request.clone());
        guard.pending.clear();
        let events = guard
            .scripts
            .pop_front()
            .unwrap_or_else(|| fixtures::respond(request));
        guard.pending.extend(events);
        Ok(())
    }

    fn next_event(&mut self) -> Result<Event<JsonMessage>, BlpError> {
        lock(&self.state)
            .pending
            .pop_front()
            .ok_or_else(|| BlpError::Transport("no pending events".into()))
    }

    fn stop(&mut self) {
        let mut guard = lock(&self.state);
        if guard.started {
            guard.started = false;
            guard.service = None;
            guard.pending.clear();
            guard.stop_count += 1;
        }
    }
}
