use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the blp workspace.
///
/// Request failures carry the raw payload reported by the service; connection
/// failures are kept apart so callers can tell "could not talk to the service"
/// from "the service rejected what was asked".
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum BlpError {
    /// The service reported a request, security, or field level error.
    #[error("request failed: {payload}")]
    Request {
        /// String-rendered error element as delivered by the service.
        payload: String,
    },

    /// The session to the backend could not be started or its service opened.
    #[error("connection to {host}:{port} failed: {msg}")]
    Connection {
        /// Backend host.
        host: String,
        /// Backend port.
        port: u16,
        /// Human-readable cause.
        msg: String,
    },

    /// A lookup was issued while the service was disconnected.
    #[error("not connected")]
    NotConnected,

    /// Invalid input argument, rejected before anything was sent.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// A response message is missing a structurally required element.
    #[error("data issue: {0}")]
    Data(String),

    /// The transport failed while sending a request or polling for events.
    #[error("transport error: {0}")]
    Transport(String),
}

impl BlpError {
    /// Helper: build a `Request` error from a rendered error payload.
    pub fn request(payload: impl Into<String>) -> Self {
        Self::Request {
            payload: payload.into(),
        }
    }

    /// Helper: build a `Connection` error for the given endpoint.
    pub fn connection(host: impl Into<String>, port: u16, msg: impl Into<String>) -> Self {
        Self::Connection {
            host: host.into(),
            port,
            msg: msg.into(),
        }
    }

    /// Returns true if the service itself rejected the request.
    #[must_use]
    pub const fn is_request(&self) -> bool {
        matches!(self, Self::Request { .. })
    }
}
