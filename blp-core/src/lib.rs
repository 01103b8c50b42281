//! blp-core
//!
//! Core traits, request encoding, and response assembly shared across the
//! blp crates.
//!
//! - `element` / `transport`: the read-only message tree and the blocking
//!   transport the adapter drives.
//! - `request`: encoding of point, bulk, and historical lookups.
//! - `collector`: the receive loop that classifies and retains messages.
//! - `assemble`: flattening retained messages into a [`Table`].
//! - `json`: element adapter over the JSON form of vendor messages.
//!
//! Everything here is synchronous. A request blocks the calling thread until
//! the transport reports the terminal response event.
#![warn(missing_docs)]

/// Response assembly for each lookup kind.
pub mod assemble;
/// The blocking receive loop.
pub mod collector;
/// Read-only element tree abstraction.
pub mod element;
/// JSON-backed element adapter.
pub mod json;
pub mod request;
pub mod table;
/// Transport, event, and message contracts.
pub mod transport;

#[cfg(feature = "dataframe")]
pub mod dataframe;

pub use assemble::bulk::assemble_bulk;
pub use assemble::historical::{NO_HISTORY, assemble_historical};
pub use assemble::point::assemble_point;
pub use blp_types::{
    BlpError, HistoricalDefaults, NonTradingDayFill, PeriodicityAdjustment, PeriodicitySelection,
    SessionConfig, Value,
};
pub use collector::collect;
pub use element::Element;
pub use request::{IntoIdentifiers, Options, Override, Request, RequestKind};
pub use table::{ColumnKey, Label, Table};
pub use transport::{Event, EventKind, Message, Transport};
