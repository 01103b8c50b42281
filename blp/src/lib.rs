//! blp exposes point, bulk, and historical reference-data lookups over a
//! single vendor session and assembles the responses into labeled tables.
//!
//! Overview
//! - [`BlpService`] owns one [`Transport`] and serializes every call on it.
//! - `point_lookup` returns a securities-by-fields [`Table`].
//! - `bulk_lookup` returns one row per record of each security's bulk field.
//! - `historical_lookup` returns a date-indexed table with columns grouped by
//!   security, after applying the service's [`HistoricalDefaults`].
//! - [`Session`] and [`BlpService::with_session`] disconnect on every exit path.
//!
//! Key behaviors and trade-offs
//! - Blocking: each lookup waits for the terminal response event. There is no
//!   timeout, so a transport that never finishes blocks the caller.
//! - All-or-nothing: one rejected security or field fails the whole lookup
//!   with [`BlpError::Request`]; no partial table is returned.
//! - Lookups on a disconnected service fail with [`BlpError::NotConnected`]
//!   rather than connecting implicitly.
//! - Missing data is not an error: securities without data are absent from the
//!   table, and a lookup with no data at all yields an empty table.
//!
//! Examples
//! ```rust,ignore
//! use blp::{BlpService, Options};
//! use blp_mock::MockTransport;
//!
//! let mut svc = BlpService::builder(MockTransport::new()).build();
//! let table = svc.with_session(|s| {
//!     s.historical_lookup(
//!         ["IBM US Equity", "VOD LN Equity"],
//!         ["PX_LAST", "PX_VOLUME"],
//!         "20150101",
//!         "20150131",
//!         &Options::new().with("periodicitySelection", "WEEKLY"),
//!     )
//! })?;
//! println!("{table}");
//! ```
//!
//! See the `demos` crate for runnable end-to-end demonstrations.
#![warn(missing_docs)]

pub(crate) mod core;
mod router;
mod session;

pub use core::{BlpService, BlpServiceBuilder};
pub use session::Session;

pub use blp_core::json;

// Re-export core types for convenience
pub use blp_core::{
    BlpError,
    ColumnKey,
    Element,
    Event,
    EventKind,
    HistoricalDefaults,
    IntoIdentifiers,
    Label,
    Message,
    NO_HISTORY,
    NonTradingDayFill,
    Options,
    Override,
    PeriodicityAdjustment,
    PeriodicitySelection,
    Request,
    RequestKind,
    SessionConfig,
    Table,
    Transport,
    Value,
};
