//! Error, value, and configuration primitives shared by the blp crates.
#![warn(missing_docs)]

mod config;
mod error;
mod value;

pub use config::{
    HistoricalDefaults, NonTradingDayFill, PeriodicityAdjustment, PeriodicitySelection,
    SessionConfig,
};
pub use error::BlpError;
pub use value::Value;
