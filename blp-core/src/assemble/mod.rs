//! Flatten retained response messages into result tables.
//!
//! Modules include:
//! - `point`: one scalar per (security, field)
//! - `bulk`: stacked record rows per security
//! - `historical`: dated rows, columns grouped by security
/// Bulk (array-valued field) reference assembly.
pub mod bulk;
/// Historical time-series assembly.
pub mod historical;
/// Point reference assembly.
pub mod point;

use crate::element::Element;
use crate::BlpError;

pub(crate) fn required<E: Element>(parent: &E, name: &str) -> Result<E, BlpError> {
    parent
        .field(name)
        .ok_or_else(|| BlpError::Data(format!("{} without {name}", parent.name())))
}

pub(crate) fn security_of<E: Element>(sec: &E) -> Result<String, BlpError> {
    sec.field_as_string("security")
        .ok_or_else(|| BlpError::Data(format!("{} without security", sec.name())))
}
