use crate::assemble::{required, security_of};
use crate::element::Element;
use crate::table::{ColumnKey, Label, Table};
use crate::transport::Message;
use crate::{BlpError, Value};

/// Placeholder the service delivers for dates without history.
pub const NO_HISTORY: &str = "#N/A History";

/// Build a date-indexed table from historical responses, one message per
/// security.
///
/// Rows are the union of observation dates in chronological order; columns
/// are grouped by security with one sub-column per field. [`NO_HISTORY`]
/// cells become [`Value::Missing`]. Securities without observations are left
/// out, and when none had any the result is an empty table.
///
/// # Errors
/// Returns `BlpError::Data` if a message lacks `securityData`, a security
/// identifier, or a row lacks a readable `date`.
pub fn assemble_historical<M: Message>(messages: &[M]) -> Result<Table, BlpError> {
    let sentinel = Value::from(NO_HISTORY);
    let mut parts = Vec::new();
    for msg in messages {
        let root = msg.root();
        let security_data = required(&root, "securityData")?;
        let security = security_of(&security_data)?;

        let mut frame = Table::new();
        if let Some(field_data) = security_data.field("fieldData") {
            for entry in field_data.values() {
                let date = entry
                    .field_as_date("date")
                    .ok_or_else(|| BlpError::Data(format!("history row for {security} without date")))?;
                for v in entry.fields().filter(|v| v.name() != "date") {
                    frame.set(Label::Date(date), ColumnKey::new(v.name()), v.scalar());
                }
            }
        }
        frame.sort_index();
        frame.replace(&sentinel, &Value::Missing);

        if !frame.is_empty() {
            parts.push((security, frame));
        }
    }

    if parts.is_empty() {
        #[cfg(feature = "tracing")]
        tracing::debug!("historical response carried no observations");
        return Ok(Table::new());
    }
    Ok(Table::concat_columns(parts))
}
