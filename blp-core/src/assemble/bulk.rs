use crate::assemble::{required, security_of};
use crate::element::Element;
use crate::table::{ColumnKey, Label, Table};
use crate::transport::Message;
use crate::BlpError;

/// Build a table of stacked bulk records from reference responses.
///
/// Each requested field's value is a sequence of records; every record
/// becomes one row of named sub-fields. Rows are labeled by their security.
/// Securities that returned no records are left out, and when none returned
/// any the result is an empty table.
///
/// # Errors
/// Returns `BlpError::Data` if a message lacks `securityData`, `fieldData`,
/// or a security identifier.
pub fn assemble_bulk<M: Message>(messages: &[M]) -> Result<Table, BlpError> {
    let mut parts = Vec::new();
    for msg in messages {
        let root = msg.root();
        let security_data = required(&root, "securityData")?;
        for sec in security_data.values() {
            let security = security_of(&sec)?;
            let field_data = required(&sec, "fieldData")?;

            let mut frame = Table::new();
            let mut ordinal = 0usize;
            for fld in field_data.fields() {
                for record in fld.values() {
                    let cells = record
                        .fields()
                        .map(|d| (ColumnKey::new(d.name()), d.scalar()))
                        .collect::<Vec<_>>();
                    frame.push_row(Label::Text(ordinal.to_string()), cells);
                    ordinal += 1;
                }
            }

            if !frame.is_empty() {
                parts.push((security, frame));
            }
        }
    }

    if parts.is_empty() {
        #[cfg(feature = "tracing")]
        tracing::debug!("bulk response carried no records");
        return Ok(Table::new());
    }
    Ok(Table::concat_rows(parts))
}
