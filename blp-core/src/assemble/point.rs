use crate::assemble::{required, security_of};
use crate::element::Element;
use crate::table::{ColumnKey, Label, Table};
use crate::transport::Message;
use crate::BlpError;

/// Build a securities-by-fields table from reference responses.
///
/// Fields a security did not return produce no value; the cell stays
/// missing if another security filled that column.
///
/// # Errors
/// Returns `BlpError::Data` if a message lacks `securityData`, `fieldData`,
/// or a security identifier.
pub fn assemble_point<M: Message>(messages: &[M]) -> Result<Table, BlpError> {
    let mut table = Table::new();
    for msg in messages {
        let root = msg.root();
        let security_data = required(&root, "securityData")?;
        for sec in security_data.values() {
            let security = security_of(&sec)?;
            let field_data = required(&sec, "fieldData")?;
            for fld in field_data.fields() {
                table.set(
                    Label::Text(security.clone()),
                    ColumnKey::new(fld.name()),
                    fld.scalar(),
                );
            }
        }
    }
    Ok(table)
}
