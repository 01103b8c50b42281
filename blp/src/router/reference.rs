use blp_core::{
    BlpError, IntoIdentifiers, Options, Request, Table, Transport, assemble_bulk, assemble_point,
};

use crate::BlpService;

impl<T: Transport> BlpService<T> {
    /// Fetch current values of scalar fields.
    ///
    /// Rows are securities, columns are fields. `options` are sent as field
    /// overrides, in order.
    ///
    /// Behavior and trade-offs:
    /// - A single identifier behaves exactly like a one-element list.
    /// - A field a security did not return leaves its cell missing; a
    ///   security that returned nothing has no row.
    ///
    /// # Errors
    /// Returns `NotConnected` before `connect`, `InvalidArg` for empty
    /// inputs, and `Request` if the service rejects any security or field.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(target = "blp::lookup", skip_all)
    )]
    pub fn point_lookup(
        &mut self,
        securities: impl IntoIdentifiers,
        fields: impl IntoIdentifiers,
        options: &Options,
    ) -> Result<Table, BlpError> {
        let request = Request::reference(securities, fields, options)?;
        let messages = self.execute(&request)?;
        assemble_point(&messages)
    }

    /// Fetch bulk fields, whose values are sequences of records.
    ///
    /// Every record becomes one row labeled with its security; columns are
    /// the record's sub-fields.
    ///
    /// Behavior and trade-offs:
    /// - Rows of different bulk fields are stacked, so mixing fields with
    ///   different record layouts yields a sparse table.
    /// - Returns an empty table when no security had any record.
    ///
    /// # Errors
    /// Same as [`point_lookup`](Self::point_lookup).
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(target = "blp::lookup", skip_all)
    )]
    pub fn bulk_lookup(
        &mut self,
        securities: impl IntoIdentifiers,
        fields: impl IntoIdentifiers,
        options: &Options,
    ) -> Result<Table, BlpError> {
        let request = Request::reference(securities, fields, options)?;
        let messages = self.execute(&request)?;
        assemble_bulk(&messages)
    }
}
