use blp_core::{
    BlpError, IntoIdentifiers, Options, Request, Table, Transport, Value, assemble_historical,
};

use crate::BlpService;

impl<T: Transport> BlpService<T> {
    /// Fetch time series between `start` and `end`, inclusive.
    ///
    /// Dates may be given as `YYYYMMDD` strings or date values. The service's
    /// [`HistoricalDefaults`](crate::HistoricalDefaults) are applied first and
    /// `options` override them by name (e.g. `periodicitySelection`).
    ///
    /// Behavior and trade-offs:
    /// - Rows are observation dates in ascending order; columns are grouped
    ///   by security with one sub-column per field.
    /// - `#N/A History` placeholders become missing cells.
    /// - Securities with no observations are left out; when none had any,
    ///   the result is an empty table.
    ///
    /// # Errors
    /// Returns `NotConnected` before `connect`, `InvalidArg` for empty
    /// inputs, and `Request` if the service rejects the request, any
    /// security, or any field.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(target = "blp::lookup", skip_all)
    )]
    pub fn historical_lookup(
        &mut self,
        securities: impl IntoIdentifiers,
        fields: impl IntoIdentifiers,
        start: impl Into<Value>,
        end: impl Into<Value>,
        options: &Options,
    ) -> Result<Table, BlpError> {
        let request = Request::historical(
            securities,
            fields,
            start,
            end,
            options,
            &self.historical_defaults,
        )?;
        let messages = self.execute(&request)?;
        assemble_historical(&messages)
    }
}
