//! Conversion of result tables into `polars` data frames.

use chrono::{DateTime, NaiveDate};
use polars::prelude::{AnyValue, Column, DataFrame, PlSmallStr, PolarsResult, Series, TimeUnit};

use crate::table::{Label, Table};
use crate::Value;

/// Name of the column holding row labels.
pub const INDEX_COLUMN: &str = "index";

fn any_value(v: &Value) -> AnyValue<'_> {
    match v {
        Value::Missing => AnyValue::Null,
        Value::Bool(b) => AnyValue::Boolean(*b),
        Value::Int(i) => AnyValue::Int64(*i),
        Value::Float(f) => AnyValue::Float64(*f),
        Value::String(s) => AnyValue::String(s),
        Value::Date(d) => date(*d),
        Value::Datetime(dt) => {
            AnyValue::Datetime(dt.and_utc().timestamp_millis(), TimeUnit::Milliseconds, None)
        }
    }
}

// Days since the Unix epoch, the physical form of a polars `Date`.
fn date(d: NaiveDate) -> AnyValue<'static> {
    let days = d
        .signed_duration_since(DateTime::UNIX_EPOCH.date_naive())
        .num_days();
    i32::try_from(days).map_or(AnyValue::Null, AnyValue::Date)
}

fn label(l: &Label) -> AnyValue<'_> {
    match l {
        Label::Text(s) => AnyValue::String(s),
        Label::Date(d) => date(*d),
    }
}

impl Table {
    /// Convert into a `DataFrame`: the row labels first, then one column per
    /// key, named `group.name` for grouped keys.
    ///
    /// Date labels and cells become `Date` columns and timestamps become
    /// millisecond `Datetime` columns, so historical tables keep a temporal
    /// index.
    ///
    /// # Errors
    /// Returns an error if `polars` rejects a column.
    pub fn to_dataframe(&self) -> PolarsResult<DataFrame> {
        let labels: Vec<AnyValue<'_>> = self
            .index()
            .iter()
            .map(label)
            .collect();
        let mut columns: Vec<Column> = Vec::with_capacity(self.width() + 1);
        columns.push(Series::from_any_values(PlSmallStr::from(INDEX_COLUMN), &labels, false)?.into());

        for key in self.columns() {
            let cells: Vec<AnyValue<'_>> = self
                .column(key)
                .unwrap_or_default()
                .into_iter()
                .map(any_value)
                .collect();
            let name = PlSmallStr::from(key.to_string());
            columns.push(Series::from_any_values(name, &cells, false)?.into());
        }
        DataFrame::new(columns)
    }
}
