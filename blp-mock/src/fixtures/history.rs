use blp_core::{Request, Value};
use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde_json::{Map, Value as Json, json};

use super::{INVALID, NODATA, field_exception, security_error};

/// Sampling window of a historical request.
pub struct Window {
    start: NaiveDate,
    end: NaiveDate,
    periodicity: String,
}

impl Window {
    /// Read `startDate`, `endDate`, and `periodicitySelection` from `req`.
    ///
    /// # Errors
    /// Returns the message of the request-level failure for unreadable dates.
    pub fn from_request(req: &Request) -> Result<Self, String> {
        let date = |name: &str| -> Result<NaiveDate, String> {
            let raw = req
                .parameter(name)
                .and_then(Value::as_str)
                .ok_or_else(|| format!("{name} missing"))?;
            NaiveDate::parse_from_str(raw, "%Y%m%d").map_err(|_| format!("Invalid {name} {raw}"))
        };
        let periodicity = req
            .parameter("periodicitySelection")
            .and_then(Value::as_str)
            .unwrap_or("DAILY")
            .to_string();
        Ok(Self {
            start: date("startDate")?,
            end: date("endDate")?,
            periodicity,
        })
    }

    /// Observation dates inside the window.
    pub fn dates(&self) -> Vec<NaiveDate> {
        let mut out = Vec::new();
        let mut d = self.start;
        while d <= self.end {
            let weekday = !matches!(d.weekday(), Weekday::Sat | Weekday::Sun);
            let keep = match self.periodicity.as_str() {
                "WEEKLY" => d.weekday() == Weekday::Fri,
                "MONTHLY" => weekday && is_last_weekday_of_month(d),
                _ => weekday,
            };
            if keep {
                out.push(d);
            }
            match d.checked_add_days(Days::new(1)) {
                Some(next) => d = next,
                None => break,
            }
        }
        out
    }
}

fn is_last_weekday_of_month(d: NaiveDate) -> bool {
    let mut next = d;
    loop {
        let Some(n) = next.checked_add_days(Days::new(1)) else {
            return true;
        };
        if n.month() != d.month() {
            return true;
        }
        if !matches!(n.weekday(), Weekday::Sat | Weekday::Sun) {
            return false;
        }
        next = n;
    }
}

fn base_price(security: &str) -> Option<f64> {
    match security {
        "IBM US Equity" => Some(160.0),
        "VOD LN Equity" => Some(230.0),
        "JPM US Equity" => Some(62.0),
        _ => None,
    }
}

/// Value of `field` for `security` on `date`.
pub fn observation(security: &str, field: &str, date: NaiveDate) -> Option<Json> {
    let base = base_price(security)?;
    let step = f64::from(date.ordinal() % 7) * 0.25;
    let v = match field {
        "PX_LAST" => json!(base + step),
        "PX_OPEN" => json!(base + step - 0.5),
        "PX_HIGH" => json!(base + step + 1.0),
        "PX_LOW" => json!(base + step - 1.0),
        "PX_VOLUME" if security == "JPM US Equity" && date.day() % 2 == 1 => json!("#N/A History"),
        "PX_VOLUME" => json!(1_000_000 + i64::from(date.ordinal()) * 1_000),
        _ => return None,
    };
    Some(v)
}

fn is_field(field: &str) -> bool {
    matches!(
        field,
        "PX_LAST" | "PX_OPEN" | "PX_HIGH" | "PX_LOW" | "PX_VOLUME" | "PCT_CHG_INSIDER_HOLDINGS"
    )
}

/// The single `securityData` element of a historical response.
pub fn security_entry(security: &str, seq: usize, fields: &[String], window: &Window) -> Json {
    if security == INVALID || !(base_price(security).is_some() || security == NODATA) {
        return json!({
            "security": security,
            "sequenceNumber": seq,
            "securityError": security_error(security),
            "fieldExceptions": [],
            "fieldData": []
        });
    }

    let exceptions: Vec<Json> = fields
        .iter()
        .filter(|f| !is_field(f))
        .map(|f| field_exception(f))
        .collect();

    let mut rows = Vec::new();
    if exceptions.is_empty() {
        for date in window.dates() {
            let mut row = Map::new();
            for f in fields {
                if let Some(v) = observation(security, f, date) {
                    row.insert(f.clone(), v);
                }
            }
            if !row.is_empty() {
                let mut dated = Map::new();
                dated.insert("date".to_string(), json!(date.format("%Y-%m-%d").to_string()));
                dated.extend(row);
                rows.push(Json::Object(dated));
            }
        }
    }

    json!({
        "security": security,
        "sequenceNumber": seq,
        "fieldExceptions": exceptions,
        "fieldData": rows
    })
}
