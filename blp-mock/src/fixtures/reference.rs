use serde_json::{Map, Value as Json, json};

use super::{INVALID, NODATA, field_exception, security_error};

/// Scalar reference fields for a known security.
pub fn scalar(security: &str, field: &str) -> Option<Json> {
    let v = match (security, field) {
        ("IBM US Equity", "NAME" | "SECURITY_NAME_REALTIME" | "NAME_RT") => {
            json!("INTL BUSINESS MACHINES CORP")
        }
        ("IBM US Equity", "PX_LAST" | "LAST_PRICE") => json!(160.44),
        ("IBM US Equity", "GICS_SECTOR_NAME") => json!("Information Technology"),
        ("IBM US Equity", "CRNCY") => json!("USD"),
        ("IBM US Equity", "EQY_SH_OUT") => json!(990.52),
        ("VOD LN Equity", "NAME" | "SECURITY_NAME_REALTIME" | "NAME_RT") => {
            json!("VODAFONE GROUP PLC")
        }
        ("VOD LN Equity", "PX_LAST" | "LAST_PRICE") => json!(231.5),
        ("VOD LN Equity", "GICS_SECTOR_NAME") => json!("Telecommunication Services"),
        ("VOD LN Equity", "CRNCY") => json!("GBp"),
        ("JPM US Equity", "NAME" | "SECURITY_NAME_REALTIME" | "NAME_RT") => {
            json!("JPMORGAN CHASE & CO")
        }
        ("JPM US Equity", "PX_LAST" | "LAST_PRICE") => json!(62.58),
        ("JPM US Equity", "GICS_SECTOR_NAME") => json!("Financials"),
        ("JPM US Equity", "CRNCY") => json!("USD"),
        _ => return None,
    };
    Some(v)
}

/// Bulk reference fields (sequences of records) for a known security.
pub fn bulk(security: &str, field: &str) -> Option<Json> {
    let v = match (security, field) {
        ("IBM US Equity", "DVD_HIST_ALL") => json!([
            dividend("2015-01-27", "2015-02-06", "2015-02-10", "2015-03-10", 1.1),
            dividend("2014-10-28", "2014-11-06", "2014-11-10", "2014-12-10", 1.1),
            dividend("2014-07-29", "2014-08-06", "2014-08-08", "2014-09-10", 1.1),
        ]),
        ("VOD LN Equity", "DVD_HIST_ALL") => json!([
            dividend("2014-11-11", "2014-11-20", "2014-11-21", "2015-02-04", 3.53),
        ]),
        ("IBM US Equity", "EQY_DVD_ADJUST_FACT") => json!([
            adjustment("1999-05-27", 0.5),
            adjustment("1997-05-28", 0.5),
        ]),
        ("JPM US Equity", "EQY_DVD_ADJUST_FACT") => json!([adjustment("2000-06-12", 0.666_667)]),
        ("IBM US Equity", "PG_REVENUE") => json!([
            {"Segment Name": "Global Technology Services", "Revenue": 37_130.0},
            {"Segment Name": "Global Business Services", "Revenue": 17_825.0},
            {"Segment Name": "Software", "Revenue": 25_434.0}
        ]),
        _ => return None,
    };
    Some(v)
}

fn dividend(declared: &str, ex: &str, record: &str, payable: &str, amount: f64) -> Json {
    json!({
        "Declared Date": declared,
        "Ex-Date": ex,
        "Record Date": record,
        "Payable Date": payable,
        "Dividend Amount": amount,
        "Dividend Frequency": "Quarter",
        "Dividend Type": "Regular Cash"
    })
}

fn adjustment(date: &str, factor: f64) -> Json {
    json!({
        "Adjustment Date": date,
        "Adjustment Factor": factor,
        "Adjustment Factor Operator Type": 2.0,
        "Adjustment Factor Flag": 3.0
    })
}

fn is_known(security: &str) -> bool {
    matches!(security, "IBM US Equity" | "VOD LN Equity" | "JPM US Equity")
}

fn is_field(field: &str) -> bool {
    ["IBM US Equity", "VOD LN Equity", "JPM US Equity"]
        .iter()
        .any(|s| scalar(s, field).is_some() || bulk(s, field).is_some())
}

/// One `securityData` entry of a reference response.
pub fn security_entry(security: &str, fields: &[String]) -> Json {
    if security == INVALID || !(is_known(security) || security == NODATA) {
        return json!({
            "security": security,
            "securityError": security_error(security),
            "fieldExceptions": [],
            "fieldData": {}
        });
    }

    let mut field_data = Map::new();
    let mut exceptions = Vec::new();
    for f in fields {
        if !is_field(f) {
            exceptions.push(field_exception(f));
            continue;
        }
        if let Some(v) = scalar(security, f).or_else(|| bulk(security, f)) {
            field_data.insert(f.clone(), v);
        }
    }
    json!({
        "security": security,
        "fieldExceptions": exceptions,
        "fieldData": field_data
    })
}
