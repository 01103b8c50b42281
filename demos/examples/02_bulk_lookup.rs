use blp::{ColumnKey, Options};
use blp_demos::common::get_service;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut svc = get_service();
    svc.connect()?;

    // Dividend history: one row per dividend, labeled by security.
    let dividends = svc.bulk_lookup(
        ["IBM US Equity", "VOD LN Equity"],
        "DVD_HIST_ALL",
        &Options::new(),
    )?;
    println!("{dividends}");

    if let Some(amounts) = dividends.column(&ColumnKey::new("Dividend Amount")) {
        let total: f64 = amounts.iter().filter_map(|v| v.as_f64()).sum();
        println!("Total dividend amount across rows: {total:.2}");
    }

    // No records for any security yields an empty table, not an error.
    let none = svc.bulk_lookup("VOD LN Equity", "EQY_DVD_ADJUST_FACT", &Options::new())?;
    println!("{none}");

    Ok(())
}
