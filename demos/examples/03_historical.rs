use blp::{Options, Value};
use blp_demos::common::get_service;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut svc = get_service();
    svc.connect()?;

    // Daily closes and volumes for two securities, grouped by security.
    let daily = svc.historical_lookup(
        ["IBM US Equity", "JPM US Equity"],
        ["PX_LAST", "PX_VOLUME"],
        "20150101",
        "20150115",
        &Options::new(),
    )?;
    println!("{daily}");

    let missing = daily
        .rows()
        .flat_map(|(_, cells)| cells.iter())
        .filter(|v| matches!(v, Value::Missing))
        .count();
    println!("{missing} cells had no history");

    // Caller options override the service defaults.
    let weekly = svc.historical_lookup(
        "VOD LN Equity",
        "PX_LAST",
        "20150101",
        "20150331",
        &Options::new().with("periodicitySelection", "WEEKLY"),
    )?;
    println!("{weekly}");

    Ok(())
}
