use blp::Options;
use blp_demos::common::get_service;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Create a service and connect it.
    let mut svc = get_service();
    svc.connect()?;

    // 2. One security, one field.
    let last = svc.point_lookup("IBM US Equity", "PX_LAST", &Options::new())?;
    println!("{last}");

    // 3. Several securities and fields at once.
    let table = svc.point_lookup(
        ["IBM US Equity", "VOD LN Equity", "JPM US Equity"],
        ["NAME", "PX_LAST", "CRNCY", "GICS_SECTOR_NAME"],
        &Options::new(),
    )?;
    println!("{table}");

    // 4. Disconnect explicitly; dropping the service would do the same.
    svc.disconnect();
    Ok(())
}
