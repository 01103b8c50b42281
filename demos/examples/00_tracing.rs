use blp::Options;
use blp_demos::common::get_service;
use tracing_subscriber::fmt::format::FmtSpan;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize a human-friendly tracing subscriber with env-based filtering.
    // Suggested: RUST_LOG=info,blp=trace,blp_core=debug
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_span_events(FmtSpan::ENTER | FmtSpan::EXIT)
        .try_init();

    let mut svc = get_service();
    svc.with_session(|s| {
        // Point
        let _ = s.point_lookup("IBM US Equity", "PX_LAST", &Options::new())?;

        // Bulk
        let _ = s.bulk_lookup("IBM US Equity", "DVD_HIST_ALL", &Options::new())?;

        // Historical
        let _ = s.historical_lookup(
            "IBM US Equity",
            "PX_LAST",
            "20150101",
            "20150131",
            &Options::new(),
        )?;

        // A rejected request is logged at warn level
        let _ = s.point_lookup("INVALID US Equity", "PX_LAST", &Options::new());
        Ok(())
    })?;

    tracing::info!(connected = svc.is_connected(), "demo finished");
    Ok(())
}
