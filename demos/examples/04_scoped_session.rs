use blp::{BlpError, Options};
use blp_demos::common::get_service;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut svc = get_service();

    // The session is closed when the closure returns, even on error.
    let names = svc.with_session(|s| s.point_lookup("IBM US Equity", "NAME", &Options::new()))?;
    println!("{names}");
    println!("connected after with_session: {}", svc.is_connected());

    // A rejected security fails the whole lookup with the service's payload.
    let outcome = svc.with_session(|s| {
        s.point_lookup(
            ["IBM US Equity", "INVALID US Equity"],
            "PX_LAST",
            &Options::new(),
        )
    });
    match outcome {
        Err(BlpError::Request { payload }) => println!("rejected:\n{payload}"),
        Err(e) => return Err(e.into()),
        Ok(t) => println!("{t}"),
    }

    // The guard form keeps the session open for the enclosing scope.
    {
        let mut session = svc.session()?;
        let t = session.bulk_lookup("IBM US Equity", "PG_REVENUE", &Options::new())?;
        println!("{t}");
    }
    println!("connected after guard: {}", svc.is_connected());

    Ok(())
}
