use std::path::PathBuf;

use anyhow::Result;

use yield_scope::fetch_data;
use yield_scope::render;
use yield_scope::session::Session;
use yield_scope::validate::require_positive;

pub struct QuoteArgs {
    pub market: String,
    pub strategy: String,
    pub deposit: String,
    pub borrow: String,
    pub data: Option<PathBuf>,
    pub json: bool,
}

/// One-shot calculation: select, set amounts, derive, print.
///
/// Unlike the interactive mode, a one-shot command cannot meaningfully
/// "withhold the panel", so unknown names and non-positive amounts are
/// reported as errors up front.
pub fn run(args: &QuoteArgs) -> Result<()> {
    let data = fetch_data::load_or_read(args.data.as_deref())?;

    let mut session = Session::new(data);
    session.select_market(&args.market)?;
    session.select_strategy(&args.strategy)?;
    require_positive("deposit", &args.deposit)?;
    require_positive("borrow", &args.borrow)?;
    session.set_deposit(args.deposit.clone());
    session.set_borrow(args.borrow.clone());

    let snapshot = session.snapshot();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        print!("{}", render::snapshot_panel(&snapshot));
    }
    Ok(())
}
