use std::path::Path;

use yield_scope::fetch_data;
use yield_scope::render;

/// Fetch (or read) market data and print the yield-strategies table.
pub fn run(data: Option<&Path>) -> anyhow::Result<()> {
    let data = fetch_data::load_or_read(data)?;
    if data.strategies.is_empty() {
        println!("No strategies available.");
        return Ok(());
    }
    print!("{}", render::strategies_table(&data.strategies));
    Ok(())
}
