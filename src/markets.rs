use std::path::Path;

use yield_scope::fetch_data;
use yield_scope::render;

/// Fetch (or read) market data and print the lending-markets table.
pub fn run(data: Option<&Path>) -> anyhow::Result<()> {
    let data = fetch_data::load_or_read(data)?;
    if data.markets.is_empty() {
        println!("No markets available.");
        return Ok(());
    }
    println!(
        "Loaded {} markets at {}",
        data.markets.len(),
        chrono::Utc::now().format("%Y-%m-%d %H:%M UTC")
    );
    print!("{}", render::markets_table(&data.markets));
    Ok(())
}
