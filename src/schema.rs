use schemars::schema_for;

use yield_scope::session::MarketData;

/// Generate and print the JSON Schema for `MarketData` files.
pub fn run() -> anyhow::Result<()> {
    let schema = schema_for!(MarketData);
    let json = serde_json::to_string_pretty(&schema)?;
    println!("{json}");
    Ok(())
}
