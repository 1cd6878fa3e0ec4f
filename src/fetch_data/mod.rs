pub mod providers;

use std::path::Path;

use anyhow::{Context, Result};

use crate::model::Market;
use crate::session::MarketData;

const USER_AGENT: &str = "yield-scope/0.1";

/// Build the HTTP client shared by all providers.
///
/// No timeout, no retries anywhere in the load path: the initial load is
/// one-shot, and a failure simply leaves the calculator with no data.
pub fn client() -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .context("creating HTTP client")
}

/// Fetch markets, strategies and prices concurrently, attach prices to
/// their markets, then resolve logos token by token.
pub async fn load(client: &reqwest::Client) -> Result<MarketData> {
    let (markets, strategies, prices) = tokio::join!(
        providers::markets::fetch_markets(client),
        providers::strategies::fetch_strategies(client),
        providers::prices::fetch_prices(client),
    );
    let mut markets = markets.context("loading lending markets")?;
    let strategies = strategies.context("loading yield strategies")?;
    let prices = prices.context("loading token prices")?;

    for market in &mut markets {
        market.price_usd = prices.get(&market.address.to_lowercase()).copied();
    }
    resolve_logos(client, &mut markets).await;

    Ok(MarketData {
        markets,
        strategies,
    })
}

/// Load market data from a local JSON file, or from the network when no
/// file is given. The file shape is exactly the `example` command output.
pub fn load_or_read(path: Option<&Path>) -> Result<MarketData> {
    match path {
        Some(path) => {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("reading market data file {}", path.display()))?;
            serde_json::from_str(&contents)
                .with_context(|| format!("parsing market data file {}", path.display()))
        }
        None => load_blocking(),
    }
}

/// Blocking wrapper for synchronous CLI entry points: build a runtime, run
/// the load to completion.
pub fn load_blocking() -> Result<MarketData> {
    let rt = tokio::runtime::Runtime::new().context("creating async runtime")?;
    rt.block_on(async {
        let client = client()?;
        load(&client).await
    })
}

/// Probe the logo CDN for each market, one at a time. A missing logo or a
/// failed probe falls back to the placeholder; probes never fail the load.
async fn resolve_logos(client: &reqwest::Client, markets: &mut [Market]) {
    let pb = indicatif::ProgressBar::new(markets.len() as u64);
    pb.set_style(
        indicatif::ProgressStyle::default_bar()
            .template("  resolving logos [{bar:30}] {pos}/{len}")
            .unwrap(),
    );
    for market in markets.iter_mut() {
        market.logo_url = providers::logos::resolve(client, &market.address).await;
        pb.inc(1);
    }
    pb.finish_and_clear();
}
