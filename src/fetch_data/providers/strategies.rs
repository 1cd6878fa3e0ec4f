use anyhow::{Context, Result};
use serde::Deserialize;

use crate::model::Strategy;

const POOLS_URL: &str = "https://api.curve.finance/v1/getPools/arbitrum/factory-stable-ng";

// Deposit tokens the label heuristic recognizes by address.
const USDCE_ARBITRUM: &str = "0xff970a61a04b1ca14834a43f5de4533ebddb5cc8";
const CRVUSD_ARBITRUM: &str = "0x498bf2b1e120fed3ad3d42ea2165e9b73f99c1e5";

// ── API response types ───────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct PoolsResponse {
    data: PoolsData,
}

#[derive(Debug, Deserialize)]
struct PoolsData {
    #[serde(rename = "poolData")]
    pools: Vec<RawPool>,
}

/// One strategy pool from the APY breakdown. APY arrives as a fraction and
/// is converted to percent in `normalize`.
#[derive(Debug, Deserialize)]
#[allow(dead_code)]
struct RawPool {
    id: String,
    name: String,
    address: String,
    #[serde(rename = "latestDailyApy")]
    apy: Option<f64>,
    #[serde(rename = "depositToken")]
    deposit_token: Option<String>,
    #[serde(rename = "depositSymbol")]
    deposit_symbol: Option<String>,
    #[serde(rename = "minDeposit")]
    min_deposit: Option<f64>,
}

impl RawPool {
    /// Fraction → percent mapping; must stay a plain `* 100.0` to remain
    /// compatible with the upstream source. Pools without an APY have
    /// nothing to project and are dropped by the caller.
    fn normalize(self) -> Option<Strategy> {
        let apy = self.apy?;
        let token = token_label(
            self.deposit_token.as_deref(),
            self.deposit_symbol.as_deref(),
        );
        Some(Strategy {
            id: self.id,
            name: self.name,
            apy: apy * 100.0,
            token,
            min_deposit: self.min_deposit.unwrap_or(0.0),
        })
    }
}

// ── Public API ───────────────────────────────────────────────────────

/// Fetch the strategy/APY breakdown and normalize it into [`Strategy`]
/// records, highest APY first.
pub async fn fetch_strategies(client: &reqwest::Client) -> Result<Vec<Strategy>> {
    let resp = client
        .get(POOLS_URL)
        .send()
        .await
        .context("requesting strategy pools")?
        .error_for_status()
        .context("strategy pools endpoint returned an error status")?
        .json::<PoolsResponse>()
        .await
        .context("decoding strategy pools response")?;

    let mut strategies: Vec<Strategy> = resp
        .data
        .pools
        .into_iter()
        .filter_map(RawPool::normalize)
        .collect();

    strategies.sort_by(|a, b| {
        b.apy
            .partial_cmp(&a.apy)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    Ok(strategies)
}

// ── Internal ─────────────────────────────────────────────────────────

/// Best-effort label for a strategy's deposit token.
///
/// Known addresses map to their display label; otherwise the upstream
/// symbol is used, and as a last resort a shortened address, so the label
/// is never empty.
fn token_label(address: Option<&str>, symbol: Option<&str>) -> String {
    if let Some(address) = address {
        let addr = address.to_lowercase();
        if addr.contains(&USDCE_ARBITRUM[2..]) {
            return "USDC.e".to_string();
        }
        if addr.contains(&CRVUSD_ARBITRUM[2..]) {
            return "crvUSD".to_string();
        }
    }
    if let Some(symbol) = symbol {
        if !symbol.is_empty() {
            return symbol.to_string();
        }
    }
    match address {
        Some(a) if a.len() > 10 => format!("{}…{}", &a[..6], &a[a.len() - 4..]),
        Some(a) => a.to_string(),
        None => "?".to_string(),
    }
}
