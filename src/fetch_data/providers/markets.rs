use anyhow::{Context, Result};
use serde::Deserialize;

use crate::model::Market;

const MARKETS_URL: &str = "https://api.curve.finance/v1/getLendingVaults/arbitrum";

// ── API response types ───────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct MarketsResponse {
    data: Vec<RawMarket>,
}

/// One market as served by the index. Rate fields are fractions
/// (0.62 = 62%); conversion to percent happens in `normalize`.
#[derive(Debug, Deserialize)]
#[allow(dead_code)]
struct RawMarket {
    symbol: String,
    name: String,
    address: String,
    #[serde(rename = "maxLtv")]
    max_ltv: f64,
    utilization: Option<f64>,
    #[serde(rename = "borrowApy")]
    borrow_apy: Option<f64>,
    #[serde(rename = "totalSupplied")]
    total_supplied: Option<f64>,
}

impl RawMarket {
    /// Fraction → percent mapping. This must stay a plain `* 100.0` to
    /// remain compatible with the upstream source.
    fn normalize(self) -> Market {
        Market {
            symbol: self.symbol,
            name: self.name,
            address: self.address,
            max_ltv: self.max_ltv * 100.0,
            utilization: self.utilization.unwrap_or(0.0) * 100.0,
            borrow_apy: self.borrow_apy.unwrap_or(0.0) * 100.0,
            price_usd: None,
            logo_url: String::new(),
        }
    }
}

// ── Public API ───────────────────────────────────────────────────────

/// Fetch the lending-market index and normalize it into [`Market`] records.
pub async fn fetch_markets(client: &reqwest::Client) -> Result<Vec<Market>> {
    let resp = client
        .get(MARKETS_URL)
        .send()
        .await
        .context("requesting lending markets")?
        .error_for_status()
        .context("lending markets endpoint returned an error status")?
        .json::<MarketsResponse>()
        .await
        .context("decoding lending markets response")?;

    Ok(resp.data.into_iter().map(RawMarket::normalize).collect())
}
