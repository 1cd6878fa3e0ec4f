use std::collections::HashMap;

use anyhow::{Context, Result};
use serde::Deserialize;

const PRICES_URL: &str = "https://prices.curve.finance/v1/usd_price/arbitrum";

// ── API response types ───────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct PricesResponse {
    data: Vec<RawPrice>,
}

#[derive(Debug, Deserialize)]
struct RawPrice {
    address: String,
    usd_price: f64,
}

// ── Public API ───────────────────────────────────────────────────────

/// Fetch the spot-price listing, keyed by lowercase token address.
pub async fn fetch_prices(client: &reqwest::Client) -> Result<HashMap<String, f64>> {
    let resp = client
        .get(PRICES_URL)
        .send()
        .await
        .context("requesting token prices")?
        .error_for_status()
        .context("token prices endpoint returned an error status")?
        .json::<PricesResponse>()
        .await
        .context("decoding token prices response")?;

    Ok(resp
        .data
        .into_iter()
        .map(|p| (p.address.to_lowercase(), p.usd_price))
        .collect())
}
