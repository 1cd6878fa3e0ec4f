use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A lending market the user can deposit collateral into and borrow from.
///
/// All rate fields are percentages on the 0-100 scale; the upstream API
/// serves fractions, converted once at load time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Market {
    /// Token ticker, e.g. "WETH".
    pub symbol: String,
    /// Human-readable name, e.g. "Wrapped Ether".
    pub name: String,
    /// On-chain address of the underlying token (0x-prefixed).
    pub address: String,
    /// Maximum loan-to-value, percent.
    pub max_ltv: f64,
    /// Current pool utilization, percent.
    pub utilization: f64,
    /// Variable borrow APY, percent.
    pub borrow_apy: f64,
    /// Spot price in USD, when the price feed covers the token.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_usd: Option<f64>,
    /// Resolved logo URL, or the placeholder when the CDN has none.
    #[serde(default)]
    pub logo_url: String,
}
