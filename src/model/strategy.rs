use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A yield strategy the borrowed funds can be deployed into.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Strategy {
    /// Stable identifier from the upstream strategy index.
    pub id: String,
    /// Display name, e.g. "crvUSD/USDC.e Stable Pool".
    pub name: String,
    /// Strategy APY, percent.
    pub apy: f64,
    /// Label of the token the strategy accepts, e.g. "USDC.e".
    pub token: String,
    /// Minimum deposit in token units. Informational only; the calculator
    /// never blocks on it.
    #[serde(default)]
    pub min_deposit: f64,
}
