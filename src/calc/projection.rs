use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::amount::parse_amount;

/// Projected net yield of a leveraged position.
///
/// All dollar figures are in the deposit's pricing unit. Period figures
/// are linear splits of the annual number: both APYs are treated as simple
/// annual rates, not compounded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct NetYieldProjection {
    /// Net yield over one year: strategy yield on the borrowed funds minus
    /// the cost of borrowing them.
    pub annual: f64,
    /// Net yield as a percentage of the deposit (not of the borrow), so it
    /// can exceed the strategy APY under leverage and go negative when the
    /// borrow cost dominates.
    pub net_apy: f64,
    pub daily: f64,
    pub weekly: f64,
    pub monthly: f64,
}

/// Project the net yield of borrowing at `borrow_apy` and deploying the
/// borrowed amount at `strategy_apy` (both percent, 0-100 scale).
///
/// Returns `None` unless both a market and a strategy are selected and
/// both amounts pass the positivity gate; the caller withholds the results
/// panel entirely in that case. The gate also makes the `net / deposit`
/// division unreachable at zero.
pub fn project_net_yield(
    borrow_apy: Option<f64>,
    strategy_apy: Option<f64>,
    deposit: &str,
    borrow: &str,
) -> Option<NetYieldProjection> {
    let borrow_apy = borrow_apy?;
    let strategy_apy = strategy_apy?;
    let deposit = parse_amount(deposit)?;
    let borrow = parse_amount(borrow)?;

    let borrow_cost = borrow * (borrow_apy / 100.0);
    let strategy_yield = borrow * (strategy_apy / 100.0);
    let net_yield = strategy_yield - borrow_cost;

    Some(NetYieldProjection {
        annual: net_yield,
        net_apy: (net_yield / deposit) * 100.0,
        daily: net_yield / 365.0,
        weekly: net_yield / 52.0,
        monthly: net_yield / 12.0,
    })
}
