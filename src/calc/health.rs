use super::amount::parse_amount;

/// Health factors below this percentage are flagged as high liquidation risk.
pub const LIQUIDATION_RISK_THRESHOLD: f64 = 110.0;

/// Health factor of a position, in percent.
///
/// `max_ltv` is the selected market's maximum loan-to-value on the 0-100
/// scale, or `None` when no market is selected. Returns `0.0` when the
/// market is absent or either amount fails the positivity gate; callers
/// treat `0.0` as "nothing to show". The positivity gate on `borrow` is
/// what keeps the division defined; there is no separate zero check.
pub fn health_factor(max_ltv: Option<f64>, deposit: &str, borrow: &str) -> f64 {
    let (Some(max_ltv), Some(deposit), Some(borrow)) =
        (max_ltv, parse_amount(deposit), parse_amount(borrow))
    else {
        return 0.0;
    };

    let max_borrow = deposit * (max_ltv / 100.0);
    (max_borrow / borrow) * 100.0
}

/// Whether a computed health factor sits in the high-liquidation-risk band.
/// The `0.0` sentinel is not a risk state, it means "nothing computed".
pub fn at_liquidation_risk(health_factor: f64) -> bool {
    health_factor > 0.0 && health_factor < LIQUIDATION_RISK_THRESHOLD
}
