use wasm_bindgen::prelude::*;

use crate::calc;

/// Health factor in percent; `0` when no market is selected or either
/// amount is not a positive number. Pass `max_ltv` on the 0-100 scale,
/// or `undefined` when nothing is selected.
#[wasm_bindgen]
pub fn health_factor(max_ltv: Option<f64>, deposit: &str, borrow: &str) -> f64 {
    calc::health_factor(max_ltv, deposit, borrow)
}

/// Whether a computed health factor should show the liquidation-risk
/// warning.
#[wasm_bindgen]
pub fn at_liquidation_risk(health_factor: f64) -> bool {
    calc::at_liquidation_risk(health_factor)
}

/// Net-yield projection as a JS object
/// (`{annual, net_apy, daily, weekly, monthly}`), or `null` while the
/// position is incomplete and the results panel should stay hidden.
#[wasm_bindgen]
pub fn project_net_yield(
    borrow_apy: Option<f64>,
    strategy_apy: Option<f64>,
    deposit: &str,
    borrow: &str,
) -> JsValue {
    match calc::project_net_yield(borrow_apy, strategy_apy, deposit, borrow) {
        Some(projection) => serde_wasm_bindgen::to_value(&projection).unwrap_or(JsValue::NULL),
        None => JsValue::NULL,
    }
}
