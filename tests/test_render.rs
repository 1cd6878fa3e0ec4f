use yield_scope::model::{Market, Strategy};
use yield_scope::render;
use yield_scope::session::{MarketData, Session};

fn data() -> MarketData {
    MarketData {
        markets: vec![Market {
            symbol: "WETH".into(),
            name: "Wrapped Ether".into(),
            address: "0x82aF49447D8a07e3bd95BD0d56f35241523fBab1".into(),
            max_ltv: 70.0,
            utilization: 62.34,
            borrow_apy: 5.0,
            price_usd: Some(3150.25),
            logo_url: String::new(),
        }],
        strategies: vec![Strategy {
            id: "s1".into(),
            name: "Stable Pool".into(),
            apy: 12.0,
            token: "crvUSD".into(),
            min_deposit: 100.0,
        }],
    }
}

#[test]
fn panel_withholds_everything_when_nothing_is_selected() {
    let session = Session::new(data());
    let panel = render::snapshot_panel(&session.snapshot());

    assert!(panel.contains("(none selected)"));
    assert!(!panel.contains("Health factor"));
    assert!(!panel.contains("Projected Net Yield"));
    assert!(!panel.contains("WARN"));
}

#[test]
fn panel_shows_health_factor_without_risk_warning_when_safe() {
    let mut session = Session::new(data());
    session.select_market("WETH").unwrap();
    session.set_deposit("1000");
    session.set_borrow("500");

    let panel = render::snapshot_panel(&session.snapshot());
    assert!(panel.contains("Health factor: 140.00%"));
    assert!(!panel.contains("WARN"));
    // No strategy selected, so still no results panel.
    assert!(!panel.contains("Projected Net Yield"));
}

#[test]
fn panel_shows_risk_warning_below_threshold() {
    let mut session = Session::new(data());
    session.select_market("WETH").unwrap();
    session.set_deposit("100");
    session.set_borrow("90");

    // maxLtv=70, deposit=100, borrow=90 → ≈77.78%
    let panel = render::snapshot_panel(&session.snapshot());
    assert!(panel.contains("Health factor: 77.78%"));
    assert!(panel.contains("WARN"));
    assert!(panel.contains("110"));
}

#[test]
fn panel_renders_full_projection() {
    let mut session = Session::new(data());
    session.select_market("WETH").unwrap();
    session.select_strategy("s1").unwrap();
    session.set_deposit("1000");
    session.set_borrow("1000");

    let panel = render::snapshot_panel(&session.snapshot());
    assert!(panel.contains("Projected Net Yield"));
    assert!(panel.contains("Net APY"));
    assert!(panel.contains("7.00%"));
    assert!(panel.contains("Annual"));
    // borrow 1000 is above the 100 minimum, so no note
    assert!(!panel.contains("below the strategy minimum"));
}

#[test]
fn panel_notes_borrow_below_strategy_minimum() {
    let mut session = Session::new(data());
    session.select_market("WETH").unwrap();
    session.select_strategy("s1").unwrap();
    session.set_deposit("1000");
    session.set_borrow("50");

    let panel = render::snapshot_panel(&session.snapshot());
    assert!(panel.contains("below the strategy minimum"));
}

#[test]
fn tables_list_every_record() {
    let d = data();
    let markets = render::markets_table(&d.markets);
    assert!(markets.contains("WETH"));
    assert!(markets.contains("$3150.25"));

    let strategies = render::strategies_table(&d.strategies);
    assert!(strategies.contains("Stable Pool"));
    assert!(strategies.contains("crvUSD"));
}
