use yield_scope::model::{Market, Strategy};
use yield_scope::session::{MarketData, Session};
use yield_scope::validate::InputError;

// ── Helpers ──────────────────────────────────────────────────────────

fn sample_data() -> MarketData {
    MarketData {
        markets: vec![
            Market {
                symbol: "WETH".into(),
                name: "Wrapped Ether".into(),
                address: "0x82aF49447D8a07e3bd95BD0d56f35241523fBab1".into(),
                max_ltv: 80.0,
                utilization: 62.34,
                borrow_apy: 5.0,
                price_usd: Some(3150.25),
                logo_url: String::new(),
            },
            Market {
                symbol: "WBTC".into(),
                name: "Wrapped Bitcoin".into(),
                address: "0x2f2a2543B76A4166549F7aaB2e75Bef0aefC5B0f".into(),
                max_ltv: 70.0,
                utilization: 48.91,
                borrow_apy: 3.87,
                price_usd: None,
                logo_url: String::new(),
            },
        ],
        strategies: vec![Strategy {
            id: "factory-stable-ng-11".into(),
            name: "crvUSD/USDC.e Stable Pool".into(),
            apy: 12.0,
            token: "crvUSD".into(),
            min_deposit: 100.0,
        }],
    }
}

// ── Selection ────────────────────────────────────────────────────────

#[test]
fn select_market_is_case_insensitive() {
    let mut session = Session::new(sample_data());
    session.select_market("weth").unwrap();
    assert_eq!(session.snapshot().market.unwrap().symbol, "WETH");
}

#[test]
fn select_strategy_by_id_or_name() {
    let mut session = Session::new(sample_data());
    session.select_strategy("factory-stable-ng-11").unwrap();
    assert!(session.snapshot().strategy.is_some());

    let mut session = Session::new(sample_data());
    session.select_strategy("crvUSD/USDC.e Stable Pool").unwrap();
    assert!(session.snapshot().strategy.is_some());
}

#[test]
fn unknown_selections_are_typed_errors() {
    let mut session = Session::new(sample_data());
    assert_eq!(
        session.select_market("DOGE"),
        Err(InputError::UnknownMarket {
            symbol: "DOGE".into()
        })
    );
    assert_eq!(
        session.select_strategy("nope"),
        Err(InputError::UnknownStrategy { id: "nope".into() })
    );
    // Failed selections leave the session unchanged.
    let snapshot = session.snapshot();
    assert!(snapshot.market.is_none());
    assert!(snapshot.strategy.is_none());
}

// ── Derivation rules ─────────────────────────────────────────────────

#[test]
fn market_alone_yields_health_factor_but_no_projection() {
    let mut session = Session::new(sample_data());
    session.select_market("WETH").unwrap();
    session.set_deposit("1000");
    session.set_borrow("500");

    let snapshot = session.snapshot();
    assert!((snapshot.health_factor - 160.0).abs() < 1e-9);
    assert!(!snapshot.liquidation_risk);
    assert!(snapshot.projection.is_none(), "no strategy, no panel");
}

#[test]
fn full_position_yields_projection() {
    let mut session = Session::new(sample_data());
    session.select_market("WETH").unwrap();
    session.select_strategy("factory-stable-ng-11").unwrap();
    session.set_deposit("1000");
    session.set_borrow("1000");

    let snapshot = session.snapshot();
    let p = snapshot.projection.unwrap();
    // borrow * (12% − 5%) = 70 on a 1000 deposit
    assert!((p.annual - 70.0).abs() < 1e-9);
    assert!((p.net_apy - 7.0).abs() < 1e-9);
}

#[test]
fn invalid_amount_withholds_all_derived_output() {
    let mut session = Session::new(sample_data());
    session.select_market("WETH").unwrap();
    session.select_strategy("factory-stable-ng-11").unwrap();
    session.set_deposit("1000");
    session.set_borrow("oops");

    let snapshot = session.snapshot();
    assert_eq!(snapshot.health_factor, 0.0);
    assert!(!snapshot.liquidation_risk);
    assert!(snapshot.projection.is_none());
}

#[test]
fn input_events_recompute_the_snapshot() {
    let mut session = Session::new(sample_data());
    session.select_market("WBTC").unwrap();
    session.set_deposit("100");
    session.set_borrow("90");

    // maxLtv=70, deposit=100, borrow=90 → ≈77.78%, risk flag shown
    let before = session.snapshot();
    assert!(before.liquidation_risk);

    session.set_borrow("30");
    let after = session.snapshot();
    assert!(after.health_factor > before.health_factor);
    assert!(!after.liquidation_risk);
}

#[test]
fn snapshot_is_pure() {
    let mut session = Session::new(sample_data());
    session.select_market("WETH").unwrap();
    session.select_strategy("factory-stable-ng-11").unwrap();
    session.set_deposit("1000");
    session.set_borrow("250");

    assert_eq!(session.snapshot(), session.snapshot());
}

#[test]
fn clearing_returns_to_the_inert_state() {
    let mut session = Session::new(sample_data());
    session.select_market("WETH").unwrap();
    session.select_strategy("factory-stable-ng-11").unwrap();
    session.set_deposit("1000");
    session.set_borrow("500");
    assert!(session.snapshot().projection.is_some());

    session.clear_market();
    session.clear_strategy();
    let snapshot = session.snapshot();
    assert_eq!(snapshot.health_factor, 0.0);
    assert!(snapshot.projection.is_none());
}

// ── Data file format ─────────────────────────────────────────────────

#[test]
fn market_data_round_trips_through_json() {
    let data = sample_data();
    let json = serde_json::to_string_pretty(&data).unwrap();
    let back: MarketData = serde_json::from_str(&json).unwrap();
    assert_eq!(back, data);
}

#[test]
fn market_data_accepts_minimal_records() {
    // price_usd and logo_url are optional in --data files.
    let json = r#"{
        "markets": [{
            "symbol": "WETH",
            "name": "Wrapped Ether",
            "address": "0x82aF49447D8a07e3bd95BD0d56f35241523fBab1",
            "max_ltv": 80.0,
            "utilization": 62.3,
            "borrow_apy": 5.1
        }],
        "strategies": [{
            "id": "s1",
            "name": "Stable Pool",
            "apy": 12.0,
            "token": "crvUSD"
        }]
    }"#;
    let data: MarketData = serde_json::from_str(json).unwrap();
    assert_eq!(data.markets[0].price_usd, None);
    assert_eq!(data.markets[0].logo_url, "");
    assert_eq!(data.strategies[0].min_deposit, 0.0);
}
