use yield_scope::model::{Market, Strategy};
use yield_scope::session::MarketData;

/// Print an example market-data JSON to stdout. The output round-trips
/// through `--data` on every data-consuming subcommand.
pub fn run() -> anyhow::Result<()> {
    let data = MarketData {
        markets: vec![
            Market {
                symbol: "WETH".into(),
                name: "Wrapped Ether".into(),
                address: "0x82aF49447D8a07e3bd95BD0d56f35241523fBab1".into(),
                max_ltv: 80.0,
                utilization: 62.34,
                borrow_apy: 5.12,
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
                price_usd: Some(64210.0),
                logo_url: String::new(),
            },
            Market {
                symbol: "crvUSD".into(),
                name: "Curve USD".into(),
                address: "0x498Bf2B1e120FeD3ad3D42EA2165E9b73f99C1e5".into(),
                max_ltv: 90.0,
                utilization: 71.05,
                borrow_apy: 8.44,
                price_usd: Some(0.9994),
                logo_url: String::new(),
            },
        ],
        strategies: vec![
            Strategy {
                id: "factory-stable-ng-11".into(),
                name: "crvUSD/USDC.e Stable Pool".into(),
                apy: 12.4,
                token: "crvUSD".into(),
                min_deposit: 100.0,
            },
            Strategy {
                id: "factory-stable-ng-42".into(),
                name: "USDC.e Single-Sided Vault".into(),
                apy: 7.9,
                token: "USDC.e".into(),
                min_deposit: 0.0,
            },
        ],
    };

    println!("{}", serde_json::to_string_pretty(&data)?);
    Ok(())
}
