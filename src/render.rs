use std::fmt::Write;

use crate::calc::{self, LIQUIDATION_RISK_THRESHOLD};
use crate::model::{Market, Strategy};
use crate::session::Snapshot;

/// Render the lending-markets table.
pub fn markets_table(markets: &[Market]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", "═".repeat(86));
    let _ = writeln!(out, "  Lending Markets");
    let _ = writeln!(out, "{}", "═".repeat(86));
    let _ = writeln!(
        out,
        "  {:<8} {:<28} {:>8} {:>8} {:>10} {:>12}",
        "Symbol", "Name", "MaxLTV%", "Util%", "Borrow%", "Price"
    );
    let _ = writeln!(out, "  {}", "-".repeat(80));
    for m in markets {
        let price = match m.price_usd {
            Some(p) => format!("${p:.2}"),
            None => "-".to_string(),
        };
        let _ = writeln!(
            out,
            "  {:<8} {:<28} {:>8.2} {:>8.2} {:>10.2} {:>12}",
            m.symbol, m.name, m.max_ltv, m.utilization, m.borrow_apy, price
        );
    }
    let _ = writeln!(out, "{}", "═".repeat(86));
    out
}

/// Render the yield-strategies table.
pub fn strategies_table(strategies: &[Strategy]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", "═".repeat(86));
    let _ = writeln!(out, "  Yield Strategies");
    let _ = writeln!(out, "{}", "═".repeat(86));
    let _ = writeln!(
        out,
        "  {:<24} {:<28} {:>8} {:<10} {:>10}",
        "Id", "Name", "APY%", "Token", "MinDeposit"
    );
    let _ = writeln!(out, "  {}", "-".repeat(80));
    for s in strategies {
        let _ = writeln!(
            out,
            "  {:<24} {:<28} {:>8.2} {:<10} {:>10.2}",
            s.id, s.name, s.apy, s.token, s.min_deposit
        );
    }
    let _ = writeln!(out, "{}", "═".repeat(86));
    out
}

/// Render the derived view of a session: selections, the health-factor
/// line, the conditional risk warning, and the conditional results panel.
///
/// Mirrors the display rules exactly: the health-factor line is suppressed
/// at the `0.0` sentinel, and the whole results panel is withheld while
/// the projection is `None`.
pub fn snapshot_panel(snapshot: &Snapshot) -> String {
    let mut out = String::new();

    match &snapshot.market {
        Some(m) => {
            let _ = writeln!(
                out,
                "  Market:   {} ({}), max LTV {:.2}%, borrow APY {:.2}%",
                m.symbol, m.name, m.max_ltv, m.borrow_apy
            );
        }
        None => {
            let _ = writeln!(out, "  Market:   (none selected)");
        }
    }
    match &snapshot.strategy {
        Some(s) => {
            let _ = writeln!(out, "  Strategy: {}, APY {:.2}% ({})", s.name, s.apy, s.token);
        }
        None => {
            let _ = writeln!(out, "  Strategy: (none selected)");
        }
    }

    if snapshot.health_factor > 0.0 {
        let _ = writeln!(out, "\n  Health factor: {:.2}%", snapshot.health_factor);
    }
    if snapshot.liquidation_risk {
        let _ = writeln!(
            out,
            "  WARN  high liquidation risk: health factor below {LIQUIDATION_RISK_THRESHOLD:.0}%"
        );
    }

    if let Some(p) = &snapshot.projection {
        let _ = writeln!(out, "\n  Projected Net Yield");
        let _ = writeln!(out, "  {}", "-".repeat(40));
        let _ = writeln!(out, "  {:<12} {:>14}", "Net APY", format!("{:.2}%", p.net_apy));
        let _ = writeln!(out, "  {:<12} {:>+14.2}", "Daily", p.daily);
        let _ = writeln!(out, "  {:<12} {:>+14.2}", "Weekly", p.weekly);
        let _ = writeln!(out, "  {:<12} {:>+14.2}", "Monthly", p.monthly);
        let _ = writeln!(out, "  {:<12} {:>+14.2}", "Annual", p.annual);

        if let Some(s) = &snapshot.strategy {
            if s.min_deposit > 0.0 {
                if let Some(borrow) = calc::parse_amount(&snapshot.input.borrow) {
                    if borrow < s.min_deposit {
                        let _ = writeln!(
                            out,
                            "  note: borrow amount {:.2} is below the strategy minimum of {:.2}",
                            borrow, s.min_deposit
                        );
                    }
                }
            }
        }
    }

    out
}
