use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::calc;
use crate::model::{Market, PositionInput, Strategy};
use crate::validate::InputError;

/// Everything the loader produced, ready for a calculator session.
///
/// This is also the on-disk shape accepted by `--data` files; `example`
/// and `schema` print a sample and the JSON Schema for it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct MarketData {
    pub markets: Vec<Market>,
    pub strategies: Vec<Strategy>,
}

/// One calculator session: loaded data plus the user's current picks and
/// typed amounts.
///
/// Selections are indices into the loaded lists. Derived numbers are never
/// stored: every input event is answered by deriving a fresh [`Snapshot`],
/// so the arithmetic stays testable in isolation from any rendering.
#[derive(Debug, Clone)]
pub struct Session {
    data: MarketData,
    selected_market: Option<usize>,
    selected_strategy: Option<usize>,
    input: PositionInput,
}

/// Immutable derived view of a session at one instant.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct Snapshot {
    pub market: Option<Market>,
    pub strategy: Option<Strategy>,
    pub input: PositionInput,
    /// Health factor percent; `0.0` means "not applicable" and the
    /// health-factor line is suppressed.
    pub health_factor: f64,
    /// High-liquidation-risk flag (health factor computed and below the
    /// risk threshold).
    pub liquidation_risk: bool,
    /// Net-yield projection, or `None` while the position is incomplete
    /// and the results panel is withheld entirely.
    pub projection: Option<calc::NetYieldProjection>,
}

impl Session {
    pub fn new(data: MarketData) -> Self {
        Self {
            data,
            selected_market: None,
            selected_strategy: None,
            input: PositionInput::default(),
        }
    }

    pub fn data(&self) -> &MarketData {
        &self.data
    }

    /// Select a market by ticker symbol (case-insensitive).
    pub fn select_market(&mut self, symbol: &str) -> Result<(), InputError> {
        match self
            .data
            .markets
            .iter()
            .position(|m| m.symbol.eq_ignore_ascii_case(symbol))
        {
            Some(i) => {
                self.selected_market = Some(i);
                Ok(())
            }
            None => Err(InputError::UnknownMarket {
                symbol: symbol.to_string(),
            }),
        }
    }

    /// Select a strategy by id or by display name (case-insensitive).
    pub fn select_strategy(&mut self, id: &str) -> Result<(), InputError> {
        match self
            .data
            .strategies
            .iter()
            .position(|s| s.id.eq_ignore_ascii_case(id) || s.name.eq_ignore_ascii_case(id))
        {
            Some(i) => {
                self.selected_strategy = Some(i);
                Ok(())
            }
            None => Err(InputError::UnknownStrategy { id: id.to_string() }),
        }
    }

    pub fn clear_market(&mut self) {
        self.selected_market = None;
    }

    pub fn clear_strategy(&mut self) {
        self.selected_strategy = None;
    }

    pub fn set_deposit(&mut self, raw: impl Into<String>) {
        self.input.deposit = raw.into();
    }

    pub fn set_borrow(&mut self, raw: impl Into<String>) {
        self.input.borrow = raw.into();
    }

    /// Derive the current snapshot. Pure with respect to the session:
    /// calling it twice without an input event gives identical results.
    pub fn snapshot(&self) -> Snapshot {
        let market = self
            .selected_market
            .and_then(|i| self.data.markets.get(i))
            .cloned();
        let strategy = self
            .selected_strategy
            .and_then(|i| self.data.strategies.get(i))
            .cloned();

        let health_factor = calc::health_factor(
            market.as_ref().map(|m| m.max_ltv),
            &self.input.deposit,
            &self.input.borrow,
        );
        let projection = calc::project_net_yield(
            market.as_ref().map(|m| m.borrow_apy),
            strategy.as_ref().map(|s| s.apy),
            &self.input.deposit,
            &self.input.borrow,
        );

        Snapshot {
            market,
            strategy,
            input: self.input.clone(),
            health_factor,
            liquidation_risk: calc::at_liquidation_risk(health_factor),
            projection,
        }
    }
}
