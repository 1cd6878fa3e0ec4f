pub mod amount;
pub mod health;
pub mod projection;

pub use amount::parse_amount;
pub use health::{LIQUIDATION_RISK_THRESHOLD, at_liquidation_risk, health_factor};
pub use projection::{NetYieldProjection, project_net_yield};
