pub mod market;
pub mod position;
pub mod strategy;

pub use market::Market;
pub use position::PositionInput;
pub use strategy::Strategy;
