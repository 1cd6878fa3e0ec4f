pub mod logos;
pub mod markets;
pub mod prices;
pub mod strategies;
