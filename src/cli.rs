use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Leveraged-yield calculator: browse lending markets, pick a strategy,
/// and project health factor and net yield for a looped position.
#[derive(Parser)]
#[command(name = "yield-scope", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// List lending markets with LTV, utilization, borrow APY and price
    Markets {
        /// Read market data from a JSON file instead of the network
        #[arg(long)]
        data: Option<PathBuf>,
    },

    /// List yield strategies with APY, deposit token and minimum deposit
    Strategies {
        /// Read market data from a JSON file instead of the network
        #[arg(long)]
        data: Option<PathBuf>,
    },

    /// Compute health factor and net-yield projection for one position
    Quote {
        /// Market symbol to collateralize, e.g. "WETH"
        #[arg(long)]
        market: String,

        /// Strategy id or name to deploy the borrowed funds into
        #[arg(long)]
        strategy: String,

        /// Deposit amount
        #[arg(long)]
        deposit: String,

        /// Borrow amount
        #[arg(long)]
        borrow: String,

        /// Read market data from a JSON file instead of the network
        #[arg(long)]
        data: Option<PathBuf>,

        /// Output the raw snapshot as JSON instead of a panel
        #[arg(long)]
        json: bool,
    },

    /// Pick a market and strategy interactively and type amounts
    Interactive {
        /// Read market data from a JSON file instead of the network
        #[arg(long)]
        data: Option<PathBuf>,
    },

    /// Output an example market-data JSON to stdout (usable with --data)
    Example,

    /// Output the JSON schema for market-data files (for tooling)
    Schema,
}
