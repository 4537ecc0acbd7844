//! CLI interface for chart-risk
//!
//! Provides subcommands for:
//! - `anchor`: Check an entry price against drawn markers
//! - `take-profit`: Check for a take-profit zone beyond the market
//! - `size`: Size a batch of pending orders
//! - `market`: Size a single market order
//! - `config`: Show configuration

mod anchor;
mod size;

pub use anchor::{AnchorArgs, TakeProfitArgs};
pub use size::{MarketArgs, SizeArgs};

use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::instrument::Instrument;

#[derive(Parser, Debug)]
#[command(name = "chart-risk")]
#[command(about = "Support/resistance entry checks and risk-based position sizing")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check whether an entry is anchored to a support/resistance marker
    Anchor(AnchorArgs),
    /// Check whether a take-profit zone is drawn beyond the market
    TakeProfit(TakeProfitArgs),
    /// Size a batch of pending orders
    Size(SizeArgs),
    /// Size a single market order
    Market(MarketArgs),
    /// Show configuration
    Config,
}

fn find_instrument<'a>(config: &'a Config, symbol: &str) -> anyhow::Result<&'a Instrument> {
    config
        .instrument(symbol)
        .ok_or_else(|| anyhow::anyhow!("Unknown instrument: {}", symbol))
}
