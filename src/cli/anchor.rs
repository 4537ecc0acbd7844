//! Entry check command implementations

use clap::Args;
use rust_decimal::Decimal;
use std::path::{Path, PathBuf};

use super::find_instrument;
use crate::config::Config;
use crate::marker::MarkerSnapshot;
use crate::order::TradeType;
use crate::risk::{has_opposing_take_profit_zone, EntryGate};

fn load_markers(path: &Path) -> anyhow::Result<MarkerSnapshot> {
    let content = std::fs::read_to_string(path)?;
    MarkerSnapshot::from_json(&content)
}

#[derive(Args, Debug)]
pub struct AnchorArgs {
    /// JSON marker snapshot
    #[arg(short, long)]
    pub markers: PathBuf,

    /// Instrument symbol from the config
    #[arg(short, long)]
    pub symbol: String,

    /// Trade direction: buy or sell
    #[arg(long)]
    pub side: TradeType,

    /// Candidate entry price
    #[arg(long)]
    pub price: Decimal,

    /// Override the configured tolerance
    #[arg(long)]
    pub threshold_pips: Option<Decimal>,
}

impl AnchorArgs {
    pub fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let instrument = find_instrument(config, &self.symbol)?;
        let snapshot = load_markers(&self.markers)?;

        let gate = match self.threshold_pips {
            Some(pips) => EntryGate::new(pips),
            None => EntryGate::from_config(&config.risk),
        };
        let anchored = gate.allows(self.side, self.price, instrument, snapshot.as_slice());

        tracing::info!(
            symbol = %instrument.symbol,
            side = %self.side,
            price = %self.price,
            threshold_pips = %gate.threshold_pips,
            markers = snapshot.len(),
            anchored,
            "Entry check"
        );
        println!("{}", anchored);
        Ok(())
    }
}

#[derive(Args, Debug)]
pub struct TakeProfitArgs {
    /// JSON marker snapshot
    #[arg(short, long)]
    pub markers: PathBuf,

    /// Trade direction: buy or sell
    #[arg(long)]
    pub side: TradeType,

    /// Current ask
    #[arg(long)]
    pub ask: Decimal,

    /// Current bid
    #[arg(long)]
    pub bid: Decimal,
}

impl TakeProfitArgs {
    pub fn execute(&self) -> anyhow::Result<()> {
        let snapshot = load_markers(&self.markers)?;
        let found =
            has_opposing_take_profit_zone(self.side, self.ask, self.bid, snapshot.as_slice());

        tracing::info!(
            side = %self.side,
            ask = %self.ask,
            bid = %self.bid,
            found,
            "Take-profit zone check"
        );
        println!("{}", found);
        Ok(())
    }
}
