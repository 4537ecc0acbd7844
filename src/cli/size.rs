//! Sizing command implementations

use clap::Args;
use rust_decimal::Decimal;
use std::path::PathBuf;

use super::find_instrument;
use crate::config::Config;
use crate::order::{OrderTicket, TradeType};
use crate::risk::{PositionSizer, RiskError};

fn sizer(config: &Config, rate: Option<Decimal>) -> PositionSizer {
    match rate {
        Some(rate) => PositionSizer::new(rate),
        None => PositionSizer::from_config(&config.risk),
    }
}

#[derive(Args, Debug)]
pub struct SizeArgs {
    /// JSON array of pending orders
    #[arg(short, long)]
    pub orders: PathBuf,

    /// Instrument symbol from the config
    #[arg(short, long)]
    pub symbol: String,

    /// Account balance
    #[arg(long)]
    pub balance: Decimal,

    /// Override the configured loss rate (percent)
    #[arg(long)]
    pub rate: Option<Decimal>,
}

impl SizeArgs {
    pub fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let instrument = find_instrument(config, &self.symbol)?;
        let content = std::fs::read_to_string(&self.orders)?;
        let mut tickets: Vec<OrderTicket> = serde_json::from_str(&content)?;

        let result = sizer(config, self.rate).pending_orders(&mut tickets, self.balance, instrument);
        if let Err(RiskError::MissingStopLoss { .. }) = result {
            for ticket in tickets.iter().filter(|t| t.cancelled) {
                tracing::warn!(id = %ticket.id, target = %ticket.target_price, "Ticket cancelled");
            }
        }

        let plan = result?;
        println!("{}", serde_json::to_string_pretty(&plan)?);
        Ok(())
    }
}

#[derive(Args, Debug)]
pub struct MarketArgs {
    /// Instrument symbol from the config
    #[arg(short, long)]
    pub symbol: String,

    /// Trade direction: buy or sell
    #[arg(long)]
    pub side: TradeType,

    /// Fill price (bid or ask)
    #[arg(long)]
    pub price: Decimal,

    /// Stop loss price
    #[arg(long)]
    pub stop_loss: Option<Decimal>,

    /// Account balance
    #[arg(long)]
    pub balance: Decimal,

    /// Override the configured loss rate (percent)
    #[arg(long)]
    pub rate: Option<Decimal>,
}

impl MarketArgs {
    pub fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let instrument = find_instrument(config, &self.symbol)?;
        if self.stop_loss.is_none() {
            tracing::warn!("No stop loss given, sizing against a zero stop");
        }

        let order = OrderTicket::new(self.side, self.price, self.stop_loss);
        let plan = sizer(config, self.rate).market_order(&order, self.price, self.balance, instrument)?;
        println!("{}", serde_json::to_string_pretty(&plan)?);
        Ok(())
    }
}
