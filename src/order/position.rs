//! Open position helpers

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::TradeType;
use crate::instrument::round_half_away;

/// Decimal places of an averaged entry price
const AVERAGE_PRICE_DP: u32 = 5;

/// A filled position
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    /// Trade direction
    pub trade_type: TradeType,
    /// Fill price
    pub entry_price: Decimal,
    /// Volume in units
    pub volume: Decimal,
    /// Stop loss, if set
    #[serde(default)]
    pub stop_loss: Option<Decimal>,
    /// Take profit, if set
    #[serde(default)]
    pub take_profit: Option<Decimal>,
}

impl Position {
    pub fn new(trade_type: TradeType, entry_price: Decimal, volume: Decimal) -> Self {
        Self {
            trade_type,
            entry_price,
            volume,
            stop_loss: None,
            take_profit: None,
        }
    }

    pub fn with_stop_loss(mut self, stop_loss: Decimal) -> Self {
        self.stop_loss = Some(stop_loss);
        self
    }

    pub fn with_take_profit(mut self, take_profit: Decimal) -> Self {
        self.take_profit = Some(take_profit);
        self
    }

    /// Price distance from entry to stop loss
    pub fn stop_loss_distance(&self) -> Option<Decimal> {
        self.stop_loss.map(|sl| (self.entry_price - sl).abs())
    }

    /// Price distance from entry to take profit
    pub fn take_profit_distance(&self) -> Option<Decimal> {
        self.take_profit.map(|tp| (self.entry_price - tp).abs())
    }
}

/// Volume-weighted entry price across positions
///
/// Returns `None` when there is nothing to weigh.
pub fn weighted_average_price(positions: &[Position]) -> Option<Decimal> {
    let total_volume: Decimal = positions.iter().map(|p| p.volume).sum();
    if total_volume.is_zero() {
        return None;
    }
    let weighted: Decimal = positions.iter().map(|p| p.entry_price * p.volume).sum();
    Some(round_half_away(weighted / total_volume, AVERAGE_PRICE_DP))
}
