//! Order types

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::risk::RiskError;

/// Order identifier
pub type OrderId = Uuid;

/// Trade direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeType {
    /// Long entry
    Buy,
    /// Short entry
    Sell,
}

impl FromStr for TradeType {
    type Err = RiskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "buy" => Ok(TradeType::Buy),
            "sell" => Ok(TradeType::Sell),
            other => Err(RiskError::invalid(format!("unknown trade type: {other}"))),
        }
    }
}

impl fmt::Display for TradeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TradeType::Buy => write!(f, "buy"),
            TradeType::Sell => write!(f, "sell"),
        }
    }
}

/// Read view of a not-yet-filled order, plus the one action the sizer may take on it
pub trait PendingOrder {
    /// Direction of the order
    fn trade_type(&self) -> TradeType;
    /// Trigger price
    fn target_price(&self) -> Decimal;
    /// Stop loss, if one is set
    fn stop_loss(&self) -> Option<Decimal>;
    /// Cancel the order at the broker
    fn cancel(&mut self);
}

/// A pending order held in memory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderTicket {
    /// Ticket identifier
    #[serde(default = "Uuid::new_v4")]
    pub id: OrderId,
    /// Trade direction
    pub trade_type: TradeType,
    /// Trigger price
    pub target_price: Decimal,
    /// Optional stop loss
    #[serde(default)]
    pub stop_loss: Option<Decimal>,
    /// Set once the ticket has been cancelled
    #[serde(skip_deserializing)]
    pub cancelled: bool,
}

impl OrderTicket {
    /// Create a new ticket
    pub fn new(trade_type: TradeType, target_price: Decimal, stop_loss: Option<Decimal>) -> Self {
        Self {
            id: Uuid::new_v4(),
            trade_type,
            target_price,
            stop_loss,
            cancelled: false,
        }
    }
}

impl PendingOrder for OrderTicket {
    fn trade_type(&self) -> TradeType {
        self.trade_type
    }

    fn target_price(&self) -> Decimal {
        self.target_price
    }

    fn stop_loss(&self) -> Option<Decimal> {
        self.stop_loss
    }

    fn cancel(&mut self) {
        self.cancelled = true;
    }
}
