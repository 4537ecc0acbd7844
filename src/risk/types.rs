//! Risk management types

use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;

/// Risk management errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RiskError {
    /// Input the caller should never have produced (mixed sides, empty batch, bad metadata)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    /// No order in the batch carries a stop loss; the batch has been cancelled
    #[error("Every pending order must have a stop loss ({cancelled} cancelled)")]
    MissingStopLoss { cancelled: usize },
    /// Target and stop loss are zero pips apart
    #[error("Price range between target and stop loss is zero")]
    DegenerateRange,
}

impl RiskError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}

/// Result of a sizing call
///
/// When the risk budget cannot fund the broker minimum, the size is pinned to
/// `volume_min` and `target_price_offset` holds how far (in price units) the
/// target has to move toward the stop loss to keep the loss inside the budget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResizePlan {
    /// Stop loss used as the risk reference
    pub stop_loss_price: Decimal,
    /// Normalized volume per leg
    pub each_position_size: Decimal,
    /// Stop distance in pips, only set for market orders
    pub market_order_stop_loss_pips: Decimal,
    /// Price adjustment toward the stop loss, zero when none is needed
    pub target_price_offset: Decimal,
}

impl ResizePlan {
    /// Create a plan with no offset
    pub fn new(stop_loss_price: Decimal, each_position_size: Decimal) -> Self {
        Self {
            stop_loss_price,
            each_position_size,
            market_order_stop_loss_pips: Decimal::ZERO,
            target_price_offset: Decimal::ZERO,
        }
    }

    /// Whether the target price has to be moved
    pub fn needs_target_adjustment(&self) -> bool {
        !self.target_price_offset.is_zero()
    }
}
