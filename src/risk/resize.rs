//! Risk-based position sizing
//!
//! Turns a fixed fractional-risk budget into a broker-compliant volume.
//!
//! # Formula
//! ```text
//! risk_amount      = balance * allowable_loss_rate / 100
//! price_range_pips = distance_in_pips(target, stop_loss)
//! risk_per_pip     = round(risk_amount / price_range_pips, 1)
//! total_size       = risk_per_pip / pip_value
//! ```
//!
//! # Example
//! - Balance: 100,000, loss rate 0.5% → 500 at risk
//! - USDJPY target 150.00, stop 149.90 → 10 pips
//! - 500 / 10 = 50 per pip, / pip value 0.01 → 5,000 units

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::{ResizePlan, RiskError};
use crate::config::RiskConfig;
use crate::instrument::{round_half_away, InstrumentMetrics};
use crate::order::{PendingOrder, TradeType};
use crate::telemetry;

/// Decimal places of the per-pip risk amount
const RISK_PER_PIP_DP: u32 = 1;

/// Account currency at risk for one trade
pub fn allowable_risk_amount(balance: Decimal, allowable_loss_rate: Decimal) -> Decimal {
    balance * allowable_loss_rate / dec!(100)
}

/// Units needed to lose `risk_amount` over `price_range_pips`
fn total_position_size<I>(
    risk_amount: Decimal,
    price_range_pips: Decimal,
    instrument: &I,
) -> Result<Decimal, RiskError>
where
    I: InstrumentMetrics + ?Sized,
{
    let per_pip = risk_amount
        .checked_div(price_range_pips)
        .ok_or(RiskError::DegenerateRange)?;
    let risk_per_pip = round_half_away(per_pip, RISK_PER_PIP_DP);

    risk_per_pip
        .checked_div(instrument.pip_value())
        .ok_or_else(|| RiskError::invalid("pip value must be non-zero"))
}

fn average(values: impl ExactSizeIterator<Item = Decimal>) -> Option<Decimal> {
    let count = Decimal::from(values.len());
    let sum: Decimal = values.sum();
    sum.checked_div(count)
}

/// Shared direction of a batch, failing on an empty or mixed batch
fn batch_trade_type<O: PendingOrder>(orders: &[O]) -> Result<TradeType, RiskError> {
    let first = orders
        .first()
        .ok_or_else(|| RiskError::invalid("no pending orders"))?
        .trade_type();

    if orders.iter().any(|order| order.trade_type() != first) {
        return Err(RiskError::invalid(
            "pending orders contain both buy and sell",
        ));
    }
    Ok(first)
}

/// Average stop loss over the orders that have one
///
/// When none has a stop loss the whole batch is cancelled before returning
/// `MissingStopLoss`.
fn average_stop_loss<O: PendingOrder>(orders: &mut [O]) -> Result<Decimal, RiskError> {
    let stops: Vec<Decimal> = orders.iter().filter_map(|o| o.stop_loss()).collect();

    match average(stops.into_iter()) {
        Some(stop) => Ok(stop),
        None => {
            for order in orders.iter_mut() {
                order.cancel();
            }
            telemetry::record_cancelled(orders.len());
            tracing::warn!(
                cancelled = orders.len(),
                "No stop loss on any pending order, batch cancelled"
            );
            Err(RiskError::MissingStopLoss {
                cancelled: orders.len(),
            })
        }
    }
}

/// Size a batch of pending orders sharing one direction
///
/// The risk budget is spread evenly across the legs. If a leg would fall
/// below the broker minimum, every leg is pinned to `volume_min` and the plan
/// carries the offset the caller should move the averaged target toward the
/// stop loss by.
pub fn resize_plan_of_pending_orders<O, I>(
    orders: &mut [O],
    balance: Decimal,
    allowable_loss_rate: Decimal,
    instrument: &I,
) -> Result<ResizePlan, RiskError>
where
    O: PendingOrder,
    I: InstrumentMetrics + ?Sized,
{
    let trade_type = batch_trade_type(orders)?;
    let legs = Decimal::from(orders.len());

    let average_target = average(orders.iter().map(|o| o.target_price()))
        .ok_or_else(|| RiskError::invalid("no pending orders"))?;
    let stop_loss_price = average_stop_loss(orders)?;

    let price_range_pips = instrument.distance_in_pips(average_target, stop_loss_price);
    let risk_amount = allowable_risk_amount(balance, allowable_loss_rate);
    let total_size = total_position_size(risk_amount, price_range_pips, instrument)?;
    let per_leg = total_size / legs;

    let volume_min = instrument.volume_min();
    let plan = if per_leg < volume_min {
        let min_risk_per_pip = volume_min * instrument.pip_value();
        let valid_range_pips = risk_amount
            .checked_div(min_risk_per_pip)
            .ok_or_else(|| RiskError::invalid("pip value must be non-zero"))?
            .floor();
        let offset = (valid_range_pips - price_range_pips).abs() * instrument.pip_size();

        telemetry::record_min_volume_floor();
        tracing::warn!(
            side = %trade_type,
            legs = orders.len(),
            per_leg = %per_leg,
            volume_min = %volume_min,
            price_range_pips = %price_range_pips,
            valid_range_pips = %valid_range_pips,
            target_price_offset = %offset,
            "Risk budget below minimum volume, target price must move"
        );

        ResizePlan {
            target_price_offset: offset,
            ..ResizePlan::new(stop_loss_price, volume_min)
        }
    } else {
        ResizePlan::new(stop_loss_price, instrument.normalize_volume(per_leg))
    };

    telemetry::record_plan();
    tracing::debug!(
        side = %trade_type,
        legs = orders.len(),
        average_target = %average_target,
        stop_loss = %plan.stop_loss_price,
        price_range_pips = %price_range_pips,
        risk_amount = %risk_amount,
        each_position_size = %plan.each_position_size,
        "Resize plan for pending orders"
    );

    Ok(plan)
}

/// Size a single market order filled at `target_price` (bid or ask)
///
/// An order without a stop loss is measured against a stop of `0`; the
/// resulting `stop_loss_price` of zero tells the caller no real stop exists.
pub fn resize_plan_of_market_order<O, I>(
    order: &O,
    target_price: Decimal,
    balance: Decimal,
    allowable_loss_rate: Decimal,
    instrument: &I,
) -> Result<ResizePlan, RiskError>
where
    O: PendingOrder + ?Sized,
    I: InstrumentMetrics + ?Sized,
{
    let stop_loss_price = order.stop_loss().unwrap_or(Decimal::ZERO);

    let price_range_pips = instrument.distance_in_pips(target_price, stop_loss_price);
    let risk_amount = allowable_risk_amount(balance, allowable_loss_rate);
    let total_size = total_position_size(risk_amount, price_range_pips, instrument)?;

    let volume_min = instrument.volume_min();
    let each_position_size = if total_size < volume_min {
        telemetry::record_min_volume_floor();
        volume_min
    } else {
        instrument.normalize_volume(total_size)
    };

    let plan = ResizePlan {
        market_order_stop_loss_pips: price_range_pips,
        ..ResizePlan::new(stop_loss_price, each_position_size)
    };

    telemetry::record_plan();
    tracing::debug!(
        side = %order.trade_type(),
        target = %target_price,
        stop_loss = %stop_loss_price,
        price_range_pips = %price_range_pips,
        each_position_size = %each_position_size,
        "Resize plan for market order"
    );

    Ok(plan)
}

/// Position sizer with a configured loss rate
#[derive(Debug, Clone)]
pub struct PositionSizer {
    /// Percent of balance at risk per trade (e.g. 0.5 = 0.5%)
    pub allowable_loss_rate: Decimal,
}

impl PositionSizer {
    pub fn new(allowable_loss_rate: Decimal) -> Self {
        Self {
            allowable_loss_rate,
        }
    }

    /// Create from RiskConfig
    pub fn from_config(config: &RiskConfig) -> Self {
        Self::new(config.allowable_loss_rate)
    }

    pub fn pending_orders<O, I>(
        &self,
        orders: &mut [O],
        balance: Decimal,
        instrument: &I,
    ) -> Result<ResizePlan, RiskError>
    where
        O: PendingOrder,
        I: InstrumentMetrics + ?Sized,
    {
        resize_plan_of_pending_orders(orders, balance, self.allowable_loss_rate, instrument)
    }

    pub fn market_order<O, I>(
        &self,
        order: &O,
        target_price: Decimal,
        balance: Decimal,
        instrument: &I,
    ) -> Result<ResizePlan, RiskError>
    where
        O: PendingOrder + ?Sized,
        I: InstrumentMetrics + ?Sized,
    {
        resize_plan_of_market_order(
            order,
            target_price,
            balance,
            self.allowable_loss_rate,
            instrument,
        )
    }
}

impl Default for PositionSizer {
    fn default() -> Self {
        Self::new(dec!(0.5))
    }
}
