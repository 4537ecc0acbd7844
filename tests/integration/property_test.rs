//! Property tests for sizing and anchoring invariants
//!
//! 1. A sized batch never goes below the broker minimum
//! 2. A batch with no stop loss is cancelled exactly once per order
//! 3. A mixed batch is rejected and nothing is cancelled
//! 4. Anchoring is a pure function of its inputs
//! 5. The line window edge is inclusive

use chart_risk::marker::{Line, Marker, MarkerKind};
use chart_risk::order::{OrderTicket, TradeType};
use chart_risk::risk::{is_entry_anchored, resize_plan_of_pending_orders, RiskError};
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::{eurusd, usdjpy, xauusd};

// ── Strategies ───────────────────────────────────────────────────────

fn arb_trade_type() -> impl Strategy<Value = TradeType> {
    prop_oneof![Just(TradeType::Buy), Just(TradeType::Sell)]
}

/// Price with 3 decimals between 100.000 and 200.000
fn arb_jpy_price() -> impl Strategy<Value = Decimal> {
    (100_000i64..200_000).prop_map(|p| Decimal::new(p, 3))
}

/// Price with 5 decimals between 1.00000 and 1.50000
fn arb_eur_price() -> impl Strategy<Value = Decimal> {
    (100_000i64..150_000).prop_map(|p| Decimal::new(p, 5))
}

fn arb_balance() -> impl Strategy<Value = Decimal> {
    (1_000i64..10_000_000).prop_map(Decimal::from)
}

/// Loss rate between 0.1% and 5.0%
fn arb_rate() -> impl Strategy<Value = Decimal> {
    (1i64..=50).prop_map(|r| Decimal::new(r, 1))
}

/// A one-direction batch where the first order always has a stop loss,
/// each stop sitting at least 1.000 from its own target
fn arb_batch() -> impl Strategy<Value = Vec<OrderTicket>> {
    (
        arb_trade_type(),
        prop::collection::vec((arb_jpy_price(), prop::option::of(1i64..5_000)), 1..6),
        1i64..5_000,
    )
        .prop_map(|(side, legs, first_stop)| {
            legs.into_iter()
                .enumerate()
                .map(|(i, (target, stop_offset))| {
                    let offset = match (i, stop_offset) {
                        (0, _) => Some(first_stop),
                        (_, o) => o,
                    };
                    let stop = offset.map(|o| {
                        let distance = Decimal::new(o, 3) + Decimal::ONE;
                        match side {
                            TradeType::Buy => target - distance,
                            TradeType::Sell => target + distance,
                        }
                    });
                    OrderTicket::new(side, target, stop)
                })
                .collect()
        })
}

// ── 1. Minimum volume floor ──────────────────────────────────────────

proptest! {
    #[test]
    fn plan_never_below_volume_min(
        orders in arb_batch(),
        balance in arb_balance(),
        rate in arb_rate(),
        gold in prop::bool::ANY,
    ) {
        let mut orders = orders;
        let instrument = if gold { xauusd() } else { usdjpy() };
        let result = resize_plan_of_pending_orders(&mut orders, balance, rate, &instrument);

        // averaging targets over every leg but stops over some can still cancel out
        let plan = match result {
            Ok(plan) => plan,
            Err(RiskError::DegenerateRange) => return Ok(()),
            Err(e) => return Err(TestCaseError::fail(e.to_string())),
        };
        prop_assert!(plan.each_position_size >= instrument.volume_min);
        if plan.needs_target_adjustment() {
            prop_assert_eq!(plan.each_position_size, instrument.volume_min);
        }
        prop_assert!(orders.iter().all(|o| !o.cancelled));
    }
}

// ── 2. Missing stop loss cancels the batch ───────────────────────────

proptest! {
    #[test]
    fn batch_without_stops_is_cancelled(
        side in arb_trade_type(),
        targets in prop::collection::vec(arb_jpy_price(), 1..8),
        balance in arb_balance(),
    ) {
        let mut orders: Vec<OrderTicket> = targets
            .into_iter()
            .map(|t| OrderTicket::new(side, t, None))
            .collect();
        let count = orders.len();

        let result = resize_plan_of_pending_orders(
            &mut orders,
            balance,
            Decimal::new(5, 1),
            &usdjpy(),
        );

        prop_assert_eq!(result, Err(RiskError::MissingStopLoss { cancelled: count }));
        prop_assert!(orders.iter().all(|o| o.cancelled));
    }
}

// ── 3. Mixed directions are rejected ─────────────────────────────────

proptest! {
    #[test]
    fn mixed_batch_rejected(
        buys in prop::collection::vec(arb_jpy_price(), 1..4),
        sells in prop::collection::vec(arb_jpy_price(), 1..4),
        with_stops in prop::bool::ANY,
    ) {
        let stop = |t: Decimal| if with_stops { Some(t - Decimal::ONE) } else { None };
        let mut orders: Vec<OrderTicket> = buys
            .into_iter()
            .map(|t| OrderTicket::new(TradeType::Buy, t, stop(t)))
            .chain(sells.into_iter().map(|t| OrderTicket::new(TradeType::Sell, t, stop(t))))
            .collect();

        let result = resize_plan_of_pending_orders(
            &mut orders,
            Decimal::from(100_000),
            Decimal::new(5, 1),
            &usdjpy(),
        );

        prop_assert!(matches!(result, Err(RiskError::InvalidArgument(_))));
        prop_assert!(orders.iter().all(|o| !o.cancelled));
    }
}

// ── 4. Anchoring is pure ─────────────────────────────────────────────

proptest! {
    #[test]
    fn anchoring_is_repeatable(
        side in arb_trade_type(),
        target in arb_eur_price(),
        levels in prop::collection::vec((arb_eur_price(), 0u8..3), 0..10),
        threshold in 1i64..50,
    ) {
        let markers: Vec<Marker> = levels
            .into_iter()
            .map(|(y, k)| {
                let kind = match k {
                    0 => MarkerKind::Support,
                    1 => MarkerKind::Resistance,
                    _ => MarkerKind::Neutral,
                };
                Marker::Line(Line::new(y, kind))
            })
            .collect();
        let instrument = eurusd();
        let threshold = Decimal::from(threshold);

        let first = is_entry_anchored(side, target, threshold, &instrument, &markers);
        let second = is_entry_anchored(side, target, threshold, &instrument, &markers);
        prop_assert_eq!(first, second);
    }
}

// ── 5. Inclusive window edge ─────────────────────────────────────────

proptest! {
    #[test]
    fn line_at_window_edge_is_anchored(
        target in arb_eur_price(),
        threshold in 1i64..50,
        epsilon in 1i64..1_000,
    ) {
        let instrument = eurusd();
        let threshold_pips = Decimal::from(threshold);
        let edge = target + threshold_pips * Decimal::new(1, 4);
        let beyond = edge + Decimal::new(epsilon, 10);

        let at_edge = [Marker::Line(Line::new(edge, MarkerKind::Support))];
        let past_edge = [Marker::Line(Line::new(beyond, MarkerKind::Support))];

        prop_assert!(is_entry_anchored(TradeType::Buy, target, threshold_pips, &instrument, &at_edge));
        prop_assert!(!is_entry_anchored(TradeType::Buy, target, threshold_pips, &instrument, &past_edge));
    }
}
