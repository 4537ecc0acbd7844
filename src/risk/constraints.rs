//! Entry constraints
//!
//! Decides whether an entry price is anchored to a drawn support/resistance
//! marker, and whether a take-profit zone is already drawn beyond the market.

use rust_decimal::Decimal;

use crate::config::RiskConfig;
use crate::instrument::InstrumentMetrics;
use crate::marker::{Line, Marker, MarkerKind, Zone};
use crate::order::TradeType;

/// Price window around a target price, `threshold` wide on each side
#[derive(Debug, Clone, Copy)]
struct Window {
    target: Decimal,
    threshold: Decimal,
}

impl Window {
    fn new(target: Decimal, threshold_pips: Decimal, pip_size: Decimal) -> Self {
        Self {
            target,
            threshold: threshold_pips * pip_size,
        }
    }

    fn floor(&self) -> Decimal {
        self.target - self.threshold
    }

    fn ceiling(&self) -> Decimal {
        self.target + self.threshold
    }

    /// A line anchors when it sits no more than `threshold` from the target,
    /// above or below.
    fn holds_line(&self, line: &Line) -> bool {
        self.floor() <= line.y && line.y <= self.ceiling()
    }

    /// A support zone may sit up to `threshold` below the target, but the
    /// target must not have fallen through its floor.
    fn holds_support_zone(&self, zone: &Zone) -> bool {
        zone.upper_edge() >= self.floor() && zone.lower_edge() <= self.target
    }

    /// A resistance zone may sit up to `threshold` above the target, but the
    /// target must not have broken through its ceiling.
    fn holds_resistance_zone(&self, zone: &Zone) -> bool {
        zone.upper_edge() >= self.target && zone.lower_edge() <= self.ceiling()
    }
}

/// Whether an entry at `target_price` is anchored to a marker on the right side
///
/// Buy entries need a support line or zone, sell entries a resistance one.
/// Neutral markers never anchor.
pub fn is_entry_anchored<I>(
    trade_type: TradeType,
    target_price: Decimal,
    threshold_pips: Decimal,
    instrument: &I,
    markers: &[Marker],
) -> bool
where
    I: InstrumentMetrics + ?Sized,
{
    let window = Window::new(target_price, threshold_pips, instrument.pip_size());
    let wanted = match trade_type {
        TradeType::Buy => MarkerKind::Support,
        TradeType::Sell => MarkerKind::Resistance,
    };

    let anchor = markers
        .iter()
        .filter(|marker| marker.kind() == wanted)
        .find(|marker| match (*marker, trade_type) {
            (Marker::Line(line), _) => window.holds_line(line),
            (Marker::Zone(zone), TradeType::Buy) => window.holds_support_zone(zone),
            (Marker::Zone(zone), TradeType::Sell) => window.holds_resistance_zone(zone),
        });

    match anchor {
        Some(marker) => {
            tracing::debug!(
                side = %trade_type,
                target = %target_price,
                threshold_pips = %threshold_pips,
                marker = ?marker,
                "Entry anchored"
            );
            true
        }
        None => false,
    }
}

/// Whether a take-profit zone is drawn beyond the current market
///
/// For a buy, a resistance zone entirely above the ask; for a sell, a support
/// zone entirely below the bid.
pub fn has_opposing_take_profit_zone(
    trade_type: TradeType,
    ask_price: Decimal,
    bid_price: Decimal,
    markers: &[Marker],
) -> bool {
    let mut zones = markers.iter().filter_map(|marker| match marker {
        Marker::Zone(zone) => Some(zone),
        Marker::Line(_) => None,
    });

    match trade_type {
        TradeType::Buy => zones.any(|zone| {
            zone.kind == MarkerKind::Resistance && ask_price < zone.lower_edge()
        }),
        TradeType::Sell => zones.any(|zone| {
            zone.kind == MarkerKind::Support && zone.upper_edge() < bid_price
        }),
    }
}

/// Entry gate with a configured pip tolerance
#[derive(Debug, Clone)]
pub struct EntryGate {
    /// Allowed distance from a marker, in pips
    pub threshold_pips: Decimal,
}

impl EntryGate {
    pub fn new(threshold_pips: Decimal) -> Self {
        Self { threshold_pips }
    }

    /// Create from RiskConfig
    pub fn from_config(config: &RiskConfig) -> Self {
        Self::new(config.threshold_pips)
    }

    /// Check an entry against the markers
    pub fn allows<I>(
        &self,
        trade_type: TradeType,
        target_price: Decimal,
        instrument: &I,
        markers: &[Marker],
    ) -> bool
    where
        I: InstrumentMetrics + ?Sized,
    {
        is_entry_anchored(
            trade_type,
            target_price,
            self.threshold_pips,
            instrument,
            markers,
        )
    }
}
