//! Instrument metrics
//!
//! Per-symbol pip and volume metadata consumed by the classifier and the sizer

mod rounding;

pub use rounding::round_half_away;

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::risk::RiskError;

/// Decimal places the raw price distance is rounded to before pip conversion
const DISTANCE_DP: u32 = 5;

/// Trait for instrument metadata providers
pub trait InstrumentMetrics: Send + Sync {
    /// Size of one pip in price units
    fn pip_size(&self) -> Decimal;
    /// Account-currency value of one pip for one unit of volume
    fn pip_value(&self) -> Decimal;
    /// Price decimal precision
    fn digits(&self) -> u32;
    /// Broker minimum volume in units
    fn volume_min(&self) -> Decimal;
    /// Round a raw unit count down to a tradable volume, never below `volume_min`
    fn normalize_volume(&self, raw: Decimal) -> Decimal;

    /// Distance between two prices in pips
    ///
    /// The raw distance is rounded to 5 decimals, then the pip count to
    /// `digits()` decimals, both half away from zero.
    fn distance_in_pips(&self, from: Decimal, to: Decimal) -> Decimal {
        let distance = round_half_away((from - to).abs(), DISTANCE_DP);
        match distance.checked_div(self.pip_size()) {
            Some(pips) => round_half_away(pips, self.digits()),
            None => Decimal::ZERO,
        }
    }
}

/// Tradable instrument definition
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Instrument {
    /// Symbol name (e.g. "EURUSD")
    pub symbol: String,
    /// Size of one pip
    pub pip_size: Decimal,
    /// Value of one pip per unit
    pub pip_value: Decimal,
    /// Price decimal places
    pub digits: u32,
    /// Minimum tradable volume
    pub volume_min: Decimal,
    /// Volume increment
    pub volume_step: Decimal,
    /// Maximum tradable volume
    pub volume_max: Decimal,
}

impl Instrument {
    /// Create and validate an instrument
    pub fn new(
        symbol: impl Into<String>,
        pip_size: Decimal,
        pip_value: Decimal,
        digits: u32,
        volume_min: Decimal,
        volume_step: Decimal,
        volume_max: Decimal,
    ) -> Result<Self, RiskError> {
        let instrument = Self {
            symbol: symbol.into(),
            pip_size,
            pip_value,
            digits,
            volume_min,
            volume_step,
            volume_max,
        };
        instrument.validate()?;
        Ok(instrument)
    }

    /// Check the metadata can be divided by safely
    pub fn validate(&self) -> Result<(), RiskError> {
        let positive = [
            ("pip_size", self.pip_size),
            ("pip_value", self.pip_value),
            ("volume_min", self.volume_min),
            ("volume_step", self.volume_step),
        ];
        if let Some((name, value)) = positive.iter().find(|(_, v)| *v <= Decimal::ZERO) {
            return Err(RiskError::invalid(format!(
                "{}: {} must be positive, got {}",
                self.symbol, name, value
            )));
        }
        if self.volume_max < self.volume_min {
            return Err(RiskError::invalid(format!(
                "{}: volume_max {} is below volume_min {}",
                self.symbol, self.volume_max, self.volume_min
            )));
        }
        Ok(())
    }
}

impl InstrumentMetrics for Instrument {
    fn pip_size(&self) -> Decimal {
        self.pip_size
    }

    fn pip_value(&self) -> Decimal {
        self.pip_value
    }

    fn digits(&self) -> u32 {
        self.digits
    }

    fn volume_min(&self) -> Decimal {
        self.volume_min
    }

    fn normalize_volume(&self, raw: Decimal) -> Decimal {
        let stepped = match raw.checked_div(self.volume_step) {
            Some(steps) => steps.floor() * self.volume_step,
            None => self.volume_min,
        };
        stepped.min(self.volume_max).max(self.volume_min)
    }
}
