//! Price rounding

use rust_decimal::{Decimal, RoundingStrategy};

/// Round to `dp` decimal places, midpoints away from zero
pub fn round_half_away(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}
