use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Decimal places of the smallest reportable currency unit (cents)
pub const CENT_SCALE: u32 = 2;

/// Rounds to whole cents, half away from zero
///
/// Platform amounts are non-negative, so this is plain round-half-up.
pub fn round_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(CENT_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds to the nearest whole currency unit for display totals
pub fn round_whole(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds to whole units and converts to an integer, saturating at the i64 range
pub fn whole_units(amount: Decimal) -> i64 {
    let rounded = round_whole(amount);
    rounded.to_i64().unwrap_or(if rounded.is_sign_negative() {
        i64::MIN
    } else {
        i64::MAX
    })
}
