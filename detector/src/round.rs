use rust_decimal::Decimal;
use rust_decimal::RoundingStrategy;

/// Rounds to 2 decimal places, half-away-from-zero, matching the reference
/// rounding used for all profit/price figures.
pub fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
