//! Shared helpers for monetary calculations.

use rust_decimal::Decimal;

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// Values at exactly 0.005 round away from zero, following standard
/// financial rounding conventions.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use grati_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(189.225)), dec!(189.23));
/// assert_eq!(round_half_up(dec!(42.1874)), dec!(42.19));
/// assert_eq!(round_half_up(dec!(42.1849)), dec!(42.18));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn round_half_up_rounds_up_at_midpoint() {
        assert_eq!(round_half_up(dec!(189.225)), dec!(189.23));
    }

    #[test]
    fn round_half_up_rounds_down_below_midpoint() {
        assert_eq!(round_half_up(dec!(667.1849)), dec!(667.18));
    }

    #[test]
    fn round_half_up_preserves_already_rounded_values() {
        assert_eq!(round_half_up(dec!(3270.00)), dec!(3270.00));
    }

    #[test]
    fn round_half_up_handles_long_division_tails() {
        // (1250 / 6) * 3 leaves a 28-digit tail just under 625.
        let value = dec!(1250) / dec!(6) * dec!(3);

        assert_eq!(round_half_up(value), dec!(625.00));
    }
}
