use rust_decimal::prelude::*;

/// Rounds `value` to `dp` decimal places, resolving ties away from zero.
///
/// The conversion keeps every bit of the `f64` mantissa that fits a
/// `Decimal`, so the result matches fixed-point formatting of the float
/// rather than of a pre-rounded approximation.
///
/// Returns `Decimal::ZERO` for NaN or values outside the `Decimal` range.
pub fn round_half_up(value: f64, dp: u32) -> Decimal {
    Decimal::from_f64_retain(value)
        .map(|d| d.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero))
        .unwrap_or(Decimal::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_round_to_cents() {
        assert_eq!(round_half_up(113.3237, 2), dec!(113.32));
        assert_eq!(round_half_up(662.6851, 2), dec!(662.69));
        assert_eq!(round_half_up(100.0, 2), dec!(100.00));
    }

    #[test]
    fn test_exact_midpoint_rounds_up() {
        // 0.125 and 2.5 are exactly representable.
        assert_eq!(round_half_up(0.125, 2), dec!(0.13));
        assert_eq!(round_half_up(2.5, 0), dec!(3));
        assert_eq!(round_half_up(-2.5, 0), dec!(-3));
    }

    #[test]
    fn test_one_decimal() {
        assert_eq!(round_half_up(93.94, 1), dec!(93.9));
        assert_eq!(round_half_up(67.86, 1), dec!(67.9));
    }

    #[test]
    fn test_non_finite_is_zero() {
        assert_eq!(round_half_up(f64::NAN, 2), Decimal::ZERO);
        assert_eq!(round_half_up(f64::INFINITY, 2), Decimal::ZERO);
    }
}
