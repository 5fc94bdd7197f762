//! Rounding helpers shared by the evaluator and the formatter.

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of fractional digits results are snapped to.
pub const RESULT_DECIMAL_PLACES: u32 = 8;

const RESULT_SCALE: f64 = 100_000_000.0;

/// Rounds to the nearest integer, sending exact halves toward positive
/// infinity.
///
/// # Examples
///
/// ```
/// use calc_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(2.5), 3.0);
/// assert_eq!(round_half_up(-2.5), -2.0);
/// assert_eq!(round_half_up(-2.6), -3.0);
/// ```
pub fn round_half_up(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let floor = value.floor();
    if value - floor >= 0.5 { floor + 1.0 } else { floor }
}

/// Snaps a raw result onto the nearest multiple of `1e-8`.
///
/// Adds one `f64::EPSILON` before scaling so that values sitting just under
/// a rounding boundary because of binary representation error land on the
/// intended side. Results whose scaled value overflows come back infinite.
///
/// # Arguments
///
/// * `value` - The raw arithmetic result
///
/// # Returns
///
/// The value on the `1e-8` grid, or an infinity on overflow.
///
/// # Examples
///
/// ```
/// use calc_core::calculations::common::snap_to_precision;
///
/// assert_eq!(snap_to_precision(0.1 + 0.2), 0.3);
/// assert_eq!(snap_to_precision(1.0 / 3.0), 0.33333333);
/// ```
pub fn snap_to_precision(value: f64) -> f64 {
    round_half_up((value + f64::EPSILON) * RESULT_SCALE) / RESULT_SCALE
}

/// Rounds a decimal to [`RESULT_DECIMAL_PLACES`] with half-away-from-zero
/// rounding and strips trailing zeros.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use calc_core::calculations::common::round_fraction;
///
/// assert_eq!(round_fraction(dec!(0.123456785)).to_string(), "0.12345679");
/// assert_eq!(round_fraction(dec!(2.50000000)).to_string(), "2.5");
/// ```
pub fn round_fraction(value: Decimal) -> Decimal {
    value
        .round_dp_with_strategy(RESULT_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .normalize()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // round_half_up tests
    // =========================================================================

    #[test]
    fn round_half_up_rounds_down_below_midpoint() {
        assert_eq!(round_half_up(1.4), 1.0);
    }

    #[test]
    fn round_half_up_rounds_up_at_midpoint() {
        assert_eq!(round_half_up(1.5), 2.0);
    }

    #[test]
    fn round_half_up_sends_negative_midpoint_toward_positive_infinity() {
        assert_eq!(round_half_up(-1.5), -1.0);
        assert_eq!(round_half_up(-1.51), -2.0);
    }

    #[test]
    fn round_half_up_keeps_largest_value_below_half() {
        assert_eq!(round_half_up(0.49999999999999994), 0.0);
    }

    #[test]
    fn round_half_up_passes_through_non_finite_values() {
        assert_eq!(round_half_up(f64::INFINITY), f64::INFINITY);
        assert!(round_half_up(f64::NAN).is_nan());
    }

    // =========================================================================
    // snap_to_precision tests
    // =========================================================================

    #[test]
    fn snap_removes_representation_residue() {
        assert_eq!(snap_to_precision(0.1 + 0.2), 0.3);
        assert_eq!(snap_to_precision(0.3 - 0.1), 0.2);
    }

    #[test]
    fn snap_limits_to_eight_places() {
        assert_eq!(snap_to_precision(2.0 / 3.0), 0.66666667);
        assert_eq!(snap_to_precision(0.000000004), 0.0);
        assert_eq!(snap_to_precision(0.000000006), 0.00000001);
    }

    #[test]
    fn snap_preserves_integers() {
        assert_eq!(snap_to_precision(42.0), 42.0);
        assert_eq!(snap_to_precision(-7.0), -7.0);
    }

    #[test]
    fn snap_overflows_when_scaled_value_is_not_representable() {
        assert!(snap_to_precision(1e301).is_infinite());
    }

    // =========================================================================
    // round_fraction tests
    // =========================================================================

    #[test]
    fn round_fraction_rounds_midpoint_away_from_zero() {
        assert_eq!(round_fraction(dec!(0.000000005)), dec!(0.00000001));
        assert_eq!(round_fraction(dec!(-0.000000005)), dec!(-0.00000001));
    }

    #[test]
    fn round_fraction_strips_trailing_zeros() {
        assert_eq!(round_fraction(dec!(10.00000000)).to_string(), "10");
        assert_eq!(round_fraction(dec!(0.50)).to_string(), "0.5");
    }
}
