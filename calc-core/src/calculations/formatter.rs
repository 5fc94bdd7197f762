//! Display formatting for calculator values.
//!
//! Values render in one of two styles:
//!
//! | magnitude                         | style                                |
//! |-----------------------------------|--------------------------------------|
//! | `> 999,999,999`                   | exponential, 2 fractional digits     |
//! | `< 0.000001` (and not zero)       | exponential, 2 fractional digits     |
//! | everything else                   | plain decimal, at most 8 places      |
//!
//! The display adds one more rule on top: when the rendered text is longer
//! than [`DISPLAY_BUDGET`] characters, the value is rendered again in
//! exponential form with 5 fractional digits.

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::calculations::common::{RESULT_DECIMAL_PLACES, round_fraction};

/// Maximum number of characters the current-value display holds.
pub const DISPLAY_BUDGET: usize = 12;

const PLAIN_UPPER_BOUND: f64 = 999_999_999.0;
const PLAIN_LOWER_BOUND: f64 = 0.000_001;
const COMPACT_FRACTION_DIGITS: usize = 2;
const FALLBACK_FRACTION_DIGITS: usize = 5;

// Every f64 has a terminating decimal expansion: at most 1074 fraction
// digits and at most 767 significant digits.
const EXACT_FRACTION_DIGITS: usize = 1074;
const EXACT_SIGNIFICANT_DIGITS: usize = 767;
// A `Decimal` holds 28 fractional digits; rounding needs one past the last kept.
const MAX_MANTISSA_SCALE: u32 = 28;

/// Formats a value for the history line.
///
/// # Arguments
///
/// * `value` - The value to render
///
/// # Returns
///
/// Exponential text with two fractional digits outside the plain band,
/// otherwise the value rounded to eight places with trailing zeros removed.
/// Exact ties round away from zero in both styles.
///
/// # Examples
///
/// ```
/// use calc_core::calculations::format_number;
///
/// assert_eq!(format_number(0.1 + 0.2), "0.3");
/// assert_eq!(format_number(2_000_000_000.0), "2.00e+9");
/// assert_eq!(format_number(1_125_000_000.0), "1.13e+9");
/// assert_eq!(format_number(0.0000001), "1.00e-7");
/// ```
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return non_finite(value).to_string();
    }

    let magnitude = value.abs();
    if magnitude > PLAIN_UPPER_BOUND || (magnitude < PLAIN_LOWER_BOUND && value != 0.0) {
        return to_exponential(value, COMPACT_FRACTION_DIGITS);
    }

    plain_decimal(value)
}

/// Formats a value for the current-value display, keeping it within
/// [`DISPLAY_BUDGET`] characters.
///
/// # Arguments
///
/// * `value` - The value to render
///
/// # Returns
///
/// The [`format_number`] text when it fits, otherwise exponential text with
/// five fractional digits.
///
/// # Examples
///
/// ```
/// use calc_core::calculations::format_display;
///
/// assert_eq!(format_display(42.0), "42");
/// assert_eq!(format_display(123_456_789.123), "1.23457e+8");
/// ```
pub fn format_display(value: f64) -> String {
    let text = format_number(value);
    if text.chars().count() > DISPLAY_BUDGET {
        return to_exponential(value, FALLBACK_FRACTION_DIGITS);
    }
    text
}

/// Renders `value` in exponential notation with an explicitly signed
/// exponent, e.g. `1.23e+9` or `-4.50e-7`.
///
/// The mantissa is rounded from the exact binary value of `value`, with
/// exact ties going away from zero.
///
/// # Arguments
///
/// * `value` - The value to render
/// * `fraction_digits` - Digits kept after the mantissa's decimal point
///
/// # Returns
///
/// The exponential text, or `Infinity` / `-Infinity` / `NaN` for
/// non-finite values.
pub fn to_exponential(
    value: f64,
    fraction_digits: usize,
) -> String {
    if !value.is_finite() {
        return non_finite(value).to_string();
    }

    let Some((mantissa, exponent)) = round_mantissa(value.abs(), fraction_digits) else {
        return std_exponential(value, fraction_digits);
    };
    let sign = if value < 0.0 { "-" } else { "" };
    let exponent_sign = if exponent < 0 { '-' } else { '+' };
    format!("{sign}{mantissa}e{exponent_sign}{}", exponent.unsigned_abs())
}

/// Parses operand or display text back into a number.
///
/// Accepts plain decimals (`"12."`, `"-0.5"`) and exponential text produced
/// by [`to_exponential`].
///
/// # Arguments
///
/// * `text` - Operand or display text, surrounding whitespace allowed
///
/// # Returns
///
/// The parsed value, or `None` when `text` is not a number.
pub fn parse_number(text: &str) -> Option<f64> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    text.parse::<f64>().ok()
}

/// Value rounded to eight fractional digits as an exact decimal.
///
/// Rounds the exact binary value of `value`, so `0.123456785` (stored just
/// below the midpoint) becomes `0.12345678`.
///
/// Returns `None` for non-finite values and for magnitudes outside what a
/// [`Decimal`] can hold.
pub fn to_decimal(value: f64) -> Option<Decimal> {
    if !value.is_finite() {
        return None;
    }
    let exact = format!("{:.*}", EXACT_FRACTION_DIGITS, value);
    let (whole, fraction) = exact.split_once('.')?;
    // One digit past the last kept place decides the rounding.
    let fraction = fraction.get(..RESULT_DECIMAL_PLACES as usize + 1)?;
    Decimal::from_str(&format!("{whole}.{fraction}")).ok().map(round_fraction)
}

fn round_mantissa(
    magnitude: f64,
    fraction_digits: usize,
) -> Option<(Decimal, i32)> {
    let exact = format!("{:.*e}", EXACT_SIGNIFICANT_DIGITS, magnitude);
    let (digits, exponent) = exact.split_once('e')?;
    let mut exponent: i32 = exponent.parse().ok()?;
    let scale = u32::try_from(fraction_digits)
        .ok()
        .filter(|&scale| scale < MAX_MANTISSA_SCALE)?;

    // Leading digit, point, then one digit past the last kept place.
    let truncated = digits.get(..fraction_digits + 3)?;
    let mut mantissa = Decimal::from_str(truncated)
        .ok()?
        .round_dp_with_strategy(scale, RoundingStrategy::MidpointAwayFromZero);
    if mantissa >= Decimal::TEN {
        mantissa = Decimal::ONE;
        exponent += 1;
    }
    mantissa.rescale(scale);
    Some((mantissa, exponent))
}

// Precisions too wide for a `Decimal` mantissa; ties round to even here.
fn std_exponential(
    value: f64,
    fraction_digits: usize,
) -> String {
    let raw = format!("{value:.fraction_digits$e}");
    match raw.split_once('e') {
        Some((mantissa, exponent)) => match exponent.strip_prefix('-') {
            Some(magnitude) => format!("{mantissa}e-{magnitude}"),
            None => format!("{mantissa}e+{exponent}"),
        },
        None => raw,
    }
}

fn plain_decimal(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    match to_decimal(value) {
        Some(decimal) if decimal.is_zero() => "0".to_string(),
        Some(decimal) => decimal.to_string(),
        None => value.to_string(),
    }
}

fn non_finite(value: f64) -> &'static str {
    if value.is_nan() {
        "NaN"
    } else if value.is_sign_negative() {
        "-Infinity"
    } else {
        "Infinity"
    }
}
