//! Decimal rounding shared by fuel, range and log values.

use crate::vehicle::constants::DECIMAL_PLACES;

/// Relative nudge of four ulps applied to the scaled value.
const HALF_NUDGE: f64 = 1.0 + 4.0 * f64::EPSILON;

/// Round `value` to `places` decimal places, halves away from zero.
///
/// Decimal halves such as `1.005` are not exact in binary and scale to just
/// under `.5`; the scaled value is nudged by a few ulps before rounding so
/// they still round away from zero.
///
/// ```
/// use fuelrace_lib::rounding::round_to;
///
/// assert_eq!(round_to(637.499, 2), 637.5);
/// assert_eq!(round_to(0.125, 2), 0.13);
/// assert_eq!(round_to(1.005, 2), 1.01);
/// ```
pub fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor * HALF_NUDGE).round() / factor
}

/// Round to the precision used for every fuel, range and log value.
pub fn round2(value: f64) -> f64 {
    round_to(value, DECIMAL_PLACES)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_half_up() {
        assert_eq!(round_to(2.5, 0), 3.0);
        assert_eq!(round2(10.005_000_1), 10.01);
        assert_eq!(round2(42.0), 42.0);
    }

    #[test]
    fn inexact_decimal_halves_round_away_from_zero() {
        assert_eq!(round2(1.005), 1.01);
        assert_eq!(round2(2.675), 2.68);
        assert_eq!(round2(-1.005), -1.01);
        assert_eq!(round2(1.004_999), 1.0);
    }

    #[test]
    fn already_rounded_values_are_stable() {
        for value in [0.0, 0.01, 150.7, 301.4, 452.1, 63.75] {
            assert_eq!(round2(value), value);
        }
    }

    #[test]
    fn zero_places_is_integer_rounding() {
        assert_eq!(round_to(99.4, 0), 99.0);
    }
}
