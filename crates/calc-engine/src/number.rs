//! Number Rendering
//!
//! Converts computed `f64` values back into operand text.

use alloc::format;
use alloc::string::String;

/// Decimal places kept after a computation.
pub const RESULT_DECIMAL_PLACES: usize = 10;

/// Magnitude above which rounding to [`RESULT_DECIMAL_PLACES`] cannot change
/// the value.
const ROUNDING_LIMIT: f64 = 1e15;

/// Round to [`RESULT_DECIMAL_PLACES`] to suppress binary floating-point noise
/// (`0.1 + 0.2` becomes `0.3`).
pub fn round_result(value: f64) -> f64 {
    if !value.is_finite() || value.abs() >= ROUNDING_LIMIT {
        return value;
    }
    // Round in decimal, not by scaling: large integers must come back exact.
    format!("{:.*}", RESULT_DECIMAL_PLACES, value)
        .parse()
        .unwrap_or(value)
}

/// Render a finite value as a plain numeral.
///
/// Integral values carry no fractional part, negative zero renders as `"0"`
/// and exponent notation is never produced.
pub fn render(value: f64) -> String {
    if value == 0.0 {
        return String::from("0");
    }
    // f64 Display is the shortest round-trip form without an exponent.
    format!("{}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noise_suppression() {
        assert_eq!(render(round_result(0.1 + 0.2)), "0.3");
        assert_eq!(render(round_result(3.5 + 1.2)), "4.7");
    }

    #[test]
    fn test_integral_values_have_no_fraction() {
        assert_eq!(render(8.0), "8");
        assert_eq!(render(-42.0), "-42");
        assert_eq!(render(1e20), "100000000000000000000");
    }

    #[test]
    fn test_negative_zero() {
        assert_eq!(render(-0.0), "0");
        assert_eq!(render(round_result(-1e-12)), "0");
    }

    #[test]
    fn test_small_values_avoid_exponent() {
        assert_eq!(render(0.0005), "0.0005");
        assert_eq!(render(1e-7), "0.0000001");
    }

    #[test]
    fn test_large_integers_survive_rounding() {
        assert_eq!(round_result(99999800000100.0), 99999800000100.0);
        assert_eq!(render(round_result(999998000001.0)), "999998000001");
    }

    #[test]
    fn test_large_values_skip_rounding() {
        assert_eq!(round_result(1e16 + 2.0), 1e16 + 2.0);
        assert!(round_result(f64::INFINITY).is_infinite());
    }
}
