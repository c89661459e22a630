//! Decimal rounding with binary floating-point correction.
//!
//! `1.005 * 100` is `100.49999999999999` in binary, so a plain round would give
//! `1.00`. Snapping the scaled magnitude to 15 significant digits first recovers
//! the intended `100.5` and rounds it up to `1.01`.

use crate::errors::{ensure_finite, RenderError};

/// Significant digits kept before the final round. 15 is the most an f64 can
/// represent without introducing new noise digits.
const CORRECTION_DIGITS: usize = 15;

/// Rounds `value` to `places` decimal places, preserving the sign of the input.
///
/// Negative `places` round to tens, hundreds, etc. A negative input that rounds
/// to zero yields `-0.0`, and `-0.0` stays `-0.0`.
pub fn round_to_place(value: f64, places: i32) -> Result<f64, RenderError> {
    ensure_finite(value)?;
    Ok(round_finite(value, places))
}

/// Infallible core of [`round_to_place`] for callers that already hold a finite value.
pub(crate) fn round_finite(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    if scale == 0.0 {
        // The place is above any finite magnitude, so everything rounds to zero.
        return 0.0_f64.copysign(value);
    }
    let scaled = value.abs() * scale;
    if !scaled.is_finite() {
        // Already coarser than the requested precision.
        return value;
    }

    let corrected = to_precision(scaled, CORRECTION_DIGITS);
    let rounded = corrected.round() / scale * js_sign(value);
    if rounded.is_finite() {
        rounded
    } else {
        // Rounding up past f64::MAX.
        value
    }
}

/// Significant digits needed to print any f64 exactly.
const EXACT_DIGITS: usize = 767;

/// Rounds a non-negative `value` to `digits` significant digits, ties toward the
/// larger value.
///
/// Works on the exact decimal expansion: `{:.Ne}` alone would round ties to even.
fn to_precision(value: f64, digits: usize) -> f64 {
    let exact = format!("{:.*e}", EXACT_DIGITS, value);
    let Some((mantissa, exponent)) = exact.split_once('e') else {
        return value;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return value;
    };

    let all_digits: Vec<u8> = mantissa.bytes().filter(u8::is_ascii_digit).collect();
    let round_up = all_digits.get(digits).is_some_and(|d| *d >= b'5');
    let kept = all_digits
        .iter()
        .take(digits)
        .fold(0u64, |acc, d| acc * 10 + u64::from(d - b'0'));
    let kept = if round_up { kept + 1 } else { kept };

    let shift = exponent - (digits as i32 - 1);
    format!("{kept}e{shift}").parse::<f64>().unwrap_or(value)
}

/// Sign with zero preserved: `+0.0` and `-0.0` map to themselves, anything else to ±1.
fn js_sign(value: f64) -> f64 {
    if value == 0.0 {
        value
    } else {
        value.signum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_negative_preserves_sign() {
        assert_eq!(round_to_place(-2.345, 2).unwrap(), -2.35);
    }

    #[test]
    fn test_round_positive_half_rounds_up() {
        assert_eq!(round_to_place(2.345, 2).unwrap(), 2.35);
    }

    #[test]
    fn test_round_corrects_binary_representation() {
        // 1.005 * 100 = 100.49999999999999 without correction
        assert_eq!(round_to_place(1.005, 2).unwrap(), 1.01);
    }

    #[test]
    fn test_round_to_zero_places() {
        assert_eq!(round_to_place(2.5, 0).unwrap(), 3.0);
        assert_eq!(round_to_place(-2.5, 0).unwrap(), -3.0);
        assert_eq!(round_to_place(2.4, 0).unwrap(), 2.0);
    }

    #[test]
    fn test_round_negative_places() {
        assert_eq!(round_to_place(1234.0, -1).unwrap(), 1230.0);
        assert_eq!(round_to_place(1250.0, -2).unwrap(), 1300.0);
    }

    #[test]
    fn test_round_small_negative_becomes_negative_zero() {
        let rounded = round_to_place(-0.00001, 4).unwrap();
        assert_eq!(rounded, 0.0);
        assert!(rounded.is_sign_negative());
    }

    #[test]
    fn test_round_zero_keeps_its_sign() {
        assert!(round_to_place(0.0, 3).unwrap().is_sign_positive());
        assert!(round_to_place(-0.0, 3).unwrap().is_sign_negative());
    }

    #[test]
    fn test_round_sign_matches_input_when_nonzero() {
        for x in [-987.654, -1.5, -0.25, 0.25, 1.5, 987.654] {
            let rounded = round_to_place(x, 1).unwrap();
            assert!(rounded != 0.0);
            assert_eq!(rounded.signum(), x.signum(), "sign flipped for {x}");
        }
    }

    #[test]
    fn test_round_cosine_noise_to_zero() {
        let cos = std::f64::consts::FRAC_PI_2.cos();
        assert_eq!(round_to_place(cos, 4).unwrap(), 0.0);
        assert_eq!(round_to_place(std::f64::consts::FRAC_PI_4.cos(), 4).unwrap(), 0.7071);
    }

    #[test]
    fn test_round_rejects_non_finite() {
        assert!(matches!(
            round_to_place(f64::NAN, 2),
            Err(RenderError::NonFinite(_))
        ));
        assert!(matches!(
            round_to_place(f64::INFINITY, 2),
            Err(RenderError::NonFinite(_))
        ));
    }

    #[test]
    fn test_round_exact_ties_go_up_before_final_round() {
        assert_eq!(round_to_place(123456789012344.5, 0).unwrap(), 123456789012345.0);
        assert_eq!(round_to_place(1234567890123.125, 2).unwrap(), 1234567890123.13);
    }

    #[test]
    fn test_round_to_precision_keeps_fifteen_digits() {
        assert_eq!(to_precision(100.49999999999999, 15), 100.5);
        assert_eq!(to_precision(0.0, 15), 0.0);
        assert_eq!(to_precision(1.0e-300, 15), 1.0e-300);
    }

    #[test]
    fn test_round_far_negative_places_is_signed_zero() {
        let positive = round_to_place(5.0, -400).unwrap();
        assert_eq!(positive, 0.0);
        assert!(positive.is_sign_positive());

        let negative = round_to_place(-5.0, -400).unwrap();
        assert_eq!(negative, 0.0);
        assert!(negative.is_sign_negative());
    }

    #[test]
    fn test_round_up_past_max_stays_finite() {
        let rounded = round_to_place(f64::MAX, -308).unwrap();
        assert!(rounded.is_finite());
        assert_eq!(rounded, f64::MAX);
    }

    #[test]
    fn test_round_huge_value_passes_through() {
        assert_eq!(round_to_place(1e308, 10).unwrap(), 1e308);
    }
}
