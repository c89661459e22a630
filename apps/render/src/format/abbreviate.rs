//! SI-style abbreviation for large counts shown in captions ("1.5K", "2.5M").

use crate::errors::{ensure_finite, RenderError};
use crate::format::css_number;
use crate::format::rounding::round_finite;

/// Tiers checked from largest to smallest. Everything at or above the trillion
/// threshold is expressed in trillions.
const TIERS: [(f64, &str); 4] = [(1e12, "T"), (1e9, "B"), (1e6, "M"), (1e3, "K")];

/// Numeric input accepted by [`abbreviate_number`]: a number, or text holding one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Numeric<'a> {
    Number(f64),
    Text(&'a str),
}

impl From<f64> for Numeric<'_> {
    fn from(value: f64) -> Self {
        Numeric::Number(value)
    }
}

impl From<i64> for Numeric<'_> {
    fn from(value: i64) -> Self {
        Numeric::Number(value as f64)
    }
}

impl<'a> From<&'a str> for Numeric<'a> {
    fn from(value: &'a str) -> Self {
        Numeric::Text(value)
    }
}

/// Abbreviates `value` with a K/M/B/T suffix.
///
/// Values below 1,000 come back unchanged: text input is returned verbatim,
/// numbers in their shortest decimal form. Larger values are divided by their
/// tier, rounded to one place and always printed with one decimal (`"3.0B"`).
pub fn abbreviate_number<'a>(value: impl Into<Numeric<'a>>) -> Result<String, RenderError> {
    let (number, verbatim) = match value.into() {
        Numeric::Number(n) => (ensure_finite(n)?, None),
        Numeric::Text(text) => {
            let parsed = text
                .trim()
                .parse::<f64>()
                .map_err(|_| RenderError::InvalidNumber(text.to_string()))?;
            (ensure_finite(parsed)?, Some(text))
        }
    };

    let Some((divisor, suffix)) = TIERS.iter().find(|(threshold, _)| number >= *threshold) else {
        return Ok(verbatim.map_or_else(|| css_number(number), str::to_string));
    };

    let scaled = round_finite(number / divisor, 1);
    Ok(format!("{scaled:.1}{suffix}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_below_thousand_unchanged() {
        assert_eq!(abbreviate_number(999.0).unwrap(), "999");
        assert_eq!(abbreviate_number(0.0).unwrap(), "0");
        assert_eq!(abbreviate_number(12.5).unwrap(), "12.5");
    }

    #[test]
    fn test_negative_values_are_below_every_tier() {
        assert_eq!(abbreviate_number(-25_000.0).unwrap(), "-25000");
        assert_eq!(abbreviate_number(-1e21).unwrap(), "-1e+21");
    }

    #[test]
    fn test_text_below_thousand_returned_verbatim() {
        assert_eq!(abbreviate_number("0999").unwrap(), "0999");
        assert_eq!(abbreviate_number(" 42 ").unwrap(), " 42 ");
    }

    #[test]
    fn test_thousands() {
        assert_eq!(abbreviate_number(1500.0).unwrap(), "1.5K");
        assert_eq!(abbreviate_number(1000.0).unwrap(), "1.0K");
        assert_eq!(abbreviate_number(12_345.0).unwrap(), "12.3K");
    }

    #[test]
    fn test_millions() {
        assert_eq!(abbreviate_number(2_500_000_i64).unwrap(), "2.5M");
    }

    #[test]
    fn test_billions_keep_trailing_zero() {
        assert_eq!(abbreviate_number(3_000_000_000_i64).unwrap(), "3.0B");
    }

    #[test]
    fn test_trillions_tier() {
        assert_eq!(abbreviate_number(4e12).unwrap(), "4.0T");
        assert_eq!(abbreviate_number(1.25e15).unwrap(), "1250.0T");
    }

    #[test]
    fn test_tier_boundary_rounding_is_not_promoted() {
        // 999,950 / 1000 rounds to 1000.0 but stays in the K tier
        assert_eq!(abbreviate_number(999_950.0).unwrap(), "1000.0K");
    }

    #[test]
    fn test_numeric_text_is_abbreviated() {
        assert_eq!(abbreviate_number("1500").unwrap(), "1.5K");
        assert_eq!(abbreviate_number("2500000").unwrap(), "2.5M");
    }

    #[test]
    fn test_non_numeric_text_rejected() {
        assert_eq!(
            abbreviate_number("lots"),
            Err(RenderError::InvalidNumber("lots".to_string()))
        );
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(matches!(
            abbreviate_number(f64::NAN),
            Err(RenderError::NonFinite(_))
        ));
        assert!(matches!(
            abbreviate_number("inf"),
            Err(RenderError::NonFinite(_))
        ));
    }
}
