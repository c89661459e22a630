// Number formatting for caption templates: correction-aware rounding, K/M/B/T
// abbreviation, and CSS-safe number printing.

pub mod abbreviate;
pub mod rounding;

pub use abbreviate::{abbreviate_number, Numeric};
pub use rounding::round_to_place;

/// Prints a number the way JS `Number#toString` does: shortest round-trip digits,
/// negative zero as `0`, and exponent form (`1e+21`, `1.5e-7`) outside
/// `[1e-6, 1e21)`.
pub fn css_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    let magnitude = value.abs();
    if !(1e-6..1e21).contains(&magnitude) {
        let text = format!("{value:e}");
        return match text.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{mantissa}e+{exponent}")
            }
            _ => text,
        };
    }
    format!("{value}")
}
