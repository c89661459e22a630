//! Outlined ("stroke") caption text built from stacked shadows.
//!
//! Browsers have no reliable text stroke for the caption fonts we use, so the
//! outline is faked by placing `steps` hard-edged shadow copies evenly around a
//! circle whose radius is the stroke width. More steps give a smoother outline.
//! The result is valid for both `text-shadow` and `box-shadow`.

use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};

use crate::format::css_number;
use crate::format::rounding::round_finite;

/// Decimal places kept for each unit-circle offset.
const OFFSET_PLACES: i32 = 4;

/// Names of the CSS custom properties the generated shadows refer to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrokeStyle {
    pub width_var: String,
    pub color_var: String,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            width_var: "--stroke-width".to_string(),
            color_var: "--stroke-color".to_string(),
        }
    }
}

impl StrokeStyle {
    pub fn new(width_var: &str, color_var: &str) -> Self {
        Self {
            width_var: width_var.to_string(),
            color_var: color_var.to_string(),
        }
    }

    /// Shadow list with one clause per step, joined by `",\n"`. Zero steps gives `""`.
    pub fn text_shadow(&self, steps: usize) -> String {
        stroke_offsets(steps)
            .into_iter()
            .map(|(cos, sin)| self.clause(cos, sin))
            .collect::<Vec<_>>()
            .join(",\n")
    }

    fn clause(&self, cos: f64, sin: f64) -> String {
        format!(
            "calc(var({w}) * {x}) calc(var({w}) * {y}) 0 var({c})",
            w = self.width_var,
            c = self.color_var,
            x = css_number(cos),
            y = css_number(sin),
        )
    }
}

/// Unit-circle offsets `(cos, sin)` for `steps` evenly spaced angles starting at 0,
/// each rounded to 4 decimal places.
pub fn stroke_offsets(steps: usize) -> Vec<(f64, f64)> {
    (0..steps)
        .map(|i| {
            let angle = i as f64 * TAU / steps as f64;
            (
                round_finite(angle.cos(), OFFSET_PLACES),
                round_finite(angle.sin(), OFFSET_PLACES),
            )
        })
        .collect()
}

/// `text-shadow` value for a stroke using `--stroke-width` and `--stroke-color`.
pub fn calculate_stroke_text_css(steps: usize) -> String {
    StrokeStyle::default().text_shadow(steps)
}
