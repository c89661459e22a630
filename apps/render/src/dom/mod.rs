//! DOM host abstraction for the caption page.
//!
//! The rendering engine (a headless browser page in production, `MemoryDocument`
//! in tests) owns every element. Helpers here only borrow it through `DomHost`
//! for the duration of one call.

pub mod fit;
pub mod memory;

use tracing::debug;

use crate::errors::RenderError;

pub use fit::{fit, FitOutcome};
pub use memory::{HeightModel, MemoryDocument};

// ────────────────────────────────────────────────────────────────────────────
// Host trait
// ────────────────────────────────────────────────────────────────────────────

/// What a rendering environment must expose for layout helpers to run against it.
///
/// Style reads return the computed value as CSS text (`"16px"`); style writes
/// set the element's inline style.
pub trait DomHost {
    type Element: Clone;

    /// Resolves an element by its `id` attribute.
    fn element_by_id(&self, id: &str) -> Option<Self::Element>;

    /// First child *element* of `element`, skipping text nodes.
    fn first_child(&self, element: &Self::Element) -> Option<Self::Element>;

    /// The document body.
    fn body(&self) -> Self::Element;

    /// Rendered border-box height in px (`offsetHeight`).
    fn offset_height(&self, element: &Self::Element) -> f64;

    /// Computed value of a CSS property, or `None` if the host does not know it.
    fn computed_style(&self, element: &Self::Element, property: &str) -> Option<String>;

    fn set_inline_style(&mut self, element: &Self::Element, property: &str, value: &str);
}

// ────────────────────────────────────────────────────────────────────────────
// Measurement
// ────────────────────────────────────────────────────────────────────────────

/// Total vertical space an element takes up: box height plus top and bottom margins.
///
/// Margins are read with integer-prefix semantics, so `"10.7px"` counts as 10.
pub fn outer_height<H: DomHost>(host: &H, element: &H::Element) -> Result<f64, RenderError> {
    ["margin-top", "margin-bottom"]
        .iter()
        .try_fold(host.offset_height(element), |total, property| {
            let value = host.computed_style(element, property).unwrap_or_default();
            let margin = parse_leading_int(&value)
                .ok_or_else(|| RenderError::unparsable(property, &value))?;
            Ok(total + margin as f64)
        })
}

/// Reads a computed property as a float, e.g. `"16.5px"` → 16.5.
pub(crate) fn computed_px<H: DomHost>(
    host: &H,
    element: &H::Element,
    property: &str,
) -> Result<f64, RenderError> {
    let value = host.computed_style(element, property).unwrap_or_default();
    parse_leading_float(&value).ok_or_else(|| RenderError::unparsable(property, &value))
}

// ────────────────────────────────────────────────────────────────────────────
// CSS number parsing
// ────────────────────────────────────────────────────────────────────────────

/// Parses the integer at the start of a CSS value, ignoring any unit or fraction.
/// Leading whitespace and a sign are accepted; a value with no digits is `None`.
/// Digit runs too long for `i64` saturate instead of failing.
pub fn parse_leading_int(value: &str) -> Option<i64> {
    let trimmed = value.trim_start();
    let (negative, rest) = split_sign(trimmed);
    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    // Only overflow can fail here: the slice is all ASCII digits.
    let magnitude: i64 = rest[..digits].parse().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

/// Parses the decimal number at the start of a CSS value, ignoring any unit.
pub fn parse_leading_float(value: &str) -> Option<f64> {
    let trimmed = value.trim_start();
    let (negative, rest) = split_sign(trimmed);
    let bytes = rest.as_bytes();

    let int_digits = bytes.iter().take_while(|b| b.is_ascii_digit()).count();
    let mut end = int_digits;
    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = bytes[end + 1..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count();
        if frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    let magnitude: f64 = rest[..end].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

fn split_sign(value: &str) -> (bool, &str) {
    if let Some(rest) = value.strip_prefix('-') {
        (true, rest)
    } else {
        (false, value.strip_prefix('+').unwrap_or(value))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Glyph initialization
// ────────────────────────────────────────────────────────────────────────────

/// A document-wide glyph substitution (e.g. swapping emoji for image glyphs).
///
/// Runs only when the caller invokes [`initialize`]; nothing happens at load.
pub trait GlyphPass<H: DomHost> {
    fn apply(&mut self, host: &mut H, root: &H::Element) -> Result<(), RenderError>;
}

/// Runs `pass` once over the document body.
pub fn initialize<H, G>(host: &mut H, pass: &mut G) -> Result<(), RenderError>
where
    H: DomHost,
    G: GlyphPass<H>,
{
    let body = host.body();
    debug!("Running glyph pass over document body");
    pass.apply(host, &body)
}
