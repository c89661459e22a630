use thiserror::Error;

/// Library-level error type.
/// Every fallible helper returns `Result<T, RenderError>`; the binary wraps it in `anyhow`.
#[derive(Debug, Error, PartialEq)]
pub enum RenderError {
    #[error("Element not found: {0}")]
    ElementNotFound(String),

    #[error("Element '{0}' has no child element to fit")]
    MissingChild(String),

    #[error("Cannot parse {property} value '{value}'")]
    UnparsableStyle { property: String, value: String },

    #[error("Expected a finite number, got {0}")]
    NonFinite(f64),

    #[error("Not a number: '{0}'")]
    InvalidNumber(String),

    #[error("Invalid range: max ({max}) is below min ({min})")]
    InvalidRange { min: f64, max: f64 },

    #[error("Glyph pass failed: {0}")]
    Glyph(String),
}

impl RenderError {
    pub(crate) fn unparsable(property: &str, value: &str) -> Self {
        RenderError::UnparsableStyle {
            property: property.to_string(),
            value: value.to_string(),
        }
    }
}

/// Rejects NaN and infinities before they reach arithmetic that would propagate them silently.
pub(crate) fn ensure_finite(value: f64) -> Result<f64, RenderError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(RenderError::NonFinite(value))
    }
}
