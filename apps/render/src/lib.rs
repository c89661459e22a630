//! Layout and styling helpers for rendering captions in a browser page.
//!
//! - [`dom`]: shrink-to-fit against an abstract DOM host
//! - [`format`]: rounding and K/M/B/T abbreviation
//! - [`stroke`]: stacked-shadow text outlines
//! - [`random`]: half-open uniform random numbers

pub mod config;
pub mod dom;
pub mod errors;
pub mod format;
pub mod random;
pub mod stroke;

// Re-export the public API consumed by the binary and the page bridge.
pub use dom::{fit, initialize, outer_height, DomHost, FitOutcome, GlyphPass};
pub use errors::RenderError;
pub use format::{abbreviate_number, round_to_place};
pub use random::{random_float, random_int};
pub use stroke::{calculate_stroke_text_css, StrokeStyle};
