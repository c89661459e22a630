//! Shrink-to-fit for caption text.
//!
//! The caption container has a fixed box; its first child holds the text. The
//! child's font size is stepped down 1px at a time until the child's outer height
//! no longer exceeds the container's. Font size 0 is the floor: content whose
//! height does not depend on font size would otherwise loop forever.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::dom::{computed_px, outer_height, DomHost};
use crate::errors::RenderError;
use crate::format::css_number;

/// Result of a [`fit`] call. The style writes themselves are left in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitOutcome {
    /// Number of inline `font-size` writes performed.
    pub steps: u64,
    /// Last font size written, in px. `None` when nothing was written.
    pub final_font_px: Option<f64>,
    /// True if the child fits its container on exit.
    pub fitted: bool,
}

impl FitOutcome {
    fn record_write(&mut self, font_px: f64) {
        self.steps = self.steps.saturating_add(1);
        self.final_font_px = Some(font_px);
    }
}

/// Shrinks the font of `container_id`'s first child until the child fits inside it.
///
/// Performs no writes when the child already fits. Never writes a negative size,
/// and gives up silently (with a warning) once the size reaches 0.
pub fn fit<H: DomHost>(host: &mut H, container_id: &str) -> Result<FitOutcome, RenderError> {
    let container = host
        .element_by_id(container_id)
        .ok_or_else(|| RenderError::ElementNotFound(container_id.to_string()))?;
    let child = host
        .first_child(&container)
        .ok_or_else(|| RenderError::MissingChild(container_id.to_string()))?;

    let mut outcome = FitOutcome {
        steps: 0,
        final_font_px: None,
        fitted: true,
    };

    while outer_height(&*host, &container)? < outer_height(&*host, &child)? {
        let font_px = computed_px(&*host, &child, "font-size")?;
        debug!(container = container_id, font_px, "Shrinking caption font");

        if font_px <= 0.0 {
            warn!(
                container = container_id,
                steps = outcome.steps,
                "Caption still overflows at font size 0, giving up"
            );
            outcome.fitted = false;
            break;
        }

        let next = (font_px - 1.0).max(0.0);
        host.set_inline_style(&child, "font-size", &format!("{}px", css_number(next)));
        outcome.record_write(next);
    }

    Ok(outcome)
}
