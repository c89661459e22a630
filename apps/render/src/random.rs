//! Uniform random numbers for caption variation (jitter, picking templates).
//!
//! Both helpers use a half-open range: `max` is never returned. `min == max` is
//! treated as the degenerate range and returns `min`.

use rand::Rng;

use crate::errors::{ensure_finite, RenderError};

/// Uniform integer in `[min, max)`. Note the exclusive upper bound.
pub fn random_int(min: i64, max: i64) -> Result<i64, RenderError> {
    random_int_with(&mut rand::thread_rng(), min, max)
}

/// Uniform float in `[min, max)`.
pub fn random_float(min: f64, max: f64) -> Result<f64, RenderError> {
    random_float_with(&mut rand::thread_rng(), min, max)
}

/// [`random_int`] drawing from a caller-supplied generator.
pub fn random_int_with<R: Rng + ?Sized>(
    rng: &mut R,
    min: i64,
    max: i64,
) -> Result<i64, RenderError> {
    if max < min {
        return Err(RenderError::InvalidRange {
            min: min as f64,
            max: max as f64,
        });
    }
    if max == min {
        return Ok(min);
    }
    Ok(rng.gen_range(min..max))
}

/// [`random_float`] drawing from a caller-supplied generator.
pub fn random_float_with<R: Rng + ?Sized>(
    rng: &mut R,
    min: f64,
    max: f64,
) -> Result<f64, RenderError> {
    ensure_finite(min)?;
    ensure_finite(max)?;
    if max < min {
        return Err(RenderError::InvalidRange { min, max });
    }
    if max == min {
        return Ok(min);
    }
    if !(max - min).is_finite() {
        // Width overflows f64; sample the halved range and scale back, which is exact.
        return Ok(rng.gen_range(min / 2.0..max / 2.0) * 2.0);
    }
    Ok(rng.gen_range(min..max))
}
