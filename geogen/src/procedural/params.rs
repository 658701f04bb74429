//! Parameter validation shared by the generators
//!
//! Invalid inputs are clamped to the nearest valid value with a warning
//! naming the generator and the parameter.

use tracing::warn;

use crate::constants::MIN_EXTENT;

/// Clamp a length that must be strictly positive (NaN included)
pub(super) fn positive(generator: &str, param: &str, value: f32) -> f32 {
    if value > 0.0 {
        value
    } else {
        warn!("{generator}: {param} must be > 0.0, clamping to {MIN_EXTENT}");
        MIN_EXTENT
    }
}

/// Clamp a radius that may be zero but not negative
pub(super) fn non_negative(generator: &str, param: &str, value: f32) -> f32 {
    if value >= 0.0 {
        value
    } else {
        warn!("{generator}: {param} must be >= 0.0, clamping to 0.0");
        0.0
    }
}

/// Clamp a sample count to its minimum
pub(super) fn at_least(generator: &str, param: &str, value: u32, min: u32) -> u32 {
    if value >= min {
        value
    } else {
        warn!("{generator}: {param} must be >= {min}, clamping to {min}");
        min
    }
}
