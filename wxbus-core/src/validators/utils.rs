//! Common Range Operations
//!
//! Shared by every bus rule so that all of them agree on two things:
//!
//! - a value already inside the envelope comes back bit-identical, which
//!   is what makes a second pass of the validator a no-op
//! - a non-finite value is never touched; it is the mapper's job to
//!   replace it, and clamping NaN would hide that it was unknown
//!
//! ## Saturating vs Wrapping
//!
//! ```text
//! saturate(130000, [80000, 120000]) = 120000
//! wrap(7.0, [0, 2π))                = 7.0 - 2π ≈ 0.717
//! ```

use crate::config::Range;
use crate::traits::{Adjustment, Validatable};
use crate::units::{normalize_angle, wrap_direction};

/// Pin `value` into `[range.min, range.max]`
pub fn saturate(value: f64, range: &Range) -> Adjustment {
    if !value.is_valid() || range.contains(value) {
        return Adjustment::Unchanged(value);
    }

    let bound = if value < range.min { range.min } else { range.max };
    Adjustment::Clamped { original: value, value: bound }
}

/// Fold a compass direction into `[0, 2π)`
pub fn wrap(value: f64) -> Adjustment {
    fold(value, wrap_direction)
}

/// Fold a relative angle into `(-π, π]`
pub fn normalize(value: f64) -> Adjustment {
    fold(value, normalize_angle)
}

fn fold(value: f64, reduce: fn(f64) -> f64) -> Adjustment {
    if !value.is_valid() {
        return Adjustment::Unchanged(value);
    }

    let folded = reduce(value);
    if folded.to_bits() == value.to_bits() {
        Adjustment::Unchanged(value)
    } else {
        Adjustment::Wrapped { original: value, value: folded }
    }
}
