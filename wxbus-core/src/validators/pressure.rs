//! Atmospheric pressure rule
//!
//! 800 to 1200 hPa. The lowest sea-level pressure on record is about
//! 870 hPa (typhoon Tip) and the highest about 1084 hPa, so anything outside
//! the default envelope is a sensor or unit error.

use crate::{
    config::Range,
    traits::{Adjustment, RangeKind, Validator, ValidatorConstraints},
};

use super::utils;

/// Pressure validator for Pascal values
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PressureValidator {
    range: Range,
}

impl Default for PressureValidator {
    fn default() -> Self {
        Self::new(crate::config::BusLimits::default().pressure)
    }
}

impl PressureValidator {
    /// Create validator for a Pascal range
    pub const fn new(range: Range) -> Self {
        Self { range }
    }
}

impl Validator for PressureValidator {
    fn constrain(&self, value: f64) -> Adjustment {
        utils::saturate(value, &self.range)
    }

    fn constraints(&self) -> ValidatorConstraints {
        ValidatorConstraints {
            min_value: self.range.min,
            max_value: self.range.max,
            kind: RangeKind::Saturating,
        }
    }
}
