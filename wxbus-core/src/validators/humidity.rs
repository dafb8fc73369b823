//! Relative Humidity Rule
//!
//! ## Background
//!
//! Relative humidity on the bus is a ratio, 0 to 1. Values outside that
//! envelope come from two sources:
//!
//! - capacitive sensors drifting slightly negative in very dry air, or
//!   reading a little above saturation in fog
//! - unit confusion upstream (a percentage slipping through), which
//!   [`crate::units::normalize_humidity`] already handles before this rule
//!   runs
//!
//! Either way the reading is saturated to the nearest bound: fog reads as
//! saturated air, a negative drift reads as dry air.

use crate::{
    config::Range,
    traits::{Adjustment, RangeKind, Validator, ValidatorConstraints},
};

use super::utils;

/// Humidity validator for ratio values
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HumidityValidator {
    range: Range,
}

impl Default for HumidityValidator {
    fn default() -> Self {
        Self::new(crate::config::BusLimits::default().humidity)
    }
}

impl HumidityValidator {
    /// Create validator for a ratio range
    pub const fn new(range: Range) -> Self {
        Self { range }
    }
}

impl Validator for HumidityValidator {
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
