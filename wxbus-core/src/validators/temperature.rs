//! Temperature rule
//!
//! One rule for every temperature on the bus: outside air, dew point, wind
//! chill and heat index. The default envelope, -40 °C to 85 °C, is the
//! operating range of typical marine display hardware rather than a
//! physical limit.

use crate::{
    config::Range,
    traits::{Adjustment, RangeKind, Validator, ValidatorConstraints},
};

use super::utils;

/// Temperature validator for Kelvin values
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemperatureValidator {
    range: Range,
}

impl Default for TemperatureValidator {
    fn default() -> Self {
        Self::new(crate::config::BusLimits::default().temperature)
    }
}

impl TemperatureValidator {
    /// Create validator for a Kelvin range
    pub const fn new(range: Range) -> Self {
        Self { range }
    }
}

impl Validator for TemperatureValidator {
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
