//! Wind rules
//!
//! Speed saturates like any magnitude. Direction and angle are circular:
//! 370° is 10°, so they are folded back by whole turns instead.
//!
//! ```text
//! true wind direction   [0, 2π)     compass, 0 = North
//! apparent wind angle   (-π, π]     relative to the bow, sign gives the side
//! ```

use crate::{
    config::Range,
    constants::bus::{ANGLE_MAX_RAD, ANGLE_MIN_RAD, DIRECTION_MAX_RAD, DIRECTION_MIN_RAD},
    traits::{Adjustment, RangeKind, Validator, ValidatorConstraints},
};

use super::utils;

/// Wind speed validator for m/s values (true and apparent)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindSpeedValidator {
    range: Range,
}

impl Default for WindSpeedValidator {
    fn default() -> Self {
        Self::new(crate::config::BusLimits::default().wind_speed)
    }
}

impl WindSpeedValidator {
    /// Create validator for a m/s range
    pub const fn new(range: Range) -> Self {
        Self { range }
    }
}

impl Validator for WindSpeedValidator {
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

/// Compass direction validator, wraps into `[0, 2π)`
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DirectionValidator;

impl Validator for DirectionValidator {
    fn constrain(&self, value: f64) -> Adjustment {
        utils::wrap(value)
    }

    fn constraints(&self) -> ValidatorConstraints {
        ValidatorConstraints {
            min_value: DIRECTION_MIN_RAD,
            max_value: DIRECTION_MAX_RAD,
            kind: RangeKind::Wrapping,
        }
    }
}

/// Relative angle validator, normalizes into `(-π, π]`
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AngleValidator;

impl Validator for AngleValidator {
    fn constrain(&self, value: f64) -> Adjustment {
        utils::normalize(value)
    }

    fn constraints(&self) -> ValidatorConstraints {
        ValidatorConstraints {
            min_value: ANGLE_MIN_RAD,
            max_value: ANGLE_MAX_RAD,
            kind: RangeKind::Wrapping,
        }
    }
}
