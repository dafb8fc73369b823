//! Bus Range Validators
//!
//! ## Overview
//!
//! Every numeric parameter on the instrumentation bus has a legal envelope.
//! Displays and autopilots downstream trust that envelope, so the engine
//! enforces it before anything is published.
//!
//! Unlike an acquisition-side validator that rejects a bad sample, a bus
//! validator never fails. There is always something to publish, so an
//! illegal value is brought back into range and the adjustment reported.
//!
//! ## Rules
//!
//! | Quantity | Rule | Default envelope |
//! |----------|------|------------------|
//! | outside temperature, dew point, wind chill, heat index | saturate | 233.15 to 358.15 K |
//! | pressure | saturate | 80 000 to 120 000 Pa |
//! | humidity | saturate | 0 to 1 |
//! | true and apparent wind speed | saturate | 0 to 102.3 m/s |
//! | true wind direction | wrap | [0, 2π) |
//! | apparent wind angle | wrap | (-π, π] |
//!
//! Absolute humidity and air density have no rule; their formulas already
//! fall back to safe values.
//!
//! ## Guarantees
//!
//! - Only present quantities are touched. The validator never invents a
//!   value for an absent one.
//! - Non-finite values pass through untouched for the mapper to replace.
//! - Idempotent: in-range values come back bit-identical, so validating a
//!   validated set changes nothing.
//!
//! ## Usage Example
//!
//! ```rust
//! use wxbus_core::observation::{CandidateSet, Quantity};
//! use wxbus_core::validators::RangeValidator;
//! use wxbus_core::config::BusLimits;
//!
//! let validator = RangeValidator::new(&BusLimits::default());
//!
//! let mut set = CandidateSet::new();
//! set.set(Quantity::OutsideTemperature, 400.0);
//! set.set(Quantity::TrueWindDirection, -0.5);
//!
//! let valid = validator.apply(set);
//! assert_eq!(valid.get(Quantity::OutsideTemperature), Some(358.15));
//! assert!(valid.get(Quantity::TrueWindDirection).unwrap() > 5.7);
//! assert_eq!(valid.get(Quantity::Pressure), None);
//! ```

mod temperature;
mod humidity;
mod pressure;
mod wind;
mod utils;

pub use temperature::TemperatureValidator;
pub use humidity::HumidityValidator;
pub use pressure::PressureValidator;
pub use wind::{AngleValidator, DirectionValidator, WindSpeedValidator};

use crate::{
    config::BusLimits,
    observation::{CandidateSet, Quantity},
    traits::{Adjustment, Validator},
};

/// Applies the bus rule of every quantity to a candidate set
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeValidator {
    temperature: TemperatureValidator,
    pressure: PressureValidator,
    humidity: HumidityValidator,
    wind_speed: WindSpeedValidator,
    direction: DirectionValidator,
    angle: AngleValidator,
}

impl Default for RangeValidator {
    fn default() -> Self {
        Self::new(&BusLimits::default())
    }
}

impl RangeValidator {
    /// Build the rule set for a limit table
    pub fn new(limits: &BusLimits) -> Self {
        Self {
            temperature: TemperatureValidator::new(limits.temperature),
            pressure: PressureValidator::new(limits.pressure),
            humidity: HumidityValidator::new(limits.humidity),
            wind_speed: WindSpeedValidator::new(limits.wind_speed),
            direction: DirectionValidator,
            angle: AngleValidator,
        }
    }

    /// Rule for a quantity, `None` for quantities without one
    pub fn rule_for(&self, quantity: Quantity) -> Option<&dyn Validator> {
        match quantity {
            Quantity::OutsideTemperature
            | Quantity::DewPoint
            | Quantity::HeatIndex
            | Quantity::WindChill => Some(&self.temperature),
            Quantity::Pressure => Some(&self.pressure),
            Quantity::Humidity => Some(&self.humidity),
            Quantity::TrueWindSpeed | Quantity::ApparentWindSpeed => Some(&self.wind_speed),
            Quantity::TrueWindDirection => Some(&self.direction),
            Quantity::ApparentWindAngle => Some(&self.angle),
            Quantity::AbsoluteHumidity | Quantity::AirDensity => None,
        }
    }

    /// Bring one value of `quantity` into range
    pub fn constrain(&self, quantity: Quantity, value: f64) -> Adjustment {
        match self.rule_for(quantity) {
            Some(rule) => rule.constrain(value),
            None => Adjustment::Unchanged(value),
        }
    }

    /// Bring every present quantity of `set` into range
    pub fn apply(&self, set: CandidateSet) -> CandidateSet {
        let mut valid = set;

        for (quantity, value) in set.iter() {
            match self.constrain(quantity, value) {
                Adjustment::Unchanged(_) => {}
                Adjustment::Clamped { original, value } => {
                    log_debug!("{} clamped: {} -> {}", quantity.name(), original, value);
                    valid.set(quantity, value);
                }
                Adjustment::Wrapped { original, value } => {
                    log_debug!("{} wrapped: {} -> {}", quantity.name(), original, value);
                    valid.set(quantity, value);
                }
            }
        }

        valid
    }
}
