//! Transformation Engine
//!
//! ## One Cycle
//!
//! ```text
//!  Observation ──normalize humidity──┬──────────────────────────┐
//!                                    │                          │
//!  VesselMotion ──> wind::apparent_wind ─┐                      │
//!                   comfort::*           ├─> DerivedSet ──merge─┴─> CandidateSet
//!                   psychrometrics::*  ──┘                              │
//!                                                                       v
//!                                MeasurementBatch <── DefaultingMapper <── RangeValidator
//! ```
//!
//! Derived quantities are computed from the raw observation, not from
//! clamped values, so a dew point is never skewed by the display envelope
//! of the temperature it came from. Every derived value then goes through
//! the same range rules as the observed ones.
//!
//! The engine holds nothing but its immutable configuration. It is `Send`
//! and `Sync`, and one instance can serve any number of threads by
//! reference.
//!
//! ## Example
//!
//! ```rust
//! use wxbus_core::{Engine, Observation, VesselMotion, Parameter};
//! use wxbus_core::time::to_datetime;
//!
//! let engine = Engine::default();
//! let observation = Observation::new()
//!     .with_temperature(288.15)
//!     .with_pressure(101_325.0)
//!     .with_humidity(65.0)
//!     .with_wind(5.14, 1.5708);
//!
//! let batch = engine.process(observation, VesselMotion::new(0.0, 0.0), to_datetime(0));
//!
//! assert_eq!(batch.value(Parameter::RelativeHumidity), Some(0.65));
//! assert_eq!(batch.value(Parameter::ApparentWindSpeed), Some(5.14));
//! assert_eq!(batch.value(Parameter::WindChillTemperature), Some(288.15));
//! ```

use chrono::{DateTime, Utc};

use crate::{
    batch::MeasurementBatch,
    comfort,
    config::EngineConfig,
    errors::ConfigResult,
    mapper::DefaultingMapper,
    observation::{CandidateSet, DerivedSet, Observation, VesselMotion},
    psychrometrics,
    time::{to_datetime, TimeSource},
    traits::finite,
    units::normalize_humidity,
    validators::RangeValidator,
    wind,
};

/// Weather-to-instrumentation transformation engine
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Engine {
    config: EngineConfig,
    validator: RangeValidator,
}

impl Default for Engine {
    fn default() -> Self {
        let config = EngineConfig::default();
        Self { validator: RangeValidator::new(&config.limits), config }
    }
}

impl Engine {
    /// Build an engine, refusing an inconsistent configuration
    pub fn new(config: EngineConfig) -> ConfigResult<Self> {
        config.validate()?;
        Ok(Self { validator: RangeValidator::new(&config.limits), config })
    }

    /// Configuration in use
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Run one cycle, stamping every measurement with `timestamp`
    pub fn process(
        &self,
        observation: Observation,
        motion: VesselMotion,
        timestamp: DateTime<Utc>,
    ) -> MeasurementBatch {
        let observation = normalize(observation);
        let derived = derive(&observation, &motion);

        let candidates = CandidateSet::merge(&observation, &derived);
        let valid = self.validator.apply(candidates);

        DefaultingMapper::new(&self.config.defaults).map(&valid, observation.description, timestamp)
    }

    /// Run one cycle, reading the timestamp from `clock`
    pub fn process_at<C: TimeSource>(
        &self,
        observation: Observation,
        motion: VesselMotion,
        clock: &C,
    ) -> MeasurementBatch {
        self.process(observation, motion, to_datetime(clock.now()))
    }
}

/// Bring provider-ambiguous fields into bus units
///
/// Only humidity is ambiguous: a value above 1 is taken as a percentage.
pub fn normalize(mut observation: Observation) -> Observation {
    observation.humidity = observation.humidity.map(normalize_humidity);
    observation
}

/// Compute every derived quantity from a normalized observation
///
/// Unknown inputs enter the formulas as NaN and come out through their
/// documented passthrough or fallback.
///
/// Without any directional reference the vessel velocity cannot be
/// resolved, so its speed is ignored and the apparent wind angle is taken
/// against North: a degraded cycle then publishes the true wind speed
/// paired with the true wind direction.
pub fn derive(observation: &Observation, motion: &VesselMotion) -> DerivedSet {
    let unknown = |value: Option<f64>| finite(value).unwrap_or(f64::NAN);

    let temperature = unknown(observation.temperature);
    let pressure = unknown(observation.pressure);
    let humidity = unknown(observation.humidity);
    let wind_speed = unknown(observation.wind_speed);
    let wind_direction = unknown(observation.wind_direction);

    let (vessel_speed, reference) = match motion.reference() {
        Some(reference) => (unknown(motion.usable_speed()), reference),
        None => (f64::NAN, 0.0),
    };
    let apparent = wind::apparent_wind(wind_speed, wind_direction, vessel_speed, reference);

    DerivedSet {
        apparent_wind_speed: apparent.speed,
        apparent_wind_angle: apparent.angle,
        wind_chill: comfort::wind_chill(temperature, wind_speed),
        heat_index: comfort::heat_index(temperature, humidity),
        dew_point: comfort::dew_point(temperature, humidity),
        absolute_humidity: psychrometrics::absolute_humidity(temperature, humidity),
        air_density: psychrometrics::air_density(temperature, pressure, humidity),
    }
}
