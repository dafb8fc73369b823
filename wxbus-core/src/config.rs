//! Engine Configuration
//!
//! The only process-wide state of the engine: the bus limit table and the
//! default table. Both are built once at startup, validated, and then
//! shared by reference with every invocation. Nothing here changes after
//! construction.
//!
//! ```rust
//! use wxbus_core::EngineConfig;
//!
//! let config = EngineConfig::default();
//! assert!(config.validate().is_ok());
//! assert_eq!(config.limits.temperature.max, 358.15);
//! assert_eq!(config.defaults.pressure, 101_325.0);
//! ```
//!
//! With the `std` feature a deployment can override either table from
//! JSON; keys it leaves out keep their compiled-in value:
//!
//! ```rust
//! # #[cfg(feature = "std")] {
//! use wxbus_core::EngineConfig;
//!
//! let config = EngineConfig::from_json(r#"{ "defaults": { "humidity": 0.7 } }"#).unwrap();
//! assert_eq!(config.defaults.humidity, 0.7);
//! assert_eq!(config.defaults.pressure, 101_325.0);
//! # }
//! ```

use core::f64::consts::PI;

use crate::{
    constants::{bus, defaults},
    errors::{ConfigError, ConfigResult},
    observation::Quantity,
};

/// Closed numeric range `[min, max]`
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    /// Lower bound
    pub min: f64,
    /// Upper bound
    pub max: f64,
}

impl Range {
    /// Create a range
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// True when `value` lies inside the range
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    fn check(&self, field: &'static str) -> ConfigResult<()> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(ConfigError::NonFinite { field });
        }
        if self.min >= self.max {
            return Err(ConfigError::InvalidRange { field, min: self.min, max: self.max });
        }
        Ok(())
    }
}

/// Legal numeric envelope of the bus for the saturating quantities
///
/// Directions and angles are not configurable: their envelopes are whole
/// turns, fixed by geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BusLimits {
    /// Every temperature slot (K)
    pub temperature: Range,
    /// Atmospheric pressure (Pa)
    pub pressure: Range,
    /// Relative humidity (ratio)
    pub humidity: Range,
    /// True and apparent wind speed (m/s)
    pub wind_speed: Range,
}

impl Default for BusLimits {
    fn default() -> Self {
        Self {
            temperature: Range::new(bus::TEMP_MIN_K, bus::TEMP_MAX_K),
            pressure: Range::new(bus::PRESSURE_MIN_PA, bus::PRESSURE_MAX_PA),
            humidity: Range::new(bus::HUMIDITY_MIN_RATIO, bus::HUMIDITY_MAX_RATIO),
            wind_speed: Range::new(bus::WIND_SPEED_MIN_MS, bus::WIND_SPEED_MAX_MS),
        }
    }
}

impl BusLimits {
    /// Check every range is finite and non-empty
    pub fn validate(&self) -> ConfigResult<()> {
        self.temperature.check("temperature")?;
        self.pressure.check("pressure")?;
        self.humidity.check("humidity")?;
        self.wind_speed.check("wind_speed")?;
        Ok(())
    }
}

/// Substitutes for absent or non-finite quantities
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DefaultTable {
    /// Outside temperature, dew point, wind chill and heat index (K)
    pub temperature: f64,
    /// Atmospheric pressure (Pa)
    pub pressure: f64,
    /// Relative humidity (ratio)
    pub humidity: f64,
    /// True and apparent wind speed (m/s)
    pub wind_speed: f64,
    /// True wind direction and apparent wind angle (rad)
    pub wind_angle: f64,
    /// Absolute humidity (kg/m³)
    pub absolute_humidity: f64,
    /// Air density (kg/m³)
    pub air_density: f64,
}

impl Default for DefaultTable {
    fn default() -> Self {
        Self {
            temperature: defaults::DEFAULT_TEMPERATURE_K,
            pressure: defaults::DEFAULT_PRESSURE_PA,
            humidity: defaults::DEFAULT_HUMIDITY_RATIO,
            wind_speed: defaults::DEFAULT_WIND_SPEED_MS,
            wind_angle: defaults::DEFAULT_WIND_ANGLE_RAD,
            absolute_humidity: defaults::DEFAULT_ABSOLUTE_HUMIDITY,
            air_density: defaults::DEFAULT_AIR_DENSITY,
        }
    }
}

impl DefaultTable {
    /// Default for one quantity
    pub fn for_quantity(&self, quantity: Quantity) -> f64 {
        match quantity {
            Quantity::OutsideTemperature
            | Quantity::DewPoint
            | Quantity::HeatIndex
            | Quantity::WindChill => self.temperature,
            Quantity::Pressure => self.pressure,
            Quantity::Humidity => self.humidity,
            Quantity::TrueWindSpeed | Quantity::ApparentWindSpeed => self.wind_speed,
            Quantity::TrueWindDirection | Quantity::ApparentWindAngle => self.wind_angle,
            Quantity::AbsoluteHumidity => self.absolute_humidity,
            Quantity::AirDensity => self.air_density,
        }
    }

    /// Check every default is publishable under `limits`
    ///
    /// A default must itself survive the range validator unchanged,
    /// otherwise the batch invariant would depend on the order of stages.
    pub fn validate(&self, limits: &BusLimits) -> ConfigResult<()> {
        within("temperature", self.temperature, &limits.temperature)?;
        within("pressure", self.pressure, &limits.pressure)?;
        within("humidity", self.humidity, &limits.humidity)?;
        within("wind_speed", self.wind_speed, &limits.wind_speed)?;
        // Shared by a [0, 2π) direction and a (-π, π] angle
        within("wind_angle", self.wind_angle, &Range::new(0.0, PI))?;
        within("absolute_humidity", self.absolute_humidity, &Range::new(0.0, f64::MAX))?;
        within("air_density", self.air_density, &Range::new(f64::MIN_POSITIVE, f64::MAX))?;
        Ok(())
    }
}

fn within(field: &'static str, value: f64, range: &Range) -> ConfigResult<()> {
    if !value.is_finite() {
        return Err(ConfigError::NonFinite { field });
    }
    if !range.contains(value) {
        return Err(ConfigError::DefaultOutOfRange {
            field,
            value,
            min: range.min,
            max: range.max,
        });
    }
    Ok(())
}

/// Complete engine configuration
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EngineConfig {
    /// Substitutes for missing quantities
    pub defaults: DefaultTable,
    /// Legal envelope of the bus
    pub limits: BusLimits,
}

impl EngineConfig {
    /// Validate both tables against each other
    pub fn validate(&self) -> ConfigResult<()> {
        self.limits.validate()?;
        self.defaults.validate(&self.limits)?;
        Ok(())
    }

    /// Parse and validate a JSON configuration
    #[cfg(feature = "std")]
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}
