//! Provider Adapter
//!
//! Weather providers report in their own units: Celsius, millibar, humidity
//! as either a percentage or a ratio, wind in km/h or knots, directions in
//! degrees. [`ProviderReading`] carries a reading as the provider gave it
//! and converts it to a bus-unit [`Observation`] in one place.
//!
//! ```rust
//! use wxbus_core::adapter::{ProviderReading, SpeedUnit};
//!
//! let reading = ProviderReading {
//!     temperature_c: Some(15.0),
//!     pressure_mbar: Some(1013.25),
//!     humidity: Some(65.0),
//!     wind_speed: Some(18.5),
//!     wind_speed_unit: SpeedUnit::KilometresPerHour,
//!     wind_direction_deg: Some(90.0),
//!     description: Some("Partly cloudy"),
//! };
//!
//! let observation = reading.to_observation();
//! assert_eq!(observation.pressure, Some(101_325.0));
//! assert_eq!(observation.humidity, Some(0.65));
//! ```
//!
//! With the `std` feature, [`observation_from_json`] reads an observation
//! already in bus units from JSON, tolerating the kind of junk providers
//! actually send: a field that is missing, `null`, a string, or anything
//! else that is not a number is read as unknown.

use crate::{
    observation::{truncate_description, Observation},
    units::{
        celsius_to_kelvin, deg_to_rad, kmh_to_ms, knots_to_ms, mbar_to_pascal, normalize_humidity,
    },
};

/// Unit a provider reports wind speed in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SpeedUnit {
    /// km/h, the usual metric forecast unit
    #[default]
    KilometresPerHour,
    /// Nautical miles per hour
    Knots,
    /// Already SI
    MetresPerSecond,
}

impl SpeedUnit {
    /// Convert a speed in this unit to m/s
    pub fn to_ms(self, speed: f64) -> f64 {
        match self {
            SpeedUnit::KilometresPerHour => kmh_to_ms(speed),
            SpeedUnit::Knots => knots_to_ms(speed),
            SpeedUnit::MetresPerSecond => speed,
        }
    }
}

/// Observation in provider-native units
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ProviderReading<'a> {
    /// Air temperature (°C)
    pub temperature_c: Option<f64>,
    /// Pressure (mbar, equal to hPa)
    pub pressure_mbar: Option<f64>,
    /// Relative humidity, percentage or ratio
    pub humidity: Option<f64>,
    /// Wind speed in `wind_speed_unit`
    pub wind_speed: Option<f64>,
    /// Unit of `wind_speed`
    pub wind_speed_unit: SpeedUnit,
    /// Wind direction (degrees true, 0 = North)
    pub wind_direction_deg: Option<f64>,
    /// Weather text
    pub description: Option<&'a str>,
}

impl ProviderReading<'_> {
    /// Convert to bus units
    pub fn to_observation(&self) -> Observation {
        Observation {
            temperature: self.temperature_c.map(celsius_to_kelvin),
            pressure: self.pressure_mbar.map(mbar_to_pascal),
            humidity: self.humidity.map(normalize_humidity),
            wind_speed: self.wind_speed.map(|v| self.wind_speed_unit.to_ms(v)),
            wind_direction: self.wind_direction_deg.map(deg_to_rad),
            description: self.description.map(truncate_description),
        }
    }
}

/// Read a bus-unit observation from JSON
///
/// Keys are `temperature`, `pressure`, `humidity`, `windSpeed`,
/// `windDirection` and `description`. Only malformed JSON, or a document
/// that is not an object, is an error.
#[cfg(feature = "std")]
pub fn observation_from_json(json: &str) -> crate::errors::ConfigResult<Observation> {
    use serde_json::Value;

    let value: Value = serde_json::from_str(json)?;
    let Value::Object(fields) = value else {
        return Err(crate::errors::ConfigError::Parse { category: "data", line: 1, column: 1 });
    };

    let number = |key: &str| fields.get(key).and_then(Value::as_f64);

    Ok(Observation {
        temperature: number("temperature"),
        pressure: number("pressure"),
        humidity: number("humidity"),
        wind_speed: number("windSpeed"),
        wind_direction: number("windDirection"),
        description: fields
            .get("description")
            .and_then(Value::as_str)
            .map(truncate_description),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_units_converted() {
        let reading = ProviderReading {
            temperature_c: Some(-5.0),
            wind_speed: Some(36.0),
            wind_direction_deg: Some(180.0),
            humidity: Some(0.4),
            ..ProviderReading::default()
        };

        let observation = reading.to_observation();
        assert_eq!(observation.temperature, Some(268.15));
        assert_eq!(observation.wind_speed, Some(10.0));
        assert!((observation.wind_direction.unwrap() - core::f64::consts::PI).abs() < 1e-12);
        assert_eq!(observation.humidity, Some(0.4));
        assert_eq!(observation.pressure, None);
    }

    #[test]
    fn knots() {
        let reading = ProviderReading {
            wind_speed: Some(10.0),
            wind_speed_unit: SpeedUnit::Knots,
            ..ProviderReading::default()
        };
        let speed = reading.to_observation().wind_speed.unwrap();
        assert!((speed - 5.144_444).abs() < 1e-6);
    }

    #[cfg(feature = "std")]
    #[test]
    fn lenient_json() {
        let observation = observation_from_json(
            r#"{
                "temperature": 288.15,
                "pressure": "n/a",
                "humidity": null,
                "windSpeed": 5,
                "description": "Light rain"
            }"#,
        )
        .unwrap();

        assert_eq!(observation.temperature, Some(288.15));
        assert_eq!(observation.pressure, None);
        assert_eq!(observation.humidity, None);
        assert_eq!(observation.wind_speed, Some(5.0));
        assert_eq!(observation.wind_direction, None);
        assert_eq!(observation.description.as_deref(), Some("Light rain"));
    }

    #[cfg(feature = "std")]
    #[test]
    fn json_must_be_an_object() {
        assert!(observation_from_json("[1, 2]").is_err());
        assert!(observation_from_json("{").is_err());
        assert_eq!(observation_from_json("{}").unwrap(), Observation::new());
    }
}
