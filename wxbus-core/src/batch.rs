//! Measurement Batch - the engine's output
//!
//! ## Fixed Shape
//!
//! A batch always carries all sixteen numeric slots, in bus order, followed
//! by the weather description when there is one:
//!
//! ```text
//! #   name                                  unit    quantity
//! 0   outside-temperature                   K       OutsideTemperature
//! 1   dew-point-temperature                 K       DewPoint
//! 2   apparent-temperature/heat-index       K       HeatIndex
//! 3   wind-chill-temperature                K       WindChill
//! 4   theoretical-wind-chill-temperature    K       WindChill
//! 5   heat-index-temperature                K       HeatIndex
//! 6   atmospheric-pressure                  Pa      Pressure
//! 7   relative-humidity                     ratio   Humidity
//! 8   true-wind-speed                       m/s     TrueWindSpeed
//! 9   true-wind-direction                   rad     TrueWindDirection
//! 10  apparent-wind-speed                   m/s     ApparentWindSpeed
//! 11  apparent-wind-angle                   rad     ApparentWindAngle
//! 12  wind-speed-over-ground                m/s     TrueWindSpeed
//! 13  true-wind-angle-to-water              rad     TrueWindDirection
//! 14  absolute-humidity                     kg/m3   AbsoluteHumidity
//! 15  air-density                           kg/m3   AirDensity
//! -   weather-description                   text    (optional)
//! ```
//!
//! Several bus consumers listen for the same physical quantity under
//! different names. Those slots are aliases: one computed [`Quantity`]
//! fanned out, so they always carry identical values.
//!
//! ## Memory
//!
//! The batch lives in a fixed-capacity `heapless::Vec`, so building one never
//! allocates and works in `no_std`.

use chrono::{DateTime, Utc};
use heapless::Vec;

use crate::observation::{Description, Quantity};

/// Bus name of the optional text slot
pub const DESCRIPTION_NAME: &str = "weather-description";

/// Named slot of the output batch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Parameter {
    /// Outside air temperature
    OutsideTemperature = 0,
    /// Dew point
    DewPointTemperature = 1,
    /// Apparent temperature, published as heat index
    ApparentTemperature = 2,
    /// Wind chill
    WindChillTemperature = 3,
    /// Theoretical wind chill, alias of wind chill
    TheoreticalWindChillTemperature = 4,
    /// Heat index
    HeatIndexTemperature = 5,
    /// Atmospheric pressure
    AtmosphericPressure = 6,
    /// Relative humidity
    RelativeHumidity = 7,
    /// True wind speed
    TrueWindSpeed = 8,
    /// True wind direction
    TrueWindDirection = 9,
    /// Apparent wind speed
    ApparentWindSpeed = 10,
    /// Apparent wind angle
    ApparentWindAngle = 11,
    /// Wind speed over ground, alias of true wind speed
    WindSpeedOverGround = 12,
    /// True wind angle to water, alias of true wind direction
    TrueWindAngleToWater = 13,
    /// Absolute humidity
    AbsoluteHumidity = 14,
    /// Air density
    AirDensity = 15,
}

impl Parameter {
    /// Number of numeric slots in every batch
    pub const COUNT: usize = 16;

    /// Every slot, in bus order
    pub const ALL: [Parameter; Parameter::COUNT] = [
        Parameter::OutsideTemperature,
        Parameter::DewPointTemperature,
        Parameter::ApparentTemperature,
        Parameter::WindChillTemperature,
        Parameter::TheoreticalWindChillTemperature,
        Parameter::HeatIndexTemperature,
        Parameter::AtmosphericPressure,
        Parameter::RelativeHumidity,
        Parameter::TrueWindSpeed,
        Parameter::TrueWindDirection,
        Parameter::ApparentWindSpeed,
        Parameter::ApparentWindAngle,
        Parameter::WindSpeedOverGround,
        Parameter::TrueWindAngleToWater,
        Parameter::AbsoluteHumidity,
        Parameter::AirDensity,
    ];

    /// Get bus name
    pub const fn name(&self) -> &'static str {
        match self {
            Parameter::OutsideTemperature => "outside-temperature",
            Parameter::DewPointTemperature => "dew-point-temperature",
            Parameter::ApparentTemperature => "apparent-temperature/heat-index",
            Parameter::WindChillTemperature => "wind-chill-temperature",
            Parameter::TheoreticalWindChillTemperature => "theoretical-wind-chill-temperature",
            Parameter::HeatIndexTemperature => "heat-index-temperature",
            Parameter::AtmosphericPressure => "atmospheric-pressure",
            Parameter::RelativeHumidity => "relative-humidity",
            Parameter::TrueWindSpeed => "true-wind-speed",
            Parameter::TrueWindDirection => "true-wind-direction",
            Parameter::ApparentWindSpeed => "apparent-wind-speed",
            Parameter::ApparentWindAngle => "apparent-wind-angle",
            Parameter::WindSpeedOverGround => "wind-speed-over-ground",
            Parameter::TrueWindAngleToWater => "true-wind-angle-to-water",
            Parameter::AbsoluteHumidity => "absolute-humidity",
            Parameter::AirDensity => "air-density",
        }
    }

    /// Get unit of measurement
    pub const fn unit(&self) -> &'static str {
        match self.quantity() {
            Quantity::OutsideTemperature
            | Quantity::DewPoint
            | Quantity::HeatIndex
            | Quantity::WindChill => "K",
            Quantity::Pressure => "Pa",
            Quantity::Humidity => "ratio",
            Quantity::TrueWindSpeed | Quantity::ApparentWindSpeed => "m/s",
            Quantity::TrueWindDirection | Quantity::ApparentWindAngle => "rad",
            Quantity::AbsoluteHumidity | Quantity::AirDensity => "kg/m3",
        }
    }

    /// Quantity this slot publishes
    pub const fn quantity(&self) -> Quantity {
        match self {
            Parameter::OutsideTemperature => Quantity::OutsideTemperature,
            Parameter::DewPointTemperature => Quantity::DewPoint,
            Parameter::ApparentTemperature | Parameter::HeatIndexTemperature => Quantity::HeatIndex,
            Parameter::WindChillTemperature | Parameter::TheoreticalWindChillTemperature => {
                Quantity::WindChill
            }
            Parameter::AtmosphericPressure => Quantity::Pressure,
            Parameter::RelativeHumidity => Quantity::Humidity,
            Parameter::TrueWindSpeed | Parameter::WindSpeedOverGround => Quantity::TrueWindSpeed,
            Parameter::TrueWindDirection | Parameter::TrueWindAngleToWater => {
                Quantity::TrueWindDirection
            }
            Parameter::ApparentWindSpeed => Quantity::ApparentWindSpeed,
            Parameter::ApparentWindAngle => Quantity::ApparentWindAngle,
            Parameter::AbsoluteHumidity => Quantity::AbsoluteHumidity,
            Parameter::AirDensity => Quantity::AirDensity,
        }
    }

    /// Look a slot up by bus name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|p| p.name() == name)
    }
}

/// One published value
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Measurement {
    /// Slot this value fills
    pub parameter: Parameter,
    /// Finite, range-validated value in the slot's unit
    pub value: f64,
    /// When the cycle was processed
    pub timestamp: DateTime<Utc>,
}

impl Measurement {
    /// Bus name of the slot
    pub const fn name(&self) -> &'static str {
        self.parameter.name()
    }

    /// Unit of the value
    pub const fn unit(&self) -> &'static str {
        self.parameter.unit()
    }

    /// ISO-8601 timestamp with millisecond precision, e.g. `2024-03-01T12:00:00.000Z`
    #[cfg(feature = "std")]
    pub fn iso8601(&self) -> std::string::String {
        self.timestamp.to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
    }
}

/// Named entry of a batch, as a bus encoder walks it
///
/// The sixteen numeric slots come first, in bus order. The weather
/// description, when present, is the last entry and shares the cycle
/// timestamp.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Entry<'a> {
    /// Numeric slot
    Number(&'a Measurement),
    /// `weather-description` text
    Text {
        /// Non-blank description
        text: &'a str,
        /// When the cycle was processed
        timestamp: DateTime<Utc>,
    },
}

impl<'a> Entry<'a> {
    /// Bus name of the entry
    pub const fn name(&self) -> &'static str {
        match self {
            Entry::Number(measurement) => measurement.name(),
            Entry::Text { .. } => DESCRIPTION_NAME,
        }
    }

    /// Unit of the entry, `text` for the description
    pub const fn unit(&self) -> &'static str {
        match self {
            Entry::Number(measurement) => measurement.unit(),
            Entry::Text { .. } => "text",
        }
    }

    /// When the cycle was processed
    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            Entry::Number(measurement) => measurement.timestamp,
            Entry::Text { timestamp, .. } => *timestamp,
        }
    }

    /// Numeric value, `None` for the description
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Entry::Number(measurement) => Some(measurement.value),
            Entry::Text { .. } => None,
        }
    }

    /// Description text, `None` for numeric slots
    pub fn as_text(&self) -> Option<&'a str> {
        match self {
            Entry::Number(_) => None,
            Entry::Text { text, .. } => Some(*text),
        }
    }

    /// ISO-8601 timestamp with millisecond precision
    #[cfg(feature = "std")]
    pub fn iso8601(&self) -> std::string::String {
        self.timestamp().to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
    }
}

/// Complete set of measurements for one observation cycle
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MeasurementBatch {
    measurements: Vec<Measurement, { Parameter::COUNT }>,
    description: Option<Description>,
    timestamp: DateTime<Utc>,
}

impl MeasurementBatch {
    /// Assemble a batch from one value per slot, in bus order
    pub fn from_values(
        values: [f64; Parameter::COUNT],
        description: Option<Description>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        let measurements = Parameter::ALL
            .iter()
            .zip(values)
            .map(|(&parameter, value)| Measurement { parameter, value, timestamp })
            .collect();

        let description = description.filter(|d| !d.trim().is_empty());

        Self { measurements, description, timestamp }
    }

    /// Measurement for a slot
    pub fn get(&self, parameter: Parameter) -> Option<&Measurement> {
        self.measurements.get(parameter as usize)
    }

    /// Value of a slot
    pub fn value(&self, parameter: Parameter) -> Option<f64> {
        self.get(parameter).map(|m| m.value)
    }

    /// Entry by bus name, `weather-description` included
    pub fn by_name(&self, name: &str) -> Option<Entry<'_>> {
        if name == DESCRIPTION_NAME {
            return self.description_entry();
        }
        Parameter::from_name(name).and_then(|p| self.get(p)).map(Entry::Number)
    }

    /// Every entry in bus order, description last
    pub fn iter(&self) -> impl Iterator<Item = Entry<'_>> {
        self.measurements
            .iter()
            .map(Entry::Number)
            .chain(self.description_entry())
    }

    /// Numeric measurements in bus order
    pub fn measurements(&self) -> impl Iterator<Item = &Measurement> {
        self.measurements.iter()
    }

    /// Weather description, present only when non-empty
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// When the cycle was processed
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Number of entries, description included
    pub fn len(&self) -> usize {
        self.measurements.len() + usize::from(self.description.is_some())
    }

    /// Always false: a batch is never empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn description_entry(&self) -> Option<Entry<'_>> {
        self.description
            .as_deref()
            .map(|text| Entry::Text { text, timestamp: self.timestamp })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observation::truncate_description;

    fn stamp() -> DateTime<Utc> {
        crate::time::to_datetime(1_709_294_400_000)
    }

    #[test]
    fn slots_in_bus_order() {
        for (index, parameter) in Parameter::ALL.iter().enumerate() {
            assert_eq!(*parameter as usize, index);
        }
        assert_eq!(Parameter::ALL[0].name(), "outside-temperature");
        assert_eq!(Parameter::ALL[15].name(), "air-density");
    }

    #[test]
    fn aliases_share_a_quantity() {
        assert_eq!(Parameter::WindSpeedOverGround.quantity(), Quantity::TrueWindSpeed);
        assert_eq!(Parameter::TrueWindAngleToWater.quantity(), Quantity::TrueWindDirection);
        assert_eq!(
            Parameter::TheoreticalWindChillTemperature.quantity(),
            Parameter::WindChillTemperature.quantity()
        );
        assert_eq!(
            Parameter::ApparentTemperature.quantity(),
            Parameter::HeatIndexTemperature.quantity()
        );
    }

    #[test]
    fn units() {
        assert_eq!(Parameter::DewPointTemperature.unit(), "K");
        assert_eq!(Parameter::AtmosphericPressure.unit(), "Pa");
        assert_eq!(Parameter::RelativeHumidity.unit(), "ratio");
        assert_eq!(Parameter::TrueWindAngleToWater.unit(), "rad");
        assert_eq!(Parameter::AirDensity.unit(), "kg/m3");
    }

    #[test]
    fn name_lookup() {
        assert_eq!(Parameter::from_name("apparent-wind-angle"), Some(Parameter::ApparentWindAngle));
        assert_eq!(Parameter::from_name("sea-temperature"), None);
    }

    #[test]
    fn batch_shape() {
        let batch = MeasurementBatch::from_values([1.0; Parameter::COUNT], None, stamp());
        assert_eq!(batch.len(), Parameter::COUNT);
        assert!(!batch.is_empty());
        assert_eq!(batch.value(Parameter::AirDensity), Some(1.0));
        assert!(batch.iter().all(|e| e.timestamp() == stamp()));
        assert_eq!(batch.by_name("relative-humidity").map(|e| e.unit()), Some("ratio"));
        assert_eq!(batch.by_name(DESCRIPTION_NAME), None);
        assert_eq!(batch.iter().count(), batch.len());
    }

    #[test]
    fn blank_description_dropped() {
        let blank = MeasurementBatch::from_values(
            [0.0; Parameter::COUNT],
            Some(truncate_description("   ")),
            stamp(),
        );
        assert_eq!(blank.description(), None);

        let cloudy = MeasurementBatch::from_values(
            [0.0; Parameter::COUNT],
            Some(truncate_description("Partly cloudy")),
            stamp(),
        );
        assert_eq!(cloudy.description(), Some("Partly cloudy"));
        assert_eq!(cloudy.len(), Parameter::COUNT + 1);
    }

    #[test]
    fn description_is_the_last_entry() {
        let batch = MeasurementBatch::from_values(
            [0.0; Parameter::COUNT],
            Some(truncate_description("Light rain")),
            stamp(),
        );

        assert_eq!(batch.iter().count(), batch.len());
        assert_eq!(batch.measurements().count(), Parameter::COUNT);

        let last = batch.iter().last().unwrap();
        assert_eq!(last.name(), DESCRIPTION_NAME);
        assert_eq!(last.as_text(), Some("Light rain"));
        assert_eq!(last.as_number(), None);
        assert_eq!(last.timestamp(), stamp());

        let found = batch.by_name("weather-description").unwrap();
        assert_eq!(found, last);
        assert_eq!(found.unit(), "text");
    }

    #[cfg(feature = "std")]
    #[test]
    fn iso8601_timestamps() {
        let batch = MeasurementBatch::from_values([0.0; Parameter::COUNT], None, stamp());
        let first = batch.get(Parameter::OutsideTemperature).unwrap();
        assert_eq!(first.iso8601(), "2024-03-01T12:00:00.000Z");
    }
}
