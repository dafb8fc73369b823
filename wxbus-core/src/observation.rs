//! Input and Intermediate Data Types
//!
//! ## Data Flow
//!
//! ```text
//! Observation ─┐
//!              ├─> DerivedSet ─> CandidateSet ─> RangeValidator ─> DefaultingMapper
//! VesselMotion ┘
//! ```
//!
//! `Observation` and `VesselMotion` are built fresh by the provider and
//! navigation collaborators on every cycle and handed over by value. Every
//! numeric field is optional: `None`, NaN and infinity all mean "not known".
//!
//! `CandidateSet` is the merged, keyed view of everything known about one
//! cycle. It is what the range validator consumes and produces, and it is
//! the only place where "absent" is represented; `DerivedSet` is always
//! fully populated because every formula has a passthrough.

use heapless::String;

use crate::traits::finite;

/// Maximum stored length of the weather description, in bytes
pub const MAX_DESCRIPTION_LEN: usize = 96;

/// Free-text weather description ("Partly cloudy", "Light rain")
pub type Description = String<MAX_DESCRIPTION_LEN>;

/// Point-in-time meteorological observation in SI units
///
/// Temperature in K, pressure in Pa, humidity as a 0-1 ratio, wind speed in
/// m/s (true), wind direction in radians (true, 0 = North, clockwise).
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct Observation {
    /// Outside air temperature (K)
    pub temperature: Option<f64>,
    /// Atmospheric pressure (Pa)
    pub pressure: Option<f64>,
    /// Relative humidity (ratio, a 0-100 percentage is tolerated)
    pub humidity: Option<f64>,
    /// True wind speed (m/s)
    pub wind_speed: Option<f64>,
    /// True wind direction (rad)
    pub wind_direction: Option<f64>,
    /// Weather description
    #[cfg_attr(feature = "serde", serde(deserialize_with = "deserialize_description"))]
    pub description: Option<Description>,
}

impl Observation {
    /// Empty observation - every field unknown
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the outside temperature (K)
    pub fn with_temperature(mut self, kelvin: f64) -> Self {
        self.temperature = Some(kelvin);
        self
    }

    /// Set the atmospheric pressure (Pa)
    pub fn with_pressure(mut self, pascal: f64) -> Self {
        self.pressure = Some(pascal);
        self
    }

    /// Set the relative humidity (ratio or percentage)
    pub fn with_humidity(mut self, humidity: f64) -> Self {
        self.humidity = Some(humidity);
        self
    }

    /// Set the true wind speed (m/s) and direction (rad)
    pub fn with_wind(mut self, speed_ms: f64, direction_rad: f64) -> Self {
        self.wind_speed = Some(speed_ms);
        self.wind_direction = Some(direction_rad);
        self
    }

    /// Set the weather description, truncated to [`MAX_DESCRIPTION_LEN`]
    pub fn with_description(mut self, text: &str) -> Self {
        self.description = Some(truncate_description(text));
        self
    }

    /// True when no field carries usable data
    pub fn is_empty(&self) -> bool {
        finite(self.temperature).is_none()
            && finite(self.pressure).is_none()
            && finite(self.humidity).is_none()
            && finite(self.wind_speed).is_none()
            && finite(self.wind_direction).is_none()
            && self.description.as_ref().map_or(true, |d| d.trim().is_empty())
    }
}

/// Copy `text` into a bounded description, cutting on a char boundary
pub fn truncate_description(text: &str) -> Description {
    let mut end = text.len().min(MAX_DESCRIPTION_LEN);
    while !text.is_char_boundary(end) {
        end -= 1;
    }

    let mut description = Description::new();
    // Cannot fail: `end` is at most the capacity
    let _ = description.push_str(&text[..end]);
    description
}

/// Accept descriptions of any length, truncated like [`truncate_description`]
#[cfg(feature = "serde")]
fn deserialize_description<'de, D>(deserializer: D) -> Result<Option<Description>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    struct Truncating;

    impl<'de> serde::de::Visitor<'de> for Truncating {
        type Value = Option<Description>;

        fn expecting(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
            f.write_str("a weather description")
        }

        fn visit_str<E: serde::de::Error>(self, text: &str) -> Result<Self::Value, E> {
            Ok(Some(truncate_description(text)))
        }

        fn visit_none<E: serde::de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_unit<E: serde::de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_some<I: serde::Deserializer<'de>>(
            self,
            inner: I,
        ) -> Result<Self::Value, I::Error> {
            inner.deserialize_str(self)
        }
    }

    deserializer.deserialize_option(Truncating)
}

/// Vessel motion snapshot from the navigation collaborator
///
/// `course_or_heading` is whichever directional reference was available
/// (true course, magnetic course, true heading, magnetic heading). The engine
/// treats it as one opaque reference and never asks which one it was.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct VesselMotion {
    /// Speed over ground (m/s)
    pub speed_over_ground: Option<f64>,
    /// Best available course or heading (rad)
    pub course_or_heading: Option<f64>,
    /// Both speed and a directional reference were fresh
    pub complete: bool,
}

impl VesselMotion {
    /// Motion with both speed and course; completeness follows the values
    pub fn new(speed_over_ground: f64, course_or_heading: f64) -> Self {
        Self {
            speed_over_ground: Some(speed_over_ground),
            course_or_heading: Some(course_or_heading),
            complete: speed_over_ground.is_finite() && course_or_heading.is_finite(),
        }
    }

    /// No navigation data at all
    pub fn unavailable() -> Self {
        Self::default()
    }

    /// Vessel speed usable for vector math
    ///
    /// An incomplete snapshot is not trusted for apparent wind, even if it
    /// happens to carry a speed.
    pub fn usable_speed(&self) -> Option<f64> {
        if self.complete {
            finite(self.speed_over_ground)
        } else {
            None
        }
    }

    /// Directional reference, whatever its completeness
    pub fn reference(&self) -> Option<f64> {
        finite(self.course_or_heading)
    }
}

/// Quantities computed from one observation and motion snapshot
///
/// Always fully populated. A field is NaN only when the input its
/// passthrough forwards was itself unknown.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedSet {
    /// Apparent wind speed (m/s)
    pub apparent_wind_speed: f64,
    /// Apparent wind angle relative to the reference (rad)
    pub apparent_wind_angle: f64,
    /// Wind chill temperature (K)
    pub wind_chill: f64,
    /// Heat index temperature (K)
    pub heat_index: f64,
    /// Dew point temperature (K)
    pub dew_point: f64,
    /// Absolute humidity (kg/m³)
    pub absolute_humidity: f64,
    /// Air density (kg/m³)
    pub air_density: f64,
}

/// Distinct physical quantities known about one cycle
///
/// The bus publishes some of these under more than one name; see
/// [`crate::batch::Parameter::quantity`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Quantity {
    /// Outside air temperature (K)
    OutsideTemperature = 0,
    /// Dew point (K)
    DewPoint = 1,
    /// Heat index (K)
    HeatIndex = 2,
    /// Wind chill (K)
    WindChill = 3,
    /// Atmospheric pressure (Pa)
    Pressure = 4,
    /// Relative humidity (ratio)
    Humidity = 5,
    /// True wind speed (m/s)
    TrueWindSpeed = 6,
    /// True wind direction (rad)
    TrueWindDirection = 7,
    /// Apparent wind speed (m/s)
    ApparentWindSpeed = 8,
    /// Apparent wind angle (rad)
    ApparentWindAngle = 9,
    /// Absolute humidity (kg/m³)
    AbsoluteHumidity = 10,
    /// Air density (kg/m³)
    AirDensity = 11,
}

impl Quantity {
    /// Number of distinct quantities
    pub const COUNT: usize = 12;

    /// Every quantity, in storage order
    pub const ALL: [Quantity; Quantity::COUNT] = [
        Quantity::OutsideTemperature,
        Quantity::DewPoint,
        Quantity::HeatIndex,
        Quantity::WindChill,
        Quantity::Pressure,
        Quantity::Humidity,
        Quantity::TrueWindSpeed,
        Quantity::TrueWindDirection,
        Quantity::ApparentWindSpeed,
        Quantity::ApparentWindAngle,
        Quantity::AbsoluteHumidity,
        Quantity::AirDensity,
    ];

    /// Get human-readable name
    pub const fn name(&self) -> &'static str {
        match self {
            Quantity::OutsideTemperature => "temperature",
            Quantity::DewPoint => "dewPoint",
            Quantity::HeatIndex => "heatIndex",
            Quantity::WindChill => "windChill",
            Quantity::Pressure => "pressure",
            Quantity::Humidity => "humidity",
            Quantity::TrueWindSpeed => "windSpeed",
            Quantity::TrueWindDirection => "windDirection",
            Quantity::ApparentWindSpeed => "apparentWindSpeed",
            Quantity::ApparentWindAngle => "apparentWindAngle",
            Quantity::AbsoluteHumidity => "absoluteHumidity",
            Quantity::AirDensity => "airDensity",
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

/// Merged observation and derived values, keyed by [`Quantity`]
///
/// `None` means absent. A present value may still be non-finite; the range
/// validator leaves such values alone and the mapper replaces them.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CandidateSet {
    values: [Option<f64>; Quantity::COUNT],
}

impl CandidateSet {
    /// Empty set - every quantity absent
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge an observation with the quantities derived from it
    ///
    /// Observation fields are carried over as-is (humidity already
    /// normalized by the caller); derived fields are always present.
    pub fn merge(observation: &Observation, derived: &DerivedSet) -> Self {
        let mut set = Self::new();
        set.values[Quantity::OutsideTemperature.index()] = observation.temperature;
        set.values[Quantity::Pressure.index()] = observation.pressure;
        set.values[Quantity::Humidity.index()] = observation.humidity;
        set.values[Quantity::TrueWindSpeed.index()] = observation.wind_speed;
        set.values[Quantity::TrueWindDirection.index()] = observation.wind_direction;
        set.set(Quantity::DewPoint, derived.dew_point);
        set.set(Quantity::HeatIndex, derived.heat_index);
        set.set(Quantity::WindChill, derived.wind_chill);
        set.set(Quantity::ApparentWindSpeed, derived.apparent_wind_speed);
        set.set(Quantity::ApparentWindAngle, derived.apparent_wind_angle);
        set.set(Quantity::AbsoluteHumidity, derived.absolute_humidity);
        set.set(Quantity::AirDensity, derived.air_density);
        set
    }

    /// Value of a quantity, if present
    pub fn get(&self, quantity: Quantity) -> Option<f64> {
        self.values[quantity.index()]
    }

    /// Mark a quantity present with `value`
    pub fn set(&mut self, quantity: Quantity, value: f64) {
        self.values[quantity.index()] = Some(value);
    }

    /// Present quantities with their values
    pub fn iter(&self) -> impl Iterator<Item = (Quantity, f64)> + '_ {
        Quantity::ALL
            .iter()
            .filter_map(move |&q| self.get(q).map(|v| (q, v)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_observation() {
        assert!(Observation::new().is_empty());
        assert!(Observation::new().with_description("  ").is_empty());

        let mut nan = Observation::new();
        nan.temperature = Some(f64::NAN);
        assert!(nan.is_empty());

        assert!(!Observation::new().with_pressure(101_325.0).is_empty());
    }

    #[test]
    fn description_truncates_on_char_boundary() {
        let long: std::string::String = "é".repeat(60); // 120 bytes
        let description = truncate_description(&long);
        assert!(description.len() <= MAX_DESCRIPTION_LEN);
        assert_eq!(description.len() % 2, 0);
        assert_eq!(truncate_description("Sunny").as_str(), "Sunny");
    }

    #[cfg(feature = "std")]
    #[test]
    fn deserialized_description_truncated() {
        let long = "Squally showers ".repeat(10);
        let json = format!(r#"{{"temperature": 290.0, "description": "{long}"}}"#);

        let observation: Observation = serde_json::from_str(&json).unwrap();
        let description = observation.description.unwrap();
        assert_eq!(description.len(), MAX_DESCRIPTION_LEN);
        assert!(long.starts_with(description.as_str()));

        let observation: Observation = serde_json::from_str(r#"{"description": null}"#).unwrap();
        assert_eq!(observation.description, None);

        let observation: Observation = serde_json::from_str(r#"{"pressure": 101325.0}"#).unwrap();
        assert_eq!(observation.description, None);
    }

    #[test]
    fn vessel_motion_completeness() {
        let motion = VesselMotion::new(3.0, 1.0);
        assert!(motion.complete);
        assert_eq!(motion.usable_speed(), Some(3.0));

        let partial = VesselMotion::new(f64::NAN, 1.0);
        assert!(!partial.complete);
        assert_eq!(partial.usable_speed(), None);
        assert_eq!(partial.reference(), Some(1.0));

        let unavailable = VesselMotion::unavailable();
        assert_eq!(unavailable.usable_speed(), None);
        assert_eq!(unavailable.reference(), None);
    }

    #[test]
    fn candidate_merge_keeps_absence() {
        let observation = Observation::new().with_temperature(290.0);
        let derived = DerivedSet {
            apparent_wind_speed: 0.0,
            apparent_wind_angle: 0.0,
            wind_chill: 290.0,
            heat_index: 290.0,
            dew_point: 280.0,
            absolute_humidity: 0.0,
            air_density: 1.225,
        };

        let set = CandidateSet::merge(&observation, &derived);
        assert_eq!(set.get(Quantity::OutsideTemperature), Some(290.0));
        assert_eq!(set.get(Quantity::Pressure), None);
        assert_eq!(set.get(Quantity::DewPoint), Some(280.0));
        assert_eq!(set.iter().count(), 8);
    }
}
