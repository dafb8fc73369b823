//! Named weather scenarios
//!
//! Each scenario pairs an observation with the motion it is met under.
//! Values are in bus units unless the scenario is about unit confusion.

use wxbus_core::{units::celsius_to_kelvin, Observation, VesselMotion};

/// A named test scenario
pub struct Scenario {
    /// Short name used in assertion messages
    pub name: &'static str,
    /// Observation for the cycle
    pub observation: Observation,
    /// Motion for the cycle
    pub motion: VesselMotion,
}

/// North Sea winter gale: cold, windy, wind chill applies
pub fn winter_gale() -> Scenario {
    Scenario {
        name: "winter gale",
        observation: Observation::new()
            .with_temperature(celsius_to_kelvin(-4.0))
            .with_pressure(97_800.0)
            .with_humidity(0.85)
            .with_wind(20.0, 5.5)
            .with_description("Gale, snow showers"),
        motion: VesselMotion::new(3.0, 4.0),
    }
}

/// Tropical afternoon: hot and humid, heat index applies
pub fn tropical_afternoon() -> Scenario {
    Scenario {
        name: "tropical afternoon",
        observation: Observation::new()
            .with_temperature(celsius_to_kelvin(32.0))
            .with_pressure(100_900.0)
            .with_humidity(75.0)
            .with_wind(3.0, 2.0)
            .with_description("Humid, scattered thunderstorms"),
        motion: VesselMotion::new(2.5, 1.0),
    }
}

/// Provider outage: nothing known, no navigation
pub fn blackout() -> Scenario {
    Scenario {
        name: "blackout",
        observation: Observation::new(),
        motion: VesselMotion::unavailable(),
    }
}

/// Garbage from every field
pub fn garbage() -> Scenario {
    Scenario {
        name: "garbage",
        observation: Observation {
            temperature: Some(f64::NAN),
            pressure: Some(f64::INFINITY),
            humidity: Some(-250.0),
            wind_speed: Some(f64::NEG_INFINITY),
            wind_direction: Some(1.0e9),
            description: None,
        },
        motion: VesselMotion {
            speed_over_ground: Some(f64::NAN),
            course_or_heading: Some(-1.0e9),
            complete: true,
        },
    }
}

/// Every scenario
pub fn all() -> [Scenario; 4] {
    [winter_gale(), tropical_afternoon(), blackout(), garbage()]
}
