//! Derived Physical Quantities of Moist Air
//!
//! ## Physics Background
//!
//! Moist air is treated as an ideal mixture of dry air and water vapour.
//! The vapour partial pressure comes from the Magnus saturation curve
//! scaled by relative humidity:
//!
//! ```text
//! es(T) = 6.112 · e^(17.27·T/(237.7 + T))     hPa, T in °C
//! e     = RH · es(T)
//! ```
//!
//! ### Absolute humidity
//!
//! Mass of water vapour per unit volume, from the ideal gas law for vapour:
//!
//! ```text
//! AH = e / (Rv · T) ≈ 0.002166 · e / T        kg/m³, e in Pa, T in K
//! ```
//!
//! At 15 °C and 65 % RH this is about 8.3 g/m³.
//!
//! ### Air density
//!
//! Sum of the partial densities of the two components:
//!
//! ```text
//! ρ = (P - e)/(Rd · T) + e/(Rv · T)           Rd = 287.0531, Rv = 461.4964
//! ```
//!
//! Humid air is lighter than dry air at the same pressure because water
//! (18 g/mol) displaces nitrogen and oxygen (~29 g/mol).
//!
//! ## Fallbacks
//!
//! Both functions are total. Unusable inputs or a non-finite result give
//! a fixed fallback: 0 for absolute humidity, the ISA sea-level density
//! 1.225 kg/m³ for air density.

use crate::constants::physics::{
    ABSOLUTE_HUMIDITY_FACTOR, ISA_SEA_LEVEL_DENSITY, MAGNUS_A, MAGNUS_B_C, MAGNUS_ES0_HPA,
    PA_PER_MBAR, R_DRY_AIR, R_WATER_VAPOR,
};
use crate::units::kelvin_to_celsius;

/// Saturation vapour pressure over water (hPa) at `temperature` (K)
pub fn saturation_vapor_pressure_hpa(temperature: f64) -> f64 {
    let t = kelvin_to_celsius(temperature);
    MAGNUS_ES0_HPA * libm::exp(MAGNUS_A * t / (MAGNUS_B_C + t))
}

/// Actual vapour pressure (Pa) at `temperature` (K) and `humidity` (ratio)
pub fn vapor_pressure_pa(temperature: f64, humidity: f64) -> f64 {
    saturation_vapor_pressure_hpa(temperature) * humidity * PA_PER_MBAR
}

/// Absolute humidity (kg/m³)
///
/// Needs `temperature > 0 K` and `humidity >= 0`; returns 0 otherwise or
/// when the result is not finite.
///
/// ```
/// use wxbus_core::psychrometrics::absolute_humidity;
///
/// let ah = absolute_humidity(288.15, 0.65);
/// assert!((ah - 0.0083).abs() < 0.0002);
/// ```
pub fn absolute_humidity(temperature: f64, humidity: f64) -> f64 {
    if !(temperature > 0.0 && humidity >= 0.0) || !humidity.is_finite() {
        return 0.0;
    }

    let ah = ABSOLUTE_HUMIDITY_FACTOR * vapor_pressure_pa(temperature, humidity) / temperature;
    if ah.is_finite() {
        ah
    } else {
        0.0
    }
}

/// Air density of moist air (kg/m³)
///
/// Needs `temperature > 0 K` and `pressure > 0 Pa`; returns 1.225 otherwise
/// or when the result is not finite and positive. Unknown humidity is
/// treated as dry air.
pub fn air_density(temperature: f64, pressure: f64, humidity: f64) -> f64 {
    if !(temperature > 0.0 && temperature.is_finite() && pressure > 0.0) {
        return ISA_SEA_LEVEL_DENSITY;
    }

    let humidity = if humidity.is_finite() && humidity >= 0.0 { humidity } else { 0.0 };
    let vapor = vapor_pressure_pa(temperature, humidity);
    let dry = pressure - vapor;

    let density = dry / (R_DRY_AIR * temperature) + vapor / (R_WATER_VAPOR * temperature);
    if density.is_finite() && density > 0.0 {
        density
    } else {
        ISA_SEA_LEVEL_DENSITY
    }
}
