//! Unit Conversions and Angle Normalization
//!
//! Stateless scalar conversions between the units weather providers speak
//! (°C, °F, mbar, %, km/h, knots, degrees) and the SI units the bus carries
//! (K, Pa, ratio, m/s, rad).
//!
//! Every function is total. A non-finite input produces a non-finite output;
//! catching that is the job of the range validator and the defaulting
//! mapper, not of this module.
//!
//! ## Angles
//!
//! Two conventions are used on the bus:
//!
//! ```text
//! direction  [0, 2π)    compass bearing, 0 = North, clockwise
//! angle      (-π, π]    signed angle relative to the vessel's reference
//! ```
//!
//! Both reductions use `fmod`, which is exact, instead of a loop of ±2π
//! steps. Values already inside the target interval come back bit-identical,
//! so the reductions are idempotent.

use core::f64::consts::{PI, TAU};

use crate::constants::physics::{
    FAHRENHEIT_OFFSET, FAHRENHEIT_PER_CELSIUS, KELVIN_OFFSET, KMH_PER_MS, MS_PER_KNOT,
    PA_PER_MBAR, RAD_PER_DEG,
};

// ===== TEMPERATURE =====

/// Kelvin to degrees Celsius.
#[inline]
pub fn kelvin_to_celsius(kelvin: f64) -> f64 {
    kelvin - KELVIN_OFFSET
}

/// Degrees Celsius to Kelvin.
#[inline]
pub fn celsius_to_kelvin(celsius: f64) -> f64 {
    celsius + KELVIN_OFFSET
}

/// Degrees Celsius to degrees Fahrenheit.
#[inline]
pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * FAHRENHEIT_PER_CELSIUS + FAHRENHEIT_OFFSET
}

/// Degrees Fahrenheit to degrees Celsius.
#[inline]
pub fn fahrenheit_to_celsius(fahrenheit: f64) -> f64 {
    (fahrenheit - FAHRENHEIT_OFFSET) / FAHRENHEIT_PER_CELSIUS
}

/// Kelvin to degrees Fahrenheit.
#[inline]
pub fn kelvin_to_fahrenheit(kelvin: f64) -> f64 {
    celsius_to_fahrenheit(kelvin_to_celsius(kelvin))
}

/// Degrees Fahrenheit to Kelvin.
#[inline]
pub fn fahrenheit_to_kelvin(fahrenheit: f64) -> f64 {
    celsius_to_kelvin(fahrenheit_to_celsius(fahrenheit))
}

// ===== PRESSURE =====

/// Millibar (hPa) to Pascal.
#[inline]
pub fn mbar_to_pascal(mbar: f64) -> f64 {
    mbar * PA_PER_MBAR
}

/// Pascal to millibar (hPa).
#[inline]
pub fn pascal_to_mbar(pascal: f64) -> f64 {
    pascal / PA_PER_MBAR
}

// ===== HUMIDITY =====

/// Percentage (0-100) to ratio (0-1).
#[inline]
pub fn percent_to_ratio(percent: f64) -> f64 {
    percent / 100.0
}

/// Ratio (0-1) to percentage (0-100).
#[inline]
pub fn ratio_to_percent(ratio: f64) -> f64 {
    ratio * 100.0
}

/// Normalize a humidity reading of unknown scale to a ratio.
///
/// Providers disagree on whether humidity is 0-1 or 0-100. A magnitude of
/// at most 1.0 is taken as a ratio and passed through; anything larger is
/// taken as a percentage.
///
/// The heuristic cannot tell a 0.5 % reading from a ratio of 0.5. Readings
/// below 1 % are rare enough at sea that the ratio interpretation wins.
///
/// ```
/// use wxbus_core::units::normalize_humidity;
///
/// assert_eq!(normalize_humidity(0.65), 0.65);
/// assert_eq!(normalize_humidity(65.0), 0.65);
/// ```
#[inline]
pub fn normalize_humidity(raw: f64) -> f64 {
    if raw.abs() <= 1.0 {
        raw
    } else {
        percent_to_ratio(raw)
    }
}

// ===== SPEED =====

/// Kilometres per hour to metres per second.
#[inline]
pub fn kmh_to_ms(kmh: f64) -> f64 {
    kmh / KMH_PER_MS
}

/// Metres per second to kilometres per hour.
#[inline]
pub fn ms_to_kmh(ms: f64) -> f64 {
    ms * KMH_PER_MS
}

/// Knots to metres per second.
#[inline]
pub fn knots_to_ms(knots: f64) -> f64 {
    knots * MS_PER_KNOT
}

/// Metres per second to knots.
#[inline]
pub fn ms_to_knots(ms: f64) -> f64 {
    ms / MS_PER_KNOT
}

// ===== ANGLES =====

/// Degrees to radians.
#[inline]
pub fn deg_to_rad(degrees: f64) -> f64 {
    degrees * RAD_PER_DEG
}

/// Radians to degrees.
#[inline]
pub fn rad_to_deg(radians: f64) -> f64 {
    radians / RAD_PER_DEG
}

/// Reduce a signed angle into (-π, π].
pub fn normalize_angle(radians: f64) -> f64 {
    if radians > -PI && radians <= PI {
        return radians;
    }

    let mut reduced = libm::fmod(radians, TAU);
    if reduced > PI {
        reduced -= TAU;
    } else if reduced <= -PI {
        reduced += TAU;
    }

    // -π and π are the same angle; the interval is closed at π
    if reduced <= -PI {
        PI
    } else {
        reduced
    }
}

/// Wrap a compass direction into [0, 2π).
pub fn wrap_direction(radians: f64) -> f64 {
    if (0.0..TAU).contains(&radians) {
        return radians;
    }

    let mut reduced = libm::fmod(radians, TAU);
    if reduced < 0.0 {
        reduced += TAU;
    }

    // A tiny negative remainder can round up to exactly 2π
    if reduced >= TAU {
        0.0
    } else {
        reduced
    }
}
