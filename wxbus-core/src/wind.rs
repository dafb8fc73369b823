//! Apparent Wind from True Wind and Vessel Motion
//!
//! ## Vector Model
//!
//! True wind and vessel velocity are both treated as polar vectors and
//! projected onto the same Cartesian frame:
//!
//! ```text
//! x = r·cos θ        y = r·sin θ
//!
//! apparent = true_wind - vessel_velocity
//! speed    = |apparent|                      (Euclidean norm)
//! angle    = atan2(y, x) - reference         (then reduced to (-π, π])
//! ```
//!
//! An observer moving with the vessel feels the true wind minus their own
//! motion. The resulting angle is expressed relative to the vessel's
//! directional reference (course or heading, whichever the navigation
//! collaborator supplied), so 0 is dead ahead and the sign gives the side.
//!
//! ## Modes
//!
//! | Mode | When | Speed | Angle |
//! |------|------|-------|-------|
//! | `Vector` | all four inputs finite, vessel moving | vector norm | normalized |
//! | `Stationary` | vessel speed exactly 0 | true speed | `normalize(dir - ref)` |
//! | `Degraded` | any input unusable | true speed, or 0 | `dir - ref`, unnormalized |
//!
//! Degraded mode is part of the contract, not an error. Its angle may be
//! NaN when the direction or reference is unknown; the range validator
//! leaves NaN alone and the mapper substitutes the default.

use crate::units::normalize_angle;

/// How an apparent wind value was obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindMode {
    /// Full vector subtraction
    Vector,
    /// Vessel at rest: apparent wind is the true wind
    Stationary,
    /// Inputs incomplete: raw passthrough
    Degraded,
}

/// Apparent wind relative to the vessel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ApparentWind {
    /// Apparent wind speed (m/s), never negative outside degraded mode
    pub speed: f64,
    /// Apparent wind angle relative to the reference (rad)
    pub angle: f64,
    /// How the value was obtained
    pub mode: WindMode,
}

/// Cartesian components of a polar vector
#[inline]
fn components(magnitude: f64, direction: f64) -> (f64, f64) {
    (magnitude * libm::cos(direction), magnitude * libm::sin(direction))
}

/// Compute apparent wind speed and angle
///
/// `true_speed` and `vessel_speed` in m/s, `true_direction` and
/// `reference` (course or heading) in radians.
///
/// ```
/// use wxbus_core::wind::{apparent_wind, WindMode};
///
/// // 10 m/s wind on the beam, vessel motoring at 10 m/s
/// let wind = apparent_wind(10.0, core::f64::consts::FRAC_PI_2, 10.0, 0.0);
/// assert_eq!(wind.mode, WindMode::Vector);
/// assert!((wind.speed - 200f64.sqrt()).abs() < 1e-9);
/// ```
pub fn apparent_wind(
    true_speed: f64,
    true_direction: f64,
    vessel_speed: f64,
    reference: f64,
) -> ApparentWind {
    let usable = true_speed.is_finite()
        && vessel_speed.is_finite()
        && true_direction.is_finite()
        && reference.is_finite();

    if !usable {
        log_debug!(
            "apparent wind degraded: speed={} dir={} vessel={} ref={}",
            true_speed, true_direction, vessel_speed, reference
        );
        return ApparentWind {
            speed: if true_speed.is_finite() { true_speed } else { 0.0 },
            angle: true_direction - reference,
            mode: WindMode::Degraded,
        };
    }

    if vessel_speed == 0.0 {
        return ApparentWind {
            speed: true_speed,
            angle: normalize_angle(true_direction - reference),
            mode: WindMode::Stationary,
        };
    }

    let (wind_x, wind_y) = components(true_speed, true_direction);
    let (vessel_x, vessel_y) = components(vessel_speed, reference);

    let x = wind_x - vessel_x;
    let y = wind_y - vessel_y;

    ApparentWind {
        speed: libm::hypot(x, y),
        angle: normalize_angle(libm::atan2(y, x) - reference),
        mode: WindMode::Vector,
    }
}

/// Apparent wind speed (m/s)
pub fn apparent_wind_speed(
    true_speed: f64,
    true_direction: f64,
    vessel_speed: f64,
    reference: f64,
) -> f64 {
    apparent_wind(true_speed, true_direction, vessel_speed, reference).speed
}

/// Apparent wind angle relative to the reference (rad)
pub fn apparent_wind_angle(
    true_speed: f64,
    true_direction: f64,
    vessel_speed: f64,
    reference: f64,
) -> f64 {
    apparent_wind(true_speed, true_direction, vessel_speed, reference).angle
}
