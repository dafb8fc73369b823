//! Instrumentation Bus Limits
//!
//! Legal numeric envelope of the target bus. Values outside these ranges
//! cannot be encoded by the downstream wire collaborator, so the range
//! validator saturates magnitudes into them before publication.

use core::f64::consts::{PI, TAU};

// ===== TEMPERATURE =====

/// Lowest temperature the bus accepts (K), -40 °C.
///
/// Applies to every temperature slot: outside air, dew point, wind chill
/// and heat index.
///
/// Source: Marine environmental PGN operating range
pub const TEMP_MIN_K: f64 = 233.15;

/// Highest temperature the bus accepts (K), 85 °C.
pub const TEMP_MAX_K: f64 = 358.15;

// ===== PRESSURE =====

/// Lowest atmospheric pressure the bus accepts (Pa), 800 hPa.
///
/// Well below the deepest recorded tropical cyclone (870 hPa).
pub const PRESSURE_MIN_PA: f64 = 80_000.0;

/// Highest atmospheric pressure the bus accepts (Pa), 1200 hPa.
pub const PRESSURE_MAX_PA: f64 = 120_000.0;

// ===== HUMIDITY =====

/// Lowest relative humidity ratio.
pub const HUMIDITY_MIN_RATIO: f64 = 0.0;

/// Highest relative humidity ratio (saturation).
pub const HUMIDITY_MAX_RATIO: f64 = 1.0;

// ===== WIND =====

/// Lowest wind speed (m/s).
pub const WIND_SPEED_MIN_MS: f64 = 0.0;

/// Highest wind speed the bus can represent (m/s).
///
/// 10-bit field at 0.1 m/s resolution: 1023 × 0.1 = 102.3 m/s.
pub const WIND_SPEED_MAX_MS: f64 = 102.3;

/// Lower bound (inclusive) of a compass direction (rad).
pub const DIRECTION_MIN_RAD: f64 = 0.0;

/// Upper bound (exclusive) of a compass direction (rad).
pub const DIRECTION_MAX_RAD: f64 = TAU;

/// Lower bound (exclusive) of a signed relative angle (rad).
pub const ANGLE_MIN_RAD: f64 = -PI;

/// Upper bound (inclusive) of a signed relative angle (rad).
pub const ANGLE_MAX_RAD: f64 = PI;
