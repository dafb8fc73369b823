//! Static Defaults for Missing Measurements
//!
//! Values the defaulting mapper substitutes when a quantity is absent or
//! not a finite number. Each is a physically plausible "nothing is known"
//! reading, chosen so displays show a neutral value rather than a spike.

use super::physics::{ISA_SEA_LEVEL_DENSITY, KELVIN_OFFSET, SEA_LEVEL_PRESSURE_PA};

/// Default for every temperature slot (K): freezing point of water.
pub const DEFAULT_TEMPERATURE_K: f64 = KELVIN_OFFSET;

/// Default atmospheric pressure (Pa): ISA sea level.
pub const DEFAULT_PRESSURE_PA: f64 = SEA_LEVEL_PRESSURE_PA;

/// Default relative humidity ratio.
pub const DEFAULT_HUMIDITY_RATIO: f64 = 0.5;

/// Default true and apparent wind speed (m/s): calm.
pub const DEFAULT_WIND_SPEED_MS: f64 = 0.0;

/// Default true wind direction and apparent wind angle (rad).
pub const DEFAULT_WIND_ANGLE_RAD: f64 = 0.0;

/// Default absolute humidity (kg/m³): the psychrometric fallback.
pub const DEFAULT_ABSOLUTE_HUMIDITY: f64 = 0.0;

/// Default air density (kg/m³): ISA sea level.
pub const DEFAULT_AIR_DENSITY: f64 = ISA_SEA_LEVEL_DENSITY;
