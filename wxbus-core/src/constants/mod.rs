//! Constants for wxbus Core
//!
//! Centralized, documented constants used throughout the engine. All numeric
//! values live here with their unit in the name.
//!
//! ## Organization
//!
//! - **Physics**: Scale offsets, conversion factors, Magnus and gas constants,
//!   comfort-index regression coefficients
//! - **Bus**: Legal numeric envelope of the instrumentation bus
//! - **Defaults**: Substitutes for missing or non-finite measurements
//!
//! These are the compiled-in tables. [`crate::config::EngineConfig`] starts
//! from them and may override bus limits and defaults at startup.

/// Physical constants, conversion factors and regression coefficients.
pub mod physics;

/// Legal numeric ranges of the instrumentation bus.
pub mod bus;

/// Static defaults for missing measurements.
pub mod defaults;

pub use physics::{KELVIN_OFFSET, SEA_LEVEL_PRESSURE_PA, ISA_SEA_LEVEL_DENSITY};

pub use bus::{
    TEMP_MIN_K, TEMP_MAX_K, PRESSURE_MIN_PA, PRESSURE_MAX_PA,
    HUMIDITY_MIN_RATIO, HUMIDITY_MAX_RATIO, WIND_SPEED_MIN_MS, WIND_SPEED_MAX_MS,
};

pub use defaults::{
    DEFAULT_TEMPERATURE_K, DEFAULT_PRESSURE_PA, DEFAULT_HUMIDITY_RATIO,
    DEFAULT_WIND_SPEED_MS, DEFAULT_WIND_ANGLE_RAD,
};
