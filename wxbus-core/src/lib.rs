//! Weather-to-instrumentation transformation engine for marine buses
//!
//! Turns one weather observation plus one vessel motion snapshot into a
//! complete, range-validated batch of measurements ready for a marine
//! instrumentation bus: apparent wind, comfort indices, dew point,
//! absolute humidity and air density alongside the observed values.
//!
//! Designed for the same places the bus runs:
//! - `no_std` capable, `libm` for all math
//! - No heap allocation in the hot path
//! - Total: missing or garbage input yields defaults, never an error
//!
//! ```rust
//! use wxbus_core::{Engine, Observation, Parameter, VesselMotion};
//! use wxbus_core::time::to_datetime;
//!
//! let engine = Engine::default();
//!
//! let observation = Observation::new()
//!     .with_temperature(288.15)
//!     .with_pressure(101_325.0)
//!     .with_humidity(0.65)
//!     .with_wind(5.14, 1.5708);
//! let motion = VesselMotion::new(3.0, 0.0);
//!
//! let batch = engine.process(observation, motion, to_datetime(1_709_294_400_000));
//!
//! // Every slot is always present
//! assert_eq!(batch.iter().count(), Parameter::COUNT);
//! for measurement in batch.measurements() {
//!     assert!(measurement.value.is_finite());
//! }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

#[macro_use]
mod logging;

pub mod adapter;
pub mod batch;
pub mod comfort;
pub mod config;
pub mod constants;
pub mod engine;
pub mod errors;
pub mod mapper;
pub mod observation;
pub mod psychrometrics;
pub mod time;
pub mod traits;
pub mod units;
pub mod validators;
pub mod wind;

// Public API
pub use batch::{Entry, Measurement, MeasurementBatch, Parameter};
pub use config::{BusLimits, DefaultTable, EngineConfig, Range};
pub use engine::Engine;
pub use errors::{ConfigError, ConfigResult};
pub use observation::{Observation, Quantity, VesselMotion};
pub use traits::{Adjustment, Validator};
pub use validators::RangeValidator;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
