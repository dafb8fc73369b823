//! Error Types for Engine Configuration
//!
//! ## Design Philosophy
//!
//! The transformation itself never fails. Missing, non-numeric and
//! out-of-range inputs are all absorbed by substitution (see
//! [`crate::mapper`] and [`crate::validators`]), because a bus display
//! showing a plausible default is better than a display showing nothing.
//!
//! Errors therefore only exist at the edges, where a mistake is a
//! programming or deployment error that should stop startup:
//!
//! - building an [`crate::config::EngineConfig`] whose tables contradict
//!   themselves (min above max, a default outside its legal range)
//! - parsing configuration or observation JSON
//!
//! Like the rest of the crate's hot types, errors are small and `Copy`:
//! field names are `&'static str`, no heap allocation.
//!
//! ## Error Handling Strategy
//!
//! ```rust
//! use wxbus_core::{ConfigError, EngineConfig};
//!
//! let mut config = EngineConfig::default();
//! config.limits.pressure.min = 130_000.0;
//!
//! match config.validate() {
//!     Ok(()) => {}
//!     Err(ConfigError::InvalidRange { field, .. }) => {
//!         // Refuse to start with a broken limit table
//!         assert_eq!(field, "pressure");
//!     }
//!     Err(_) => {}
//! }
//! ```

use thiserror_no_std::Error;

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration errors - kept small and `Copy`
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// A limit table entry whose bounds are reversed or empty
    #[error("Invalid range for {field}: [{min}, {max}]")]
    InvalidRange {
        /// Name of the limit table entry
        field: &'static str,
        /// Configured lower bound
        min: f64,
        /// Configured upper bound
        max: f64,
    },

    /// A default value the bus could not carry
    #[error("Default for {field} is {value}, outside [{min}, {max}]")]
    DefaultOutOfRange {
        /// Name of the default table entry
        field: &'static str,
        /// Configured default
        value: f64,
        /// Lower bound it must respect
        min: f64,
        /// Upper bound it must respect
        max: f64,
    },

    /// NaN or infinity in a table
    #[error("Non-finite value for {field}")]
    NonFinite {
        /// Name of the offending entry
        field: &'static str,
    },

    /// JSON input could not be parsed
    #[error("Parse error ({category}) at line {line}, column {column}")]
    Parse {
        /// Kind of failure: syntax, data, eof or io
        category: &'static str,
        /// One-based line of the failure
        line: usize,
        /// One-based column of the failure
        column: usize,
    },
}

#[cfg(feature = "std")]
impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        use serde_json::error::Category;

        let category = match err.classify() {
            Category::Io => "io",
            Category::Syntax => "syntax",
            Category::Data => "data",
            Category::Eof => "eof",
        };

        ConfigError::Parse {
            category,
            line: err.line(),
            column: err.column(),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ConfigError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::InvalidRange { field, min, max } =>
                defmt::write!(fmt, "Invalid range {}: [{}, {}]", field, min, max),
            Self::DefaultOutOfRange { field, value, min, max } =>
                defmt::write!(fmt, "Default {} = {} outside [{}, {}]", field, value, min, max),
            Self::NonFinite { field } =>
                defmt::write!(fmt, "Non-finite {}", field),
            Self::Parse { category, line, column } =>
                defmt::write!(fmt, "Parse error ({}) at {}:{}", category, line, column),
        }
    }
}
