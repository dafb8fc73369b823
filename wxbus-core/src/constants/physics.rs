//! Physical Constants for wxbus
//!
//! Fundamental constants and regression coefficients used by the unit
//! conversions, comfort indices and psychrometric calculations. Values are
//! `f64` because the bus carries Kelvin and Pascal at a resolution where
//! single precision starts to show.

use core::f64::consts::PI;

// ===== TEMPERATURE SCALES =====

/// Offset between the Kelvin and Celsius scales (K).
///
/// 0 °C = 273.15 K exactly.
///
/// Source: NIST Special Publication 330 (2019)
pub const KELVIN_OFFSET: f64 = 273.15;

/// Offset between the Fahrenheit and Celsius scales (°F at 0 °C).
pub const FAHRENHEIT_OFFSET: f64 = 32.0;

/// Ratio of a Fahrenheit degree to a Celsius degree.
pub const FAHRENHEIT_PER_CELSIUS: f64 = 9.0 / 5.0;

// ===== PRESSURE, SPEED AND ANGLE CONVERSIONS =====

/// Pascals per millibar (= hPa).
pub const PA_PER_MBAR: f64 = 100.0;

/// Kilometres per hour in one metre per second.
pub const KMH_PER_MS: f64 = 3.6;

/// Metres per second in one knot (1852 m / 3600 s).
///
/// Source: International nautical mile definition
pub const MS_PER_KNOT: f64 = 1852.0 / 3600.0;

/// Radians per degree.
pub const RAD_PER_DEG: f64 = PI / 180.0;

// ===== MAGNUS APPROXIMATION =====

/// Magnus coefficient `a` (dimensionless).
///
/// ```text
/// γ(T,RH) = ln(RH) + (a × T)/(b + T)
/// Td = (b × γ)/(a - γ)
/// ```
///
/// Source: Magnus-Tetens, Alduchov & Eskridge (1996) variant
pub const MAGNUS_A: f64 = 17.27;

/// Magnus coefficient `b` (°C).
pub const MAGNUS_B_C: f64 = 237.7;

/// Saturation vapour pressure of water at 0 °C (hPa).
///
/// Prefactor of the Magnus exponential: `es = 6.112 × e^(a·T/(b+T))`.
pub const MAGNUS_ES0_HPA: f64 = 6.112;

/// Relative humidity clamp applied before taking its logarithm.
///
/// Keeps `ln(RH)` finite at 0 and keeps the dew point strictly below the
/// air temperature at saturation.
pub const DEW_POINT_RH_MIN: f64 = 0.01;

/// Upper relative humidity clamp for the dew point logarithm.
pub const DEW_POINT_RH_MAX: f64 = 0.99;

// ===== GAS CONSTANTS =====

/// Specific gas constant for dry air (J/(kg·K)).
///
/// Source: CIPM-2007 air density equation
pub const R_DRY_AIR: f64 = 287.0531;

/// Specific gas constant for water vapour (J/(kg·K)).
///
/// Source: CIPM-2007 air density equation
pub const R_WATER_VAPOR: f64 = 461.4964;

/// Absolute humidity factor (kg·K/J), approximately `1 / R_WATER_VAPOR`.
///
/// `AH = ABSOLUTE_HUMIDITY_FACTOR × e / T` with `e` in Pa and `T` in K.
pub const ABSOLUTE_HUMIDITY_FACTOR: f64 = 0.002166;

/// Sea-level air density of the International Standard Atmosphere (kg/m³).
///
/// Fallback for air density when temperature or pressure are unusable.
///
/// Source: ISO 2533:1975
pub const ISA_SEA_LEVEL_DENSITY: f64 = 1.225;

/// Standard atmospheric pressure at sea level (Pa).
///
/// Source: International Standard Atmosphere (ISA)
pub const SEA_LEVEL_PRESSURE_PA: f64 = 101_325.0;

// ===== WIND CHILL =====

/// Wind chill is only defined below this air temperature (°C).
///
/// Source: Environment Canada / NWS joint wind chill index (2001)
pub const WIND_CHILL_MAX_TEMP_C: f64 = 10.0;

/// Wind chill is only defined at or above this wind speed (km/h).
pub const WIND_CHILL_MIN_WIND_KMH: f64 = 4.8;

/// Wind chill regression coefficients, in order: constant, `T`, `V^0.16`
/// and `T·V^0.16` (T in °C, V in km/h).
pub const WIND_CHILL_COEFFS: [f64; 4] = [13.12, 0.6215, -11.37, 0.3965];

/// Velocity exponent of the wind chill regression.
pub const WIND_CHILL_EXPONENT: f64 = 0.16;

// ===== HEAT INDEX =====

/// Heat index is only defined at or above this air temperature (°C).
///
/// 80 °F rounded the way the NWS publishes it.
///
/// Source: NWS Technical Attachment SR 90-23 (Rothfusz 1990)
pub const HEAT_INDEX_MIN_TEMP_C: f64 = 26.7;

/// Heat index is only defined at or above this relative humidity (%).
pub const HEAT_INDEX_MIN_RH_PCT: f64 = 40.0;

/// Rothfusz regression coefficients `c1..c9` over (T °F, RH %).
///
/// ```text
/// HI = c1 + c2·T + c3·R + c4·T·R + c5·T² + c6·R² + c7·T²·R + c8·T·R² + c9·T²·R²
/// ```
pub const ROTHFUSZ: [f64; 9] = [
    -42.379,
    2.049_015_23,
    10.143_331_27,
    -0.224_755_41,
    -0.006_837_83,
    -0.054_817_17,
    0.001_228_74,
    0.000_852_82,
    -0.000_001_99,
];
