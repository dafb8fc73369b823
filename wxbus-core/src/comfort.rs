//! Comfort Indices and Dew Point
//!
//! ## Regimes
//!
//! Wind chill and heat index are regressions fitted to human perception
//! inside a limited envelope. Outside it they are meaningless, and the
//! meteorological convention is to report the air temperature itself:
//!
//! ```text
//!                 wind < 4.8 km/h        wind >= 4.8 km/h
//! T < 10 °C       passthrough            wind chill regression
//! T >= 10 °C      passthrough            passthrough
//!
//!                 RH < 40 %              RH >= 40 %
//! T < 26.7 °C     passthrough            passthrough
//! T >= 26.7 °C    passthrough            Rothfusz regression
//! ```
//!
//! Each formula returns an [`Estimate`] so callers can tell a computed value
//! from a passthrough; the scalar wrappers return only the number.
//!
//! Envelope thresholds are compared in Kelvin, the unit the values arrive
//! in, so a temperature sitting exactly on a threshold is never pushed
//! across it by a Celsius round trip.
//!
//! ## Dew Point
//!
//! Magnus approximation, valid to about ±0.4 °C between -45 °C and 60 °C:
//!
//! ```text
//! γ  = (a·T)/(b + T) + ln(RH)
//! Td = (b·γ)/(a - γ)          a = 17.27, b = 237.7 °C
//! ```
//!
//! RH is clamped to [0.01, 0.99] first, which keeps the logarithm finite
//! and the dew point strictly below the air temperature.

use crate::constants::physics::{
    DEW_POINT_RH_MAX, DEW_POINT_RH_MIN, HEAT_INDEX_MIN_RH_PCT, HEAT_INDEX_MIN_TEMP_C,
    KELVIN_OFFSET, MAGNUS_A, MAGNUS_B_C, ROTHFUSZ, WIND_CHILL_COEFFS, WIND_CHILL_EXPONENT,
    WIND_CHILL_MAX_TEMP_C, WIND_CHILL_MIN_WIND_KMH,
};
use crate::units::{
    celsius_to_kelvin, fahrenheit_to_kelvin, kelvin_to_celsius, kelvin_to_fahrenheit, ms_to_kmh,
    ratio_to_percent,
};

/// Wind chill applies strictly below this temperature (K)
pub const WIND_CHILL_MAX_TEMP_K: f64 = KELVIN_OFFSET + WIND_CHILL_MAX_TEMP_C;

/// Heat index applies at or above this temperature (K)
pub const HEAT_INDEX_MIN_TEMP_K: f64 = KELVIN_OFFSET + HEAT_INDEX_MIN_TEMP_C;

/// Result of a formula with an applicability envelope
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Estimate {
    /// Inside the envelope: the regression was evaluated
    Computed(f64),
    /// Outside the envelope or inputs unusable: input temperature forwarded
    Passthrough(f64),
}

impl Estimate {
    /// The number to publish
    pub fn value(self) -> f64 {
        match self {
            Estimate::Computed(v) | Estimate::Passthrough(v) => v,
        }
    }

    /// True when the regression was evaluated
    pub fn is_computed(&self) -> bool {
        matches!(self, Estimate::Computed(_))
    }
}

// ===== WIND CHILL =====

/// Wind chill with its regime
///
/// `temperature` in K, `wind_speed` in m/s.
pub fn wind_chill_estimate(temperature: f64, wind_speed: f64) -> Estimate {
    if !temperature.is_finite() || !wind_speed.is_finite() {
        return Estimate::Passthrough(temperature);
    }

    let wind_kmh = ms_to_kmh(wind_speed);
    if temperature >= WIND_CHILL_MAX_TEMP_K || wind_kmh < WIND_CHILL_MIN_WIND_KMH {
        log_trace!("wind chill passthrough: T={}K V={}km/h", temperature, wind_kmh);
        return Estimate::Passthrough(temperature);
    }

    let t = kelvin_to_celsius(temperature);
    let v = libm::pow(wind_kmh, WIND_CHILL_EXPONENT);
    let [c0, c_t, c_v, c_tv] = WIND_CHILL_COEFFS;
    let chill = c0 + c_t * t + c_v * v + c_tv * t * v;

    Estimate::Computed(celsius_to_kelvin(chill))
}

/// Wind chill temperature (K)
///
/// Equal to `temperature` outside the envelope (T >= 10 °C or wind below
/// 4.8 km/h) and whenever an input is not a finite number.
pub fn wind_chill(temperature: f64, wind_speed: f64) -> f64 {
    wind_chill_estimate(temperature, wind_speed).value()
}

// ===== HEAT INDEX =====

/// Rothfusz regression (°F) over temperature (°F) and humidity (%)
pub fn rothfusz(t: f64, rh: f64) -> f64 {
    let [c1, c2, c3, c4, c5, c6, c7, c8, c9] = ROTHFUSZ;
    let t2 = t * t;
    let rh2 = rh * rh;

    c1 + c2 * t + c3 * rh + c4 * t * rh + c5 * t2 + c6 * rh2 + c7 * t2 * rh + c8 * t * rh2
        + c9 * t2 * rh2
}

/// NWS boundary correction to the Rothfusz regression (°F, signed)
///
/// Very dry air between 80 and 112 °F reads too hot; very humid air
/// between 80 and 87 °F reads too cool.
pub fn rothfusz_adjustment(t: f64, rh: f64) -> f64 {
    if rh < 13.0 && (80.0..=112.0).contains(&t) {
        let spread = (17.0 - (t - 95.0).abs()) / 17.0;
        -((13.0 - rh) / 4.0) * libm::sqrt(spread)
    } else if rh > 85.0 && (80.0..=87.0).contains(&t) {
        ((rh - 85.0) / 10.0) * ((87.0 - t) / 5.0)
    } else {
        0.0
    }
}

/// Heat index with its regime
///
/// `temperature` in K, `humidity` as a 0-1 ratio.
pub fn heat_index_estimate(temperature: f64, humidity: f64) -> Estimate {
    if !temperature.is_finite() || !humidity.is_finite() {
        return Estimate::Passthrough(temperature);
    }

    let rh = ratio_to_percent(humidity);
    if temperature < HEAT_INDEX_MIN_TEMP_K || rh < HEAT_INDEX_MIN_RH_PCT {
        log_trace!("heat index passthrough: T={}K RH={}%", temperature, rh);
        return Estimate::Passthrough(temperature);
    }

    let t = kelvin_to_fahrenheit(temperature);
    let index = rothfusz(t, rh) + rothfusz_adjustment(t, rh);

    Estimate::Computed(fahrenheit_to_kelvin(index))
}

/// Heat index temperature (K)
///
/// Equal to `temperature` below 26.7 °C, below 40 % humidity, and whenever
/// an input is not a finite number.
pub fn heat_index(temperature: f64, humidity: f64) -> f64 {
    heat_index_estimate(temperature, humidity).value()
}

// ===== DEW POINT =====

/// Dew point with its regime
///
/// `temperature` in K, `humidity` as a 0-1 ratio.
pub fn dew_point_estimate(temperature: f64, humidity: f64) -> Estimate {
    if !temperature.is_finite() || !humidity.is_finite() {
        return Estimate::Passthrough(temperature);
    }

    let t = kelvin_to_celsius(temperature);
    let rh = humidity.clamp(DEW_POINT_RH_MIN, DEW_POINT_RH_MAX);

    let gamma = (MAGNUS_A * t) / (MAGNUS_B_C + t) + libm::log(rh);
    let dew_point = (MAGNUS_B_C * gamma) / (MAGNUS_A - gamma);

    Estimate::Computed(celsius_to_kelvin(dew_point))
}

/// Dew point temperature (K)
pub fn dew_point(temperature: f64, humidity: f64) -> f64 {
    dew_point_estimate(temperature, humidity).value()
}
