//! Common fixtures for integration tests
//!
//! This module provides:
//! - Representative observations for the conditions a vessel meets
//! - Vessel motion snapshots
//! - Assertion helpers for batch invariants

#![allow(dead_code)]

use chrono::{DateTime, Utc};
use wxbus_core::{
    time::to_datetime, BusLimits, MeasurementBatch, Observation, Parameter, Quantity,
    VesselMotion,
};

pub mod scenarios;

/// 2024-03-01T12:00:00Z
pub const NOON: u64 = 1_709_294_400_000;

/// Fixed processing time for reproducible batches
pub fn noon() -> DateTime<Utc> {
    to_datetime(NOON)
}

/// Mild temperate day at sea level
pub fn temperate() -> Observation {
    Observation::new()
        .with_temperature(288.15)
        .with_pressure(101_325.0)
        .with_humidity(0.65)
        .with_wind(5.14, 1.5708)
}

/// Vessel lying still, bow North
pub fn moored() -> VesselMotion {
    VesselMotion::new(0.0, 0.0)
}

/// Vessel making way at `speed` m/s on `course` rad
pub fn underway(speed: f64, course: f64) -> VesselMotion {
    VesselMotion::new(speed, course)
}

/// Every numeric slot is finite and inside its bus envelope
pub fn assert_batch_legal(batch: &MeasurementBatch) {
    let limits = BusLimits::default();

    assert_eq!(batch.measurements().count(), Parameter::COUNT);
    assert_eq!(batch.iter().count(), batch.len());
    for measurement in batch.measurements() {
        let value = measurement.value;
        assert!(value.is_finite(), "{} is {}", measurement.name(), value);

        let range = match measurement.parameter.quantity() {
            Quantity::OutsideTemperature
            | Quantity::DewPoint
            | Quantity::HeatIndex
            | Quantity::WindChill => Some(limits.temperature),
            Quantity::Pressure => Some(limits.pressure),
            Quantity::Humidity => Some(limits.humidity),
            Quantity::TrueWindSpeed | Quantity::ApparentWindSpeed => Some(limits.wind_speed),
            _ => None,
        };

        if let Some(range) = range {
            assert!(range.contains(value), "{} = {} outside range", measurement.name(), value);
        }
    }

    let direction = batch.value(Parameter::TrueWindDirection).unwrap_or(f64::NAN);
    assert!((0.0..core::f64::consts::TAU).contains(&direction));

    let angle = batch.value(Parameter::ApparentWindAngle).unwrap_or(f64::NAN);
    assert!(angle > -core::f64::consts::PI && angle <= core::f64::consts::PI);
}

/// Alias slots publish the same value as their primary
pub fn assert_aliases_agree(batch: &MeasurementBatch) {
    let pairs = [
        (Parameter::ApparentTemperature, Parameter::HeatIndexTemperature),
        (Parameter::WindChillTemperature, Parameter::TheoreticalWindChillTemperature),
        (Parameter::TrueWindSpeed, Parameter::WindSpeedOverGround),
        (Parameter::TrueWindDirection, Parameter::TrueWindAngleToWater),
    ];

    for (primary, alias) in pairs {
        assert_eq!(batch.value(primary), batch.value(alias), "{}", alias.name());
    }
}
