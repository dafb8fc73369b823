//! Engine Cycle Example
//!
//! This example runs one observation through the transformation engine and
//! prints the batch a bus encoder would publish.
//!
//! ## What You'll Learn
//!
//! - Converting a provider reading in native units
//! - Describing vessel motion, complete or not
//! - Walking every named entry of a batch, description included
//! - Seeing defaults fill in for missing data
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_engine_cycle
//! ```

use wxbus_core::{
    adapter::{ProviderReading, SpeedUnit},
    time::{FixedTime, TimeSource},
    units::{deg_to_rad, knots_to_ms},
    Engine, Entry, MeasurementBatch, Observation, Parameter, VesselMotion,
};

fn main() {
    println!("wxbus Engine Cycle Example");
    println!("==========================\n");

    let engine = Engine::default();
    let clock = FixedTime::new(1_709_294_400_000);

    // A provider reports Celsius, millibar, percent, km/h and degrees
    let reading = ProviderReading {
        temperature_c: Some(15.0),
        pressure_mbar: Some(1013.25),
        humidity: Some(65.0),
        wind_speed: Some(18.5),
        wind_speed_unit: SpeedUnit::KilometresPerHour,
        wind_direction_deg: Some(90.0),
        description: Some("Partly cloudy"),
    };
    let observation = reading.to_observation();

    // Making 6 knots on a course of 045
    let motion = VesselMotion::new(knots_to_ms(6.0), deg_to_rad(45.0));

    println!("Underway, clock at {} ms:\n", clock.now());
    let batch = engine.process_at(observation, motion, &clock);
    print_batch(&batch);

    // Same weather, navigation offline: apparent wind degrades to true wind
    println!("\nNavigation offline:\n");
    let batch = engine.process_at(reading.to_observation(), VesselMotion::unavailable(), &clock);
    println!(
        "  apparent-wind-speed  {:>10.3} m/s",
        batch.value(Parameter::ApparentWindSpeed).unwrap_or_default()
    );
    println!(
        "  apparent-wind-angle  {:>10.3} rad",
        batch.value(Parameter::ApparentWindAngle).unwrap_or_default()
    );

    // Nothing known at all: every slot still carries a legal value
    println!("\nEmpty observation:\n");
    let batch = engine.process_at(Observation::new(), VesselMotion::unavailable(), &clock);
    print_batch(&batch);
}

fn print_batch(batch: &MeasurementBatch) {
    for entry in batch.iter() {
        match entry {
            Entry::Number(measurement) => println!(
                "  {:<36} {:>12.4} {}",
                measurement.name(),
                measurement.value,
                measurement.unit()
            ),
            Entry::Text { text, .. } => println!("  {:<36} {:>12}", entry.name(), text),
        }
    }
    println!("\n  {} entries at {}", batch.len(), batch.timestamp().to_rfc3339());
}
