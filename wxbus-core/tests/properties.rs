//! Property tests for the physics and the batch invariants

mod common;

use core::f64::consts::{PI, TAU};

use proptest::prelude::*;
use wxbus_core::{
    comfort::{dew_point, heat_index, wind_chill, HEAT_INDEX_MIN_TEMP_K},
    observation::{CandidateSet, Quantity},
    units::normalize_angle,
    wind::{apparent_wind, WindMode},
    Engine, Observation, RangeValidator, VesselMotion,
};

fn any_value() -> impl Strategy<Value = f64> {
    prop_oneof![
        8 => -1.0e7..1.0e7f64,
        1 => Just(f64::NAN),
        1 => Just(f64::INFINITY),
        1 => Just(f64::NEG_INFINITY),
    ]
}

fn any_candidates() -> impl Strategy<Value = CandidateSet> {
    let values = proptest::collection::vec(proptest::option::of(any_value()), Quantity::COUNT);
    values.prop_map(|values| {
        let mut set = CandidateSet::new();
        for (quantity, value) in Quantity::ALL.into_iter().zip(values) {
            if let Some(value) = value {
                set.set(quantity, value);
            }
        }
        set
    })
}

fn any_observation() -> impl Strategy<Value = Observation> {
    (
        proptest::option::of(any_value()),
        proptest::option::of(any_value()),
        proptest::option::of(any_value()),
        proptest::option::of(any_value()),
        proptest::option::of(any_value()),
    )
        .prop_map(|(temperature, pressure, humidity, wind_speed, wind_direction)| Observation {
            temperature,
            pressure,
            humidity,
            wind_speed,
            wind_direction,
            description: None,
        })
}

fn any_motion() -> impl Strategy<Value = VesselMotion> {
    (proptest::option::of(any_value()), proptest::option::of(any_value()), any::<bool>()).prop_map(
        |(speed_over_ground, course_or_heading, complete)| VesselMotion {
            speed_over_ground,
            course_or_heading,
            complete,
        },
    )
}

proptest! {
    #[test]
    fn apparent_wind_bounded(
        true_speed in 0.0..100.0f64,
        direction in -10.0..10.0f64,
        vessel_speed in 0.0..30.0f64,
        reference in -10.0..10.0f64,
    ) {
        let wind = apparent_wind(true_speed, direction, vessel_speed, reference);
        prop_assert!(wind.speed >= 0.0);
        prop_assert!(wind.angle > -PI && wind.angle <= PI);
        prop_assert_ne!(wind.mode, WindMode::Degraded);
    }

    #[test]
    fn stationary_vessel_sees_true_wind(
        true_speed in 0.0..100.0f64,
        direction in 0.0..TAU,
        reference in 0.0..TAU,
    ) {
        let wind = apparent_wind(true_speed, direction, 0.0, reference);
        prop_assert_eq!(wind.speed, true_speed);
        prop_assert_eq!(wind.angle, normalize_angle(direction - reference));
    }

    #[test]
    fn wind_chill_passthrough_when_warm(temperature in 283.15..400.0f64, wind in 0.0..100.0f64) {
        prop_assert_eq!(wind_chill(temperature, wind), temperature);
    }

    #[test]
    fn heat_index_passthrough_when_cool(
        temperature in 200.0..HEAT_INDEX_MIN_TEMP_K,
        humidity in 0.0..=1.0f64,
    ) {
        prop_assert_eq!(heat_index(temperature, humidity), temperature);
    }

    #[test]
    fn dew_point_not_above_temperature(temperature in 233.15..333.15f64, humidity in 0.0..=1.0f64) {
        prop_assert!(dew_point(temperature, humidity) <= temperature);
    }

    #[test]
    fn range_validator_idempotent(set in any_candidates()) {
        let validator = RangeValidator::default();
        let once = validator.apply(set);
        let twice = validator.apply(once);

        for quantity in Quantity::ALL {
            let (a, b) = (once.get(quantity), twice.get(quantity));
            match (a, b) {
                (Some(a), Some(b)) => prop_assert_eq!(a.to_bits(), b.to_bits()),
                _ => prop_assert_eq!(a.is_some(), b.is_some()),
            }
        }
    }

    #[test]
    fn range_validator_never_invents(set in any_candidates()) {
        let valid = RangeValidator::default().apply(set);
        for quantity in Quantity::ALL {
            prop_assert_eq!(set.get(quantity).is_some(), valid.get(quantity).is_some());
        }
    }

    #[test]
    fn engine_is_total(observation in any_observation(), motion in any_motion()) {
        let batch = Engine::default().process(observation, motion, common::noon());
        common::assert_batch_legal(&batch);
        common::assert_aliases_agree(&batch);
    }
}
