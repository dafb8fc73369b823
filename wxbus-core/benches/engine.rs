//! Run these benches with `cargo bench --bench engine -- --verbose`

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use wxbus_core::{
    comfort, psychrometrics,
    time::to_datetime,
    units::celsius_to_kelvin,
    wind::apparent_wind,
    Engine, Observation, VesselMotion,
};

criterion_main!(engine_benches, formula_benches);

criterion_group!(engine_benches, full_cycle_bench, empty_cycle_bench);

criterion_group!(formula_benches, apparent_wind_bench, comfort_bench, psychrometrics_bench);

fn full_cycle_bench(c: &mut Criterion) {
    let engine = Engine::default();
    let observation = Observation::new()
        .with_temperature(celsius_to_kelvin(28.0))
        .with_pressure(101_100.0)
        .with_humidity(70.0)
        .with_wind(6.5, 2.1)
        .with_description("Hazy sunshine");
    let motion = VesselMotion::new(3.2, 0.7);
    let timestamp = to_datetime(1_709_294_400_000);

    c.bench_function("engine_full_cycle", |b| {
        b.iter(|| engine.process(black_box(observation.clone()), black_box(motion), timestamp));
    });
}

fn empty_cycle_bench(c: &mut Criterion) {
    let engine = Engine::default();
    let timestamp = to_datetime(0);

    c.bench_function("engine_empty_cycle", |b| {
        b.iter(|| engine.process(Observation::new(), VesselMotion::unavailable(), timestamp));
    });
}

fn apparent_wind_bench(c: &mut Criterion) {
    c.bench_function("apparent_wind", |b| {
        b.iter(|| apparent_wind(black_box(6.5), black_box(2.1), black_box(3.2), black_box(0.7)));
    });
}

fn comfort_bench(c: &mut Criterion) {
    let cold = celsius_to_kelvin(-5.0);
    let hot = celsius_to_kelvin(33.0);

    c.bench_function("comfort_indices", |b| {
        b.iter(|| {
            let _chill = comfort::wind_chill(black_box(cold), black_box(12.0));
            let _heat = comfort::heat_index(black_box(hot), black_box(0.7));
            let _dew = comfort::dew_point(black_box(hot), black_box(0.7));
        });
    });
}

fn psychrometrics_bench(c: &mut Criterion) {
    let t = celsius_to_kelvin(20.0);

    c.bench_function("psychrometrics", |b| {
        b.iter(|| {
            let _ah = psychrometrics::absolute_humidity(black_box(t), black_box(0.6));
            let _rho =
                psychrometrics::air_density(black_box(t), black_box(101_325.0), black_box(0.6));
        });
    });
}
