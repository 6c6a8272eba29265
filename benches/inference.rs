//! Benchmarks for the Mamdani inference hot path.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};

use aquarule::WateringAdjuster;

fn bench_inference(c: &mut Criterion) {
    let adjuster = WateringAdjuster::new().expect("reference configuration");

    c.bench_function("infer_mid_range", |b| {
        b.iter(|| adjuster.engine().infer(black_box(17.5)).unwrap())
    });

    c.bench_function("infer_band_boundary", |b| {
        b.iter(|| adjuster.engine().infer(black_box(10.0)).unwrap())
    });

    c.bench_function("adjust_full", |b| {
        b.iter(|| adjuster.adjust(black_box(200.0), Some(black_box(3.0))).unwrap())
    });

    c.bench_function("adjust_fallback_temperature", |b| {
        b.iter(|| adjuster.adjust(black_box(200.0), None).unwrap())
    });
}

criterion_group!(benches, bench_inference);
criterion_main!(benches);
