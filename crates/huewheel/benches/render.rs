use criterion::{criterion_group, criterion_main, Criterion};
use huewheel::tint::{rgb_shades, rgb_tints, Progression};
use huewheel::wheel::{render_ring, render_triangle, render_wheel, WheelGeometry};
use std::hint::black_box;

pub fn run_benchmarks(c: &mut Criterion) {
    let geometry = WheelGeometry::default();

    let mut group = c.benchmark_group("render");
    group.bench_function("ring", |b| b.iter(|| render_ring(black_box(&geometry))));
    group.bench_function("triangle", |b| {
        b.iter(|| render_triangle(black_box(&geometry), black_box(217)))
    });
    group.bench_function("wheel", |b| {
        b.iter(|| render_wheel(black_box(&geometry), black_box(217)))
    });
    group.finish();

    let mut group = c.benchmark_group("tones");
    let pink = [1.0, 0.25, 0.5];
    group.bench_function("linear-tints", |b| {
        b.iter(|| rgb_tints(black_box(&pink), 5.0, 5, Progression::Linear))
    });
    group.bench_function("geometric-shades", |b| {
        b.iter(|| rgb_shades(black_box(&pink), 20.0, 9, Progression::Geometric))
    });
    group.finish();
}

criterion_group!(benches, run_benchmarks);
criterion_main!(benches);
