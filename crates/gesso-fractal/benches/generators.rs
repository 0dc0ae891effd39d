//! Benchmarks for fractal instruction generation and path replay.
//!
//! Run with: cargo bench -p gesso-fractal

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use gesso_fractal::{DragonCurve, FractalGenerator, FractalSegment, KochIsland};
use glam::Vec2;

fn bench_instructions(c: &mut Criterion) {
    c.bench_function("koch_instructions_3", |b| {
        b.iter(|| KochIsland.instructions(black_box(3)))
    });

    c.bench_function("dragon_sequence_12", |b| {
        b.iter(|| DragonCurve.sequence(black_box(12)))
    });

    c.bench_function("dragon_instructions_12", |b| {
        b.iter(|| DragonCurve.instructions(black_box(12)))
    });
}

fn bench_paths(c: &mut Criterion) {
    let segment = FractalSegment::new(Vec2::ZERO, Vec2::new(800.0, 0.0), 0.0);

    c.bench_function("koch_path_3", |b| {
        b.iter(|| KochIsland.generate_path(black_box(&segment), 3))
    });

    c.bench_function("dragon_path_12", |b| {
        b.iter(|| DragonCurve.generate_path(black_box(&segment), 12))
    });
}

criterion_group!(benches, bench_instructions, bench_paths);
criterion_main!(benches);
