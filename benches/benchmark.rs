//! Benchmark to measure (and then optimize) the membership oracle and
//! the grid driver. The oracle cases cover the three code paths: the
//! cardioid shortcut, a fast escape, and a full budget burn.
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use mandelbrot_scatter::core::membership::is_mandelbrot;
use mandelbrot_scatter::core::sample_grid::{find_members, find_members_parallel};

fn membership_oracle(c: &mut Criterion) {
    c.bench_function("oracle_cardioid_shortcut", |b| {
        b.iter(|| is_mandelbrot(black_box(0.0), black_box(0.0), black_box(500)))
    });
    c.bench_function("oracle_fast_escape", |b| {
        b.iter(|| is_mandelbrot(black_box(1.0), black_box(1.0), black_box(500)))
    });
    // Slow-escaping point just right of the cardioid cusp; it neither
    // escapes nor repeats within the budget.
    c.bench_function("oracle_budget_exhausted", |b| {
        b.iter(|| is_mandelbrot(black_box(0.250001), black_box(0.0), black_box(500)))
    });
}

fn grid_driver(c: &mut Criterion) {
    let center = nalgebra::Vector2::new(-0.5, 0.0);
    c.bench_function("find_members_dens_100", |b| {
        b.iter(|| find_members(2.0, &center, black_box(100), 50).unwrap())
    });
    c.bench_function("find_members_parallel_dens_100", |b| {
        b.iter(|| find_members_parallel(2.0, &center, black_box(100), 50, 4).unwrap())
    });
}

criterion_group!(benches, membership_oracle, grid_driver);
criterion_main!(benches);
