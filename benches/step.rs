//! Benchmarks for the generation-advance rule.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use rand::{Rng, SeedableRng, rngs::StdRng};

use torus_life::{CellGrid, step};

fn random_grid(rows: usize, cols: usize, density: f64, seed: u64) -> CellGrid {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut grid = CellGrid::new(rows, cols);
    for y in 0..rows {
        for x in 0..cols {
            if rng.gen_bool(density) {
                grid.set(x, y, 1).unwrap();
            }
        }
    }
    grid
}

fn bench_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("step");

    for size in [64, 128, 256, 512] {
        let grid = random_grid(size, size, 0.3, 42);

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}x{}", size, size)),
            &size,
            |b, _| {
                b.iter(|| step(black_box(&grid)));
            },
        );
    }

    group.finish();
}

fn bench_step_density(c: &mut Criterion) {
    let mut group = c.benchmark_group("step_density");

    for density in [0.05, 0.3, 0.7] {
        let grid = random_grid(256, 256, density, 42);

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("density_{}", density)),
            &density,
            |b, _| {
                b.iter(|| step(black_box(&grid)));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_step, bench_step_density);
criterion_main!(benches);
