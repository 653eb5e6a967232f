//! Criterion micro-benchmarks for synchronization checks, neighbour table
//! construction and generation hashing.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use firefly_arena::GenerationAccess;
use firefly_bench::{reference_profile, uniform_steps};
use firefly_core::NeighbourhoodKind;
use firefly_engine::{PrepareMode, Simulation};
use firefly_space::{assign_connectivity, Adjacency, Connectivity, Grid2D};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Benchmark: sync check on a synchronized 100x100 grid (full scan).
fn bench_is_synchronized_uniform_10k(c: &mut Criterion) {
    let steps = uniform_steps(100 * 100, 3);
    let sim =
        Simulation::from_steps(100, 100, NeighbourhoodKind::Moore, Some(0), &steps).unwrap();

    c.bench_function("is_synchronized_uniform_10k", |b| {
        b.iter(|| black_box(sim.is_synchronized()));
    });
}

/// Benchmark: sync check on a random 100x100 grid (early exit).
fn bench_is_synchronized_random_10k(c: &mut Criterion) {
    let config = reference_profile(42, NeighbourhoodKind::Moore, PrepareMode::Sequential);
    let sim = Simulation::new(config).unwrap();

    c.bench_function("is_synchronized_random_10k", |b| {
        b.iter(|| black_box(sim.is_synchronized()));
    });
}

/// Benchmark: count out-of-sync cells on a random 100x100 grid.
fn bench_out_of_sync_cells_10k(c: &mut Criterion) {
    let config = reference_profile(42, NeighbourhoodKind::Moore, PrepareMode::Sequential);
    let sim = Simulation::new(config).unwrap();

    c.bench_function("out_of_sync_cells_10k", |b| {
        b.iter(|| black_box(sim.out_of_sync_cells()));
    });
}

/// Benchmark: build the Moore neighbour table for 100x100.
fn bench_adjacency_moore_10k(c: &mut Criterion) {
    let grid = Grid2D::new(100, 100).unwrap();

    c.bench_function("adjacency_moore_10k", |b| {
        b.iter(|| black_box(Adjacency::uniform(&grid, Connectivity::Moore)));
    });
}

/// Benchmark: assign random connectivity and build the table for 100x100.
fn bench_adjacency_random_10k(c: &mut Criterion) {
    let grid = Grid2D::new(100, 100).unwrap();

    c.bench_function("adjacency_random_10k", |b| {
        b.iter(|| {
            let mut rng = ChaCha8Rng::seed_from_u64(42);
            let per_cell =
                assign_connectivity(NeighbourhoodKind::Random, grid.cell_count(), &mut rng);
            black_box(Adjacency::build(&grid, per_cell))
        });
    });
}

/// Benchmark: SHA-256 digest of a 100x100 generation.
fn bench_generation_digest_10k(c: &mut Criterion) {
    let config = reference_profile(42, NeighbourhoodKind::Moore, PrepareMode::Sequential);
    let sim = Simulation::new(config).unwrap();
    let snapshot = sim.snapshot();
    assert_eq!(snapshot.steps().len(), 100 * 100);

    c.bench_function("generation_digest_10k", |b| {
        b.iter(|| black_box(firefly_replay::generation_digest(&snapshot)));
    });
}

criterion_group!(
    benches,
    bench_is_synchronized_uniform_10k,
    bench_is_synchronized_random_10k,
    bench_out_of_sync_cells_10k,
    bench_adjacency_moore_10k,
    bench_adjacency_random_10k,
    bench_generation_digest_10k
);
criterion_main!(benches);
