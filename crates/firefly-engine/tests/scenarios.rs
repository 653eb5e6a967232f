//! Hand-checked end-to-end scenarios on small literal grids, plus the
//! seeded golden runs on the default 10x10 grid.

use firefly_arena::GenerationAccess;
use firefly_core::NeighbourhoodKind;
use firefly_engine::{new_simulation, HaltReason, Simulation};
use firefly_test_utils::GridFixture;

fn from_fixture(kind: NeighbourhoodKind, g: &GridFixture) -> Simulation {
    Simulation::from_steps(g.rows, g.cols, kind, Some(0), &g.values).unwrap()
}

fn rows_of(sim: &Simulation) -> Vec<Vec<u8>> {
    let (_, cols) = sim.dims();
    sim.snapshot()
        .to_bytes()
        .chunks(cols as usize)
        .map(<[u8]>::to_vec)
        .collect()
}

// ── Tiny grids ──────────────────────────────────────────────────────

#[test]
fn single_cell_is_synchronized_at_tick_zero() {
    for kind in [
        NeighbourhoodKind::Moore,
        NeighbourhoodKind::VonNeumann,
        NeighbourhoodKind::Random,
    ] {
        for seed in [0, 1, 42, u64::MAX] {
            let mut sim = new_simulation(1, 1, kind, Some(seed)).unwrap();
            assert!(sim.is_synchronized());
            let outcome = sim.run(0);
            assert_eq!(outcome.synced_at, Some(0), "{kind} seed {seed}");
            assert_eq!(outcome.final_tick, 0);
            assert_eq!(outcome.halt, HaltReason::Synchronized);
        }
    }
}

#[test]
fn all_flashing_wraps_together() {
    let g = GridFixture::uniform(2, 2, 9);
    let mut sim = from_fixture(NeighbourhoodKind::Moore, &g);
    // Already uniform, so the driver would halt at tick 0; step by hand.
    assert!(sim.is_synchronized());
    sim.step();
    assert_eq!(rows_of(&sim), vec![vec![0, 0], vec![0, 0]]);
    assert!(sim.is_synchronized());
    assert_eq!(sim.tick_count(), 1);
}

#[test]
fn one_flash_pulls_charging_cells_into_step() {
    let g = GridFixture::new(&[&[0, 0], &[0, 9]]);
    let mut sim = from_fixture(NeighbourhoodKind::Moore, &g);
    assert!(!sim.is_synchronized());
    let outcome = sim.run(0);
    assert_eq!(outcome.synced_at, Some(1));
    assert_eq!(rows_of(&sim), vec![vec![0, 0], vec![0, 0]]);
    assert_eq!(sim.last_metrics().resets, 3);
}

#[test]
fn von_neumann_centre_flash_skips_corners() {
    let g = GridFixture::new(&[&[3, 3, 3], &[3, 9, 3], &[3, 3, 3]]);
    let mut sim = from_fixture(NeighbourhoodKind::VonNeumann, &g);
    sim.step();
    assert_eq!(
        rows_of(&sim),
        vec![vec![4, 0, 4], vec![0, 0, 0], vec![4, 0, 4]]
    );
}

#[test]
fn moore_centre_flash_reaches_corners() {
    let g = GridFixture::new(&[&[3, 3, 3], &[3, 9, 3], &[3, 3, 3]]);
    let mut sim = from_fixture(NeighbourhoodKind::Moore, &g);
    let outcome = sim.run(0);
    assert_eq!(outcome.synced_at, Some(1));
}

#[test]
fn non_sensitive_cells_ignore_flash() {
    let g = GridFixture::new(&[&[6, 7, 8], &[5, 9, 0]]);
    let mut sim = from_fixture(NeighbourhoodKind::Moore, &g);
    sim.step();
    assert_eq!(rows_of(&sim), vec![vec![7, 8, 9], vec![0, 0, 0]]);
}

// ── Seeded 10x10 runs ───────────────────────────────────────────────

#[test]
fn seeded_initial_state_is_pinned() {
    let sim = new_simulation(10, 10, NeighbourhoodKind::Moore, Some(42)).unwrap();
    let bytes = sim.snapshot().to_bytes();
    assert_eq!(&bytes[..12], &[6, 9, 4, 6, 3, 1, 3, 7, 7, 2, 5, 8]);
}

#[test]
fn golden_moore_seed_42() {
    let mut sim = new_simulation(10, 10, NeighbourhoodKind::Moore, Some(42)).unwrap();
    let outcome = sim.run(2500);
    assert_eq!(outcome.synced_at, Some(87));
    assert_eq!(outcome.final_tick, 87);
    assert_eq!(outcome.halt, HaltReason::Synchronized);
}

#[test]
fn golden_other_kinds_and_seeds() {
    let cases = [
        (NeighbourhoodKind::VonNeumann, 42, 169),
        (NeighbourhoodKind::Random, 42, 97),
        (NeighbourhoodKind::Moore, 0, 67),
    ];
    for (kind, seed, expected) in cases {
        let mut sim = new_simulation(10, 10, kind, Some(seed)).unwrap();
        assert_eq!(sim.run(2500).synced_at, Some(expected), "{kind} seed {seed}");
    }
}

#[test]
fn von_neumann_can_stall_until_the_limit() {
    for seed in [1, 7] {
        let mut sim = new_simulation(10, 10, NeighbourhoodKind::VonNeumann, Some(seed)).unwrap();
        let outcome = sim.run(2500);
        assert_eq!(outcome.synced_at, None, "seed {seed}");
        assert_eq!(outcome.final_tick, 2500);
        assert_eq!(outcome.halt, HaltReason::StepLimit);
    }
}

#[test]
fn synchronization_is_absorbing() {
    let mut sim = new_simulation(10, 10, NeighbourhoodKind::Moore, Some(42)).unwrap();
    sim.run(2500);
    let value = sim.snapshot().get(0, 0);
    for _ in 0..30 {
        sim.step();
        assert!(sim.is_synchronized());
        let bytes = sim.snapshot().to_bytes();
        assert!(bytes.iter().all(|&b| b == bytes[0]));
    }
    // Uniform grids simply advance: 30 ticks is 3 full cycles.
    assert_eq!(sim.snapshot().get(0, 0), value);
}
