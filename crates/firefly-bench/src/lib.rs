//! Benchmark profiles for the firefly automaton.
//!
//! - [`reference_profile`]: 100x100 grid (10K cells)
//! - [`stress_profile`]: 316x316 grid (~100K cells)
//! - [`uniform_steps`]: a synchronized initial generation of any size

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use firefly_core::NeighbourhoodKind;
use firefly_engine::{PrepareMode, SimConfig};

/// Reference profile: 100x100 grid with the given neighbourhood.
pub fn reference_profile(seed: u64, kind: NeighbourhoodKind, prepare: PrepareMode) -> SimConfig {
    SimConfig {
        prepare,
        ..SimConfig::new(100, 100, kind, Some(seed))
    }
}

/// Stress profile: 316x316 grid, about 10x the reference cell count.
pub fn stress_profile(seed: u64, kind: NeighbourhoodKind, prepare: PrepareMode) -> SimConfig {
    SimConfig {
        prepare,
        ..SimConfig::new(316, 316, kind, Some(seed))
    }
}

/// `cell_count` copies of `value`, for building already-synchronized grids.
pub fn uniform_steps(cell_count: usize, value: u8) -> Vec<u8> {
    vec![value; cell_count]
}

#[cfg(test)]
mod tests {
    use super::*;
    use firefly_engine::Simulation;

    #[test]
    fn profiles_build() {
        let config = reference_profile(1, NeighbourhoodKind::Moore, PrepareMode::Sequential);
        let sim = Simulation::new(config).unwrap();
        assert_eq!(sim.dims(), (100, 100));
        let config = stress_profile(1, NeighbourhoodKind::Random, PrepareMode::Parallel);
        assert_eq!((config.rows, config.cols), (316, 316));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn uniform_grid_starts_synchronized() {
        let steps = uniform_steps(100, 7);
        let sim =
            Simulation::from_steps(10, 10, NeighbourhoodKind::Moore, Some(0), &steps).unwrap();
        assert!(sim.is_synchronized());
    }
}
