//! The simulation world and its generation-transition engine.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::config::{ConfigError, WorldConfig};
use crate::memory::SnapshotMemory;
use petri_core::{CellGrid, CellState, RuleSet};
use petri_space::{EdgeBehavior, Neighbourhood};

/// Compute the next generation of `grid`.
///
/// Every cell's next state is derived from the same immutable previous
/// snapshot: the full new matrix is built before anything becomes
/// visible, so no observer ever sees a half-updated generation and
/// neighbour counts are never corrupted by earlier writes in the same
/// pass.
pub fn next_generation(
    grid: &CellGrid,
    neighbourhood: &Neighbourhood,
    edge: EdgeBehavior,
    rules: &RuleSet,
) -> CellGrid {
    grid.map_cells(|row, col, state| {
        rules.next_state(state, neighbourhood.live_neighbours(grid, row, col, edge))
    })
}

/// What a completed step observed about the automaton's trajectory.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Steadiness {
    /// The new generation matches nothing still in memory.
    Progressing,
    /// The new generation equals its immediate predecessor — a
    /// degenerate period-1 repetition, reported distinctly from a true
    /// oscillation.
    FixedPoint,
    /// The new generation equals a snapshot from `period` generations
    /// ago.
    Cycling {
        /// Number of generations in the repeating cycle (always >= 2).
        period: usize,
    },
}

/// Result of a single [`World::step`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Step {
    /// Generation number of the newly computed state (first step is 1).
    pub generation: u64,
    /// Steadiness observation for the new state.
    pub steadiness: Steadiness,
}

/// A running simulation: the current grid plus everything needed to
/// advance it one generation at a time.
///
/// The driving loop is the caller's: render the grid, call
/// [`step`](World::step), inspect the returned [`Steadiness`], repeat
/// until the configured generation budget runs out or a cycle appears.
pub struct World {
    config: WorldConfig,
    grid: CellGrid,
    memory: SnapshotMemory,
    rng: ChaCha8Rng,
    generation: u64,
}

impl World {
    /// Validate `config` and build a world.
    ///
    /// The grid starts all dead and is recorded in the snapshot memory
    /// as generation 0; the RNG is seeded from `config.seed` so random
    /// fills are reproducible.
    pub fn new(config: WorldConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let grid = CellGrid::new(config.rows, config.cols)?;
        let mut memory = SnapshotMemory::new(config.memory_capacity);
        memory.record(grid.clone());
        let rng = ChaCha8Rng::seed_from_u64(config.seed);
        Ok(Self {
            config,
            grid,
            memory,
            rng,
            generation: 0,
        })
    }

    /// The current generation's grid.
    pub fn grid(&self) -> &CellGrid {
        &self.grid
    }

    /// Retained snapshots, newest first (index 0 is the current grid).
    pub fn memory(&self) -> &SnapshotMemory {
        &self.memory
    }

    /// Generations advanced since the initial (or last installed) state.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The validated configuration this world was built from.
    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    /// Advance one generation.
    ///
    /// The memory is searched for the newly computed state *before* the
    /// state is recorded, so a match at distance `k` means the automaton
    /// repeats the state from `k + 1` generations ago: distance 0 is a
    /// fixed point, any larger distance a cycle of period `k + 1`.
    pub fn step(&mut self) -> Step {
        let next = next_generation(
            &self.grid,
            &self.config.neighbourhood,
            self.config.edge,
            &self.config.rules,
        );
        let steadiness = match self.memory.find(&next) {
            Some(0) => Steadiness::FixedPoint,
            Some(distance) => Steadiness::Cycling {
                period: distance + 1,
            },
            None => Steadiness::Progressing,
        };
        self.memory.record(next.clone());
        self.grid = next;
        self.generation += 1;
        Step {
            generation: self.generation,
            steadiness,
        }
    }

    /// Refill the grid at random: each cell independently alive with
    /// probability `random_factor`.
    ///
    /// Resets the generation counter and memory, re-recording the fresh
    /// state as generation 0. Successive calls draw from the world's
    /// seeded RNG stream, so a run is reproducible end to end.
    pub fn randomise(&mut self) {
        let factor = self.config.random_factor;
        let rng = &mut self.rng;
        let grid = self.grid.map_cells(|_, _, _| {
            if rng.random::<f64>() < factor {
                CellState::Alive
            } else {
                CellState::Dead
            }
        });
        self.reset_to(grid);
    }

    /// Install a prepared initial state (e.g. a rasterised seed).
    ///
    /// The grid must match the world's dimensions. Resets the generation
    /// counter and memory.
    pub fn install(&mut self, grid: CellGrid) -> Result<(), ConfigError> {
        if (grid.rows(), grid.cols()) != (self.grid.rows(), self.grid.cols()) {
            return Err(ConfigError::GridSizeMismatch {
                expected: (self.grid.rows(), self.grid.cols()),
                found: (grid.rows(), grid.cols()),
            });
        }
        self.reset_to(grid);
        Ok(())
    }

    /// Make `grid` the new generation 0.
    fn reset_to(&mut self, grid: CellGrid) {
        self.memory.clear();
        self.memory.record(grid.clone());
        self.grid = grid;
        self.generation = 0;
    }
}
