//=========================================================================
// Simulation Engine
//=========================================================================
//
// Conway's Game of Life (B3/S23) over a clamped `GridState`.
//
// Responsibilities:
// - Seed the grid with a random population (`randomize`)
// - Apply one generation transition (`step`)
// - Track the generation index since the last seeding
//
// The engine is a plain owned value. It is advanced by the
// `FixedStepScheduler` through the `FixedUpdate` trait and read by the
// renderer through `grid()`.
//
//=========================================================================

//=== External Dependencies ===============================================

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

//=== Internal Dependencies ===============================================

use super::grid::{Cell, GridState};

//=== FixedUpdate =========================================================

/// Something that advances by exactly one fixed increment per call.
///
/// The scheduler knows nothing about Life; it only counts elapsed
/// intervals and calls `fixed_update` once per interval.
pub trait FixedUpdate {
    fn fixed_update(&mut self);
}

//=== Transition Rule =====================================================

/// Next-generation value for a cell given its live neighbor count.
///
/// - 2 neighbors: the cell keeps its state
/// - 3 neighbors: the cell is alive
/// - anything else: the cell is dead
#[inline]
pub fn next_cell(current: Cell, live_neighbors: u8) -> Cell {
    transition(current, live_neighbors).unwrap_or(Cell::Dead)
}

/// Rule in the form `GridState::advance` expects: `None` means "leave the
/// zeroed scratch cell dead".
#[inline]
fn transition(current: Cell, live_neighbors: u8) -> Option<Cell> {
    match live_neighbors {
        2 => Some(current),
        3 => Some(Cell::Alive),
        _ => None,
    }
}

//=== LifeEngine ==========================================================

/// Owns the grid and the random source used to seed it.
pub struct LifeEngine<R: Rng = StdRng> {
    grid: GridState,
    rng: R,
    generation: u64,
}

impl LifeEngine<StdRng> {
    /// Creates a default-sized engine seeded from OS entropy and randomizes it.
    pub fn from_entropy() -> Self {
        Self::with_rng(GridState::default(), StdRng::from_entropy())
    }

    /// Creates a default-sized engine with a reproducible seed and randomizes it.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(GridState::default(), StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> LifeEngine<R> {
    //--- Construction -----------------------------------------------------

    /// Creates an engine over `grid` and randomizes it with `rng`.
    pub fn with_rng(grid: GridState, rng: R) -> Self {
        let mut engine = Self::with_grid(grid, rng);
        engine.randomize();
        engine
    }

    /// Creates an engine over an existing grid without reseeding it.
    pub fn with_grid(grid: GridState, rng: R) -> Self {
        Self {
            grid,
            rng,
            generation: 0,
        }
    }

    //--- Seeding ----------------------------------------------------------

    /// Clears the grid and marks `floor(W * H / 2)` random positions alive.
    ///
    /// Positions are drawn with replacement, so a repeated draw re-marks an
    /// already alive cell and the resulting population can be lower than
    /// the number of draws.
    pub fn randomize(&mut self) {
        let cells = self.grid.len();

        self.grid.clear();
        for _ in 0..cells / 2 {
            let index = self.rng.gen_range(0..cells);
            self.grid.set_index(index, Cell::Alive);
        }
        self.generation = 0;
    }

    //--- Simulation -------------------------------------------------------

    /// Advances the grid by exactly one generation.
    pub fn step(&mut self) {
        self.grid.advance(transition);
        self.generation += 1;
    }

    //--- Accessors --------------------------------------------------------

    pub fn grid(&self) -> &GridState {
        &self.grid
    }

    /// Generations stepped since the last `randomize`.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.grid.population()
    }
}

impl<R: Rng> FixedUpdate for LifeEngine<R> {
    fn fixed_update(&mut self) {
        self.step();
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::{GRID_HEIGHT, GRID_WIDTH};

    fn engine_with(width: usize, height: usize, alive: &[(usize, usize)]) -> LifeEngine {
        let mut grid = GridState::new(width, height);
        for &(x, y) in alive {
            grid.set_cell(x, y, Cell::Alive);
        }
        LifeEngine::with_grid(grid, StdRng::seed_from_u64(7))
    }

    fn alive(engine: &LifeEngine) -> Vec<(usize, usize)> {
        engine.grid().alive_cells().collect()
    }

    //=====================================================================
    // Rule Tests
    //=====================================================================

    #[test]
    fn rule_table() {
        for n in 0..=8 {
            let expected_dead = if n == 3 { Cell::Alive } else { Cell::Dead };
            let expected_alive = match n {
                2 | 3 => Cell::Alive,
                _ => Cell::Dead,
            };
            assert_eq!(next_cell(Cell::Dead, n), expected_dead, "dead cell with {} neighbors", n);
            assert_eq!(next_cell(Cell::Alive, n), expected_alive, "alive cell with {} neighbors", n);
        }
    }

    #[test]
    fn isolated_cell_dies() {
        let mut engine = engine_with(3, 3, &[(1, 1)]);
        engine.step();
        assert_eq!(engine.population(), 0);
    }

    #[test]
    fn corner_cell_dies_against_border() {
        let mut engine = engine_with(3, 3, &[(0, 0)]);
        assert_eq!(engine.grid().live_neighbors(0, 0), 0);

        engine.step();
        assert_eq!(engine.grid().cell_at(0, 0), Cell::Dead);
        assert_eq!(engine.population(), 0);
    }

    #[test]
    fn blinker_oscillates_with_period_two() {
        let horizontal = vec![(1, 2), (2, 2), (3, 2)];
        let vertical = vec![(2, 1), (2, 2), (2, 3)];
        let mut engine = engine_with(5, 5, &horizontal);

        engine.step();
        assert_eq!(alive(&engine), vertical);

        engine.step();
        assert_eq!(alive(&engine), horizontal);
        assert_eq!(engine.generation(), 2);
    }

    #[test]
    fn block_is_still_life() {
        let block = vec![(1, 1), (2, 1), (1, 2), (2, 2)];
        let mut engine = engine_with(4, 4, &block);

        for _ in 0..3 {
            engine.step();
            assert_eq!(alive(&engine), block);
        }
    }

    #[test]
    fn border_is_not_toroidal() {
        // A blinker lying on the top edge would survive on a torus. Against a
        // dead border it keeps only the middle column and the row below.
        let mut engine = engine_with(5, 5, &[(1, 0), (2, 0), (3, 0)]);
        engine.step();
        assert_eq!(alive(&engine), vec![(2, 0), (2, 1)]);
    }

    //=====================================================================
    // Randomize Tests
    //=====================================================================

    #[test]
    fn randomize_respects_population_bound() {
        let engine = LifeEngine::seeded(42);
        let population = engine.population();

        assert!(population >= 1);
        assert!(population <= GRID_WIDTH * GRID_HEIGHT / 2);
        assert_eq!(engine.generation(), 0);
    }

    #[test]
    fn randomize_twice_gives_two_valid_grids() {
        let mut engine = LifeEngine::seeded(1);
        let first = engine.grid().clone();

        engine.randomize();
        let second = engine.grid().clone();

        for grid in [&first, &second] {
            assert!(grid.population() >= 1);
            assert!(grid.population() <= grid.len() / 2);
        }
        assert_ne!(first, second, "a fresh draw from the same rng should differ");
    }

    #[test]
    fn randomize_resets_generation() {
        let mut engine = LifeEngine::seeded(3);
        engine.step();
        engine.step();
        assert_eq!(engine.generation(), 2);

        engine.randomize();
        assert_eq!(engine.generation(), 0);
    }

    #[test]
    fn same_seed_same_grid() {
        let a = LifeEngine::seeded(99);
        let b = LifeEngine::seeded(99);
        assert_eq!(a.grid(), b.grid());
    }

    #[test]
    fn fixed_update_steps_once() {
        let mut engine = engine_with(5, 5, &[(1, 2), (2, 2), (3, 2)]);
        engine.fixed_update();
        assert_eq!(engine.generation(), 1);
        assert_eq!(alive(&engine), vec![(2, 1), (2, 2), (2, 3)]);
    }
}
