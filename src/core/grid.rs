//=========================================================================
// Grid State
//=========================================================================
//
// Double-buffered cell storage for the Life simulation.
//
// Architecture:
// ```text
//   current ──read──> neighbor lookup ──rule──> scratch
//      ↑                                          │
//      └──────────────── swap ────────────────────┘
// ```
//
// `current` is the only buffer observers ever see. `scratch` is reset and
// fully written during `advance()` and becomes `current` only once the
// whole generation has been computed.
//
// Border: coordinates outside the grid read as `Cell::Dead`. The grid is
// clamped, not toroidal.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::config::{GRID_HEIGHT, GRID_WIDTH};

//=== Cell ================================================================

/// State of a single grid cell, stored as one byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Cell {
    #[default]
    Dead = 0,
    Alive = 1,
}

impl Cell {
    #[inline]
    pub fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }
}

//=== Moore Neighborhood ==================================================

const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1,  0),          (1,  0),
    (-1,  1), (0,  1), (1,  1),
];

//=== GridState ===========================================================

/// Two equally sized cell buffers plus bounds-safe lookup.
///
/// Cells are stored row-major: index = `x + y * width`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridState {
    width: usize,
    height: usize,
    current: Vec<Cell>,
    scratch: Vec<Cell>,
}

impl GridState {
    //--- Construction -----------------------------------------------------

    /// Creates an all-dead grid of the given size.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn new(width: usize, height: usize) -> Self {
        assert!(width > 0 && height > 0, "Grid dimensions must be positive, got {}x{}", width, height);

        let len = width * height;
        Self {
            width,
            height,
            current: vec![Cell::Dead; len],
            scratch: vec![Cell::Dead; len],
        }
    }

    //--- Dimensions -------------------------------------------------------

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells (`width * height`).
    pub fn len(&self) -> usize {
        self.current.len()
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_empty()
    }

    //--- Reads ------------------------------------------------------------

    /// Returns the cell at `(x, y)`, or `Cell::Dead` outside the grid.
    ///
    /// Off-grid queries are a normal part of neighbor counting along the
    /// border, so there is no error path.
    #[inline]
    pub fn cell_at(&self, x: isize, y: isize) -> Cell {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return Cell::Dead;
        }
        self.current[x as usize + y as usize * self.width]
    }

    /// Counts alive cells among the 8 Moore neighbors of `(x, y)`.
    pub fn live_neighbors(&self, x: isize, y: isize) -> u8 {
        NEIGHBOR_OFFSETS
            .iter()
            .filter(|(dx, dy)| self.cell_at(x + dx, y + dy).is_alive())
            .count() as u8
    }

    /// Number of alive cells in the current generation.
    pub fn population(&self) -> usize {
        self.current.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Iterates over the coordinates of alive cells in row-major order.
    pub fn alive_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let width = self.width;
        self.current
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_alive())
            .map(move |(index, _)| (index % width, index / width))
    }

    //--- Writes -----------------------------------------------------------

    /// Writes `cell` at `(x, y)` in the current generation.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` lies outside the grid. Coordinates passed here are
    /// always produced by the engine itself.
    pub fn set_cell(&mut self, x: usize, y: usize, cell: Cell) {
        assert!(
            x < self.width && y < self.height,
            "Cell ({}, {}) outside {}x{} grid",
            x,
            y,
            self.width,
            self.height
        );
        self.current[x + y * self.width] = cell;
    }

    /// Writes `cell` at a row-major index.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    pub(crate) fn set_index(&mut self, index: usize, cell: Cell) {
        self.current[index] = cell;
    }

    /// Marks every cell of the current generation dead.
    pub fn clear(&mut self) {
        self.current.fill(Cell::Dead);
    }

    //--- Generation Commit ------------------------------------------------

    /// Computes the next generation into `scratch` and swaps it in.
    ///
    /// `rule` receives the current cell and its live neighbor count. It is
    /// only consulted for counts that can change a dead default: the scratch
    /// buffer starts all dead, and any `None` leaves the cell dead.
    pub(crate) fn advance<F>(&mut self, rule: F)
    where
        F: Fn(Cell, u8) -> Option<Cell>,
    {
        self.scratch.fill(Cell::Dead);

        for y in 0..self.height {
            for x in 0..self.width {
                let (ix, iy) = (x as isize, y as isize);
                let neighbors = self.live_neighbors(ix, iy);
                if let Some(next) = rule(self.cell_at(ix, iy), neighbors) {
                    self.scratch[x + y * self.width] = next;
                }
            }
        }

        std::mem::swap(&mut self.current, &mut self.scratch);
    }
}

impl Default for GridState {
    /// A dead grid of the application's fixed dimensions.
    fn default() -> Self {
        Self::new(GRID_WIDTH, GRID_HEIGHT)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
