//=========================================================================
// Rendering Contract
//=========================================================================
//
// Platform-independent description of how a grid becomes pixels.
//
// The core only knows how to "clear" and "fill a rectangle" on a
// `Canvas`. The platform layer provides a canvas backed by a real frame
// buffer; tests provide a recording canvas.
//
// Layout:
// ```text
//   cell (x, y) → rect at (x * B, y * B), size (B - 1) × (B - 1)
//   frame       → (W * B) × (H * B)
// ```
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::config::{BACKGROUND, BLOCK_SIZE, FOREGROUND};
use super::grid::GridState;

//=== Rgba ================================================================

/// 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba(pub [u8; 4]);

impl Rgba {
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b, 0xff])
    }
}

//=== Rect ================================================================

/// Axis-aligned pixel rectangle, origin at the top-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

//=== Canvas ==============================================================

/// Minimal drawing surface the grid renderer needs.
pub trait Canvas {
    /// Fills the whole surface with `color`.
    fn clear(&mut self, color: Rgba);

    /// Fills `rect` with `color`. Parts outside the surface are ignored.
    fn fill_rect(&mut self, rect: Rect, color: Rgba);
}

//=== GridRenderer ========================================================

/// Draws alive cells as colored blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridRenderer {
    block_size: u32,
    background: Rgba,
    foreground: Rgba,
}

impl GridRenderer {
    /// # Panics
    ///
    /// Panics if `block_size < 2` (a block needs at least one pixel plus the gap).
    pub fn new(block_size: u32) -> Self {
        assert!(block_size >= 2, "Block size must be at least 2, got {}", block_size);
        Self {
            block_size,
            background: BACKGROUND,
            foreground: FOREGROUND,
        }
    }

    pub fn with_colors(mut self, background: Rgba, foreground: Rgba) -> Self {
        self.background = background;
        self.foreground = foreground;
        self
    }

    pub fn block_size(&self) -> u32 {
        self.block_size
    }

    /// Pixel size of a frame showing the whole grid.
    pub fn frame_size(&self, grid: &GridState) -> (u32, u32) {
        (grid.width() as u32 * self.block_size, grid.height() as u32 * self.block_size)
    }

    /// Pixel rectangle covered by cell `(x, y)`.
    pub fn cell_rect(&self, x: usize, y: usize) -> Rect {
        Rect {
            x: x as u32 * self.block_size,
            y: y as u32 * self.block_size,
            width: self.block_size - 1,
            height: self.block_size - 1,
        }
    }

    /// Clears `canvas` and fills one block per alive cell.
    pub fn draw<C: Canvas + ?Sized>(&self, grid: &GridState, canvas: &mut C) {
        canvas.clear(self.background);
        for (x, y) in grid.alive_cells() {
            canvas.fill_rect(self.cell_rect(x, y), self.foreground);
        }
    }
}

impl Default for GridRenderer {
    fn default() -> Self {
        Self::new(BLOCK_SIZE)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
