//=========================================================================
// Configuration Constants
//=========================================================================
//
// Fixed parameters of the simulation and its presentation.
//
// Grid dimensions and the Life rule are compile-time constants. Timing,
// block size and key bindings have defaults here but can be overridden
// through `EngineBuilder`.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::render::Rgba;

//=== Grid ================================================================

/// Number of cell columns.
pub const GRID_WIDTH: usize = 24;

/// Number of cell rows.
pub const GRID_HEIGHT: usize = 18;

//=== Timing ==============================================================

/// Wall-clock duration of one generation, in milliseconds.
pub const STEP_INTERVAL_MS: u64 = 250;

/// Upper bound on how long the run loop waits for OS events per frame.
pub const FRAME_TIMEOUT_MS: u64 = 16;

//=== Presentation ========================================================

/// Edge length of one cell on screen, in pixels (includes a 1px gap).
pub const BLOCK_SIZE: u32 = 24;

/// Frame clear color.
pub const BACKGROUND: Rgba = Rgba::opaque(96, 96, 96);

/// Fill color of alive cells.
pub const FOREGROUND: Rgba = Rgba::opaque(255, 255, 0);

/// Title of the OS window.
pub const WINDOW_TITLE: &str = "Game of Life";

//=== AppMetadata =========================================================

/// Descriptive application metadata, reported once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppMetadata {
    pub name: &'static str,
    pub version: &'static str,
    pub identifier: &'static str,
    pub url: &'static str,
    pub creator: &'static str,
    pub copyright: &'static str,
    pub kind: &'static str,
}

impl AppMetadata {
    pub const DEFAULT: Self = Self {
        name: "Game of life",
        version: "1.0",
        identifier: "org.bitstorm.gameoflife",
        url: "https://badge.why2025.org/",
        creator: "Badge team",
        copyright: "MIT",
        kind: "game",
    };
}

impl Default for AppMetadata {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl std::fmt::Display for AppMetadata {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} ({}) by {} [{}, {}] {}",
            self.name, self.version, self.identifier, self.creator, self.kind, self.copyright, self.url
        )
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
