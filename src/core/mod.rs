//=========================================================================
// Core
//=========================================================================
//
// Platform-independent simulation logic.
//
// Layering (leaves first):
// ```text
//   grid ──> simulation ──> scheduler
//                 │
//   input ──> session <── platform_bridge
//                 │
//              render
// ```
//
// Nothing in `core` touches the OS. The window, the GPU surface and the
// OS event loop live in the private `platform` module and talk to the
// core through `platform_bridge` and the `render::Canvas` trait.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod config;
pub mod grid;
pub mod input;
pub mod platform_bridge;
pub mod render;
pub mod scheduler;
pub mod simulation;

pub(crate) mod session;

//=== Public API ==========================================================

pub use config::AppMetadata;
pub use grid::{Cell, GridState};
pub use input::{Command, CommandMapper, InputEvent, KeyCode};
pub use platform_bridge::{PlatformError, TickControl};
pub use render::{Canvas, GridRenderer, Rect, Rgba};
pub use scheduler::{FixedStepScheduler, MonotonicClock};
pub use simulation::{next_cell, FixedUpdate, LifeEngine};
