//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use life_engine::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Engine facade
pub use crate::engine::{Engine, EngineBuilder, EngineError};

// Simulation core
pub use crate::core::grid::{Cell, GridState};
pub use crate::core::scheduler::{FixedStepScheduler, MonotonicClock};
pub use crate::core::simulation::{FixedUpdate, LifeEngine};

// Input
pub use crate::core::input::{Command, CommandMapper, InputEvent, KeyCode};

// Rendering contract
pub use crate::core::render::{Canvas, GridRenderer, Rect, Rgba};
