//=========================================================================
// Life Engine — Library Root
//
// A real-time Game of Life simulator: a 24x18 clamped grid stepped on a
// fixed wall-clock cadence and drawn as colored blocks in a window.
//
// Responsibilities:
// - Expose the engine facade (`EngineBuilder`, `Engine`)
// - Expose the platform-independent simulation core (`core`)
// - Keep the window/GPU integration (`platform`) private
//
// Typical usage:
// ```no_run
// use life_engine::EngineBuilder;
//
// fn main() {
//     EngineBuilder::new().build().run().expect("engine failed");
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` holds the grid, the Life rule, the fixed-step scheduler, input
// dispatch and the rendering contract. None of it depends on a window, so
// it can be driven and tested headless.
//
pub mod core;
pub mod prelude;

//--- Internal Modules ----------------------------------------------------
//
// `platform` owns the Winit window and the Pixels surface. It is not part
// of the public API.
//
// `engine` defines the builder and the run loop.
//
mod engine;
mod platform;

//--- Public Exports ------------------------------------------------------

pub use engine::{Engine, EngineBuilder, EngineError};
