//=========================================================================
// Input
//=========================================================================
//
// Keyboard vocabulary and key → command dispatch.
//
// Components:
// - `event`: portable key codes and press/release events
// - `command`: `Command` enum and the `CommandMapper` bindings
//
//=========================================================================

//=== Module Declarations =================================================

pub mod command;
pub mod event;

//=== Public API ==========================================================

pub use command::{Command, CommandMapper};
pub use event::{InputEvent, KeyCode};
