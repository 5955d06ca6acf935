//=========================================================================
// Platform Bridge
//=========================================================================
//
// Bridges the platform layer (winit + pixels) with the core session.
//
// This module defines the contract between platform implementations and
// core logic, so the window backend can be swapped without touching the
// simulation.
//
// Components:
// - `interface`: Event types and error definitions (the contract)
// - `event_collector`: Core-side event draining
//
//=========================================================================

//=== Module Declarations =================================================

pub(crate) mod event_collector;
pub(crate) mod interface;

//=== Internal API ========================================================

pub(crate) use event_collector::EventCollector;
pub use event_collector::TickControl;
pub use interface::PlatformError;
pub(crate) use interface::PlatformEvent;
