//=========================================================================
// Command Mapper
//=========================================================================
//
// Maps key presses to simulation commands.
//
// Architecture:
//   KeyDown(key) → HashMap<KeyCode, Command> → Command
//
// Only key presses resolve. Releases and unbound keys are no-ops.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;

//=== Internal Dependencies ===============================================

use super::event::{InputEvent, KeyCode};

//=== Command =============================================================

/// High-level request the session understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Leave the run loop.
    Quit,

    /// Reseed the grid, keeping its size and the scheduler timing.
    Restart,
}

//=== CommandMapper =======================================================

/// Key → command bindings.
#[derive(Debug, Clone)]
pub struct CommandMapper {
    bindings: HashMap<KeyCode, Command>,
}

impl CommandMapper {
    /// Creates a mapper with no bindings.
    pub fn empty() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    /// Creates a mapper with the stock bindings: Escape/Q quit, R restarts.
    pub fn new() -> Self {
        let mut mapper = Self::empty();
        mapper.bind_key(KeyCode::Escape, Command::Quit);
        mapper.bind_key(KeyCode::KeyQ, Command::Quit);
        mapper.bind_key(KeyCode::KeyR, Command::Restart);
        mapper
    }

    //--- Binding API ------------------------------------------------------

    /// Binds `key` to `command`, replacing any previous binding of `key`.
    pub fn bind_key(&mut self, key: KeyCode, command: Command) {
        self.bindings.insert(key, command);
    }

    /// Removes the binding of `key`, if any.
    pub fn unbind_key(&mut self, key: KeyCode) {
        self.bindings.remove(&key);
    }

    pub fn binding(&self, key: KeyCode) -> Option<Command> {
        self.bindings.get(&key).copied()
    }

    //--- Event Mapping ----------------------------------------------------

    /// Maps an input event to a command (key presses only).
    pub fn map_event(&self, event: &InputEvent) -> Option<Command> {
        match event {
            InputEvent::KeyDown { key } => self.binding(*key),
            InputEvent::KeyUp { .. } => None,
        }
    }
}

impl Default for CommandMapper {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
