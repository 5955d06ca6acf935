//=========================================================================
// Input Buffer
//
// Collects translated key events between two frame boundaries.
//
// Responsibilities:
// - Store incoming key events in arrival order
// - Drop a key event identical to the one right before it (OS repeat
//   bursts within a single frame)
// - Hand the batch over once per frame via `drain()`
//
// The buffer lives on the platform side and is emptied every time the
// run loop flushes it into the bridge channel.
//=========================================================================

//=== Internal Modules ====================================================

use crate::core::input::InputEvent;

//=== InputBuffer =========================================================

pub(crate) struct InputBuffer {
    events: Vec<InputEvent>,
}

impl InputBuffer {
    pub(crate) fn new() -> Self {
        const BASE_CAPACITY: usize = 32;

        Self {
            events: Vec::with_capacity(BASE_CAPACITY),
        }
    }

    /// Appends an event unless it repeats the previous one.
    pub(crate) fn push(&mut self, event: InputEvent) {
        if self.events.last() != Some(&event) {
            self.events.push(event);
        }
    }

    /// Takes the buffered batch, or `None` when nothing arrived.
    pub(crate) fn drain(&mut self) -> Option<Vec<InputEvent>> {
        if self.events.is_empty() {
            return None;
        }
        Some(std::mem::take(&mut self.events))
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
