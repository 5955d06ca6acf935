//=========================================================================
// Input Event Types
//
// Engine-side representation of keyboard input.
//
// This module abstracts away platform-specific input (e.g. Winit) into
// a small, portable vocabulary. The platform layer converts OS events
// into `InputEvent`s; the command mapper turns them into `Command`s.
//
// Event Flow:
// ```text
// Platform Layer (Winit)
//         ↓
//    InputEvent (this module)
//         ↓
//    CommandMapper
//         ↓
//    Command (Quit / Restart)
// ```
//
//=========================================================================

//=== KeyCode =============================================================

/// Physical keyboard key identifier.
///
/// Represents the physical key location, not the character produced.
/// `KeyQ` is the same physical key on QWERTY and AZERTY layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    //--- Alphabetic Keys --------------------------------------------------

    KeyA, KeyB, KeyC, KeyD, KeyE, KeyF, KeyG, KeyH, KeyI,
    KeyJ, KeyK, KeyL, KeyM, KeyN, KeyO, KeyP, KeyQ, KeyR,
    KeyS, KeyT, KeyU, KeyV, KeyW, KeyX, KeyY, KeyZ,

    //--- Special Keys -----------------------------------------------------

    Space,
    Enter,
    Escape,

    /// Any key the platform reports that is not listed above.
    Unidentified,
}

//=== InputEvent ==========================================================

/// Discrete keyboard event from the platform layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputEvent {
    KeyDown { key: KeyCode },
    KeyUp { key: KeyCode },
}

impl InputEvent {
    pub fn key(&self) -> KeyCode {
        match *self {
            InputEvent::KeyDown { key } | InputEvent::KeyUp { key } => key,
        }
    }

    pub fn is_press(&self) -> bool {
        matches!(self, InputEvent::KeyDown { .. })
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_accessor_covers_both_directions() {
        assert_eq!(InputEvent::KeyDown { key: KeyCode::KeyR }.key(), KeyCode::KeyR);
        assert_eq!(InputEvent::KeyUp { key: KeyCode::Escape }.key(), KeyCode::Escape);
    }

    #[test]
    fn press_and_release_differ() {
        let down = InputEvent::KeyDown { key: KeyCode::KeyQ };
        let up = InputEvent::KeyUp { key: KeyCode::KeyQ };
        assert!(down.is_press());
        assert!(!up.is_press());
        assert_ne!(down, up);
    }
}
