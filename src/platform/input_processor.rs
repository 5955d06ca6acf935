//=========================================================================
// Input Processor
//=========================================================================
//
// Converts Winit keyboard events into engine InputEvents.
//
// Architecture:
//   Winit KeyEvent → translate_key_event → InputEvent → InputBuffer
//
// Keys without a physical code, or outside the engine's KeyCode set,
// are filtered (returns None).
//
//=========================================================================

//=== External Dependencies ===============================================

use winit::{
    event::{ElementState, KeyEvent},
    keyboard::{KeyCode as WinitKeyCode, PhysicalKey},
};

//=== Internal Dependencies ===============================================

use crate::core::input::{InputEvent, KeyCode};

//=== Event Processing ====================================================

/// Converts a Winit KeyEvent to an InputEvent (filters unmapped keys).
pub(crate) fn translate_key_event(key_event: &KeyEvent) -> Option<InputEvent> {
    let key = match key_event.physical_key {
        PhysicalKey::Code(code) => KeyCode::from(code),
        PhysicalKey::Unidentified(_) => return None,
    };

    key_input_event(key, key_event.state)
}

fn key_input_event(key: KeyCode, state: ElementState) -> Option<InputEvent> {
    if key == KeyCode::Unidentified {
        return None;
    }

    Some(match state {
        ElementState::Pressed => InputEvent::KeyDown { key },
        ElementState::Released => InputEvent::KeyUp { key },
    })
}

//=========================================================================
// Winit Conversions
//=========================================================================

/// Converts Winit physical key codes to engine key codes.
///
/// Maps A-Z, Space, Enter and Escape. Everything else becomes
/// `KeyCode::Unidentified`.
impl From<WinitKeyCode> for KeyCode {
    fn from(code: WinitKeyCode) -> Self {
        use WinitKeyCode::*;
        match code {
            //--- Letters ------------------------------------------------------

            KeyA => KeyCode::KeyA, KeyB => KeyCode::KeyB, KeyC => KeyCode::KeyC,
            KeyD => KeyCode::KeyD, KeyE => KeyCode::KeyE, KeyF => KeyCode::KeyF,
            KeyG => KeyCode::KeyG, KeyH => KeyCode::KeyH, KeyI => KeyCode::KeyI,
            KeyJ => KeyCode::KeyJ, KeyK => KeyCode::KeyK, KeyL => KeyCode::KeyL,
            KeyM => KeyCode::KeyM, KeyN => KeyCode::KeyN, KeyO => KeyCode::KeyO,
            KeyP => KeyCode::KeyP, KeyQ => KeyCode::KeyQ, KeyR => KeyCode::KeyR,
            KeyS => KeyCode::KeyS, KeyT => KeyCode::KeyT, KeyU => KeyCode::KeyU,
            KeyV => KeyCode::KeyV, KeyW => KeyCode::KeyW, KeyX => KeyCode::KeyX,
            KeyY => KeyCode::KeyY, KeyZ => KeyCode::KeyZ,

            //--- Special ------------------------------------------------------

            Space => KeyCode::Space,
            Enter => KeyCode::Enter,
            Escape => KeyCode::Escape,

            _ => KeyCode::Unidentified,
        }
    }
}

//=========================================================================
// Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keycode_conversion_command_keys() {
        assert_eq!(KeyCode::from(WinitKeyCode::Escape), KeyCode::Escape);
        assert_eq!(KeyCode::from(WinitKeyCode::KeyQ), KeyCode::KeyQ);
        assert_eq!(KeyCode::from(WinitKeyCode::KeyR), KeyCode::KeyR);
    }

    #[test]
    fn keycode_conversion_unmapped() {
        assert_eq!(KeyCode::from(WinitKeyCode::F13), KeyCode::Unidentified);
        assert_eq!(KeyCode::from(WinitKeyCode::ArrowUp), KeyCode::Unidentified);
    }

    #[test]
    fn pressed_becomes_key_down() {
        assert_eq!(
            key_input_event(KeyCode::KeyR, ElementState::Pressed),
            Some(InputEvent::KeyDown { key: KeyCode::KeyR })
        );
    }

    #[test]
    fn released_becomes_key_up() {
        assert_eq!(
            key_input_event(KeyCode::Escape, ElementState::Released),
            Some(InputEvent::KeyUp { key: KeyCode::Escape })
        );
    }

    #[test]
    fn unidentified_keys_are_filtered() {
        assert_eq!(key_input_event(KeyCode::Unidentified, ElementState::Pressed), None);
    }
}
