//! Input mapping from raw events to semantic actions
//!
//! Maps keyboard input to high-level actions like Exit or ToggleVsync.
//! Mouse drags are NOT mapped here - they go directly to the DividerController.

use winit::event::ElementState;
use winit::keyboard::KeyCode;

/// Actions triggered by key presses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Exit application (Escape)
    Exit,
    /// Start/stop the animation clock (Space)
    ToggleAnimation,
    /// Toggle vertical sync (V)
    ToggleVsync,
}

/// Maps raw keyboard events to semantic actions
pub struct InputMapper;

impl InputMapper {
    /// Map keyboard input to an action
    ///
    /// Returns `Some(action)` for bound keys on press, `None` otherwise
    pub fn map_keyboard(key: KeyCode, state: ElementState, repeat: bool) -> Option<InputAction> {
        // Only handle fresh key presses, not releases or auto-repeat
        if state != ElementState::Pressed || repeat {
            return None;
        }

        match key {
            KeyCode::Escape => Some(InputAction::Exit),
            KeyCode::Space => Some(InputAction::ToggleAnimation),
            KeyCode::KeyV => Some(InputAction::ToggleVsync),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_exits() {
        let action = InputMapper::map_keyboard(KeyCode::Escape, ElementState::Pressed, false);
        assert_eq!(action, Some(InputAction::Exit));
    }

    #[test]
    fn test_bound_keys() {
        assert_eq!(
            InputMapper::map_keyboard(KeyCode::Space, ElementState::Pressed, false),
            Some(InputAction::ToggleAnimation)
        );
        assert_eq!(
            InputMapper::map_keyboard(KeyCode::KeyV, ElementState::Pressed, false),
            Some(InputAction::ToggleVsync)
        );
    }

    #[test]
    fn test_unbound_keys_not_mapped() {
        for key in [KeyCode::KeyW, KeyCode::KeyA, KeyCode::KeyR, KeyCode::Enter] {
            let action = InputMapper::map_keyboard(key, ElementState::Pressed, false);
            assert_eq!(action, None, "Key {:?} should not be mapped", key);
        }
    }

    #[test]
    fn test_key_release_ignored() {
        let action = InputMapper::map_keyboard(KeyCode::Space, ElementState::Released, false);
        assert_eq!(action, None);
    }

    #[test]
    fn test_key_repeat_ignored() {
        // Holding space must not flicker the animation on and off
        let action = InputMapper::map_keyboard(KeyCode::Space, ElementState::Pressed, true);
        assert_eq!(action, None);
    }
}
