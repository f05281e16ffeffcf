//! Input mapping from raw events to semantic actions
//!
//! Maps key presses to scene events and window actions.
//! Zoom keys (Z, X) are NOT mapped here - they are held keys and go directly
//! to the ZoomController.

use winit::event::ElementState;
use winit::keyboard::KeyCode;

use poly4d_core::SceneEvent;

/// Actions triggered by a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Change the scene state (Space, Right, Left, M)
    Scene(SceneEvent),
    /// Toggle fullscreen mode (F key)
    ToggleFullscreen,
    /// Exit application (Escape)
    Exit,
}

/// Maps raw input events to semantic actions
pub struct InputMapper;

impl InputMapper {
    /// Map keyboard input to an action
    ///
    /// Returns `Some(action)` for mapped keys, `None` for everything else
    /// including held-key input and key releases
    pub fn map_keyboard(key: KeyCode, state: ElementState) -> Option<InputAction> {
        // Only handle key presses, not releases
        if state != ElementState::Pressed {
            return None;
        }

        match key {
            KeyCode::Space => Some(InputAction::Scene(SceneEvent::AdvanceScene)),
            KeyCode::ArrowRight => Some(InputAction::Scene(SceneEvent::AdvanceAxis)),
            KeyCode::ArrowLeft => Some(InputAction::Scene(SceneEvent::RetreatAxis)),
            KeyCode::KeyM => Some(InputAction::Scene(SceneEvent::ToggleRotationMode)),
            KeyCode::KeyF => Some(InputAction::ToggleFullscreen),
            KeyCode::Escape => Some(InputAction::Exit),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scene_keys() {
        assert_eq!(
            InputMapper::map_keyboard(KeyCode::Space, ElementState::Pressed),
            Some(InputAction::Scene(SceneEvent::AdvanceScene))
        );
        assert_eq!(
            InputMapper::map_keyboard(KeyCode::ArrowRight, ElementState::Pressed),
            Some(InputAction::Scene(SceneEvent::AdvanceAxis))
        );
        assert_eq!(
            InputMapper::map_keyboard(KeyCode::ArrowLeft, ElementState::Pressed),
            Some(InputAction::Scene(SceneEvent::RetreatAxis))
        );
        assert_eq!(
            InputMapper::map_keyboard(KeyCode::KeyM, ElementState::Pressed),
            Some(InputAction::Scene(SceneEvent::ToggleRotationMode))
        );
    }

    #[test]
    fn test_window_keys() {
        assert_eq!(
            InputMapper::map_keyboard(KeyCode::KeyF, ElementState::Pressed),
            Some(InputAction::ToggleFullscreen)
        );
        assert_eq!(
            InputMapper::map_keyboard(KeyCode::Escape, ElementState::Pressed),
            Some(InputAction::Exit)
        );
    }

    #[test]
    fn test_zoom_keys_not_mapped() {
        // Z/X should return None (handled by the zoom controller)
        for key in [KeyCode::KeyZ, KeyCode::KeyX] {
            let action = InputMapper::map_keyboard(key, ElementState::Pressed);
            assert_eq!(action, None, "Key {:?} should not be mapped", key);
        }
    }

    #[test]
    fn test_key_release_ignored() {
        for key in [KeyCode::Space, KeyCode::Escape, KeyCode::ArrowLeft] {
            assert_eq!(InputMapper::map_keyboard(key, ElementState::Released), None);
        }
    }
}
