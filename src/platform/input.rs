//! Device input to player intent
//!
//! Touch devices get an on-screen gamepad: its stick and first button drive
//! the player. Everything else uses the keyboard direction and Space.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::settings::Settings;
use crate::sim::PlayerInput;

/// Raw device state polled by the host each frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RawInput {
    /// Arrow/WASD direction, each axis in [-1, 1]
    pub key_direction: Vec2,
    pub space_down: bool,
    pub gamepad_stick: Vec2,
    /// Gamepad button 0
    pub gamepad_jump: bool,
    pub is_touch_device: bool,
}

/// Pick the active device and produce this frame's player intent
pub fn resolve_input(raw: &RawInput, settings: &Settings) -> PlayerInput {
    if settings.use_gamepad(raw.is_touch_device) {
        PlayerInput {
            move_intent: raw.gamepad_stick,
            jump: raw.gamepad_jump,
        }
    } else {
        PlayerInput {
            move_intent: raw.key_direction,
            jump: raw.space_down,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(is_touch_device: bool) -> RawInput {
        RawInput {
            key_direction: Vec2::new(-1.0, 0.0),
            space_down: false,
            gamepad_stick: Vec2::new(0.5, 0.2),
            gamepad_jump: true,
            is_touch_device,
        }
    }

    #[test]
    fn test_keyboard_on_desktop() {
        let input = resolve_input(&raw(false), &Settings::default());
        assert_eq!(input.move_intent, Vec2::new(-1.0, 0.0));
        assert!(!input.jump);
    }

    #[test]
    fn test_gamepad_on_touch() {
        let input = resolve_input(&raw(true), &Settings::default());
        assert_eq!(input.move_intent, Vec2::new(0.5, 0.2));
        assert!(input.jump);
    }

    #[test]
    fn test_forced_gamepad() {
        let settings = Settings {
            force_touch_gamepad: true,
            ..Default::default()
        };
        assert!(resolve_input(&raw(false), &settings).jump);
    }
}
