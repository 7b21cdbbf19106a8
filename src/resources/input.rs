//! Per-frame input resource.
//!
//! Captures the subset of keyboard and mouse state the viewer cares about
//! and exposes it to systems via the [`InputState`] resource. Every cycle
//! binding (space, enter, right arrow, left mouse button) advances the
//! character to its next action; F11 toggles the debug overlays.

use bevy_ecs::prelude::*;
use raylib::prelude::*;

/// Boolean key state with an associated keyboard binding.
#[derive(Debug, Clone, Copy)]
pub struct BoolState {
    /// Whether the key is currently held this frame.
    pub active: bool,
    /// Whether the key was just pressed this frame.
    pub just_pressed: bool,
    /// Whether the key was just released this frame.
    pub just_released: bool,

    /// The key bound to this action.
    pub key_binding: KeyboardKey,
}

impl BoolState {
    fn bound_to(key: KeyboardKey) -> Self {
        Self {
            active: false,
            just_pressed: false,
            just_released: false,
            key_binding: key,
        }
    }
}

impl Default for BoolState {
    fn default() -> Self {
        Self::bound_to(KeyboardKey::KEY_NULL)
    }
}

/// Mouse button state with its binding.
#[derive(Debug, Clone, Copy)]
pub struct PointerState {
    pub active: bool,
    pub just_pressed: bool,
    pub button_binding: MouseButton,
}

impl Default for PointerState {
    fn default() -> Self {
        Self {
            active: false,
            just_pressed: false,
            button_binding: MouseButton::MOUSE_BUTTON_LEFT,
        }
    }
}

/// Resource capturing the per-frame input state relevant to the viewer.
#[derive(Resource, Debug, Clone)]
pub struct InputState {
    /// Space: cycle to the next action.
    pub cycle_primary: BoolState,
    /// Enter: cycle to the next action.
    pub cycle_secondary: BoolState,
    /// Right arrow: cycle to the next action.
    pub cycle_arrow: BoolState,
    /// F11: toggle debug overlays.
    pub mode_debug: BoolState,
    /// Left mouse button: cycle to the next action.
    pub pointer: PointerState,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            cycle_primary: BoolState::bound_to(KeyboardKey::KEY_SPACE),
            cycle_secondary: BoolState::bound_to(KeyboardKey::KEY_ENTER),
            cycle_arrow: BoolState::bound_to(KeyboardKey::KEY_RIGHT),
            mode_debug: BoolState::bound_to(KeyboardKey::KEY_F11),
            pointer: PointerState::default(),
        }
    }
}
