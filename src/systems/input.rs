//! Input system.
//!
//! [`update_input_state`] reads hardware input from Raylib each frame and
//! writes the results into [`crate::resources::input::InputState`]. Cycle
//! bindings emit a [`CycleActionEvent`]; F11 emits a [`SwitchDebugEvent`].
use bevy_ecs::prelude::*;
use raylib::prelude::RaylibHandle;

use crate::events::cycleaction::CycleActionEvent;
use crate::events::switchdebug::SwitchDebugEvent;
use crate::resources::input::{BoolState, InputState};

fn refresh_key(state: &mut BoolState, rl: &RaylibHandle) {
    state.active = rl.is_key_down(state.key_binding);
    state.just_pressed = rl.is_key_pressed(state.key_binding);
    state.just_released = rl.is_key_released(state.key_binding);
}

/// Poll Raylib for keyboard and mouse input and update the `InputState`
/// resource, emitting events on just-pressed edges.
pub fn update_input_state(
    mut input: ResMut<InputState>,
    rl: NonSend<RaylibHandle>,
    mut commands: Commands,
) {
    refresh_key(&mut input.cycle_primary, &rl);
    refresh_key(&mut input.cycle_secondary, &rl);
    refresh_key(&mut input.cycle_arrow, &rl);
    refresh_key(&mut input.mode_debug, &rl);

    input.pointer.active = rl.is_mouse_button_down(input.pointer.button_binding);
    input.pointer.just_pressed = rl.is_mouse_button_pressed(input.pointer.button_binding);

    if input.mode_debug.just_pressed {
        commands.trigger(SwitchDebugEvent {});
    }

    // Any cycle binding advances the character by one action. A press that
    // lands on the same frame as another only advances once per binding,
    // matching one event per pressed edge.
    if input.cycle_primary.just_pressed
        || input.cycle_secondary.just_pressed
        || input.cycle_arrow.just_pressed
        || input.pointer.just_pressed
    {
        commands.trigger(CycleActionEvent {});
    }
}
