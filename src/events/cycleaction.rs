//! Event and observer that advance the character to its next action.
//!
//! The input system emits a [`CycleActionEvent`] on every cycle binding
//! (click, space, enter, right arrow); the observer walks the closed action
//! set in order, wrapping from the last action back to the first.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;

use crate::components::animation::Animation;
use crate::components::player::Player;

/// Event used to switch the character to the next action in cycle order.
#[derive(Event, Debug, Clone, Copy)]
pub struct CycleActionEvent {}

/// Observer that advances the player's animation to the next action.
///
/// Switching always restarts the new clip from frame zero; the wrap from
/// the last action to the first is handled by the action table itself.
pub fn cycle_action_observer(
    _trigger: On<CycleActionEvent>,
    mut query: Query<&mut Animation, With<Player>>,
) {
    for mut anim in query.iter_mut() {
        let next = anim.action.next();
        log::debug!("action {} -> {}", anim.action.name(), next.name());
        anim.set_action(next);
    }
}
