//! Animation playback state component.

use bevy_ecs::prelude::Component;
use serde::{Deserialize, Serialize};

use crate::components::action::Action;

/// Per-entity animation playback state.
///
/// Invariant: `frame_index` stays below the frame count of `action`. The
/// animation system wraps it modulo the clip length, and [`set_action`]
/// resets it on every action change.
///
/// [`set_action`]: Animation::set_action
#[derive(Debug, Clone, Component, Serialize, Deserialize)]
pub struct Animation {
    pub action: Action,
    pub frame_index: usize,
    pub elapsed_time: f32,
}

impl Animation {
    pub fn new(action: Action) -> Self {
        Self {
            action,
            frame_index: 0,
            elapsed_time: 0.0,
        }
    }

    /// Switch to `action`, restarting playback from frame zero.
    ///
    /// Setting the action that is already active is a no-op, so callers can
    /// assert the desired action every frame without restarting the cycle.
    pub fn set_action(&mut self, action: Action) {
        if self.action != action {
            self.action = action;
            self.frame_index = 0;
            self.elapsed_time = 0.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_starts_at_frame_zero() {
        let anim = Animation::new(Action::Walk);
        assert_eq!(anim.action, Action::Walk);
        assert_eq!(anim.frame_index, 0);
        assert_eq!(anim.elapsed_time, 0.0);
    }

    #[test]
    fn test_set_action_resets_playback() {
        let mut anim = Animation {
            action: Action::Run,
            frame_index: 5,
            elapsed_time: 0.3,
        };
        anim.set_action(Action::Die);
        assert_eq!(anim.action, Action::Die);
        assert_eq!(anim.frame_index, 0, "frame should reset to 0");
        assert_eq!(anim.elapsed_time, 0.0, "timer should reset to 0.0");
    }

    #[test]
    fn test_set_same_action_keeps_playback() {
        let mut anim = Animation {
            action: Action::Run,
            frame_index: 5,
            elapsed_time: 0.3,
        };
        anim.set_action(Action::Run);
        assert_eq!(anim.frame_index, 5, "frame should not reset");
        assert_eq!(anim.elapsed_time, 0.3, "timer should not reset");
    }
}
