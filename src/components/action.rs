//! The closed set of character actions.
//!
//! Each action owns one row of the sprite sheet, in declaration order, and a
//! fixed number of frames in that row. The set is closed on purpose: the
//! viewer cycles through it and it never grows at runtime.

use serde::{Deserialize, Serialize};

/// Number of actions (and sheet rows).
pub const ACTION_COUNT: usize = 7;

/// A named animation cycle. Declaration order matches the sheet row order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Action {
    Idle,
    Walk,
    Run,
    JumpUp,
    JumpDown,
    Throw,
    Die,
}

impl Action {
    /// All actions in cycle (and sheet row) order.
    pub const ALL: [Action; ACTION_COUNT] = [
        Action::Idle,
        Action::Walk,
        Action::Run,
        Action::JumpUp,
        Action::JumpDown,
        Action::Throw,
        Action::Die,
    ];

    /// Sheet row index of this action.
    pub fn row(self) -> usize {
        self as usize
    }

    /// Number of frames in this action's row.
    pub fn frame_count(self) -> usize {
        match self {
            Action::Idle => 5,
            Action::Walk => 8,
            Action::Run => 8,
            Action::JumpUp => 4,
            Action::JumpDown => 4,
            Action::Throw => 6,
            Action::Die => 10,
        }
    }

    /// Cyclic successor; wraps from the last action back to the first.
    pub fn next(self) -> Action {
        Self::ALL[(self.row() + 1) % ACTION_COUNT]
    }

    /// Canonical name, as used in manifests and on the CLI.
    pub fn name(self) -> &'static str {
        match self {
            Action::Idle => "idle",
            Action::Walk => "walk",
            Action::Run => "run",
            Action::JumpUp => "jumpUp",
            Action::JumpDown => "jumpDown",
            Action::Throw => "throw",
            Action::Die => "die",
        }
    }

    /// Parse a canonical name. Unknown names yield `None`; callers keep
    /// their current state.
    pub fn from_name(name: &str) -> Option<Action> {
        Self::ALL.iter().copied().find(|a| a.name() == name)
    }
}
