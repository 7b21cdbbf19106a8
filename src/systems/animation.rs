//! Animation system.
//!
//! [`animation`] advances playback based on elapsed time and updates the
//! visible sprite frame.
//!
//! # Animation Flow
//!
//! 1. Clip data is defined in [`AnimationStore`](crate::resources::animationstore::AnimationStore)
//! 2. The player entity has an [`Animation`](crate::components::animation::Animation) component naming an action
//! 3. The `animation` system advances frames based on the clip's `fps` and
//!    writes the [`Sprite`](crate::components::sprite::Sprite) offset
//! 4. Action switches come from the
//!    [`CycleActionEvent`](crate::events::cycleaction::CycleActionEvent) observer
//!
//! While the sheet is not [`SheetState::Ready`], playback is frozen: no
//! time accumulates and no frame advances.

use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

use crate::components::animation::Animation;
use crate::components::sprite::Sprite;
use crate::resources::animationstore::AnimationStore;
use crate::resources::spritesheet::{SheetLayout, SheetState};
use crate::resources::worldtime::WorldTime;

/// Advance animation playback and update the sprite frame.
///
/// Contract
/// - No-op until the sheet resource is ready; a failed load freezes playback
///   permanently.
/// - Accumulates the frame delta; when a full frame interval has elapsed,
///   advances one frame (modulo the clip length for looping clips) and
///   carries the remainder over. At most one frame advances per call, so a
///   long stall slews back to pace instead of skipping frames.
/// - Writes the sheet offset of the current cell into the [`Sprite`].
pub fn animation(
    mut query: Query<(&mut Animation, &mut Sprite)>,
    store: Res<AnimationStore>,
    sheet: Res<SheetState>,
    layout: Res<SheetLayout>,
    time: Res<WorldTime>,
) {
    if !sheet.is_ready() {
        return;
    }
    for (mut anim, mut sprite) in query.iter_mut() {
        let Some(clip) = store.get(anim.action) else {
            continue;
        };

        anim.elapsed_time += time.delta;

        let frame_duration = 1.0 / clip.fps;
        if anim.elapsed_time >= frame_duration {
            anim.elapsed_time -= frame_duration;
            if anim.frame_index + 1 >= clip.frame_count {
                if clip.looped {
                    anim.frame_index = 0;
                }
                // non-looping clips hold the last frame
            } else {
                anim.frame_index += 1;
            }
        }

        let cell = layout.cell_rect(anim.frame_index, clip.row);
        sprite.offset = Vector2 {
            x: cell.x,
            y: cell.y,
        };
    }
}
