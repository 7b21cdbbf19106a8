//! World setup.
//!
//! Loads the sprite sheet, builds the clip registry and spawns the one
//! character entity. Runs once before the main loop starts.

use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::action::Action;
use crate::components::animation::Animation;
use crate::components::mapposition::MapPosition;
use crate::components::player::Player;
use crate::components::sprite::Sprite;
use crate::components::zindex::ZIndex;
use crate::resources::animationstore::AnimationStore;
use crate::resources::screensize::ScreenSize;
use crate::resources::spritesheet::{SHEET_TEX_KEY, SheetLayout, SheetState};
use crate::resources::texturestore::TextureStore;
use crate::resources::viewerconfig::ViewerConfig;

/// Load assets and populate the world.
///
/// The sheet load resolves the [`SheetState`] tri-state exactly once: a
/// failure is logged and latched, leaving the viewer inert rather than
/// panicking or retrying.
pub fn setup(world: &mut World, start_action: Action) {
    let config = world.resource::<ViewerConfig>().clone();

    let store = match &config.manifest_path {
        Some(path) => match AnimationStore::load_manifest(path) {
            Ok(store) => {
                log::info!("clip manifest loaded from {}", path.display());
                store
            }
            Err(e) => {
                log::warn!("{e}; using built-in clips");
                AnimationStore::builtin()
            }
        },
        None => AnimationStore::builtin(),
    };
    world.insert_resource(store);

    let mut rl = world
        .remove_non_send_resource::<RaylibHandle>()
        .expect("raylib handle missing from world");
    let thread = world
        .remove_non_send_resource::<RaylibThread>()
        .expect("raylib thread missing from world");

    let sheet_path = config.sheet_path.to_string_lossy().into_owned();
    match rl.load_texture(&thread, &sheet_path) {
        Ok(texture) => {
            let (width, height) = (texture.width, texture.height);
            world
                .non_send_resource_mut::<TextureStore>()
                .insert(SHEET_TEX_KEY, texture);
            world.insert_resource(SheetState::Ready { width, height });
            log::info!("sprite sheet {} loaded ({}x{} px)", sheet_path, width, height);
            warn_on_undersized_sheet(world, width, height);
        }
        Err(e) => {
            log::error!("failed to load sprite sheet {}: {}", sheet_path, e);
            world.insert_resource(SheetState::Failed);
        }
    }

    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);

    spawn_player(world, start_action);
}

/// Log a warning for every clip whose frames fall outside the loaded sheet.
/// Drawing still works (the source rect just samples transparent space), so
/// this is diagnostic only.
fn warn_on_undersized_sheet(world: &World, width: i32, height: i32) {
    let store = world.resource::<AnimationStore>();
    let layout = world.resource::<SheetLayout>();
    for action in Action::ALL {
        if let Some(clip) = store.get(action) {
            let needed_w = clip.frame_count as f32 * layout.frame_width;
            let needed_h = (clip.row + 1) as f32 * layout.frame_height;
            if needed_w > width as f32 || needed_h > height as f32 {
                log::warn!(
                    "sheet too small for '{}': {} frames on row {} need {}x{} px",
                    action.name(),
                    clip.frame_count,
                    clip.row,
                    needed_w,
                    needed_h
                );
            }
        }
    }
}

/// Spawn the character entity: bottom-center of the canvas, pivot at the
/// feet, showing the first frame of `start_action`.
pub fn spawn_player(world: &mut World, start_action: Action) {
    let layout = *world.resource::<SheetLayout>();
    let screen = *world.resource::<ScreenSize>();

    let first_cell = layout.cell_rect(0, start_action.row());
    world.spawn((
        Player,
        MapPosition::new(screen.w as f32 * 0.5, screen.h as f32),
        ZIndex(0),
        Sprite {
            tex_key: SHEET_TEX_KEY.into(),
            width: layout.frame_width,
            height: layout.frame_height,
            offset: Vector2 {
                x: first_cell.x,
                y: first_cell.y,
            },
            // pivot at the feet of the character
            origin: Vector2 {
                x: layout.frame_width * 0.5,
                y: layout.frame_height,
            },
        },
        Animation::new(start_action),
    ));
}
