//! Render path.
//!
//! Each frame the scene is composed into the fixed-resolution
//! [`RenderTarget`] and then blitted to the window with aspect-preserving
//! letterbox scaling. Point filtering on the target keeps the pixel art
//! crisp at any window size or DPI scale; the letterbox rectangle is
//! recomputed every frame from the polled window size.
//!
//! Scene pass order: clear, faint full-sheet reference, active-frame
//! outline, then the z-sorted sprite blit. The sheet reference and the
//! outline only appear while [`DebugMode`] is present.

use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::animation::Animation;
use crate::components::mapposition::MapPosition;
use crate::components::player::Player;
use crate::components::sprite::Sprite;
use crate::components::zindex::ZIndex;
use crate::resources::debugmode::DebugMode;
use crate::resources::rendertarget::RenderTarget;
use crate::resources::spritesheet::{SHEET_TEX_KEY, SheetLayout, SheetState};
use crate::resources::texturestore::TextureStore;
use crate::resources::windowsize::WindowSize;

/// Compose one frame: scene pass into the render target, letterboxed blit
/// to the window, debug text overlay.
///
/// Takes the raylib handles out of the world for the duration of the draw
/// so the scene pass can still query entities.
pub fn render_frame(world: &mut World) {
    let mut rl = world
        .remove_non_send_resource::<RaylibHandle>()
        .expect("raylib handle missing from world");
    let thread = world
        .remove_non_send_resource::<RaylibThread>()
        .expect("raylib thread missing from world");
    let mut target = world
        .remove_non_send_resource::<RenderTarget>()
        .expect("render target missing from world");

    {
        let mut d = rl.begin_drawing(&thread);
        {
            let mut dt = d.begin_texture_mode(&thread, &mut target.texture);
            draw_scene(world, &mut dt);
        }

        d.clear_background(Color::BLACK);
        let dest = world
            .resource::<WindowSize>()
            .calculate_letterbox(target.canvas_width, target.canvas_height);
        d.draw_texture_pro(
            &target,
            target.source_rect(),
            dest,
            Vector2::zero(),
            0.0,
            Color::WHITE,
        );
        draw_debug_ui(world, &mut d);
    }

    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);
    world.insert_non_send_resource(target);
}

/// Draw the canvas contents. `d` is the texture-mode handle of the render
/// target, so all coordinates here are canvas coordinates.
fn draw_scene<D: RaylibDraw>(world: &mut World, d: &mut D) {
    let layout = *world.resource::<SheetLayout>();
    let sheet = *world.resource::<SheetState>();
    let debug = world.contains_resource::<DebugMode>();

    let active_cell: Option<(usize, usize)> = {
        let mut q = world.query_filtered::<&Animation, With<Player>>();
        q.iter(world)
            .next()
            .map(|a| (a.frame_index, a.action.row()))
    };

    // Collect and z-sort first; the texture store borrow below would
    // otherwise conflict with the query.
    let mut to_draw: Vec<(Sprite, MapPosition, ZIndex)> = {
        let mut q = world.query::<(&Sprite, &MapPosition, &ZIndex)>();
        q.iter(world).map(|(s, p, z)| (s.clone(), *p, *z)).collect()
    };
    to_draw.sort_by_key(|(_, _, z)| *z);

    let textures = world.non_send_resource::<TextureStore>();

    d.clear_background(Color::new(40, 40, 44, 255));

    // Faint full-sheet reference behind the live sprite
    if debug && sheet.is_ready() {
        if let Some(tex) = textures.get(SHEET_TEX_KEY) {
            let src = Rectangle {
                x: 0.0,
                y: 0.0,
                width: tex.width as f32,
                height: tex.height as f32,
            };
            let dest = Rectangle {
                x: 0.0,
                y: 0.0,
                width: tex.width as f32 * layout.scale,
                height: tex.height as f32 * layout.scale,
            };
            d.draw_texture_pro(
                tex,
                src,
                dest,
                Vector2::zero(),
                0.0,
                Color::new(255, 255, 255, 51), // 20% opacity
            );
        }
    }

    // Outline the cell the animation is currently sampling
    if debug {
        if let Some((frame, row)) = active_cell {
            d.draw_rectangle_lines_ex(layout.cell_rect_scaled(frame, row), 3.0, Color::RED);
        }
    }

    for (sprite, pos, _z) in to_draw.iter() {
        if let Some(tex) = textures.get(sprite.tex_key.as_str()) {
            // Source rect selects a frame from the sprite sheet
            let src = Rectangle {
                x: sprite.offset.x,
                y: sprite.offset.y,
                width: sprite.width,
                height: sprite.height,
            };

            // Destination rect places the sprite so that MapPosition is the
            // pivot (origin), both scaled into canvas space
            let dest = Rectangle {
                x: pos.pos.x,
                y: pos.pos.y,
                width: sprite.width * layout.scale,
                height: sprite.height * layout.scale,
            };
            let origin = Vector2 {
                x: sprite.origin.x * layout.scale,
                y: sprite.origin.y * layout.scale,
            };

            d.draw_texture_pro(tex, src, dest, origin, 0.0, Color::WHITE);
        }
    }
}

/// Text overlay drawn in window coordinates, on top of the letterboxed
/// canvas.
fn draw_debug_ui(world: &mut World, d: &mut RaylibDrawHandle) {
    if !world.contains_resource::<DebugMode>() {
        return;
    }
    let sheet = *world.resource::<SheetState>();
    let window = *world.resource::<WindowSize>();

    let status = match sheet {
        SheetState::Pending => "loading",
        SheetState::Ready { .. } => "ready",
        SheetState::Failed => "load failed",
    };

    let active: Option<(&'static str, usize, usize)> = {
        let mut q = world.query_filtered::<&Animation, With<Player>>();
        q.iter(world)
            .next()
            .map(|a| (a.action.name(), a.frame_index, a.action.frame_count()))
    };

    let fps = d.get_fps();
    let line = match active {
        Some((name, frame, count)) => {
            format!("{} [{}/{}] | sheet {} | FPS: {}", name, frame + 1, count, status, fps)
        }
        None => format!("sheet {} | FPS: {}", status, fps),
    };
    d.draw_text(&line, 10, 10, 10, Color::RAYWHITE);
    d.draw_text(
        "click/space/enter/right: next action | F11: overlays",
        10,
        window.h - 20,
        10,
        Color::GRAY,
    );
}
