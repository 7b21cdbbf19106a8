//! Sprite sheet load state and grid layout.
//!
//! The sheet texture itself lives in the texture store under
//! [`SHEET_TEX_KEY`]; these resources carry what the rest of the world needs
//! to know about it without touching GPU handles.

use bevy_ecs::prelude::Resource;
use raylib::prelude::Rectangle;

/// Texture store key of the character sheet.
pub const SHEET_TEX_KEY: &str = "sheet";

/// Load status of the sprite sheet.
///
/// `Pending` before setup runs, `Ready` once the texture is in the store,
/// `Failed` when loading failed. `Failed` is terminal: the viewer stays
/// inert rather than retrying, and update/draw paths treat anything but
/// `Ready` as a no-op.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetState {
    Pending,
    Ready { width: i32, height: i32 },
    Failed,
}

impl SheetState {
    pub fn is_ready(&self) -> bool {
        matches!(self, SheetState::Ready { .. })
    }
}

/// Grid geometry of the sheet plus the on-canvas draw scale.
///
/// One row per action, cells of `frame_width` × `frame_height` pixels.
#[derive(Resource, Debug, Clone, Copy)]
pub struct SheetLayout {
    pub frame_width: f32,
    pub frame_height: f32,
    pub scale: f32,
}

impl SheetLayout {
    /// Source rectangle of a frame cell in sheet pixels.
    pub fn cell_rect(&self, frame: usize, row: usize) -> Rectangle {
        Rectangle {
            x: frame as f32 * self.frame_width,
            y: row as f32 * self.frame_height,
            width: self.frame_width,
            height: self.frame_height,
        }
    }

    /// The same cell scaled into canvas space, for overlay drawing.
    pub fn cell_rect_scaled(&self, frame: usize, row: usize) -> Rectangle {
        let cell = self.cell_rect(frame, row);
        Rectangle {
            x: cell.x * self.scale,
            y: cell.y * self.scale,
            width: cell.width * self.scale,
            height: cell.height * self.scale,
        }
    }
}
