//! Window size resource.
//!
//! Tracks the actual window dimensions in pixels, which may differ from the
//! viewer's canvas resolution. Updated each frame so resizes and DPI scale
//! changes take effect immediately.

use bevy_ecs::prelude::Resource;
use raylib::prelude::*;

/// Current window size in pixels.
///
/// This represents the actual OS window dimensions, not the internal canvas
/// resolution. Use it for letterbox/pillarbox calculations when scaling the
/// render target to fit the window.
#[derive(Resource, Clone, Copy)]
pub struct WindowSize {
    /// Width in pixels.
    pub w: i32,
    /// Height in pixels.
    pub h: i32,
}

impl WindowSize {
    /// Calculate the destination rectangle for letterboxed rendering.
    ///
    /// Given the canvas resolution, returns a rectangle that preserves the
    /// canvas aspect ratio, fits within the window bounds and centers the
    /// content (letterbox/pillarbox as needed).
    pub fn calculate_letterbox(&self, canvas_width: u32, canvas_height: u32) -> Rectangle {
        let canvas_w = canvas_width as f32;
        let canvas_h = canvas_height as f32;
        let window_w = self.w as f32;
        let window_h = self.h as f32;

        let canvas_aspect = canvas_w / canvas_h;
        let window_aspect = window_w / window_h;

        if window_aspect > canvas_aspect {
            // Window is wider than the canvas - pillarbox (bars on the sides)
            let scale = window_h / canvas_h;
            let scaled_w = canvas_w * scale;
            Rectangle {
                x: (window_w - scaled_w) / 2.0,
                y: 0.0,
                width: scaled_w,
                height: window_h,
            }
        } else {
            // Window is taller than the canvas - letterbox (bars top/bottom)
            let scale = window_w / canvas_w;
            let scaled_h = canvas_h * scale;
            Rectangle {
                x: 0.0,
                y: (window_h - scaled_h) / 2.0,
                width: window_w,
                height: scaled_h,
            }
        }
    }
}
