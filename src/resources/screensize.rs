//! Canvas size resource.
//!
//! Stores the viewer's internal render resolution in logical pixels. The
//! scene is composed at this size and then scaled to the window.

use bevy_ecs::prelude::Resource;

/// Internal canvas size in logical pixels.
#[derive(Resource, Clone, Copy)]
pub struct ScreenSize {
    /// Width in pixels.
    pub w: i32,
    /// Height in pixels.
    pub h: i32,
}
