//! Debug toggle resource.
//!
//! The mere presence of this resource indicates that the sheet overlay and
//! frame diagnostics should be drawn. Remove it to disable them.

use bevy_ecs::prelude::Resource;

/// Marker resource: when present, the renderer draws the sheet background,
/// the active-frame rectangle and the text overlay.
#[derive(Resource, Clone, Copy)]
pub struct DebugMode {}
