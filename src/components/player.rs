use bevy_ecs::prelude::Component;

/// Marker for the one viewer-controlled character entity.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Player;
