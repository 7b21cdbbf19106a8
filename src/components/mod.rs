//! ECS components for entities.
//!
//! Submodules overview:
//! - [`action`] – the closed set of character actions and their sheet rows
//! - [`animation`] – playback state for the active action
//! - [`mapposition`] – world-space position (pivot) for an entity
//! - [`player`] – marker for the viewer-controlled character
//! - [`sprite`] – 2D sprite rendering component
//! - [`zindex`] – rendering order hint for 2D drawing

pub mod action;
pub mod animation;
pub mod mapposition;
pub mod player;
pub mod sprite;
pub mod zindex;
