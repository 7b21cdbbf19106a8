//! Viewer systems.
//!
//! Submodules overview
//! - [`animation`] – advance the active clip and update the sprite frame
//! - [`input`] – read hardware input and update [`crate::resources::input::InputState`]
//! - [`render`] – compose the canvas and blit it to the window using Raylib
//! - [`time`] – update simulation time and delta

pub mod animation;
pub mod input;
pub mod render;
pub mod time;
