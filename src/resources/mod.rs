//! ECS resources made available to systems.
//!
//! Overview
//! - `animationstore` – clip definitions per action (built-in or manifest)
//! - `debugmode` – presence toggles the sheet and frame overlays
//! - `input` – per-frame keyboard and mouse state with bindings
//! - `rendertarget` – fixed-resolution framebuffer with point filtering
//! - `screensize` – the viewer's internal canvas resolution
//! - `spritesheet` – sheet load state and grid layout
//! - `texturestore` – loaded textures keyed by string IDs
//! - `viewerconfig` – INI-backed configuration
//! - `windowsize` – actual window dimensions and letterbox math
//! - `worldtime` – simulation time and delta

pub mod animationstore;
pub mod debugmode;
pub mod input;
pub mod rendertarget;
pub mod screensize;
pub mod spritesheet;
pub mod texturestore;
pub mod viewerconfig;
pub mod windowsize;
pub mod worldtime;
