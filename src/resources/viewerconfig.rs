//! Viewer configuration resource.
//!
//! Manages settings loaded from an INI configuration file. Provides defaults
//! for safe startup and a method to merge values from disk.
//!
//! # Configuration File Format
//!
//! ```ini
//! [render]
//! width = 400
//! height = 400
//!
//! [window]
//! width = 400
//! height = 400
//! target_fps = 60
//! vsync = true
//!
//! [sheet]
//! path = ./assets/male_skin4.png
//! manifest = ./assets/sheet.json
//! frame_width = 80
//! frame_height = 64
//! scale = 2.0
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

/// Default safe values for startup
const DEFAULT_RENDER_WIDTH: u32 = 400;
const DEFAULT_RENDER_HEIGHT: u32 = 400;
const DEFAULT_WINDOW_WIDTH: u32 = 400;
const DEFAULT_WINDOW_HEIGHT: u32 = 400;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_VSYNC: bool = true;
const DEFAULT_SHEET_PATH: &str = "./assets/male_skin4.png";
const DEFAULT_FRAME_WIDTH: f32 = 80.0;
const DEFAULT_FRAME_HEIGHT: f32 = 64.0;
const DEFAULT_SPRITE_SCALE: f32 = 2.0;
const DEFAULT_CONFIG_PATH: &str = "./sheetview.ini";

/// Viewer configuration resource.
///
/// Stores canvas resolution, window settings and sheet geometry. Values come
/// from the defaults above, merged with the INI file when one exists.
#[derive(Resource, Debug, Clone)]
pub struct ViewerConfig {
    /// Internal canvas width in pixels.
    pub render_width: u32,
    /// Internal canvas height in pixels.
    pub render_height: u32,
    /// Window width in pixels.
    pub window_width: u32,
    /// Window height in pixels.
    pub window_height: u32,
    /// Target frames per second.
    pub target_fps: u32,
    /// Enable vertical sync.
    pub vsync: bool,
    /// Path to the sprite sheet image.
    pub sheet_path: PathBuf,
    /// Optional path to a JSON clip manifest.
    pub manifest_path: Option<PathBuf>,
    /// Sheet cell width in pixels.
    pub frame_width: f32,
    /// Sheet cell height in pixels.
    pub frame_height: f32,
    /// On-canvas draw scale for the sprite and overlays.
    pub sprite_scale: f32,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewerConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            render_width: DEFAULT_RENDER_WIDTH,
            render_height: DEFAULT_RENDER_HEIGHT,
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            vsync: DEFAULT_VSYNC,
            sheet_path: PathBuf::from(DEFAULT_SHEET_PATH),
            manifest_path: None,
            frame_width: DEFAULT_FRAME_WIDTH,
            frame_height: DEFAULT_FRAME_HEIGHT,
            sprite_scale: DEFAULT_SPRITE_SCALE,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        // [render] section
        if let Some(width) = config.getuint("render", "width").ok().flatten() {
            self.render_width = width as u32;
        }
        if let Some(height) = config.getuint("render", "height").ok().flatten() {
            self.render_height = height as u32;
        }

        // [window] section
        if let Some(width) = config.getuint("window", "width").ok().flatten() {
            self.window_width = width as u32;
        }
        if let Some(height) = config.getuint("window", "height").ok().flatten() {
            self.window_height = height as u32;
        }
        if let Some(fps) = config.getuint("window", "target_fps").ok().flatten() {
            self.target_fps = fps as u32;
        }
        if let Some(vsync) = config.getbool("window", "vsync").ok().flatten() {
            self.vsync = vsync;
        }

        // [sheet] section
        if let Some(path) = config.get("sheet", "path") {
            self.sheet_path = PathBuf::from(path);
        }
        if let Some(path) = config.get("sheet", "manifest") {
            self.manifest_path = Some(PathBuf::from(path));
        }
        if let Some(width) = config.getfloat("sheet", "frame_width").ok().flatten() {
            self.frame_width = width as f32;
        }
        if let Some(height) = config.getfloat("sheet", "frame_height").ok().flatten() {
            self.frame_height = height as f32;
        }
        if let Some(scale) = config.getfloat("sheet", "scale").ok().flatten() {
            self.sprite_scale = scale as f32;
        }

        info!(
            "Loaded config: {}x{} canvas, {}x{} window, fps={}, vsync={}, sheet={}",
            self.render_width,
            self.render_height,
            self.window_width,
            self.window_height,
            self.target_fps,
            self.vsync,
            self.sheet_path.display()
        );

        Ok(())
    }
}
