//! Animation clip registry.
//!
//! This module provides a minimal store for the per-action clip definitions
//! the animation system drives playback from. The built-in table matches the
//! bundled character sheet; a JSON manifest can override it for other sheets.

use std::path::Path;

use bevy_ecs::prelude::Resource;
use rustc_hash::FxHashMap;
use serde::Deserialize;
use std::collections::HashMap;

use crate::components::action::Action;

/// Default playback speed in frames per second.
pub const DEFAULT_FPS: f32 = 12.0;

/// Immutable data describing one action's clip in the sprite sheet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipDef {
    /// Sheet row the clip's frames live in.
    pub row: usize,
    /// Number of frames in the clip.
    pub frame_count: usize,
    /// Frames per second playback speed.
    pub fps: f32,
    /// Whether the clip restarts after the last frame.
    pub looped: bool,
}

/// Central registry of clip definitions keyed by [`Action`].
#[derive(Resource)]
pub struct AnimationStore {
    clips: FxHashMap<Action, ClipDef>,
}

impl AnimationStore {
    /// Build the registry for the bundled character sheet: one looping clip
    /// per action, rows in action order, 12 fps throughout.
    pub fn builtin() -> Self {
        let mut clips = FxHashMap::default();
        for action in Action::ALL {
            clips.insert(
                action,
                ClipDef {
                    row: action.row(),
                    frame_count: action.frame_count(),
                    fps: DEFAULT_FPS,
                    looped: true,
                },
            );
        }
        Self { clips }
    }

    pub fn get(&self, action: Action) -> Option<&ClipDef> {
        self.clips.get(&action)
    }

    pub fn insert(&mut self, action: Action, clip: ClipDef) {
        self.clips.insert(action, clip);
    }

    /// Load clip overrides from a JSON manifest.
    ///
    /// Starts from the built-in table so a manifest only needs to name the
    /// clips it changes. Unknown action names, zero frame counts and
    /// non-positive speeds are rejected with a descriptive error.
    pub fn load_manifest(path: &Path) -> Result<Self, String> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read manifest {}: {e}", path.display()))?;
        let json: ManifestJson = serde_json::from_str(&raw)
            .map_err(|e| format!("Failed to parse manifest {}: {e}", path.display()))?;

        let mut store = Self::builtin();
        for (name, clip_json) in json.actions {
            let Some(action) = Action::from_name(&name) else {
                return Err(format!(
                    "Manifest validation failed: unknown action '{name}'"
                ));
            };
            if clip_json.frames == 0 {
                return Err(format!(
                    "Manifest validation failed: action '{name}' has zero frames"
                ));
            }
            let fps = clip_json.fps.unwrap_or(DEFAULT_FPS);
            if fps <= 0.0 {
                return Err(format!(
                    "Manifest validation failed: action '{name}' has fps {fps}"
                ));
            }
            store.insert(
                action,
                ClipDef {
                    row: clip_json.row.unwrap_or_else(|| action.row()),
                    frame_count: clip_json.frames,
                    fps,
                    looped: clip_json.looped.unwrap_or(true),
                },
            );
        }
        Ok(store)
    }
}

// --- JSON deserialization types (private) ---

#[derive(Debug, Deserialize)]
struct ManifestJson {
    actions: HashMap<String, ManifestClipJson>,
}

#[derive(Debug, Deserialize)]
struct ManifestClipJson {
    frames: usize,
    row: Option<usize>,
    fps: Option<f32>,
    looped: Option<bool>,
}
