//! Loaded textures keyed by string IDs.
//!
//! Textures hold GPU handles, so the store lives in the world as a NonSend
//! resource and is only touched from the main thread.

use raylib::prelude::Texture2D;
use rustc_hash::FxHashMap;

pub struct TextureStore {
    map: FxHashMap<String, Texture2D>,
}

impl TextureStore {
    pub fn new() -> Self {
        Self {
            map: FxHashMap::default(),
        }
    }

    pub fn insert(&mut self, key: impl Into<String>, texture: Texture2D) {
        self.map.insert(key.into(), texture);
    }

    pub fn get(&self, key: &str) -> Option<&Texture2D> {
        self.map.get(key)
    }
}

impl Default for TextureStore {
    fn default() -> Self {
        Self::new()
    }
}
