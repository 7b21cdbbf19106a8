//! Render target resource for fixed-resolution rendering.
//!
//! Provides a framebuffer texture at the viewer's canvas resolution, which
//! is then scaled to fit the actual window. Point filtering keeps the pixel
//! art crisp at any window size or DPI scale.

use raylib::ffi::{self, TextureFilter};
use raylib::prelude::*;

/// Fixed-resolution framebuffer the scene is composed into.
///
/// # Note
/// This is a NonSend resource because `RenderTexture2D` holds GPU handles
/// that must be accessed from the main thread.
pub struct RenderTarget {
    /// The underlying raylib render texture.
    pub texture: RenderTexture2D,
    /// Canvas width in pixels.
    pub canvas_width: u32,
    /// Canvas height in pixels.
    pub canvas_height: u32,
}

impl RenderTarget {
    /// Create a new render target at the given canvas resolution with
    /// nearest-neighbor filtering.
    pub fn new(
        rl: &mut RaylibHandle,
        th: &RaylibThread,
        width: u32,
        height: u32,
    ) -> Result<Self, String> {
        let texture = rl
            .load_render_texture(th, width, height)
            .map_err(|e| format!("Failed to create render texture: {}", e))?;

        unsafe {
            ffi::SetTextureFilter(
                texture.texture,
                TextureFilter::TEXTURE_FILTER_POINT as i32,
            );
        }

        Ok(Self {
            texture,
            canvas_width: width,
            canvas_height: height,
        })
    }

    /// Get the source rectangle for drawing this texture.
    ///
    /// Returns a rectangle with negative height to flip the Y axis,
    /// compensating for OpenGL's inverted texture coordinates.
    pub fn source_rect(&self) -> Rectangle {
        Rectangle {
            x: 0.0,
            y: 0.0,
            width: self.canvas_width as f32,
            height: -(self.canvas_height as f32), // Negative to flip Y
        }
    }
}

impl AsRef<ffi::Texture2D> for RenderTarget {
    fn as_ref(&self) -> &ffi::Texture2D {
        &self.texture.texture
    }
}
