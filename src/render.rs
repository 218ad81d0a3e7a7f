//! Rendering capability consumed by the world.
//!
//! The core draws through [`Render2d`] and never talks to a backend
//! directly; [`MacroquadRenderer`] is the one concrete implementation,
//! tests substitute a recording fake.

use std::path::Path;

use macroquad::prelude::{
    clear_background, draw_rectangle_lines, draw_text, draw_texture_ex, Color, DrawTextureParams,
    FilterMode, Image, Rect, Texture2D, Vec2, BLACK,
};

use crate::error::MapError;

/// Copyable handle to a texture owned by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureSlot(pub u32);

/// Fixed rendering capability: load a texture, draw textured/outline
/// rects and text, clear and present a frame.
pub trait Render2d {
    /// Load and decode an image file, returning a handle for draw calls.
    fn load_texture(&mut self, path: &Path) -> Result<TextureSlot, MapError>;

    /// Draw the `src` region of a texture into the screen-space `dst` rect.
    fn draw_texture(&mut self, texture: TextureSlot, src: Rect, dst: Rect);

    /// Draw an unfilled rectangle outline in screen space.
    fn draw_outline_rect(&mut self, rect: Rect, color: Color);

    /// Draw a line of text at a screen position.
    fn draw_text(&mut self, text: &str, pos: Vec2, color: Color);

    /// Clear the frame.
    fn clear(&mut self);

    /// Present the frame.
    fn present(&mut self);
}

/// Macroquad-backed renderer. Textures are loaded synchronously from
/// disk and filtered with nearest-neighbour to keep pixel art crisp.
#[derive(Default)]
pub struct MacroquadRenderer {
    textures: Vec<Texture2D>,
}

impl MacroquadRenderer {
    /// A backend with no textures loaded yet.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Render2d for MacroquadRenderer {
    fn load_texture(&mut self, path: &Path) -> Result<TextureSlot, MapError> {
        let bytes = std::fs::read(path).map_err(|source| MapError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let image = Image::from_file_with_format(&bytes, None).map_err(|e| MapError::Texture {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let texture = Texture2D::from_image(&image);
        texture.set_filter(FilterMode::Nearest);

        let slot = TextureSlot(self.textures.len() as u32);
        self.textures.push(texture);
        Ok(slot)
    }

    fn draw_texture(&mut self, texture: TextureSlot, src: Rect, dst: Rect) {
        if let Some(tex) = self.textures.get(texture.0 as usize) {
            draw_texture_ex(
                tex,
                dst.x,
                dst.y,
                Color::new(1.0, 1.0, 1.0, 1.0),
                DrawTextureParams {
                    dest_size: Some(Vec2::new(dst.w, dst.h)),
                    source: Some(src),
                    ..Default::default()
                },
            );
        }
    }

    fn draw_outline_rect(&mut self, rect: Rect, color: Color) {
        draw_rectangle_lines(rect.x, rect.y, rect.w, rect.h, 1.0, color);
    }

    fn draw_text(&mut self, text: &str, pos: Vec2, color: Color) {
        draw_text(text, pos.x, pos.y, 20.0, color);
    }

    fn clear(&mut self) {
        clear_background(BLACK);
    }

    fn present(&mut self) {
        // macroquad presents on `next_frame().await`, driven by the host loop
    }
}
