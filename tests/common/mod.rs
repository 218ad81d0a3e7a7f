//! Shared test helpers: a recording renderer and on-disk map fixtures.

use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use macroquad::prelude::{Color, Rect, Vec2};
use tileworld::{MapError, Render2d, TextureSlot};

/// Renderer that records every call instead of drawing. Texture loads
/// never touch the image file unless `fail_textures` is set.
#[derive(Default)]
pub struct FakeRenderer {
    pub textures: Vec<PathBuf>,
    pub draws: Vec<(TextureSlot, Rect, Rect)>,
    pub outlines: Vec<(Rect, Color)>,
    pub texts: Vec<String>,
    pub fail_textures: bool,
}

impl Render2d for FakeRenderer {
    fn load_texture(&mut self, path: &std::path::Path) -> Result<TextureSlot, MapError> {
        if self.fail_textures {
            return Err(MapError::Texture {
                path: path.to_path_buf(),
                message: "texture loading disabled in this test".to_owned(),
            });
        }
        let slot = TextureSlot(self.textures.len() as u32);
        self.textures.push(path.to_path_buf());
        Ok(slot)
    }

    fn draw_texture(&mut self, texture: TextureSlot, src: Rect, dst: Rect) {
        self.draws.push((texture, src, dst));
    }

    fn draw_outline_rect(&mut self, rect: Rect, color: Color) {
        self.outlines.push((rect, color));
    }

    fn draw_text(&mut self, text: &str, _pos: Vec2, _color: Color) {
        self.texts.push(text.to_owned());
    }

    fn clear(&mut self) {}

    fn present(&mut self) {}
}

/// Fresh temp directory for one test's fixture files.
pub fn temp_dir(tag: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock went backwards")
        .as_nanos();
    let dir = std::env::temp_dir().join(format!("tileworld_{tag}_{nanos}"));
    fs::create_dir_all(&dir).expect("failed to create temp dir");
    dir
}

/// Write `map.json` and `tileset.json` into a fresh temp dir and return
/// their paths.
pub fn write_fixture(tag: &str, map_json: &str, tileset_json: &str) -> (PathBuf, PathBuf) {
    let dir = temp_dir(tag);
    let map_path = dir.join("map.json");
    let ts_path = dir.join("tileset.json");
    fs::write(&map_path, map_json).expect("failed to write map");
    fs::write(&ts_path, tileset_json).expect("failed to write tileset");
    (map_path, ts_path)
}

/// Tileset used by most scenarios: 32 px tiles, 4 columns. Tile id 1 is
/// solid, id 2/3 animate against each other, id 5 has a narrow box.
pub const TILESET: &str = r#"{
    "tilewidth": 32, "tileheight": 32,
    "columns": 4, "tilecount": 16,
    "image": "tiles.png",
    "tiles": [
        {"id": 1, "properties": [{"name": "solid", "type": "bool", "value": true}]},
        {"id": 2, "animation": [
            {"tileid": 2, "duration": 100},
            {"tileid": 3, "duration": 100}
        ]},
        {"id": 5, "objectgroup": {"objects": [
            {"name": "collision_box", "x": 4.0, "y": 0.0, "width": 24.0, "height": 32.0}
        ]}}
    ]
}"#;
