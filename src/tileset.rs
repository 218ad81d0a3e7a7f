//! Per-tile metadata: animation sequences, solid flags, collision boxes.

use std::collections::HashMap;
use std::path::Path;

use macroquad::prelude::Rect;

use crate::error::MapError;
use crate::loader::json_loader::{prop_bool, read_tileset_file, RawTileset};
use crate::render::{Render2d, TextureSlot};

/// Grid geometry of a tileset atlas. Immutable once loaded.
#[derive(Debug, Clone)]
pub struct TilesetInfo {
    /// Tiles per atlas row
    pub columns: u32,
    /// Tile width in pixels
    pub tile_width: u32,
    /// Tile height in pixels
    pub tile_height: u32,
    /// Image path as declared in the tileset file
    pub image_path: String,
}

/// One frame of a tile animation.
#[derive(Debug, Clone, Copy)]
pub struct AnimationFrame {
    /// Local tile id shown during this frame
    pub tile_id: u32,
    /// Frame duration in seconds
    pub duration: f32,
}

/// A looping per-tile animation. Timers advance only through
/// [`TilesetCatalog::advance`]; queries never mutate.
#[derive(Debug, Clone)]
pub struct TileAnimation {
    frames: Vec<AnimationFrame>,
    current: usize,
    timer: f32,
}

impl TileAnimation {
    /// The tile id of the frame currently showing.
    pub fn current_tile_id(&self) -> u32 {
        self.frames[self.current].tile_id
    }

    /// Index of the frame currently showing.
    pub fn current_frame_index(&self) -> usize {
        self.current
    }

    /// The full frame list, in declared order.
    pub fn frames(&self) -> &[AnimationFrame] {
        &self.frames
    }

    fn advance(&mut self, dt: f32) {
        self.timer += dt;
        // A while, not an if: dt may span several frames.
        while self.timer >= self.frames[self.current].duration {
            let d = self.frames[self.current].duration;
            if d <= 0.0 {
                break;
            }
            self.timer -= d;
            self.current = (self.current + 1) % self.frames.len();
        }
    }
}

/// Tile-local collision rectangle, narrower than the full tile.
#[derive(Debug, Clone, Copy)]
pub struct CollisionBox {
    /// Offset from the tile's left edge, pixels
    pub x: f32,
    /// Offset from the tile's top edge, pixels
    pub y: f32,
    /// Box width, pixels
    pub width: f32,
    /// Box height, pixels
    pub height: f32,
}

/// Parsed tileset: grid geometry, the bound atlas texture and per-tile
/// animation/solid/collision-box metadata.
///
/// Lookups by tile id never fail; ids without declared metadata are
/// non-animated, non-solid and box-less.
pub struct TilesetCatalog {
    info: TilesetInfo,
    texture: TextureSlot,
    tilecount: u32,
    animations: HashMap<u32, TileAnimation>,
    collision_boxes: HashMap<u32, CollisionBox>,
    solid_tiles: HashMap<u32, bool>,
}

impl TilesetCatalog {
    /// Load a tileset definition and bind its atlas texture through the
    /// renderer. Fails atomically; on error no catalog is produced.
    pub fn load<R: Render2d>(path: &Path, renderer: &mut R) -> Result<Self, MapError> {
        let (raw, dir) = read_tileset_file(path)?;
        let texture = renderer.load_texture(&dir.join(&raw.image))?;
        Self::from_raw(raw, texture)
    }

    pub(crate) fn from_raw(raw: RawTileset, texture: TextureSlot) -> Result<Self, MapError> {
        if raw.columns == 0 || raw.tilewidth == 0 || raw.tileheight == 0 {
            return Err(MapError::InvalidMap(
                "tileset columns and tile size must be positive".to_owned(),
            ));
        }

        let mut animations = HashMap::new();
        let mut collision_boxes = HashMap::new();
        let mut solid_tiles = HashMap::new();

        for tile in &raw.tiles {
            if !tile.animation.is_empty() {
                let frames = tile
                    .animation
                    .iter()
                    .map(|f| AnimationFrame {
                        tile_id: f.tileid,
                        duration: f.duration / 1000.0, // Tiled stores milliseconds
                    })
                    .collect();
                animations.insert(
                    tile.id,
                    TileAnimation {
                        frames,
                        current: 0,
                        timer: 0.0,
                    },
                );
            }

            // First collision_box object wins; extra declarations are ignored.
            for obj in &tile.objectgroup.objects {
                if obj.name == "collision_box" && !collision_boxes.contains_key(&tile.id) {
                    collision_boxes.insert(
                        tile.id,
                        CollisionBox {
                            x: obj.x,
                            y: obj.y,
                            width: obj.width,
                            height: obj.height,
                        },
                    );
                }
            }

            if let Some(solid) = prop_bool(&tile.properties, "solid") {
                solid_tiles.insert(tile.id, solid);
            }
        }

        Ok(Self {
            info: TilesetInfo {
                columns: raw.columns,
                tile_width: raw.tilewidth,
                tile_height: raw.tileheight,
                image_path: raw.image,
            },
            texture,
            tilecount: raw.tilecount,
            animations,
            collision_boxes,
            solid_tiles,
        })
    }

    /// Grid geometry of the atlas.
    pub fn info(&self) -> &TilesetInfo {
        &self.info
    }

    /// Handle of the bound atlas texture.
    pub fn texture(&self) -> TextureSlot {
        self.texture
    }

    /// Number of tiles the atlas provides.
    pub fn tilecount(&self) -> u32 {
        self.tilecount
    }

    /// Advance every animation timer by `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        for animation in self.animations.values_mut() {
            animation.advance(dt);
        }
    }

    /// Whether `tile_id` has a declared animation.
    pub fn has_animation(&self, tile_id: u32) -> bool {
        self.animations.contains_key(&tile_id)
    }

    /// The animation for `tile_id`, if any.
    pub fn animation(&self, tile_id: u32) -> Option<&TileAnimation> {
        self.animations.get(&tile_id)
    }

    /// Resolve `base_id` to its current animation frame, or return it
    /// unchanged if it has no animation. Read-only.
    pub fn current_tile_id(&self, base_id: u32) -> u32 {
        match self.animations.get(&base_id) {
            Some(animation) => animation.current_tile_id(),
            None => base_id,
        }
    }

    /// Whether `tile_id` was declared solid. Unknown ids are not solid.
    pub fn is_solid(&self, tile_id: u32) -> bool {
        self.solid_tiles.get(&tile_id).copied().unwrap_or(false)
    }

    /// The collision box declared for `tile_id`, if any.
    pub fn collision_box(&self, tile_id: u32) -> Option<&CollisionBox> {
        self.collision_boxes.get(&tile_id)
    }

    /// Source rectangle of `tile_id` inside the atlas.
    pub fn src_rect(&self, tile_id: u32) -> Rect {
        let col = tile_id % self.info.columns;
        let row = tile_id / self.info.columns;
        Rect::new(
            (col * self.info.tile_width) as f32,
            (row * self.info.tile_height) as f32,
            self.info.tile_width as f32,
            self.info.tile_height as f32,
        )
    }
}
