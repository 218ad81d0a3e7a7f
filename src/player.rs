//! The controllable actor: tileset-driven sprite, per-frame collision
//! box, movement committed through the world's collision query.

use std::path::Path;

use anyhow::Context;
use macroquad::prelude::{Rect, BLUE};

use crate::camera::CameraView;
use crate::input::InputSnapshot;
use crate::render::Render2d;
use crate::tileset::TilesetCatalog;
use crate::world::TileWorld;

/// Facing direction; doubles as the base frame index in the player
/// tileset (one animation row per direction).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Facing the camera
    Down = 0,
    /// Facing away
    Up = 1,
    /// Facing left
    Left = 2,
    /// Facing right
    Right = 3,
}

/// Collision box used when the player tileset declares none.
const DEFAULT_BOX: (f32, f32, f32, f32) = (4.0, 0.0, 24.0, 32.0);

/// A player actor with its own tileset catalog for sprite frames and
/// collision-box metadata.
pub struct Player {
    catalog: TilesetCatalog,
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    speed: f32,
    direction: Direction,
    moving: bool,
    box_offset_x: f32,
    box_offset_y: f32,
    box_width: f32,
    box_height: f32,
    debug_rendering: bool,
}

impl Player {
    /// Load the player tileset (sprite frames, walk animations and the
    /// collision box declared on tile 0) and bind its texture.
    pub fn load<R: Render2d>(tileset_path: &Path, renderer: &mut R) -> anyhow::Result<Self> {
        let catalog = TilesetCatalog::load(tileset_path, renderer)
            .with_context(|| format!("Loading player tileset {}", tileset_path.display()))?;
        Ok(Self::from_catalog(catalog))
    }

    pub(crate) fn from_catalog(catalog: TilesetCatalog) -> Self {
        let width = catalog.info().tile_width as f32;
        let height = catalog.info().tile_height as f32;
        let (bx, by, bw, bh) = match catalog.collision_box(0) {
            Some(b) => (b.x, b.y, b.width, b.height),
            None => DEFAULT_BOX,
        };
        Self {
            catalog,
            x: 0.0,
            y: 0.0,
            width,
            height,
            speed: 200.0,
            direction: Direction::Down,
            moving: false,
            box_offset_x: bx,
            box_offset_y: by,
            box_width: bw,
            box_height: bh,
            debug_rendering: false,
        }
    }

    /// World position, top-left of the sprite.
    pub fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    /// Place the player at a world position (spawn points etc.).
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    /// World position of the sprite's center, for camera tracking.
    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Current facing.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Movement speed in world pixels per second.
    pub fn set_speed(&mut self, speed: f32) {
        self.speed = speed;
    }

    /// Toggle the collision-box outline.
    pub fn set_debug_rendering(&mut self, enabled: bool) {
        self.debug_rendering = enabled;
    }

    /// The collision box in world space at the current position.
    pub fn collision_rect(&self) -> Rect {
        Rect::new(
            self.x + self.box_offset_x,
            self.y + self.box_offset_y,
            self.box_width,
            self.box_height,
        )
    }

    fn base_frame(&self) -> u32 {
        self.direction as u32
    }

    fn current_frame(&self) -> u32 {
        if self.moving {
            self.catalog.current_tile_id(self.base_frame())
        } else {
            self.base_frame()
        }
    }

    fn refresh_collision_box(&mut self) {
        if let Some(b) = self.catalog.collision_box(self.current_frame()) {
            self.box_offset_x = b.x;
            self.box_offset_y = b.y;
            self.box_width = b.width;
            self.box_height = b.height;
        }
    }

    /// Move according to the input snapshot, committing each axis
    /// separately through the world's collision query so the player can
    /// slide along walls. Walk animation advances only while moving.
    pub fn update(&mut self, dt: f32, input: &InputSnapshot, world: &TileWorld) {
        let mut dx = 0.0_f32;
        let mut dy = 0.0_f32;

        if input.up {
            dy -= 1.0;
            self.direction = Direction::Up;
        }
        if input.down {
            dy += 1.0;
            self.direction = Direction::Down;
        }
        if input.left {
            dx -= 1.0;
            self.direction = Direction::Left;
        }
        if input.right {
            dx += 1.0;
            self.direction = Direction::Right;
        }

        self.moving = dx != 0.0 || dy != 0.0;

        if dx != 0.0 && dy != 0.0 {
            let normalizer = 1.0 / 2.0_f32.sqrt();
            dx *= normalizer;
            dy *= normalizer;
        }

        self.refresh_collision_box();

        let new_x = self.x + dx * self.speed * dt;
        if !world.check_collision(
            new_x + self.box_offset_x,
            self.y + self.box_offset_y,
            self.box_width,
            self.box_height,
        ) {
            self.x = new_x;
        }

        let new_y = self.y + dy * self.speed * dt;
        if !world.check_collision(
            self.x + self.box_offset_x,
            new_y + self.box_offset_y,
            self.box_width,
            self.box_height,
        ) {
            self.y = new_y;
        }

        if self.moving {
            self.catalog.advance(dt);
        }
    }

    /// Draw the sprite at its zoomed screen position; standing still
    /// shows the direction's base frame.
    pub fn render<R: Render2d>(&self, renderer: &mut R, view: &CameraView) {
        let src = self.catalog.src_rect(self.current_frame());
        let dst = Rect::new(
            ((self.x - view.offset.x) * view.zoom).floor(),
            ((self.y - view.offset.y) * view.zoom).floor(),
            (self.width * view.zoom).ceil(),
            (self.height * view.zoom).ceil(),
        );
        renderer.draw_texture(self.catalog.texture(), src, dst);

        if self.debug_rendering {
            let b = self.collision_rect();
            renderer.draw_outline_rect(
                Rect::new(
                    (b.x - view.offset.x) * view.zoom,
                    (b.y - view.offset.y) * view.zoom,
                    b.w * view.zoom,
                    b.h * view.zoom,
                ),
                BLUE,
            );
        }
    }
}
