#![warn(missing_docs)]

//! Tile-map world model for Macroquad: tileset metadata (animations,
//! solid flags, collision boxes), stacked tile layers with flip-flag
//! gids, world-space collision queries, collectible items and
//! viewport-culled rendering behind a swappable render capability.

mod camera;
mod diag;
mod error;
mod gid;
mod input;
mod item;
mod layer;
mod loader {
    pub mod json_loader;
}
mod player;
mod render;
mod tileset;
mod timestep;
mod world;

pub use camera::{Camera, CameraView, MAX_ZOOM, MIN_ZOOM};
pub use diag::{default_sink, DiagLevel, DiagSink};
pub use error::MapError;
pub use gid::{Gid, FLIP_D, FLIP_H, FLIP_V, GID_MASK};
pub use input::InputSnapshot;
pub use item::Item;
pub use layer::MapLayer;
pub use player::{Direction, Player};
pub use render::{MacroquadRenderer, Render2d, TextureSlot};
pub use tileset::{AnimationFrame, CollisionBox, TileAnimation, TilesetCatalog, TilesetInfo};
pub use timestep::FixedTimestep;
pub use world::TileWorld;
