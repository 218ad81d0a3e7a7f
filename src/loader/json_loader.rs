//! Raw Tiled-JSON decoding.
//!
//! Serde mirrors of the on-disk map/tileset shape. These structs stay
//! private to the crate; [`crate::tileset`] and [`crate::world`] convert
//! them into the runtime model.

use serde::Deserialize;
use serde_json::Value as JsonValue;
use std::path::{Path, PathBuf};

use crate::error::MapError;

fn default_true() -> bool {
    true
}

#[derive(Deserialize)]
pub(crate) struct RawMap {
    pub width: u32,
    pub height: u32,
    pub tilewidth: u32,
    pub tileheight: u32,
    #[serde(default)]
    pub layers: Vec<RawLayer>,
    #[serde(default)]
    pub tilesets: Vec<RawTilesetRef>,
}

#[derive(Deserialize)]
pub(crate) struct RawTilesetRef {
    pub firstgid: u32,
    #[serde(default)]
    #[allow(dead_code)]
    pub source: String,
}

#[derive(Deserialize)]
pub(crate) struct RawLayer {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub kind: Option<String>, // "tilelayer" | "objectgroup"
    #[serde(default = "default_true")]
    pub visible: bool,
    #[serde(default)]
    pub data: Vec<u32>,
    #[serde(default)]
    pub objects: Vec<RawObject>,
    #[serde(default)]
    pub properties: Vec<RawProperty>,
}

#[derive(Deserialize)]
pub(crate) struct RawObject {
    #[serde(default)]
    pub name: String,
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub class: String,
    #[serde(default)]
    pub x: f32,
    #[serde(default)]
    pub y: f32,
    #[serde(default)]
    pub width: f32,
    #[serde(default)]
    pub height: f32,
    #[serde(default)]
    pub gid: Option<u32>,
}

impl RawObject {
    /// Tiled 1.9 renamed object `type` to `class`; accept either.
    pub fn class_name(&self) -> &str {
        if !self.class.is_empty() {
            &self.class
        } else {
            &self.kind
        }
    }
}

#[derive(Deserialize)]
pub(crate) struct RawProperty {
    pub name: String,
    #[serde(default, rename = "type")]
    #[allow(dead_code)]
    pub kind: Option<String>,
    pub value: JsonValue,
}

#[derive(Deserialize)]
pub(crate) struct RawTileset {
    pub tilewidth: u32,
    pub tileheight: u32,
    pub columns: u32,
    pub tilecount: u32,
    pub image: String,
    #[serde(default)]
    pub tiles: Vec<RawTile>,
}

#[derive(Deserialize)]
pub(crate) struct RawTile {
    pub id: u32,
    #[serde(default)]
    pub animation: Vec<RawFrame>,
    #[serde(default)]
    pub properties: Vec<RawProperty>,
    #[serde(default)]
    pub objectgroup: RawObjectGroup,
}

#[derive(Deserialize)]
pub(crate) struct RawFrame {
    pub tileid: u32,
    /// Frame duration in milliseconds, as Tiled writes it.
    pub duration: f32,
}

#[derive(Deserialize, Default)]
pub(crate) struct RawObjectGroup {
    #[serde(default)]
    pub objects: Vec<RawObject>,
}

/// Look up a bool property by name; absent or non-bool yields `None`.
pub(crate) fn prop_bool(props: &[RawProperty], name: &str) -> Option<bool> {
    props
        .iter()
        .find(|p| p.name == name)
        .and_then(|p| p.value.as_bool())
}

fn read_json<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<T, MapError> {
    if path.extension().and_then(|e| e.to_str()) != Some("json") {
        return Err(MapError::InvalidMap(format!(
            "expected a JSON file: {}",
            path.display()
        )));
    }
    let txt = std::fs::read_to_string(path).map_err(|source| MapError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&txt).map_err(|source| MapError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Decode a map file; also returns its directory for resolving
/// relative asset references.
pub(crate) fn read_map_file(path: &Path) -> Result<(RawMap, PathBuf), MapError> {
    let map = read_json(path)?;
    let dir = path
        .parent()
        .map(|d| d.to_path_buf())
        .unwrap_or_else(|| PathBuf::from("./"));
    Ok((map, dir))
}

/// Decode an external tileset file; also returns its directory.
pub(crate) fn read_tileset_file(path: &Path) -> Result<(RawTileset, PathBuf), MapError> {
    let ts = read_json(path)?;
    let dir = path
        .parent()
        .map(|d| d.to_path_buf())
        .unwrap_or_else(|| PathBuf::from("./"));
    Ok((ts, dir))
}
