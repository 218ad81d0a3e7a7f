use std::fmt;
use std::io;
use std::path::PathBuf;

/// Error type for map/tileset loading.
///
/// Runtime operations (update, queries, rendering) never fail once a load
/// has succeeded; unknown tile ids in lookups resolve to documented
/// defaults instead of erroring.
#[derive(Debug)]
pub enum MapError {
    /// File I/O error while reading a map or tileset file
    Io {
        /// Path that failed to open or read
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },
    /// JSON parse error in a map or tileset file
    Json {
        /// Path of the malformed file
        path: PathBuf,
        /// Underlying serde error
        source: serde_json::Error,
    },
    /// Structurally invalid map or tileset (wrong extension, bad geometry, ...)
    InvalidMap(String),
    /// A tile layer's data length does not match width * height
    InvalidLayerSize {
        /// Name of the offending layer
        layer: String,
    },
    /// A layer cell references a gid outside the tileset's range
    InvalidTileGid {
        /// Name of the offending layer
        layer: String,
        /// The out-of-range gid (flip bits already masked)
        gid: u32,
        /// Highest gid the tileset provides
        max_gid: u32,
    },
    /// Texture bytes could not be decoded into an image
    Texture {
        /// Path of the image file
        path: PathBuf,
        /// Backend decode error, stringified
        message: String,
    },
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapError::Io { path, source } => {
                write!(f, "I/O error reading {}: {}", path.display(), source)
            }
            MapError::Json { path, source } => {
                write!(f, "JSON parse error in {}: {}", path.display(), source)
            }
            MapError::InvalidMap(msg) => write!(f, "Invalid map: {}", msg),
            MapError::InvalidLayerSize { layer } => write!(
                f,
                "Invalid layer size for layer '{}': data length does not match map dimensions",
                layer
            ),
            MapError::InvalidTileGid {
                layer,
                gid,
                max_gid,
            } => write!(
                f,
                "Layer '{}' references gid {} but the tileset ends at gid {}",
                layer, gid, max_gid
            ),
            MapError::Texture { path, message } => {
                write!(f, "Failed to decode texture {}: {}", path.display(), message)
            }
        }
    }
}

impl std::error::Error for MapError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MapError::Io { source, .. } => Some(source),
            MapError::Json { source, .. } => Some(source),
            _ => None,
        }
    }
}
