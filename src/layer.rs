use crate::gid::Gid;

/// One full-grid slice of tile references with its own visibility and
/// collision-participation flags. Immutable after load.
pub struct MapLayer {
    /// Layer name as declared in the map file
    pub name: String,
    /// Row-major grid of raw gids, length = map width * height
    pub data: Vec<Gid>,
    /// Whether the layer is drawn
    pub visible: bool,
    /// Whether the layer participates in solidity checks. Independent of
    /// tile-level metadata: a decorative layer can reuse tile ids that
    /// are solid elsewhere.
    pub collision: bool,
}

impl MapLayer {
    /// The gid at tile coordinates `(x, y)`, given the map width.
    /// Callers keep coordinates in range; the world clamps before iterating.
    #[inline]
    pub fn gid_at(&self, x: u32, y: u32, map_width: u32) -> Gid {
        self.data[(y * map_width + x) as usize]
    }
}
