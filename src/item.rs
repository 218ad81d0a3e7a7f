//! Collectible pickups placed from the map's object layer.

/// A positioned pickup referencing a tile id for its sprite and size.
///
/// Once collected an item is inert: it neither renders nor overlaps
/// anything again. The transition is one-shot; the world fires the
/// registered collection callback when [`Item::collect`] first succeeds.
pub struct Item {
    tile_id: u32,
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    collected: bool,
}

impl Item {
    /// Create an item at world position `(x, y)` (top-left), sized from
    /// the tileset's tile pixel dimensions.
    pub fn new(tile_id: u32, x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            tile_id,
            x,
            y,
            width,
            height,
            collected: false,
        }
    }

    /// Local tile id of the item's sprite.
    pub fn tile_id(&self) -> u32 {
        self.tile_id
    }

    /// World position, top-left.
    pub fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    /// Size in world pixels.
    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    /// Whether the item has already been picked up.
    pub fn is_collected(&self) -> bool {
        self.collected
    }

    /// Reserved extension point for per-item behaviour; item sprite
    /// animation itself is driven by the shared tileset catalog.
    pub fn update(&mut self, _dt: f32) {}

    /// AABB overlap against a moving actor's box. Collected items never
    /// overlap.
    pub fn overlaps(&self, x: f32, y: f32, width: f32, height: f32) -> bool {
        if self.collected {
            return false;
        }
        x < self.x + self.width
            && x + width > self.x
            && y < self.y + self.height
            && y + height > self.y
    }

    /// Mark the item collected. Returns `true` only on the first call,
    /// so the caller can fire its callback exactly once.
    pub fn collect(&mut self) -> bool {
        if self.collected {
            return false;
        }
        self.collected = true;
        true
    }
}
