//! Global tile id encoding.
//!
//! Tiled stores three flip flags in the high bits of every layer cell.
//! All of rendering, animation lookup and collision go through [`Gid`] so
//! the mask-and-subtract conversion cannot drift between call sites.

/// Horizontal flip flag (bit 31).
pub const FLIP_H: u32 = 0x8000_0000;
/// Vertical flip flag (bit 30).
pub const FLIP_V: u32 = 0x4000_0000;
/// Diagonal flip flag (bit 29).
pub const FLIP_D: u32 = 0x2000_0000;
/// Keep the lower 29 bits (bit 28 is free in the Tiled format).
pub const GID_MASK: u32 = 0x1FFF_FFFF;

/// A raw layer cell value: flip flags plus a 1-based tileset index.
/// Zero means "no tile here".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Gid(pub u32);

impl Gid {
    /// The raw cell value, flags included.
    #[inline]
    pub fn raw(self) -> u32 {
        self.0
    }

    /// The 1-based tileset index with flip flags masked off.
    #[inline]
    pub fn clean(self) -> u32 {
        self.0 & GID_MASK
    }

    /// The 0-based tile id, or `None` for an empty cell.
    #[inline]
    pub fn local_id(self) -> Option<u32> {
        match self.clean() {
            0 => None,
            n => Some(n - 1),
        }
    }

    /// Whether the horizontal flip flag is set.
    #[inline]
    pub fn flip_h(self) -> bool {
        (self.0 & FLIP_H) != 0
    }

    /// Whether the vertical flip flag is set.
    #[inline]
    pub fn flip_v(self) -> bool {
        (self.0 & FLIP_V) != 0
    }

    /// Whether the diagonal flip flag is set.
    #[inline]
    pub fn flip_d(self) -> bool {
        (self.0 & FLIP_D) != 0
    }
}
