//! Movement input as a plain value.
//!
//! The core never polls a global input subsystem; hosts build a snapshot
//! per fixed step and pass it into the update that needs it.

use macroquad::prelude::{is_key_down, KeyCode};

/// One fixed step's worth of directional input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    /// Move up this step
    pub up: bool,
    /// Move down this step
    pub down: bool,
    /// Move left this step
    pub left: bool,
    /// Move right this step
    pub right: bool,
}

impl InputSnapshot {
    /// Poll macroquad's keyboard state (WASD plus arrows). Host glue;
    /// tests and other hosts construct snapshots directly.
    pub fn from_keyboard() -> Self {
        Self {
            up: is_key_down(KeyCode::W) || is_key_down(KeyCode::Up),
            down: is_key_down(KeyCode::S) || is_key_down(KeyCode::Down),
            left: is_key_down(KeyCode::A) || is_key_down(KeyCode::Left),
            right: is_key_down(KeyCode::D) || is_key_down(KeyCode::Right),
        }
    }

    /// Whether any direction is held.
    pub fn any(&self) -> bool {
        self.up || self.down || self.left || self.right
    }
}
