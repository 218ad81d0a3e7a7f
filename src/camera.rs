//! Offset + zoom viewport transform, clamped to the world's bounds.

use macroquad::prelude::{vec2, Vec2};

/// Zoom bounds; hosts cannot zoom out past 1:1 or in past 3:1.
pub const MIN_ZOOM: f32 = 1.0;
/// Upper zoom bound.
pub const MAX_ZOOM: f32 = 3.0;

/// Snapshot of the camera transform consumed by rendering.
#[derive(Debug, Clone, Copy)]
pub struct CameraView {
    /// World-space position of the viewport's top-left corner
    pub offset: Vec2,
    /// Scale factor, world pixels to screen pixels
    pub zoom: f32,
    /// Viewport size in screen pixels
    pub viewport: Vec2,
}

/// Tracks a target point, keeping the viewport inside the map.
pub struct Camera {
    offset: Vec2,
    zoom: f32,
    viewport: Vec2,
    map_size: Vec2,
}

impl Camera {
    /// Create a camera for a `viewport`-sized window over a map of
    /// `map_size` world pixels. Starts at the map origin with zoom 1.
    pub fn new(viewport: Vec2, map_size: Vec2) -> Self {
        Self {
            offset: Vec2::ZERO,
            zoom: 1.0,
            viewport,
            map_size,
        }
    }

    /// Center the viewport on `(target_x, target_y)`, then clamp so the
    /// camera never shows beyond the map edges.
    pub fn update(&mut self, target_x: f32, target_y: f32) {
        let half_visible = self.viewport / (2.0 * self.zoom);
        self.offset = vec2(target_x, target_y) - half_visible;
        self.clamp_offset();
    }

    /// Clamp `zoom` to [`MIN_ZOOM`], [`MAX_ZOOM`] and re-center on the
    /// world point the viewport was centered on before the change.
    pub fn set_zoom(&mut self, zoom: f32) {
        let center = self.offset + self.viewport / (2.0 * self.zoom);
        self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
        self.offset = center - self.viewport / (2.0 * self.zoom);
        self.clamp_offset();
    }

    fn clamp_offset(&mut self) {
        let visible = self.viewport / self.zoom;
        let max = (self.map_size - visible).max(Vec2::ZERO);
        self.offset = self.offset.clamp(Vec2::ZERO, max);
    }

    /// Current world-space offset of the viewport's top-left corner.
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Current zoom factor.
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Viewport size in screen pixels.
    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    /// Forward transform: world position to screen position.
    pub fn world_to_screen(&self, world: Vec2) -> Vec2 {
        (world - self.offset) * self.zoom
    }

    /// Inverse transform: screen position to world position.
    pub fn screen_to_world(&self, screen: Vec2) -> Vec2 {
        screen / self.zoom + self.offset
    }

    /// The transform snapshot rendering consumes.
    pub fn view(&self) -> CameraView {
        CameraView {
            offset: self.offset,
            zoom: self.zoom,
            viewport: self.viewport,
        }
    }
}
