use glam::{Vec2, Vec3};

/// Projection from world space to screen space.
///
/// Availability is frame-local: callers pass `None` when no camera is
/// current this frame, and depth tracking keeps its last keys until one
/// returns.
pub trait Projection {
    /// Project a world-space point to screen coordinates, in pixels with
    /// the origin at the bottom-left of the viewport and Y up.
    fn world_to_screen(&self, world: Vec3) -> Vec2;

    /// Height of the viewport in pixels.
    fn viewport_height(&self) -> u32;
}

/// Axis-aligned 2D camera mapping world units to pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera2d {
    /// World-space point shown at the viewport center.
    pub center: Vec2,
    /// World-to-pixel scale.
    pub pixels_per_unit: f32,
    /// Viewport size in pixels (width, height).
    pub viewport: (u32, u32),
}

impl Camera2d {
    pub fn new(center: Vec2, pixels_per_unit: f32, viewport: (u32, u32)) -> Self {
        Self {
            center,
            pixels_per_unit,
            viewport,
        }
    }
}

impl Projection for Camera2d {
    fn world_to_screen(&self, world: Vec3) -> Vec2 {
        let half = Vec2::new(self.viewport.0 as f32, self.viewport.1 as f32) * 0.5;
        (Vec2::new(world.x, world.y) - self.center) * self.pixels_per_unit + half
    }

    fn viewport_height(&self) -> u32 {
        self.viewport.1
    }
}
