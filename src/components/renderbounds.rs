use bevy_ecs::prelude::Component;
use glam::Vec2;

/// Axis-aligned footprint of a renderable entity, used by camera culling.
///
/// `origin` is the normalized pivot inside the footprint (0..1 per axis):
/// `(0, 0)` places [`MapPosition`](super::mapposition::MapPosition) at the
/// top-left corner, `(0.5, 0.5)` at the center. Entities without this
/// component cannot be bounds-tested and are always treated as visible.
#[derive(Component, Clone, Copy, Debug)]
pub struct RenderBounds {
    pub width: f32,
    pub height: f32,
    pub origin: Vec2,
}

impl RenderBounds {
    pub fn new(width: f32, height: f32) -> Self {
        RenderBounds {
            width,
            height,
            origin: Vec2::ZERO,
        }
    }

    pub fn with_origin(mut self, origin: Vec2) -> Self {
        self.origin = origin;
        self
    }

    /// Centered pivot, the common case for sprites.
    pub fn centered(width: f32, height: f32) -> Self {
        RenderBounds::new(width, height).with_origin(Vec2::splat(0.5))
    }
}
