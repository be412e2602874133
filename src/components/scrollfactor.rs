use bevy_ecs::prelude::Component;

/// Parallax multiplier applied to camera scroll when projecting an entity.
///
/// `(1, 1)` moves with the world, `(0, 0)` is pinned to the screen, and
/// fractional values scroll slower than the camera for background layers.
#[derive(Component, Clone, Copy, Debug)]
pub struct ScrollFactor {
    pub x: f32,
    pub y: f32,
}

impl ScrollFactor {
    pub fn new(x: f32, y: f32) -> Self {
        ScrollFactor { x, y }
    }

    /// Pinned to the screen, unaffected by camera scroll.
    pub fn fixed() -> Self {
        ScrollFactor { x: 0.0, y: 0.0 }
    }
}

impl Default for ScrollFactor {
    fn default() -> Self {
        ScrollFactor { x: 1.0, y: 1.0 }
    }
}
