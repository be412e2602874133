use bevy_ecs::prelude::Resource;

/// Renderer-contributed zoom offset, added to the camera zoom each frame
/// (device-pixel-ratio compensation and similar).
#[derive(Resource, Clone, Copy, Debug, Default)]
pub struct RenderScale {
    pub base: f32,
}
