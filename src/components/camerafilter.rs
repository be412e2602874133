use bevy_ecs::prelude::Component;

/// Bitmask of camera identities that should skip this entity.
///
/// Written by [`Camera::ignore`](crate::resources::camera::Camera::ignore)
/// and honored by the render-side cull pass; the camera's own cull test
/// does not consult it. One bit per camera.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CameraFilter(pub u32);

impl CameraFilter {
    /// True when the entity is tagged to be skipped by the given camera.
    pub fn ignores(&self, camera_id: u32) -> bool {
        self.0 & camera_id != 0
    }

    /// Remove a camera's tag from this entity.
    pub fn unignore(&mut self, camera_id: u32) {
        self.0 &= !camera_id;
    }
}
