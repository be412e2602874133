//! Camera frame-loop systems.
//!
//! Two systems drive the camera each tick:
//! - [`camera_pre_render`] – resolve the follow target and rebuild the
//!   view matrix; run before culling and drawing
//! - [`camera_update_fx`] – advance the flash/fade/shake timers; run once
//!   per tick after drawing

use bevy_ecs::prelude::*;
use log::debug;

use crate::components::mapposition::MapPosition;
use crate::resources::camera::Camera;
use crate::resources::renderscale::RenderScale;
use crate::resources::worldtime::WorldTime;

/// Rebuild the camera matrix for this frame.
///
/// Resolves the follow target's world position through its
/// [`MapPosition`]; a follow entity that despawned or lost its position
/// simply resolves to nothing for the frame, leaving scroll untouched.
/// The renderer zoom offset comes from [`RenderScale`] when present.
pub fn camera_pre_render(
    mut camera: ResMut<Camera>,
    render_scale: Option<Res<RenderScale>>,
    positions: Query<&MapPosition>,
) {
    let base_scale = render_scale.map(|s| s.base).unwrap_or(0.0);

    let follow = camera.follow_target().and_then(|entity| {
        let resolved = positions.get(entity).ok().map(|p| p.pos);
        if resolved.is_none() {
            debug!("Follow target {:?} has no position this frame", entity);
        }
        resolved
    });

    camera.pre_render(base_scale, follow);
}

/// Advance the camera's effect timers once per tick.
pub fn camera_update_fx(mut camera: ResMut<Camera>, time: Res<WorldTime>) {
    camera.update(time.elapsed, time.delta);
}
