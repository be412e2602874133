//! Camera configuration change detection system.
//!
//! Monitors [`CameraConfig`] for changes and applies the settings to the
//! live [`Camera`] resource. On initial insertion the full configuration
//! is applied; afterwards only actual changes trigger a reapply.

use bevy_ecs::prelude::*;
use log::info;

use crate::resources::camera::Camera;
use crate::resources::cameraconfig::CameraConfig;

/// System that applies camera configuration changes.
///
/// Viewport geometry, zoom, angle, pixel rounding, and background color
/// are always pushed; scroll bounds are enabled only when the config
/// carries a `[bounds]` section (a config without one leaves any
/// programmatically-set bounds alone).
pub fn apply_camera_config(
    maybe_config: Option<Res<CameraConfig>>,
    mut camera: ResMut<Camera>,
) {
    let Some(config) = maybe_config else {
        return;
    };

    if config.is_changed() || config.is_added() {
        camera.set_viewport(
            config.viewport_x,
            config.viewport_y,
            config.viewport_width,
            config.viewport_height,
        );
        camera.set_zoom(config.zoom);
        camera.set_angle(config.angle);
        camera.set_round_pixels(config.round_pixels);
        camera.set_background_color(&config.background);

        if let Some(bounds) = config.bounds {
            camera.set_bounds(bounds.x, bounds.y, bounds.width, bounds.height);
        }

        info!(
            "Camera config applied: viewport {}x{}, zoom={}, bounds={:?}",
            config.viewport_width, config.viewport_height, config.zoom, config.bounds
        );
    }
}
