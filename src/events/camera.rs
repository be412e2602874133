//! Camera effect events and observers.
//!
//! Gameplay systems request screen effects by triggering these events
//! instead of borrowing the camera resource directly; the observers in
//! this module apply them. This keeps effect requests decoupled from
//! whichever system happens to own the camera borrow at that point in
//! the frame.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, warn};

use crate::resources::camera::Camera;

/// Request a full-screen color flash.
#[derive(Event, Debug, Clone, Copy)]
pub struct CameraFlashEvent {
    /// Decay time in seconds.
    pub duration: f32,
    pub red: f32,
    pub green: f32,
    pub blue: f32,
    /// Interrupt an in-flight flash.
    pub force: bool,
}

impl CameraFlashEvent {
    /// White flash, the common case.
    pub fn white(duration: f32) -> Self {
        CameraFlashEvent {
            duration,
            red: 1.0,
            green: 1.0,
            blue: 1.0,
            force: false,
        }
    }
}

/// Request a fade to a solid color that holds until the camera's effects
/// are reset.
#[derive(Event, Debug, Clone, Copy)]
pub struct CameraFadeEvent {
    /// Ramp time in seconds.
    pub duration: f32,
    pub red: f32,
    pub green: f32,
    pub blue: f32,
    /// Interrupt an in-flight fade.
    pub force: bool,
}

impl CameraFadeEvent {
    /// Fade to black, the common case.
    pub fn black(duration: f32) -> Self {
        CameraFadeEvent {
            duration,
            red: 0.0,
            green: 0.0,
            blue: 0.0,
            force: false,
        }
    }
}

/// Request a viewport shake.
#[derive(Event, Debug, Clone, Copy)]
pub struct CameraShakeEvent {
    /// Countdown in seconds.
    pub duration: f32,
    /// Displacement per axis as a fraction of the viewport size.
    pub intensity: f32,
    /// Interrupt an in-flight shake.
    pub force: bool,
}

/// Request cancellation of all camera effects.
#[derive(Event, Debug, Clone, Copy)]
pub struct CameraResetFxEvent;

/// Observer that starts a flash on the camera.
pub fn observe_camera_flash(trigger: On<CameraFlashEvent>, camera: Option<ResMut<Camera>>) {
    debug!("CameraFlashEvent triggered");
    let Some(mut camera) = camera else {
        warn!("CameraFlashEvent ignored: no Camera resource");
        return;
    };
    let ev = trigger.event();
    camera.flash(ev.duration, ev.red, ev.green, ev.blue, ev.force);
}

/// Observer that starts a fade on the camera.
pub fn observe_camera_fade(trigger: On<CameraFadeEvent>, camera: Option<ResMut<Camera>>) {
    debug!("CameraFadeEvent triggered");
    let Some(mut camera) = camera else {
        warn!("CameraFadeEvent ignored: no Camera resource");
        return;
    };
    let ev = trigger.event();
    camera.fade(ev.duration, ev.red, ev.green, ev.blue, ev.force);
}

/// Observer that starts a shake on the camera.
pub fn observe_camera_shake(trigger: On<CameraShakeEvent>, camera: Option<ResMut<Camera>>) {
    debug!("CameraShakeEvent triggered");
    let Some(mut camera) = camera else {
        warn!("CameraShakeEvent ignored: no Camera resource");
        return;
    };
    let ev = trigger.event();
    camera.shake(ev.duration, ev.intensity, ev.force);
}

/// Observer that cancels every camera effect.
pub fn observe_camera_reset_fx(_trigger: On<CameraResetFxEvent>, camera: Option<ResMut<Camera>>) {
    debug!("CameraResetFxEvent triggered");
    let Some(mut camera) = camera else {
        warn!("CameraResetFxEvent ignored: no Camera resource");
        return;
    };
    camera.reset_fx();
}
