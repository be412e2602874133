//! Camera systems.
//!
//! This module groups the ECS systems that drive the camera through a
//! frame: time, transform rebuild, visibility culling, effect timers, and
//! configuration.
//!
//! Submodules overview
//! - [`camera`] – rebuild the view matrix and advance effect timers
//! - [`config`] – apply [`CameraConfig`](crate::resources::cameraconfig::CameraConfig) changes to the camera
//! - [`cull`] – refill the visible set and gather input hit zones
//! - [`time`] – update simulation time and delta

pub mod camera;
pub mod config;
pub mod cull;
pub mod time;
