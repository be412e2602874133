//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution: the camera itself, timing, the
//! per-frame visibility buffer, tile maps, and configuration. Each
//! submodule documents the semantics and intended usage of its
//! resource(s).
//!
//! Overview
//! - `camera` – the 2D scene camera: transform, culling, screen effects
//! - `cameraconfig` – INI-backed camera settings applied on change
//! - `camerafx` – flash/fade/shake effect state machines
//! - `renderscale` – renderer-contributed zoom offset per frame
//! - `tilemap` – serializable tile maps and a keyed store
//! - `visibleset` – entities that survived culling this frame
//! - `worldtime` – simulation time and delta

pub mod camera;
pub mod cameraconfig;
pub mod camerafx;
pub mod renderscale;
pub mod tilemap;
pub mod visibleset;
pub mod worldtime;
