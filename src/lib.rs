//! Scenecam library.
//!
//! A 2D scene camera for real-time rendering pipelines: view transform
//! (scroll, zoom, rotation, shake/fade/flash effects), visibility culling
//! of scene objects against the viewport, and screen→world mapping. The
//! camera is an ECS resource; the components, systems, and events in this
//! crate wire it into a per-frame schedule.

pub mod color;
pub mod components;
pub mod events;
pub mod geom;
pub mod resources;
pub mod systems;
