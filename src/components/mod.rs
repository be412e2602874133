//! ECS components for entities seen by the camera.
//!
//! This module groups the component types the camera layer reads when
//! assembling cull candidates and resolving follow targets. Components
//! define data only; the systems in [`crate::systems`] interpret them.
//!
//! Submodules overview:
//! - [`camerafilter`] – per-entity bitmask of cameras that skip the entity
//! - [`interactive`] – input hit-zone marker and per-frame hit-zone view
//! - [`mapposition`] – world-space position (pivot) for an entity
//! - [`renderbounds`] – axis-aligned footprint used by visibility culling
//! - [`scrollfactor`] – parallax multiplier applied to camera scroll

pub mod camerafilter;
pub mod interactive;
pub mod mapposition;
pub mod renderbounds;
pub mod scrollfactor;
