//! Event types and observers used by the camera layer.
//!
//! Events provide a decoupled way for gameplay systems to request camera
//! behavior without borrowing the camera resource themselves. Each event
//! has a matching observer that applies it.
//!
//! Submodules:
//! - [`camera`] – flash/fade/shake requests and effect cancellation

pub mod camera;
