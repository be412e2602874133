//! Input hit-testing support.
//!
//! Entities tagged [`Interactive`] are gathered once per frame into
//! [`HitZone`] views, which the camera's hit-test cull filters down to the
//! zones an input system actually needs to check.

use bevy_ecs::prelude::{Component, Entity};

use crate::resources::camera::{CullMetrics, Cullable};

/// Marks an entity as input-receiving.
///
/// The hit area itself comes from the entity's
/// [`RenderBounds`](super::renderbounds::RenderBounds); an interactive
/// entity without one is always kept by the hit-test cull.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Interactive;

/// Per-frame view of one interactive entity.
///
/// Wraps the entity id rather than the entity itself; hit-test results
/// keep their zone identity even though the cull only inspects the inner
/// footprint.
#[derive(Clone, Copy, Debug)]
pub struct HitZone {
    pub entity: Entity,
    pub metrics: Option<CullMetrics>,
}

impl Cullable for HitZone {
    fn cull_metrics(&self) -> Option<CullMetrics> {
        self.metrics
    }
}
