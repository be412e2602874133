//! Visibility culling systems.
//!
//! [`refresh_visible_set`] assembles cull candidates from the ECS world,
//! applies the cooperative camera-filter check, and refills the shared
//! [`VisibleSet`] buffer through the camera's cull test.
//!
//! [`hit_test_zones`] is the input-side counterpart: it gathers
//! [`Interactive`] entities into [`HitZone`] views and returns the
//! hit-test cull result as a fresh list the input handler can keep.

use bevy_ecs::prelude::*;
use log::debug;

use crate::components::camerafilter::CameraFilter;
use crate::components::interactive::{HitZone, Interactive};
use crate::components::mapposition::MapPosition;
use crate::components::renderbounds::RenderBounds;
use crate::components::scrollfactor::ScrollFactor;
use crate::resources::camera::{Camera, CullMetrics, Cullable};
use crate::resources::visibleset::VisibleSet;

/// Per-frame cull candidate assembled from an entity's components.
struct RenderView {
    entity: Entity,
    metrics: Option<CullMetrics>,
}

impl Cullable for RenderView {
    fn cull_metrics(&self) -> Option<CullMetrics> {
        self.metrics
    }
}

fn metrics_for(
    pos: &MapPosition,
    bounds: Option<&RenderBounds>,
    scroll: Option<&ScrollFactor>,
) -> Option<CullMetrics> {
    let bounds = bounds?;
    let sf = scroll.copied().unwrap_or_default();
    Some(CullMetrics {
        x: pos.pos.x,
        y: pos.pos.y,
        width: bounds.width,
        height: bounds.height,
        origin_x: bounds.origin.x,
        origin_y: bounds.origin.y,
        scroll_factor_x: sf.x,
        scroll_factor_y: sf.y,
    })
}

/// Refill [`VisibleSet`] with the entities the camera considers visible.
///
/// Entities tagged by [`Camera::ignore`] are dropped here, before the
/// cull test; entities without [`RenderBounds`] are always kept.
pub fn refresh_visible_set(
    camera: Res<Camera>,
    mut visible_set: ResMut<VisibleSet>,
    query: Query<(
        Entity,
        &MapPosition,
        Option<&RenderBounds>,
        Option<&ScrollFactor>,
        Option<&CameraFilter>,
    )>,
) {
    let mut candidates: Vec<RenderView> = Vec::new();
    for (entity, pos, bounds, scroll, filter) in query.iter() {
        if filter.is_some_and(|f| f.ignores(camera.id())) {
            continue;
        }
        candidates.push(RenderView {
            entity,
            metrics: metrics_for(pos, bounds, scroll),
        });
    }

    let mut kept = Vec::new();
    camera.cull(&candidates, &mut kept);

    visible_set.entities.clear();
    visible_set.entities.extend(kept.iter().map(|v| v.entity));

    debug!(
        "Visible set: {} of {} candidates",
        visible_set.entities.len(),
        candidates.len()
    );
}

/// Gather the camera-visible hit zones for input processing.
///
/// Returns a fresh list per call; input handlers retain it while they
/// walk pointer events. An empty list is returned while the camera has
/// input disabled.
pub fn hit_test_zones(world: &mut World) -> Vec<HitZone> {
    let mut zones: Vec<HitZone> = Vec::new();
    {
        let mut query = world.query_filtered::<(
            Entity,
            &MapPosition,
            Option<&RenderBounds>,
            Option<&ScrollFactor>,
        ), With<Interactive>>();
        for (entity, pos, bounds, scroll) in query.iter(world) {
            zones.push(HitZone {
                entity,
                metrics: metrics_for(pos, bounds, scroll),
            });
        }
    }

    let camera = world.resource::<Camera>();
    if !camera.input_enabled {
        return Vec::new();
    }
    camera.cull_hit_test(&zones).into_iter().copied().collect()
}
