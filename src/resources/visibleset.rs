use bevy_ecs::prelude::{Entity, Resource};

/// Entities that survived camera culling this frame.
///
/// Refilled in place by
/// [`refresh_visible_set`](crate::systems::cull::refresh_visible_set) every
/// frame; consumers must not hold onto the contents across frames.
#[derive(Resource, Debug, Default)]
pub struct VisibleSet {
    pub entities: Vec<Entity>,
}

impl VisibleSet {
    pub fn contains(&self, entity: Entity) -> bool {
        self.entities.contains(&entity)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}
