use bevy_ecs::prelude::Resource;

/// Simulation time shared by all per-frame systems.
///
/// `delta` is the scaled frame delta in seconds; effect durations use the
/// same unit.
#[derive(Resource, Clone, Copy, Debug)]
pub struct WorldTime {
    pub elapsed: f32,
    pub delta: f32,
    pub time_scale: f32,
    pub frame_count: u64,
}

impl Default for WorldTime {
    fn default() -> Self {
        WorldTime {
            elapsed: 0.0,
            delta: 0.0,
            time_scale: 1.0,
            frame_count: 0,
        }
    }
}
