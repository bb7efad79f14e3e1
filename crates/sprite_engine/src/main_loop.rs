//! Per-frame update traversal

use crate::ecs::{ComponentId, EntityId, World};
use crate::foundation::time::Timer;

/// Longest frame delta handed to components, in seconds
pub const DEFAULT_MAX_FRAME_TIME: f32 = 1.0 / 15.0;

/// Drives `on_start`/`on_update` over the live tree once per frame.
///
/// Each entity updates its components (most recently added first) and then
/// its children (first to last), depth first. Components and children are
/// snapshotted before any hook runs, so hooks may add, remove or dispose
/// anything. Entries that left the entity in the meantime are skipped and
/// entries added in the meantime wait for the next frame.
#[derive(Debug, Clone)]
pub struct MainLoop {
    timer: Timer,
    max_frame_time: f32,
}

impl MainLoop {
    /// Create a loop that clamps deltas to [`DEFAULT_MAX_FRAME_TIME`]
    pub fn new() -> Self {
        Self::with_max_frame_time(DEFAULT_MAX_FRAME_TIME)
    }

    /// Create a loop with a custom delta clamp
    pub fn with_max_frame_time(max_frame_time: f32) -> Self {
        Self { timer: Timer::new(), max_frame_time }
    }

    /// Largest delta a frame will use
    pub fn max_frame_time(&self) -> f32 {
        self.max_frame_time
    }

    /// Frame timing statistics
    pub fn timer(&self) -> &Timer {
        &self.timer
    }

    /// Advance to the platform time `now` (seconds) and update the tree under
    /// `root`. The first call only primes the clock, and a clock that did not
    /// move forward skips the frame. Returns the delta used, or 0 if skipped.
    pub fn update(&mut self, world: &mut World, root: EntityId, now: f64) -> f32 {
        let dt = self.timer.tick(now);
        if dt <= 0.0 {
            return 0.0;
        }
        let dt = dt.min(self.max_frame_time);
        self.step(world, root, dt);
        dt
    }

    /// Update the tree under `root` with an explicit delta
    pub fn step(&self, world: &mut World, root: EntityId, dt: f32) {
        update_entity(world, root, dt);
    }
}

impl Default for MainLoop {
    fn default() -> Self {
        Self::new()
    }
}

fn update_entity(world: &mut World, entity: EntityId, dt: f32) {
    if !world.contains(entity) {
        return;
    }

    let components: Vec<ComponentId> = world.components(entity).collect();
    let children: Vec<EntityId> = world.children(entity).collect();

    for id in components {
        if world.owner(id) == Some(entity) {
            world.update_component(id, dt);
        }
    }

    for child in children {
        if world.parent(child) == Some(entity) {
            update_entity(world, child, dt);
        }
    }
}
