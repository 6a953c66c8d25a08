//! Simulation clock resource.
//!
//! The tick loop advances [`WorldTime`] once per frame and every consumer
//! (cooldown decrement, the translator timer) reads `delta` from it instead
//! of measuring time itself, so scaling or pausing the clock slows the whole
//! pipeline uniformly.

use bevy_ecs::prelude::Resource;

/// Elapsed and per-tick simulation time, in seconds.
#[derive(Resource, Clone, Copy, Debug)]
pub struct WorldTime {
    /// Scaled seconds accumulated since the world was created.
    pub elapsed: f32,
    /// Scaled seconds the latest tick advanced by.
    pub delta: f32,
    /// Multiplier applied to every incoming tick delta. 0 pauses.
    pub time_scale: f32,
}

impl Default for WorldTime {
    fn default() -> Self {
        WorldTime {
            elapsed: 0.0,
            delta: 0.0,
            time_scale: 1.0,
        }
    }
}

impl WorldTime {
    pub fn with_time_scale(mut self, time_scale: f32) -> Self {
        self.time_scale = time_scale;
        self
    }

    /// Advance the clock by one raw tick delta, applying `time_scale`.
    pub fn advance(&mut self, dt: f32) {
        self.delta = dt * self.time_scale;
        self.elapsed += self.delta;
    }
}
