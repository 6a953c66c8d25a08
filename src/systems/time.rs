//! Clock tick entry point.
//!
//! The embedding host (or the demo loop) calls [`update_world_time`] once
//! per frame with the raw frame delta before running the schedule; systems
//! downstream read the scaled result from
//! [`WorldTime`](crate::resources::worldtime::WorldTime).

use bevy_ecs::prelude::*;

use crate::resources::worldtime::WorldTime;

/// Feed one raw frame delta into the simulation clock.
pub fn update_world_time(world: &mut World, dt: f32) {
    world.resource_mut::<WorldTime>().advance(dt);
}
