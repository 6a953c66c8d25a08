//! Cooldown tick system.
//!
//! Decrements every actor's [`Cooldown`](crate::components::cooldown::Cooldown)
//! by scaled delta time each frame. Intents arriving while the cooldown is
//! positive are dropped by the controllers, not queued.

use bevy_ecs::prelude::*;

use crate::components::cooldown::Cooldown;
use crate::resources::worldtime::WorldTime;

/// Count down each cooldown toward ready.
pub fn tick_cooldowns(world_time: Res<WorldTime>, mut query: Query<&mut Cooldown>) {
    let dt = world_time.delta; // delta is already scaled by time_scale
    for mut cooldown in query.iter_mut() {
        if cooldown.remaining > 0.0 {
            cooldown.remaining -= dt;
        }
    }
}
