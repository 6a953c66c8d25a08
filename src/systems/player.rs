//! Coarse player movement: full-cell steps with a single masked probe.
//!
//! The second controller variant. [`try_move`] converts a local cardinal
//! direction to world space via the current heading, casts one probe of
//! length `grid_size - margin` along it, and commits the full `grid_size`
//! translation only if unobstructed; otherwise it logs a blocked-movement
//! notice and leaves the position untouched.
//!
//! Rotation adds the angle increment directly to the heading: no
//! validation, no obstruction check, and no snapping guarantee beyond
//! starting aligned.
//!
//! There is no per-entity cooldown here; pacing comes from the input
//! translator, as in the input manager this variant was paired with.

use bevy_ecs::prelude::*;
use bevy_ecs::system::SystemState;
use glam::Vec3;
use log::info;

use crate::components::heading::Heading;
use crate::components::playermover::PlayerMover;
use crate::components::worldposition::WorldPosition;
use crate::events::blocked::MoveBlocked;
use crate::events::intent::{MoveIntent, RotateIntent};
use crate::resources::physics::PhysicsWorld;

/// Attempt one full-cell step along a local cardinal direction.
///
/// Returns whether the translation was committed.
pub fn try_move(
    position: &mut WorldPosition,
    heading: &Heading,
    mover: &PlayerMover,
    physics: &PhysicsWorld,
    local_direction: Vec3,
) -> bool {
    let world_direction = heading.local_to_world(local_direction);
    let origin = position.pos + Vec3::Y * mover.probe_height;

    if physics.is_blocked(
        origin,
        world_direction,
        mover.probe_distance(),
        mover.collision_mask,
    ) {
        info!("Movement blocked along {:?}", world_direction);
        return false;
    }

    position.pos += world_direction * mover.grid_size;
    true
}

/// Route each non-zero intent axis through [`try_move`].
pub fn player_move_handler(world: &mut World, intent: &MoveIntent) {
    let mut state = SystemState::<(
        Res<PhysicsWorld>,
        MessageWriter<MoveBlocked>,
        Query<(Entity, &mut WorldPosition, &Heading, &PlayerMover)>,
    )>::new(world);
    let (physics, mut blocked, mut query) = state.get_mut(world);

    for (entity, mut position, heading, mover) in query.iter_mut() {
        for (axis, amount) in [(Vec3::X, intent.x), (Vec3::Z, intent.z)] {
            if amount == 0.0 {
                continue;
            }
            let local = axis * amount.signum();
            if !try_move(&mut position, heading, mover, &physics, local) {
                blocked.write(MoveBlocked {
                    entity,
                    direction: heading.local_to_world(local),
                });
            }
        }
    }
}

/// Add the turn increment directly to the heading.
pub fn player_rotate_handler(world: &mut World, intent: &RotateIntent) {
    let angle = 90.0 * intent.turn;
    if angle == 0.0 {
        return;
    }
    let mut query = world.query_filtered::<&mut Heading, With<PlayerMover>>();
    for mut heading in query.iter_mut(world) {
        heading.rotate_by(angle);
    }
}
