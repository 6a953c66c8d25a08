//! Fine-grained grid movement handlers.
//!
//! Hub listeners reacting to [`MoveIntent`](crate::events::intent::MoveIntent)
//! and [`RotateIntent`](crate::events::intent::RotateIntent) for entities
//! carrying [`GridMover`](crate::components::gridmover::GridMover). Register
//! them with [`hub::subscribe`](crate::events::hub::subscribe).
//!
//! # Cooldown contract
//!
//! An intent delivered while the actor's cooldown is positive is dropped —
//! no state change, no queuing. An intent delivered while ready arms the
//! cooldown *before* any obstruction check, so a fully blocked move still
//! consumes the window. Repeated blocked attempts therefore cannot bypass
//! the pacing.
//!
//! # Axis independence
//!
//! The x (strafe) and z (forward) components of a move intent are evaluated
//! one after the other: each non-zero axis gets its own probe and its own
//! one-cell commit, and a blocked axis never vetoes the other. The second
//! probe starts from the position the first commit produced, so a diagonal
//! intent cannot step into a cell that is itself walled.

use bevy_ecs::prelude::*;
use bevy_ecs::system::SystemState;
use glam::Vec3;
use log::debug;

use crate::components::cooldown::Cooldown;
use crate::components::gridmover::GridMover;
use crate::components::heading::Heading;
use crate::components::worldposition::WorldPosition;
use crate::events::blocked::MoveBlocked;
use crate::events::intent::{MoveIntent, RotateIntent};
use crate::grid;
use crate::resources::physics::{MASK_ALL, PhysicsWorld};

/// Step each ready grid mover by one cell per non-zero intent axis.
pub fn grid_move_handler(world: &mut World, intent: &MoveIntent) {
    let mut state = SystemState::<(
        Res<PhysicsWorld>,
        MessageWriter<MoveBlocked>,
        Query<(
            Entity,
            &mut WorldPosition,
            &Heading,
            &GridMover,
            &mut Cooldown,
        )>,
    )>::new(world);
    let (physics, mut blocked, mut query) = state.get_mut(world);

    for (entity, mut position, heading, mover, mut cooldown) in query.iter_mut() {
        if !cooldown.ready() {
            continue;
        }
        // Accepted intents always consume the window, blocked or not.
        cooldown.arm();

        for (axis, amount) in [(Vec3::X, intent.x), (Vec3::Z, intent.z)] {
            if amount == 0.0 {
                continue;
            }
            // Snap the rotated axis back onto an exact cardinal so committed
            // positions stay on the lattice.
            let direction = grid::facing_direction(heading.local_to_world(axis * amount.signum()));
            if physics.is_blocked(position.pos, direction, mover.probe_distance(), MASK_ALL) {
                debug!("Grid move blocked for {:?} along {:?}", entity, direction);
                blocked.write(MoveBlocked { entity, direction });
            } else {
                position.pos += direction * mover.cell_size;
            }
        }
    }
}

/// Turn each ready grid mover by 90° in the sign of the intent.
///
/// No obstruction check; rotation in place is always legal. A zero intent
/// still consumes the cooldown window.
pub fn grid_rotate_handler(world: &mut World, intent: &RotateIntent) {
    let turn = intent.turn;
    let mut query = world.query_filtered::<(&mut Heading, &mut Cooldown), With<GridMover>>();
    for (mut heading, mut cooldown) in query.iter_mut(world) {
        if !cooldown.ready() {
            continue;
        }
        cooldown.arm();

        if turn > 0.0 {
            heading.rotate_by(90.0);
        } else if turn < 0.0 {
            heading.rotate_by(-90.0);
        }
    }
}
