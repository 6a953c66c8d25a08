//! Input translation system.
//!
//! [`translate_input`] is the single component that turns raw key state into
//! intent events. The host pushes key transitions into
//! [`InputState`](crate::resources::input::InputState) each frame; this
//! system reads the edges and republishes them as
//! [`MoveIntent`](crate::events::intent::MoveIntent) and
//! [`RotateIntent`](crate::events::intent::RotateIntent) through the hub,
//! queued so they dispatch at the schedule's next command application.
//!
//! Pacing: while the translator timer is positive nothing is emitted, so
//! holding a key down cannot spam intents. Movement keys form an else-if
//! chain (one move intent per frame); rotation keys form their own chain, so
//! a move and a rotate may be emitted in the same frame, as in the input
//! manager this consolidates.

use bevy_ecs::prelude::*;

use crate::events::hub;
use crate::events::intent::{MoveIntent, RotateIntent};
use crate::resources::input::InputState;
use crate::resources::worldtime::WorldTime;

/// Translate fresh key presses into intent events, subject to the
/// translator cooldown and the allow gates.
pub fn translate_input(
    world_time: Res<WorldTime>,
    mut input: ResMut<InputState>,
    mut commands: Commands,
) {
    if input.timer > 0.0 {
        input.timer -= world_time.delta;
        if input.timer > 0.0 {
            return;
        }
    }

    let mut raised = false;

    if input.allow_move {
        if input.move_forward.just_pressed {
            hub::publish_deferred(&mut commands, MoveIntent::forward());
            raised = true;
        } else if input.move_backward.just_pressed {
            hub::publish_deferred(&mut commands, MoveIntent::backward());
            raised = true;
        } else if input.strafe_left.just_pressed {
            hub::publish_deferred(&mut commands, MoveIntent::strafe_left());
            raised = true;
        } else if input.strafe_right.just_pressed {
            hub::publish_deferred(&mut commands, MoveIntent::strafe_right());
            raised = true;
        }
    }

    if input.allow_rotate {
        if input.turn_left.just_pressed {
            hub::publish_deferred(&mut commands, RotateIntent::left());
            raised = true;
        } else if input.turn_right.just_pressed {
            hub::publish_deferred(&mut commands, RotateIntent::right());
            raised = true;
        }
    }

    if raised {
        input.timer = input.cooldown;
    }
}
