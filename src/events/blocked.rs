//! Blocked-movement notifications.
//!
//! Obstruction is a normal outcome, not an error: the controller skips the
//! translation, logs a notice, and writes a [`MoveBlocked`] message so other
//! systems (sound cues, UI feedback) can react on their own schedule.
//!
//! The queue follows the bevy_ecs `Messages` protocol: writers enqueue
//! during the frame, [`update_blocked_messages`] advances the queue once per
//! frame so readers see them.

use bevy_ecs::message::Message;
use bevy_ecs::prelude::*;
use glam::Vec3;

/// Message written whenever a probe suppressed a translation.
#[derive(Message, Debug, Clone, Copy)]
pub struct MoveBlocked {
    /// The actor whose movement was suppressed.
    pub entity: Entity,
    /// World-space direction the actor tried to move in.
    pub direction: Vec3,
}

/// Advance the `Messages<MoveBlocked>` queue.
///
/// Run once per frame, after the movement handlers.
pub fn update_blocked_messages(mut messages: ResMut<Messages<MoveBlocked>>) {
    messages.update();
}
