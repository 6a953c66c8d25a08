//! Move and rotate intent events.
//!
//! These are the two channels of the intent hub: a 2D move vector and a
//! signed rotation scalar. Any producer can publish them through
//! [`hub::publish`](super::hub::publish) (or
//! [`hub::publish_deferred`](super::hub::publish_deferred) from a system) —
//! the keyboard translator in [`crate::systems::input`], host UI buttons,
//! or tests — and every subscribed listener receives them synchronously, in
//! subscription order. [`hub::subscribe`](super::hub::subscribe) returns
//! the handle used to unsubscribe.
//!
//! The constructors mirror the discrete producer surface (walk
//! forward/backward/left/right, turn left/right) so callers do not hand-roll
//! component values.

/// A request to move one cell, relative to the actor's current orientation.
///
/// Components are in {-1, 0, 1}: `z` is the forward axis (+1 forward, -1
/// backward), `x` the strafe axis (+1 right, -1 left). Both axes may be
/// non-zero in the same intent and are evaluated independently by the
/// controllers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveIntent {
    /// Strafe axis component.
    pub x: f32,
    /// Forward axis component.
    pub z: f32,
}

impl MoveIntent {
    pub fn new(x: f32, z: f32) -> Self {
        Self { x, z }
    }

    pub fn forward() -> Self {
        Self::new(0.0, 1.0)
    }

    pub fn backward() -> Self {
        Self::new(0.0, -1.0)
    }

    pub fn strafe_left() -> Self {
        Self::new(-1.0, 0.0)
    }

    pub fn strafe_right() -> Self {
        Self::new(1.0, 0.0)
    }
}

/// A request to turn 90°. `turn` is in {-1, 0, 1}: positive turns right
/// (clockwise seen from above), negative turns left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotateIntent {
    /// Turn direction.
    pub turn: f32,
}

impl RotateIntent {
    pub fn new(turn: f32) -> Self {
        Self { turn }
    }

    pub fn left() -> Self {
        Self::new(-1.0)
    }

    pub fn right() -> Self {
        Self::new(1.0)
    }
}
