// Gates how often an actor accepts move/rotate intents.
use bevy_ecs::prelude::Component;

#[derive(Component, Clone, Copy, Debug)]
pub struct Cooldown {
    /// Seconds left before the next intent is accepted.
    pub remaining: f32,
    /// Window length re-armed on every accepted intent.
    pub duration: f32,
}

impl Cooldown {
    pub fn new(duration: f32) -> Self {
        Cooldown {
            remaining: 0.0,
            duration,
        }
    }

    /// Whether an intent would currently be accepted.
    pub fn ready(&self) -> bool {
        self.remaining <= 0.0
    }

    /// Restart the window. Called for every accepted intent, including ones
    /// whose movement ends up fully blocked.
    pub fn arm(&mut self) {
        self.remaining = self.duration;
    }
}
