//! Per-frame key input resource.
//!
//! Captures the subset of key state the controllers care about and exposes
//! it to systems via the [`InputState`] resource. The crate never polls
//! hardware: the embedding host pushes raw key transitions through
//! [`InputState::begin_frame`], [`InputState::key_down`] and
//! [`InputState::key_up`] each frame, and the translator system in
//! [`crate::systems::input`] turns edges into intents.
//!
//! Defaults use WASD for movement and Q/E for turning.

use bevy_ecs::prelude::*;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Host keys the bindings can refer to.
///
/// A deliberately small set; extend as bindings need it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyCode {
    W,
    A,
    S,
    D,
    Q,
    E,
    I,
    Up,
    Down,
    Left,
    Right,
    Space,
    Enter,
    Escape,
    Tab,
}

impl FromStr for KeyCode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "w" => Ok(KeyCode::W),
            "a" => Ok(KeyCode::A),
            "s" => Ok(KeyCode::S),
            "d" => Ok(KeyCode::D),
            "q" => Ok(KeyCode::Q),
            "e" => Ok(KeyCode::E),
            "i" => Ok(KeyCode::I),
            "up" => Ok(KeyCode::Up),
            "down" => Ok(KeyCode::Down),
            "left" => Ok(KeyCode::Left),
            "right" => Ok(KeyCode::Right),
            "space" => Ok(KeyCode::Space),
            "enter" => Ok(KeyCode::Enter),
            "escape" => Ok(KeyCode::Escape),
            "tab" => Ok(KeyCode::Tab),
            other => Err(format!("Unknown key name: {:?}", other)),
        }
    }
}

/// Action-to-key map, loaded from the `[bindings]` config section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBindings {
    pub move_forward: KeyCode,
    pub move_backward: KeyCode,
    pub strafe_left: KeyCode,
    pub strafe_right: KeyCode,
    pub turn_left: KeyCode,
    pub turn_right: KeyCode,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            move_forward: KeyCode::W,
            move_backward: KeyCode::S,
            strafe_left: KeyCode::A,
            strafe_right: KeyCode::D,
            turn_left: KeyCode::Q,
            turn_right: KeyCode::E,
        }
    }
}

/// Boolean key state with an associated key binding.
#[derive(Debug, Clone, Copy)]
pub struct BoolState {
    /// Whether the key is currently held.
    pub active: bool,
    /// Whether the key went down this frame.
    pub just_pressed: bool,
    /// Whether the key went up this frame.
    pub just_released: bool,
    /// The key bound to this action.
    pub key_binding: KeyCode,
}

impl BoolState {
    fn bound_to(key: KeyCode) -> Self {
        Self {
            active: false,
            just_pressed: false,
            just_released: false,
            key_binding: key,
        }
    }
}

/// Resource capturing the per-frame key state relevant to grid movement.
///
/// Besides the six action states it carries the enable gates and the
/// translator cooldown recovered from the original input manager: while
/// `timer` is positive no intents are emitted, and any emission re-arms it
/// to `cooldown`.
#[derive(Resource, Debug, Clone)]
pub struct InputState {
    pub move_forward: BoolState,
    pub move_backward: BoolState,
    pub strafe_left: BoolState,
    pub strafe_right: BoolState,
    pub turn_left: BoolState,
    pub turn_right: BoolState,
    /// Gate for movement intents.
    pub allow_move: bool,
    /// Gate for rotation intents.
    pub allow_rotate: bool,
    /// Seconds between emitted intents.
    pub cooldown: f32,
    /// Seconds left until the next intent may be emitted.
    pub timer: f32,
}

impl Default for InputState {
    fn default() -> Self {
        Self::with_bindings(&KeyBindings::default())
    }
}

impl InputState {
    pub fn with_bindings(bindings: &KeyBindings) -> Self {
        Self {
            move_forward: BoolState::bound_to(bindings.move_forward),
            move_backward: BoolState::bound_to(bindings.move_backward),
            strafe_left: BoolState::bound_to(bindings.strafe_left),
            strafe_right: BoolState::bound_to(bindings.strafe_right),
            turn_left: BoolState::bound_to(bindings.turn_left),
            turn_right: BoolState::bound_to(bindings.turn_right),
            allow_move: true,
            allow_rotate: true,
            cooldown: 0.1,
            timer: 0.0,
        }
    }

    pub fn with_cooldown(mut self, cooldown: f32) -> Self {
        self.cooldown = cooldown;
        self
    }

    fn states_mut(&mut self) -> [&mut BoolState; 6] {
        [
            &mut self.move_forward,
            &mut self.move_backward,
            &mut self.strafe_left,
            &mut self.strafe_right,
            &mut self.turn_left,
            &mut self.turn_right,
        ]
    }

    /// Clear the per-frame edge flags. Call once per frame before pushing
    /// key transitions.
    pub fn begin_frame(&mut self) {
        for state in self.states_mut() {
            state.just_pressed = false;
            state.just_released = false;
        }
    }

    /// Report a key going down. Sets `just_pressed` only on the transition.
    pub fn key_down(&mut self, key: KeyCode) {
        for state in self.states_mut() {
            if state.key_binding == key && !state.active {
                state.active = true;
                state.just_pressed = true;
            }
        }
    }

    /// Report a key going up.
    pub fn key_up(&mut self, key: KeyCode) {
        for state in self.states_mut() {
            if state.key_binding == key && state.active {
                state.active = false;
                state.just_released = true;
            }
        }
    }

    /// Disable both movement and rotation (menus, cutscenes).
    pub fn disable_all(&mut self) {
        self.allow_move = false;
        self.allow_rotate = false;
    }

    /// Re-enable movement and rotation.
    pub fn enable_all(&mut self) {
        self.allow_move = true;
        self.allow_rotate = true;
    }
}
