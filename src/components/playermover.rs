//! Coarse player movement component.
//!
//! The second controller variant: a configurable grid size and collision
//! mask, moved through [`try_move`](crate::systems::player::try_move). The
//! probe is one fixed margin *shorter* than the step so a wall exactly one
//! cell away (on the far side of the target cell) does not block the move,
//! while anything inside the target cell does.
//!
//! Unlike [`GridMover`](super::gridmover::GridMover) there is no per-entity
//! cooldown; pacing comes from the input translator.

use bevy_ecs::prelude::Component;

use crate::resources::physics::MASK_ALL;

/// Margin subtracted from the probe so it stays inside the target cell.
const PROBE_MARGIN: f32 = 0.1;

/// Configuration for the coarse grid controller.
#[derive(Component, Clone, Copy, Debug)]
pub struct PlayerMover {
    /// Step length (and cell size) in world units.
    pub grid_size: f32,
    /// Obstruction layers considered by the probe.
    pub collision_mask: u32,
    /// Vertical offset of the probe origin above the entity position.
    pub probe_height: f32,
}

impl PlayerMover {
    pub fn new(grid_size: f32) -> Self {
        Self {
            grid_size,
            collision_mask: MASK_ALL,
            probe_height: 0.0,
        }
    }

    pub fn with_mask(mut self, mask: u32) -> Self {
        self.collision_mask = mask;
        self
    }

    pub fn with_probe_height(mut self, height: f32) -> Self {
        self.probe_height = height;
        self
    }

    /// Obstruction probe length: slightly less than one step.
    pub fn probe_distance(&self) -> f32 {
        self.grid_size - PROBE_MARGIN
    }
}
