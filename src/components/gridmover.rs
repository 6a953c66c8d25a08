//! Fine-grained grid movement component.
//!
//! Entities carrying [`GridMover`] (together with
//! [`WorldPosition`](super::worldposition::WorldPosition),
//! [`Heading`](super::heading::Heading) and
//! [`Cooldown`](super::cooldown::Cooldown)) step exactly one cell per
//! accepted [`MoveIntent`](crate::events::intent::MoveIntent) and turn in
//! fixed 90° increments per
//! [`RotateIntent`](crate::events::intent::RotateIntent).
//!
//! The obstruction probe reaches slightly beyond one cell so a wall sitting
//! on the far cell boundary is still detected.
//!
//! # Related
//!
//! - [`crate::systems::movement`] – the hub handlers that react to intents
//! - [`crate::systems::spawn`] – lattice alignment when the component is added

use bevy_ecs::prelude::Component;

/// Probe length as a fraction of the cell size.
const PROBE_SCALE: f32 = 1.1;

/// Configuration for one-cell-step grid movement.
#[derive(Component, Clone, Copy, Debug)]
pub struct GridMover {
    /// Edge length of one grid cell in world units.
    pub cell_size: f32,
}

impl GridMover {
    pub fn new(cell_size: f32) -> Self {
        Self { cell_size }
    }

    /// Obstruction probe length: slightly over one cell.
    pub fn probe_distance(&self) -> f32 {
        self.cell_size * PROBE_SCALE
    }
}
