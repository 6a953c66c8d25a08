//! Spawn alignment system.
//!
//! [`snap_spawned_movers`] processes entities that just gained a mover
//! component and snaps their position to the grid lattice and their heading
//! to the nearest cardinal, so every actor starts aligned regardless of how
//! it was placed.

use bevy_ecs::prelude::*;

use crate::components::gridmover::GridMover;
use crate::components::heading::Heading;
use crate::components::playermover::PlayerMover;
use crate::components::worldposition::WorldPosition;
use crate::grid;

/// Snap newly added movers onto the lattice and a cardinal heading.
pub fn snap_spawned_movers(
    mut query: Query<
        (
            &mut WorldPosition,
            &mut Heading,
            Option<&GridMover>,
            Option<&PlayerMover>,
        ),
        Or<(Added<GridMover>, Added<PlayerMover>)>,
    >,
) {
    for (mut position, mut heading, grid_mover, player_mover) in query.iter_mut() {
        let cell_size = match (grid_mover, player_mover) {
            (Some(mover), _) => mover.cell_size,
            (None, Some(mover)) => mover.grid_size,
            (None, None) => continue,
        };
        position.pos = grid::snap_to_grid(position.pos, cell_size);
        heading.degrees = grid::snap_heading_to_cardinal(heading.degrees);
    }
}
