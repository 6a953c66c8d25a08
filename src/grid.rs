//! Grid and cardinal-direction math.
//!
//! Pure, stateless helpers shared by the movement controllers. The horizontal
//! plane is X/Z; Y is vertical and passes through all snapping untouched.
//!
//! Conventions:
//! - Headings are yaw degrees about the vertical axis. 0° faces +Z (north),
//!   90° faces +X (east), i.e. positive yaw turns clockwise seen from above.
//! - "Round to nearest cell" uses round-half-away-from-zero (`f32::round`),
//!   so a position exactly between two cells snaps away from the origin.
//!
//! # Related
//!
//! - [`crate::systems::movement`] – fine-grained one-cell-step controller
//! - [`crate::systems::player`] – coarse controller using these conversions

use glam::Vec3;

/// Snap the horizontal components of a position to the nearest grid lattice
/// point. The vertical component is preserved.
pub fn snap_to_grid(pos: Vec3, cell_size: f32) -> Vec3 {
    Vec3::new(
        (pos.x / cell_size).round() * cell_size,
        pos.y,
        (pos.z / cell_size).round() * cell_size,
    )
}

/// Snap a heading to the nearest multiple of 90 degrees.
pub fn snap_heading_to_cardinal(degrees: f32) -> f32 {
    (degrees / 90.0).round() * 90.0
}

/// Convert a world position to integer grid coordinates.
pub fn world_to_grid(pos: Vec3, cell_size: f32) -> (i32, i32) {
    (
        (pos.x / cell_size).round() as i32,
        (pos.z / cell_size).round() as i32,
    )
}

/// Convert integer grid coordinates back to a world position at height `y`.
pub fn grid_to_world(ix: i32, iz: i32, cell_size: f32, y: f32) -> Vec3 {
    Vec3::new(ix as f32 * cell_size, y, iz as f32 * cell_size)
}

/// Cardinal index of a heading: 0 = north (+Z), 1 = east (+X), 2 = south,
/// 3 = west. Uses the Euclidean remainder so negative headings map into
/// [0, 4) correctly (-90° is west, index 3).
pub fn cardinal_index(degrees: f32) -> usize {
    ((degrees / 90.0).round() as i32).rem_euclid(4) as usize
}

/// Reduce a forward vector to its dominant horizontal axis as a signed unit
/// vector. Ties (|x| == |z|) resolve to the Z branch.
pub fn facing_direction(forward: Vec3) -> Vec3 {
    if forward.x.abs() > forward.z.abs() {
        Vec3::new(forward.x.signum(), 0.0, 0.0)
    } else {
        Vec3::new(0.0, 0.0, forward.z.signum())
    }
}

/// Rotate a local-space vector into world space by a yaw heading.
///
/// With the clockwise-positive convention, local +Z at heading 90° maps to
/// world +X and local +X maps to world -Z.
pub fn rotate_y(v: Vec3, degrees: f32) -> Vec3 {
    let (sin, cos) = degrees.to_radians().sin_cos();
    Vec3::new(v.x * cos + v.z * sin, v.y, -v.x * sin + v.z * cos)
}
