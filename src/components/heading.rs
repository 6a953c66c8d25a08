use bevy_ecs::prelude::Component;
use glam::Vec3;

use crate::grid;

/// Yaw about the vertical axis in degrees. 0° faces +Z (north), 90° faces
/// +X (east). The value accumulates freely; use [`Heading::cardinal_index`]
/// or [`grid::snap_heading_to_cardinal`] when a discrete direction is needed.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Heading {
    pub degrees: f32,
}

impl Heading {
    pub fn new(degrees: f32) -> Self {
        Heading { degrees }
    }

    /// Cardinal index in [0, 4): 0 = north, 1 = east, 2 = south, 3 = west.
    pub fn cardinal_index(&self) -> usize {
        grid::cardinal_index(self.degrees)
    }

    /// World-space forward vector for this heading.
    pub fn forward(&self) -> Vec3 {
        grid::rotate_y(Vec3::Z, self.degrees)
    }

    /// Transform a local-space direction into world space.
    pub fn local_to_world(&self, local: Vec3) -> Vec3 {
        grid::rotate_y(local, self.degrees)
    }

    pub fn rotate_by(&mut self, degrees: f32) {
        self.degrees += degrees;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cardinal_index_wraps_negative() {
        assert_eq!(Heading::new(-90.0).cardinal_index(), 3);
        assert_eq!(Heading::new(450.0).cardinal_index(), 1);
    }

    #[test]
    fn forward_follows_heading() {
        let east = Heading::new(90.0).forward();
        assert!((east.x - 1.0).abs() < 1e-4);
        assert!(east.z.abs() < 1e-4);
    }
}
