//! Obstruction probe boundary and a bundled static-collider implementation.
//!
//! The movement controllers never inspect world geometry directly. They ask
//! an opaque predicate: "does a ray from here, in this direction, hit
//! anything within this distance, on these layers?" A host engine answers
//! with its own physics query service by implementing [`ObstructionProbe`];
//! headless runs and tests use the bundled [`StaticColliders`].
//!
//! # Layers
//!
//! Colliders carry a `u32` layer bitmask. A probe with mask `m` only sees
//! colliders whose layer intersects `m`. [`MASK_ALL`] sees everything.

use bevy_ecs::prelude::Resource;
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Mask matching every collision layer.
pub const MASK_ALL: u32 = u32::MAX;

/// Details of a probe hit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// Distance from the origin to the hit point.
    pub distance: f32,
}

/// Opaque ray/probe query boundary.
///
/// Implementations must return the closest hit within `max_distance`, or
/// `None` when the segment is clear. Directions are expected to be unit
/// length; non-unit directions are normalized by implementations.
pub trait ObstructionProbe: Send + Sync {
    fn cast(&self, origin: Vec3, direction: Vec3, max_distance: f32, mask: u32) -> Option<RayHit>;

    /// Hit/no-hit convenience used by the controllers.
    fn is_blocked(&self, origin: Vec3, direction: Vec3, max_distance: f32, mask: u32) -> bool {
        self.cast(origin, direction, max_distance, mask).is_some()
    }
}

/// Resource wrapping whichever probe implementation the host injected.
#[derive(Resource)]
pub struct PhysicsWorld {
    probe: Box<dyn ObstructionProbe>,
}

impl PhysicsWorld {
    pub fn new(probe: impl ObstructionProbe + 'static) -> Self {
        Self {
            probe: Box::new(probe),
        }
    }

    pub fn cast(
        &self,
        origin: Vec3,
        direction: Vec3,
        max_distance: f32,
        mask: u32,
    ) -> Option<RayHit> {
        self.probe.cast(origin, direction, max_distance, mask)
    }

    pub fn is_blocked(&self, origin: Vec3, direction: Vec3, max_distance: f32, mask: u32) -> bool {
        self.probe.is_blocked(origin, direction, max_distance, mask)
    }
}

/// Axis-aligned box collider in world space.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
    /// Collision layer bitmask. Defaults to every layer.
    #[serde(default = "default_layer")]
    pub layer: u32,
}

fn default_layer() -> u32 {
    MASK_ALL
}

impl Aabb {
    /// Build from center and full size, normalizing negative extents.
    pub fn from_center_size(center: Vec3, size: Vec3) -> Self {
        let half = (size * 0.5).abs();
        Self {
            min: center - half,
            max: center + half,
            layer: MASK_ALL,
        }
    }

    pub fn with_layer(mut self, layer: u32) -> Self {
        self.layer = layer;
        self
    }
}

/// Bundled probe implementation over a flat list of AABBs.
///
/// Suits the headless demo and tests; a host engine would typically provide
/// its own accelerated query service instead.
#[derive(Default, Debug, Clone)]
pub struct StaticColliders {
    boxes: Vec<Aabb>,
}

impl StaticColliders {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, aabb: Aabb) {
        self.boxes.push(aabb);
    }

    /// Fill one grid cell with a full-height collider.
    pub fn block_cell(&mut self, ix: i32, iz: i32, cell_size: f32, layer: u32) {
        let center = crate::grid::grid_to_world(ix, iz, cell_size, 0.0);
        let aabb = Aabb::from_center_size(center, Vec3::new(cell_size, 4.0, cell_size))
            .with_layer(layer);
        self.push(aabb);
    }

    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    /// Load a collider layout from a JSON array of AABBs.
    ///
    /// ```json
    /// [
    ///   { "min": [1.0, 0.0, 1.0], "max": [3.0, 4.0, 3.0], "layer": 1 },
    ///   { "min": [-3.0, 0.0, 1.0], "max": [-1.0, 4.0, 3.0] }
    /// ]
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self, String> {
        let boxes: Vec<Aabb> = serde_json::from_str(json)
            .map_err(|e| format!("Failed to parse collider layout: {}", e))?;
        Ok(Self { boxes })
    }
}

impl ObstructionProbe for StaticColliders {
    fn cast(&self, origin: Vec3, direction: Vec3, max_distance: f32, mask: u32) -> Option<RayHit> {
        let dir = direction.normalize_or_zero();
        if dir == Vec3::ZERO {
            return None;
        }

        let mut closest: Option<f32> = None;
        for aabb in self.boxes.iter().filter(|b| b.layer & mask != 0) {
            // Ray-AABB intersection (slab method)
            let inv_dir = Vec3::new(
                if dir.x.abs() > 1e-6 { 1.0 / dir.x } else { f32::MAX },
                if dir.y.abs() > 1e-6 { 1.0 / dir.y } else { f32::MAX },
                if dir.z.abs() > 1e-6 { 1.0 / dir.z } else { f32::MAX },
            );

            let t1 = (aabb.min.x - origin.x) * inv_dir.x;
            let t2 = (aabb.max.x - origin.x) * inv_dir.x;
            let t3 = (aabb.min.y - origin.y) * inv_dir.y;
            let t4 = (aabb.max.y - origin.y) * inv_dir.y;
            let t5 = (aabb.min.z - origin.z) * inv_dir.z;
            let t6 = (aabb.max.z - origin.z) * inv_dir.z;

            let tmin = t1.min(t2).max(t3.min(t4)).max(t5.min(t6));
            let tmax = t1.max(t2).min(t3.max(t4)).min(t5.max(t6));

            if tmax >= 0.0 && tmin <= tmax && tmin <= max_distance {
                let t = if tmin >= 0.0 { tmin } else { tmax };
                if t >= 0.0 && t <= max_distance {
                    closest = Some(closest.map_or(t, |c: f32| c.min(t)));
                }
            }
        }

        closest.map(|distance| RayHit { distance })
    }
}
