//! ECS components for grid-bound actors.
//!
//! This module groups the component types attached to entities that move on
//! the grid. Components define data only; behavior lives in
//! [`crate::systems`].
//!
//! Submodules overview:
//! - [`cooldown`] – countdown gating acceptance of new intents
//! - [`gridmover`] – fine-grained one-cell-step movement configuration
//! - [`heading`] – yaw orientation in degrees with cardinal helpers
//! - [`playermover`] – coarse controller with collision mask and margin probe
//! - [`worldposition`] – world-space position of an entity

pub mod cooldown;
pub mod gridmover;
pub mod heading;
pub mod playermover;
pub mod worldposition;
