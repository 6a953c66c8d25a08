//! Gridstep library.
//!
//! This module exposes the controller's ECS components, resources, systems,
//! and events for use in integration tests and as a reusable library.

pub mod components;
pub mod events;
pub mod grid;
pub mod resources;
pub mod systems;
