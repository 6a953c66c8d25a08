//! Controller systems.
//!
//! This module groups the ECS systems and intent handlers that advance the
//! grid movement simulation.
//!
//! Submodules overview
//! - [`cooldown`] – count per-actor intent cooldowns toward ready
//! - [`input`] – translate raw key edges into intent events
//! - [`movement`] – fine-grained one-cell-step handlers with per-axis probes
//! - [`player`] – coarse full-cell controller with masked probe
//! - [`spawn`] – snap newly added movers onto the lattice
//! - [`time`] – update simulation time and delta

pub mod cooldown;
pub mod input;
pub mod movement;
pub mod player;
pub mod spawn;
pub mod time;
