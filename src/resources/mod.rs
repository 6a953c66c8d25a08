//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution: input state, timing, configuration
//! and the obstruction probe. Each submodule documents the semantics and
//! intended usage of its resource(s).
//!
//! Overview
//! - `config` – settings loaded from the INI configuration file
//! - `input` – per-frame key state pushed in by the host, plus key bindings
//! - `physics` – opaque obstruction probe and the bundled AABB implementation
//! - `worldtime` – simulation time and delta
pub mod config;
pub mod input;
pub mod physics;
pub mod worldtime;
