//! Event types exchanged across systems.
//!
//! Events provide the decoupled publish/subscribe path between intent
//! producers (input translator, UI glue, tests) and the movement
//! controllers. Producers publish without knowing who listens; publishing
//! with no subscribed listeners is a silent no-op.
//!
//! Submodules:
//! - [`hub`] – ordered subscribe/unsubscribe/publish dispatch
//! - [`intent`] – move and rotate intents raised toward the controllers
//! - [`blocked`] – buffered notifications about obstructed movement
//!
//! See each submodule for concrete event data and semantics.
pub mod blocked;
pub mod hub;
pub mod intent;
