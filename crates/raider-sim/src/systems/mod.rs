//! Per-tick systems that operate on agents and the engine's collections.
//!
//! Systems are plain functions. They do not own state; agents and the
//! engine do.

pub mod boundary;
pub mod cleanup;
pub mod fire_control;
pub mod snapshot;
pub mod wave_spawner;
