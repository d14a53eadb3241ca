//! Simulation engine for RAIDER.
//!
//! Drives enemy agents tick by tick: flight-pattern motion, screen wrap and
//! despawn, and rate-limited firing into an external projectile factory.

pub mod agent;
pub mod clock;
pub mod engine;
pub mod sink;
pub mod systems;
pub mod targets;

pub use agent::{EnemyAgent, PatternOverrides};
pub use engine::{SimConfig, SimulationEngine};
pub use raider_core as core;
