//! Flight patterns for RAIDER enemies.
//!
//! Holds the named parameter bags that configure each pattern, resolves them
//! into typed patterns with defaults filled in, and evaluates per-tick motion.

pub mod library;
pub mod motion;

pub use library::{FlightPattern, Oscillation, PatternLibrary, PatternParameters};
pub use motion::{evaluate, MotionState, MotionUpdate};
pub use raider_core as core;

#[cfg(test)]
mod tests;
