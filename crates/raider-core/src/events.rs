//! Values the engine hands to external collaborators.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A projectile to be created by the external projectile factory.
/// The engine does not track the projectile afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpawnEvent {
    pub x: f64,
    pub y: f64,
    /// Positive values travel downwards.
    pub speed: f64,
    pub kind: String,
}

/// Why a projectile sink refused a spawn.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpawnError {
    #[error("projectile queue is full ({capacity} pending)")]
    QueueFull { capacity: usize },
    #[error("projectile sink rejected spawn: {0}")]
    Rejected(String),
}
