//! Frame snapshot: the visible enemy state handed to rendering and collision.

use serde::{Deserialize, Serialize};

use crate::enums::PatternKind;
use crate::events::SpawnEvent;
use crate::types::Rect;

/// Stable identifier for an agent owned by the engine.
pub type AgentId = u32;

/// One live agent as seen by the renderer and the collision system.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentView {
    pub id: AgentId,
    pub bounds: Rect,
    pub pattern: String,
    pub kind: PatternKind,
    pub angle: f64,
    pub armed: bool,
}

/// Everything that changed during one engine tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub tick: u64,
    /// Accumulated simulation time.
    pub elapsed: f64,
    pub agents: Vec<AgentView>,
    /// Projectiles requested this tick, in agent update order.
    pub projectiles: Vec<SpawnEvent>,
    /// Agents removed this tick (boundary despawn or external kill).
    pub despawned: Vec<AgentId>,
}
