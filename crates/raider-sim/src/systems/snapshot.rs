//! Snapshot builder: converts the active agents into a `FrameSnapshot`.

use raider_core::events::SpawnEvent;
use raider_core::state::{AgentId, AgentView, FrameSnapshot};

use crate::agent::EnemyAgent;

/// Build the per-tick snapshot handed to rendering and collision.
pub fn build_snapshot(
    agents: &[(AgentId, EnemyAgent)],
    tick: u64,
    elapsed: f64,
    projectiles: Vec<SpawnEvent>,
    despawned: &[AgentId],
) -> FrameSnapshot {
    let agents = agents
        .iter()
        .filter(|(_, agent)| agent.is_alive())
        .map(|(id, agent)| AgentView {
            id: *id,
            bounds: agent.bounds(),
            pattern: agent.pattern_name().to_string(),
            kind: agent.pattern_kind(),
            angle: agent.angle(),
            armed: agent.fire_state().has_shooter,
        })
        .collect();

    FrameSnapshot {
        tick,
        elapsed,
        agents,
        projectiles,
        despawned: despawned.to_vec(),
    }
}
