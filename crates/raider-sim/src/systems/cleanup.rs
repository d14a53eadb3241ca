//! Cleanup system: compacts the active collection after all agents updated.

use raider_core::state::AgentId;

use crate::agent::EnemyAgent;

/// Remove dead agents, recording their ids in `despawn_buffer`.
/// Runs as its own pass so no agent is removed while the update loop is
/// still iterating. The buffer is cleared first and reused across ticks.
pub fn run(agents: &mut Vec<(AgentId, EnemyAgent)>, despawn_buffer: &mut Vec<AgentId>) {
    despawn_buffer.clear();

    agents.retain(|(id, agent)| {
        if agent.is_alive() {
            true
        } else {
            despawn_buffer.push(*id);
            false
        }
    });
}
