//! Wave spawning system: places enemy waves along the top edge.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use raider_core::constants::{DEFAULT_AGENT_HEIGHT, DEFAULT_AGENT_WIDTH};
use raider_core::types::Screen;
use raider_patterns::library::PatternLibrary;

/// A single wave definition.
#[derive(Debug, Clone)]
pub struct WaveEntry {
    /// Tick at which this wave spawns.
    pub spawn_at_tick: u64,
    pub count: u32,
    /// Whether the wave's enemies shoot.
    pub armed: bool,
    /// Whether this wave has already been spawned.
    pub spawned: bool,
}

/// The wave schedule for a stage.
#[derive(Debug, Clone, Default)]
pub struct WaveSchedule {
    pub waves: Vec<WaveEntry>,
}

impl WaveSchedule {
    /// Mark every wave due at `current_tick` as spawned and return
    /// `(count, armed)` for each.
    pub fn take_due(&mut self, current_tick: u64) -> Vec<(u32, bool)> {
        self.waves
            .iter_mut()
            .filter(|wave| !wave.spawned && current_tick >= wave.spawn_at_tick)
            .map(|wave| {
                wave.spawned = true;
                (wave.count, wave.armed)
            })
            .collect()
    }
}

/// Where and how to spawn one enemy.
#[derive(Debug, Clone, PartialEq)]
pub struct SpawnPlan {
    /// Centre of the enemy's box.
    pub x: f64,
    pub y: f64,
    pub pattern_name: String,
}

/// Pick `count` spawn points across the top edge, each with a random pattern
/// from `library`. Deterministic for a given RNG state. An empty library
/// yields the default straight-down pattern.
pub fn plan_wave(
    rng: &mut ChaCha8Rng,
    library: &PatternLibrary,
    screen: Screen,
    count: u32,
) -> Vec<SpawnPlan> {
    let names: Vec<&str> = library.names().collect();
    let half_width = DEFAULT_AGENT_WIDTH / 2.0;
    let max_x = (screen.width - half_width).max(half_width + 1.0);

    (0..count)
        .map(|_| {
            let pattern_name = if names.is_empty() {
                raider_core::constants::DEFAULT_PATTERN_NAME.to_string()
            } else {
                names[rng.gen_range(0..names.len())].to_string()
            };
            SpawnPlan {
                x: rng.gen_range(half_width..max_x),
                y: DEFAULT_AGENT_HEIGHT,
                pattern_name,
            }
        })
        .collect()
}
