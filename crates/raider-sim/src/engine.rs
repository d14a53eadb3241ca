//! Simulation engine: owns every active enemy for a stage.
//!
//! `SimulationEngine` holds the active agents, the target world they home in
//! on, the shared clock and projectile queue, and produces a `FrameSnapshot`
//! per tick. Completely headless, so it runs deterministically under a
//! `ManualClock` and a fixed seed.

use std::rc::Rc;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use raider_core::constants::*;
use raider_core::state::{AgentId, FrameSnapshot};
use raider_core::types::{Rect, Screen};
use raider_patterns::library::PatternLibrary;

use crate::agent::EnemyAgent;
use crate::clock::{SystemClock, TimeSource};
use crate::sink::ProjectileQueue;
use crate::systems;
use crate::systems::wave_spawner::WaveSchedule;
use crate::targets::{self, Bounds, TargetHandle};

/// Configuration for starting a new stage.
#[derive(Debug, Clone, Copy)]
pub struct SimConfig {
    /// RNG seed for wave placement. Same seed = same waves.
    pub seed: u64,
    pub screen: Screen,
    /// Fire interval given to agents armed by the engine (seconds).
    pub shot_interval_secs: f64,
    /// Bullet speed given to agents armed by the engine.
    pub bullet_speed: f64,
    pub projectile_capacity: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            screen: Screen::default(),
            shot_interval_secs: DEFAULT_SHOT_INTERVAL_SECS,
            bullet_speed: DEFAULT_BULLET_SPEED,
            projectile_capacity: PROJECTILE_QUEUE_CAPACITY,
        }
    }
}

/// The simulation engine. Owns the active agents and all stage state.
pub struct SimulationEngine {
    config: SimConfig,
    agents: Vec<(AgentId, EnemyAgent)>,
    targets: World,
    player: Option<TargetHandle>,
    library: Rc<PatternLibrary>,
    clock: Rc<dyn TimeSource>,
    rng: ChaCha8Rng,
    projectiles: ProjectileQueue,
    wave_schedule: WaveSchedule,
    despawn_buffer: Vec<AgentId>,
    next_agent_id: AgentId,
    tick: u64,
    elapsed: f64,
}

impl SimulationEngine {
    /// Create an engine that gates fire on real time.
    pub fn new(config: SimConfig, library: PatternLibrary) -> Self {
        Self::with_clock(config, library, Rc::new(SystemClock::new()))
    }

    /// Create an engine whose agents all read `clock`.
    pub fn with_clock(config: SimConfig, library: PatternLibrary, clock: Rc<dyn TimeSource>) -> Self {
        Self {
            config,
            agents: Vec::new(),
            targets: World::new(),
            player: None,
            library: Rc::new(library),
            clock,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            projectiles: ProjectileQueue::with_capacity(config.projectile_capacity),
            wave_schedule: WaveSchedule::default(),
            despawn_buffer: Vec::new(),
            next_agent_id: 0,
            tick: 0,
            elapsed: 0.0,
        }
    }

    /// Spawn a default-sized enemy centred on `(x, y)`.
    pub fn spawn_enemy(&mut self, x: f64, y: f64, pattern_name: &str) -> AgentId {
        self.spawn_enemy_sized(x, y, DEFAULT_AGENT_WIDTH, DEFAULT_AGENT_HEIGHT, pattern_name)
    }

    pub fn spawn_enemy_sized(
        &mut self,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        pattern_name: &str,
    ) -> AgentId {
        let mut agent = EnemyAgent::new(
            x,
            y,
            width,
            height,
            pattern_name,
            self.config.screen,
            Rc::clone(&self.library),
        )
        .with_clock(Rc::clone(&self.clock));
        agent.set_player_target(self.player);

        let id = self.next_agent_id;
        self.next_agent_id += 1;
        self.agents.push((id, agent));
        id
    }

    /// Give an agent the engine's default shooter, feeding the shared queue.
    /// Returns false if the agent is not active.
    pub fn arm(&mut self, id: AgentId) -> bool {
        let sink = self.projectiles.clone();
        let (interval, speed) = (self.config.shot_interval_secs, self.config.bullet_speed);
        match self.agent_mut(id) {
            Some(agent) => {
                agent.set_shooter(sink, interval, speed, DEFAULT_BULLET_KIND);
                true
            }
            None => false,
        }
    }

    /// Spawn `count` enemies across the top edge with random patterns.
    pub fn spawn_wave(&mut self, count: u32, armed: bool) -> Vec<AgentId> {
        let plans = systems::wave_spawner::plan_wave(
            &mut self.rng,
            &self.library,
            self.config.screen,
            count,
        );
        let ids: Vec<AgentId> = plans
            .iter()
            .map(|plan| self.spawn_enemy(plan.x, plan.y, &plan.pattern_name))
            .collect();
        if armed {
            for &id in &ids {
                self.arm(id);
            }
        }
        tracing::info!(count, armed, tick = self.tick, "wave spawned");
        ids
    }

    pub fn set_wave_schedule(&mut self, schedule: WaveSchedule) {
        self.wave_schedule = schedule;
    }

    /// Register the player. Agents without a target, and all agents spawned
    /// later, home in on it.
    pub fn add_player(&mut self, bounds: Rect) -> TargetHandle {
        let handle = targets::spawn_target(&mut self.targets, bounds);
        self.player = Some(handle);
        for (_, agent) in &mut self.agents {
            if agent.player_target().is_none() {
                agent.set_player_target(Some(handle));
            }
        }
        handle
    }

    /// Register an additional target without making it the player.
    pub fn add_target(&mut self, bounds: Rect) -> TargetHandle {
        targets::spawn_target(&mut self.targets, bounds)
    }

    /// Update a target's bounds. Returns false if the target is gone.
    pub fn move_target(&mut self, handle: TargetHandle, bounds: Rect) -> bool {
        match self.targets.get::<&mut Bounds>(handle) {
            Ok(mut current) => {
                current.0 = bounds;
                true
            }
            Err(_) => false,
        }
    }

    /// Remove a target. Agents still holding its handle fall back to
    /// straight-down flight.
    pub fn remove_target(&mut self, handle: TargetHandle) -> bool {
        if self.player == Some(handle) {
            self.player = None;
        }
        self.targets.despawn(handle).is_ok()
    }

    /// Kill an agent from outside the engine (collision). It is removed in
    /// the next tick's cleanup pass.
    pub fn kill(&mut self, id: AgentId) -> bool {
        match self.agent_mut(id) {
            Some(agent) => {
                agent.kill();
                true
            }
            None => false,
        }
    }

    /// Advance every agent by `dt` and return the resulting snapshot.
    pub fn tick(&mut self, dt: f64) -> FrameSnapshot {
        self.run_systems(dt);
        self.tick += 1;
        self.elapsed += dt;

        systems::snapshot::build_snapshot(
            &self.agents,
            self.tick,
            self.elapsed,
            self.projectiles.drain(),
            &self.despawn_buffer,
        )
    }

    /// Run all systems in order.
    fn run_systems(&mut self, dt: f64) {
        // 1. Wave spawning
        for (count, armed) in self.wave_schedule.take_due(self.tick) {
            self.spawn_wave(count, armed);
        }
        // 2. Agents: motion, boundary, fire
        for (_, agent) in &mut self.agents {
            agent.update(dt, &self.targets);
        }
        // 3. Cleanup (despawned or killed)
        systems::cleanup::run(&mut self.agents, &mut self.despawn_buffer);
        if !self.despawn_buffer.is_empty() {
            tracing::debug!(removed = ?self.despawn_buffer, "agents despawned");
        }
    }

    // --- Accessors ---

    pub fn agent(&self, id: AgentId) -> Option<&EnemyAgent> {
        self.agents
            .iter()
            .find(|(agent_id, _)| *agent_id == id)
            .map(|(_, agent)| agent)
    }

    pub fn agent_mut(&mut self, id: AgentId) -> Option<&mut EnemyAgent> {
        self.agents
            .iter_mut()
            .find(|(agent_id, _)| *agent_id == id)
            .map(|(_, agent)| agent)
    }

    /// Agents in the active collection, including any killed since the last tick.
    pub fn agent_count(&self) -> usize {
        self.agents.len()
    }

    pub fn agent_ids(&self) -> Vec<AgentId> {
        self.agents.iter().map(|(id, _)| *id).collect()
    }

    pub fn player(&self) -> Option<TargetHandle> {
        self.player
    }

    pub fn library(&self) -> &Rc<PatternLibrary> {
        &self.library
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn current_tick(&self) -> u64 {
        self.tick
    }
}
