//! Enemy agent: one enemy's position, pattern state and weapon.
//!
//! `update` runs one tick in a fixed order: motion, boundary, fire. Pattern
//! and shooter changes made between ticks take effect on the next tick.

use std::fmt;
use std::rc::Rc;

use glam::DVec2;

use raider_core::constants::DEFAULT_AGENT_SPEED;
use raider_core::enums::PatternKind;
use raider_core::types::{Rect, Screen};
use raider_patterns::library::{FlightPattern, PatternLibrary, PatternParameters};
use raider_patterns::motion::{self, MotionState};

use crate::clock::{SystemClock, TimeSource};
use crate::sink::ProjectileSink;
use crate::systems::boundary;
use crate::systems::fire_control::FireState;
use crate::targets::{TargetHandle, TargetLookup};

/// Optional changes applied alongside a pattern switch.
#[derive(Debug, Clone, Default)]
pub struct PatternOverrides {
    /// New base speed (px/tick).
    pub speed: Option<f64>,
    pub player_target: Option<TargetHandle>,
    /// Replacement pattern library.
    pub library: Option<Rc<PatternLibrary>>,
}

pub struct EnemyAgent {
    bounds: Rect,
    /// Fixed at creation.
    base_position: DVec2,
    angle: f64,
    elapsed_time: f64,
    speed: f64,
    screen: Screen,

    pattern_name: String,
    library: Rc<PatternLibrary>,
    params: PatternParameters,
    kind: PatternKind,
    pattern: FlightPattern,
    player_target: Option<TargetHandle>,

    fire: FireState,
    sink: Option<Box<dyn ProjectileSink>>,
    clock: Rc<dyn TimeSource>,
    alive: bool,
}

impl EnemyAgent {
    /// Create an agent whose box of `width` x `height` is centred on `(x, y)`.
    /// `(x, y)` becomes the base position for oscillating and rotational
    /// patterns. Uses a [`SystemClock`] until [`EnemyAgent::with_clock`].
    pub fn new(
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        pattern_name: impl Into<String>,
        screen: Screen,
        library: Rc<PatternLibrary>,
    ) -> Self {
        let base_position = DVec2::new(x, y);
        let mut agent = Self {
            bounds: Rect::from_center(base_position, DVec2::new(width, height)),
            base_position,
            angle: 0.0,
            elapsed_time: 0.0,
            speed: DEFAULT_AGENT_SPEED,
            screen,
            pattern_name: pattern_name.into(),
            library,
            params: PatternParameters::default(),
            kind: PatternKind::Unknown,
            pattern: FlightPattern::Fallback,
            player_target: None,
            fire: FireState::default(),
            sink: None,
            clock: Rc::new(SystemClock::new()),
            alive: true,
        };
        agent.resolve_pattern();
        agent
    }

    /// Replace the time source used for fire gating.
    pub fn with_clock(mut self, clock: Rc<dyn TimeSource>) -> Self {
        self.clock = clock;
        self
    }

    /// Switch to another named pattern. Elapsed time, angle and base
    /// position carry over so motion stays continuous.
    pub fn set_flight_pattern(&mut self, pattern_name: impl Into<String>, overrides: PatternOverrides) {
        self.pattern_name = pattern_name.into();
        if let Some(speed) = overrides.speed {
            self.speed = speed;
        }
        if let Some(target) = overrides.player_target {
            self.player_target = Some(target);
        }
        if let Some(library) = overrides.library {
            self.library = library;
        }
        self.resolve_pattern();
    }

    /// Arm the agent. `interval_secs` is the minimum wall-clock gap between
    /// shots; `bullet_speed` is positive for downward bullets.
    pub fn set_shooter(
        &mut self,
        sink: impl ProjectileSink + 'static,
        interval_secs: f64,
        bullet_speed: f64,
        bullet_kind: impl Into<String>,
    ) {
        self.sink = Some(Box::new(sink));
        self.fire.shot_interval = interval_secs;
        self.fire.bullet_speed = bullet_speed;
        self.fire.bullet_kind = bullet_kind.into();
        self.fire.has_shooter = true;
    }

    /// Disarm the agent. The last shot time is kept.
    pub fn clear_shooter(&mut self) {
        self.sink = None;
        self.fire.has_shooter = false;
    }

    pub fn set_player_target(&mut self, target: Option<TargetHandle>) {
        self.player_target = target;
    }

    pub fn set_speed(&mut self, speed: f64) {
        self.speed = speed;
    }

    /// Mark the agent dead, e.g. after an external collision.
    pub fn kill(&mut self) {
        self.alive = false;
    }

    /// Advance one tick of `dt`. Dead agents do nothing.
    pub fn update(&mut self, dt: f64, targets: &dyn TargetLookup) {
        if !self.alive {
            return;
        }

        let target = match self.pattern {
            FlightPattern::ApproachPlayer { .. } => {
                self.player_target.and_then(|handle| targets.bounds_of(handle))
            }
            _ => None,
        };
        let update = motion::evaluate(&self.motion_state(), &self.pattern, target, dt);
        self.elapsed_time = update.elapsed;
        self.angle = update.angle;
        self.bounds = self.bounds.with_origin(update.position);

        let outcome = boundary::apply(self.bounds, self.screen, self.kind);
        self.bounds = self.bounds.with_origin(outcome.origin);
        if outcome.despawn {
            tracing::debug!(
                pattern = %self.pattern_name,
                x = self.bounds.left(),
                y = self.bounds.top(),
                "enemy left the play area"
            );
            self.alive = false;
            return;
        }

        self.fire_if_ready();
    }

    fn fire_if_ready(&mut self) {
        let Some(sink) = self.sink.as_mut() else {
            return;
        };
        let now = self.clock.now_secs();
        let Some(event) = self.fire.try_fire(self.bounds, now) else {
            return;
        };
        tracing::trace!(x = event.x, y = event.y, kind = %event.kind, "enemy fired");
        if let Err(err) = sink.spawn(event) {
            tracing::warn!(%err, pattern = %self.pattern_name, "projectile spawn failed");
        }
    }

    fn resolve_pattern(&mut self) {
        self.params = self.library.resolve(&self.pattern_name);
        self.kind = self.params.kind_for(&self.pattern_name);
        self.pattern = FlightPattern::resolve(self.kind, &self.params);
    }

    fn motion_state(&self) -> MotionState {
        MotionState {
            position: self.bounds.origin,
            size: self.bounds.size,
            base: self.base_position,
            angle: self.angle,
            elapsed: self.elapsed_time,
            speed: self.speed,
        }
    }

    // --- Accessors ---

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Top-left corner of the bounding box.
    pub fn position(&self) -> DVec2 {
        self.bounds.origin
    }

    pub fn base_position(&self) -> DVec2 {
        self.base_position
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn elapsed_time(&self) -> f64 {
        self.elapsed_time
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn pattern_name(&self) -> &str {
        &self.pattern_name
    }

    pub fn pattern_kind(&self) -> PatternKind {
        self.kind
    }

    pub fn pattern(&self) -> &FlightPattern {
        &self.pattern
    }

    pub fn params(&self) -> &PatternParameters {
        &self.params
    }

    pub fn player_target(&self) -> Option<TargetHandle> {
        self.player_target
    }

    pub fn fire_state(&self) -> &FireState {
        &self.fire
    }
}

impl fmt::Debug for EnemyAgent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnemyAgent")
            .field("bounds", &self.bounds)
            .field("pattern", &self.pattern_name)
            .field("kind", &self.kind)
            .field("angle", &self.angle)
            .field("elapsed_time", &self.elapsed_time)
            .field("alive", &self.alive)
            .field("armed", &self.fire.has_shooter)
            .finish()
    }
}
