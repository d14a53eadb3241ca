//! Fire control: rate-limits an agent's shots against a wall clock.

use raider_core::constants::*;
use raider_core::events::SpawnEvent;
use raider_core::types::Rect;

/// Per-agent weapon state.
#[derive(Debug, Clone, PartialEq)]
pub struct FireState {
    /// Clock reading of the last emitted shot. `None` until the first shot,
    /// so a freshly armed agent fires on its first tick.
    pub last_shot_time: Option<f64>,
    /// Minimum seconds between shots.
    pub shot_interval: f64,
    pub bullet_speed: f64,
    pub bullet_kind: String,
    pub has_shooter: bool,
}

impl Default for FireState {
    fn default() -> Self {
        Self {
            last_shot_time: None,
            shot_interval: DEFAULT_SHOT_INTERVAL_SECS,
            bullet_speed: DEFAULT_BULLET_SPEED,
            bullet_kind: DEFAULT_BULLET_KIND.to_string(),
            has_shooter: false,
        }
    }
}

impl FireState {
    /// Whether a shot at `now` would respect the interval.
    pub fn is_ready(&self, now: f64) -> bool {
        self.has_shooter
            && self
                .last_shot_time
                .map_or(true, |last| now - last >= self.shot_interval)
    }

    /// Emit a spawn event below `bounds` if the interval has passed, and
    /// restart the interval. Does nothing without a shooter.
    pub fn try_fire(&mut self, bounds: Rect, now: f64) -> Option<SpawnEvent> {
        if !self.is_ready(now) {
            return None;
        }
        self.last_shot_time = Some(now);
        Some(SpawnEvent {
            x: bounds.center().x,
            y: bounds.bottom() + BULLET_SPAWN_OFFSET,
            speed: self.bullet_speed,
            kind: self.bullet_kind.clone(),
        })
    }
}
