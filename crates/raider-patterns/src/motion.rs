//! Per-tick motion evaluation.
//!
//! Pure functions that compute an agent's next position and angle from its
//! current pattern state. No ECS or agent dependency; operates on plain data.
//! Incremental steps scale with `dt`, closed-form terms read accumulated
//! elapsed time, so variable frame times stay on the same trajectory.

use glam::DVec2;

use raider_core::types::Rect;

use crate::library::{FlightPattern, Oscillation};

/// Input to the evaluator for a single agent.
#[derive(Debug, Clone, Copy)]
pub struct MotionState {
    /// Top-left corner of the bounding box.
    pub position: DVec2,
    pub size: DVec2,
    /// Reference origin for oscillating and rotational patterns.
    pub base: DVec2,
    pub angle: f64,
    pub elapsed: f64,
    /// Base speed (px/tick).
    pub speed: f64,
}

impl MotionState {
    pub fn bounds(&self) -> Rect {
        Rect {
            origin: self.position,
            size: self.size,
        }
    }
}

/// Output from the evaluator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionUpdate {
    pub position: DVec2,
    pub angle: f64,
    pub elapsed: f64,
}

/// Advance elapsed time by `dt`, then move according to `pattern`.
///
/// `target` is the player's bounding box for homing patterns. A homing
/// pattern without a target flies straight down instead.
pub fn evaluate(
    state: &MotionState,
    pattern: &FlightPattern,
    target: Option<Rect>,
    dt: f64,
) -> MotionUpdate {
    let elapsed = state.elapsed + dt;
    let mut update = MotionUpdate {
        position: state.position,
        angle: state.angle,
        elapsed,
    };

    match *pattern {
        FlightPattern::Linear {
            direction,
            speed_multiplier,
        } => {
            update.position += direction.step() * state.speed * speed_multiplier * dt;
        }
        FlightPattern::Oscillating(osc) => {
            update.position = oscillate(state, &osc, elapsed, dt);
        }
        FlightPattern::Circular {
            angular_speed,
            radius,
        } => {
            update.angle = state.angle + angular_speed * dt;
            update.position = orbit(state.base, update.angle, radius);
        }
        FlightPattern::Spiral {
            angular_speed,
            radius_growth,
        } => {
            update.angle = state.angle + angular_speed * dt;
            update.position = orbit(state.base, update.angle, elapsed * radius_growth);
        }
        FlightPattern::ApproachPlayer { speed_multiplier } => match target {
            Some(target) => {
                update.position += approach_step(state, target, speed_multiplier, dt);
            }
            None => update.position = fall(state, dt),
        },
        FlightPattern::Fallback => update.position = fall(state, dt),
    }

    update
}

/// Straight down at base speed.
fn fall(state: &MotionState, dt: f64) -> DVec2 {
    state.position + DVec2::new(0.0, state.speed * dt)
}

fn oscillate(state: &MotionState, osc: &Oscillation, elapsed: f64, dt: f64) -> DVec2 {
    DVec2::new(
        state.base.x + (elapsed * osc.frequency).sin() * osc.amplitude,
        state.position.y + state.speed * osc.vertical_speed_multiplier * dt,
    )
}

fn orbit(base: DVec2, angle: f64, radius: f64) -> DVec2 {
    base + DVec2::new(angle.cos(), angle.sin()) * radius
}

/// Displacement toward the target's center. Zero when already centred on it.
fn approach_step(state: &MotionState, target: Rect, speed_multiplier: f64, dt: f64) -> DVec2 {
    let delta = target.center() - state.bounds().center();
    let distance = delta.length();
    if distance <= 0.0 {
        return DVec2::ZERO;
    }
    delta / distance * state.speed * speed_multiplier * dt
}
