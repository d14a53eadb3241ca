//! Simulation constants and tuning parameters.
//!
//! Distances are screen pixels. Rates expressed "per tick" assume `dt = 1.0`
//! and are scaled by `dt` when frames run long or short.

// --- Screen ---

/// Default screen width (px).
pub const DEFAULT_SCREEN_WIDTH: f64 = 1000.0;

/// Default screen height (px).
pub const DEFAULT_SCREEN_HEIGHT: f64 = 700.0;

// --- Agent defaults ---

/// Base agent speed (px/tick).
pub const DEFAULT_AGENT_SPEED: f64 = 3.0;

/// Default agent bounding box width (px).
pub const DEFAULT_AGENT_WIDTH: f64 = 40.0;

/// Default agent bounding box height (px).
pub const DEFAULT_AGENT_HEIGHT: f64 = 28.0;

/// Pattern name used when none is given.
pub const DEFAULT_PATTERN_NAME: &str = "linear_down";

// --- Boundary ---

/// How far past the top or bottom edge a despawn-eligible agent may drift (px).
pub const DESPAWN_VERTICAL_MARGIN: f64 = 100.0;

// --- Fire control ---

/// Default minimum time between two shots (seconds, wall clock).
pub const DEFAULT_SHOT_INTERVAL_SECS: f64 = 3.0;

/// Default enemy bullet speed (px/tick, positive = downwards).
pub const DEFAULT_BULLET_SPEED: f64 = 6.0;

/// Default bullet kind handed to the projectile factory.
pub const DEFAULT_BULLET_KIND: &str = "normal";

/// Vertical gap between an agent's bottom edge and its projectile spawn point (px).
pub const BULLET_SPAWN_OFFSET: f64 = 6.0;

/// Projectiles the engine's queue accepts per tick before rejecting spawns.
pub const PROJECTILE_QUEUE_CAPACITY: usize = 256;

// --- Linear ---

/// Default linear speed multiplier.
pub const LINEAR_SPEED_MULTIPLIER: f64 = 1.0;

/// Horizontal share of speed for diagonal motion.
pub const DIAGONAL_HORIZONTAL_FACTOR: f64 = 0.5;

// --- Oscillating patterns ---

pub const SINUSOIDAL_AMPLITUDE: f64 = 150.0;
pub const SINUSOIDAL_FREQUENCY: f64 = 0.1;
pub const SINUSOIDAL_VERTICAL_MULTIPLIER: f64 = 1.0;

pub const ZIGZAG_AMPLITUDE: f64 = 120.0;
pub const ZIGZAG_FREQUENCY: f64 = 0.3;
pub const ZIGZAG_VERTICAL_MULTIPLIER: f64 = 1.0;

pub const WAVE_AMPLITUDE: f64 = 100.0;
pub const WAVE_FREQUENCY: f64 = 0.15;
pub const WAVE_VERTICAL_MULTIPLIER: f64 = 0.8;

// --- Rotational patterns ---

/// Circular angular speed (rad/tick).
pub const CIRCULAR_ANGULAR_SPEED: f64 = 0.05;

/// Circular orbit radius (px).
pub const CIRCULAR_RADIUS: f64 = 80.0;

/// Spiral angular speed (rad/tick).
pub const SPIRAL_ANGULAR_SPEED: f64 = 0.1;

/// Spiral radius growth (px/tick).
pub const SPIRAL_RADIUS_GROWTH: f64 = 2.0;

// --- Homing ---

pub const APPROACH_SPEED_MULTIPLIER: f64 = 1.0;
