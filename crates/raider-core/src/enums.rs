//! Enumeration types used throughout the engine.

use std::fmt;
use std::str::FromStr;

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Motion algorithm selected by a flight pattern.
///
/// Parsed from the pattern's `type` key, or from the pattern name itself when
/// no `type` is given. Anything unrecognized parses as [`PatternKind::Unknown`],
/// which flies straight down at the agent's base speed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternKind {
    Linear,
    LinearDiagonal,
    Sinusoidal,
    Zigzag,
    Wave,
    Circular,
    Spiral,
    ApproachPlayer,
    #[default]
    #[serde(other)]
    Unknown,
}

impl PatternKind {
    /// Every recognized kind, in declaration order.
    pub const ALL: [PatternKind; 8] = [
        PatternKind::Linear,
        PatternKind::LinearDiagonal,
        PatternKind::Sinusoidal,
        PatternKind::Zigzag,
        PatternKind::Wave,
        PatternKind::Circular,
        PatternKind::Spiral,
        PatternKind::ApproachPlayer,
    ];

    /// Patterns that stay within their own radius and are never despawned
    /// for leaving the screen.
    pub fn is_self_bounded(self) -> bool {
        matches!(self, PatternKind::Circular | PatternKind::Spiral)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PatternKind::Linear => "linear",
            PatternKind::LinearDiagonal => "linear_diagonal",
            PatternKind::Sinusoidal => "sinusoidal",
            PatternKind::Zigzag => "zigzag",
            PatternKind::Wave => "wave",
            PatternKind::Circular => "circular",
            PatternKind::Spiral => "spiral",
            PatternKind::ApproachPlayer => "approach_player",
            PatternKind::Unknown => "unknown",
        }
    }
}

impl FromStr for PatternKind {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(PatternKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .unwrap_or(PatternKind::Unknown))
    }
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Travel direction for linear patterns. Screen y grows downwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Down,
    Up,
    Left,
    Right,
    DownLeft,
    DownRight,
    /// Any direction name not listed above. Pattern resolution replaces it
    /// with the pattern's default direction.
    #[serde(other)]
    Unrecognized,
}

impl Direction {
    /// Displacement for one unit of speed. Diagonals move half as far sideways;
    /// an unrecognized direction does not move.
    pub fn step(self) -> DVec2 {
        use crate::constants::DIAGONAL_HORIZONTAL_FACTOR as H;

        match self {
            Direction::Down => DVec2::new(0.0, 1.0),
            Direction::Up => DVec2::new(0.0, -1.0),
            Direction::Left => DVec2::new(-1.0, 0.0),
            Direction::Right => DVec2::new(1.0, 0.0),
            Direction::DownLeft => DVec2::new(-H, 1.0),
            Direction::DownRight => DVec2::new(H, 1.0),
            Direction::Unrecognized => DVec2::ZERO,
        }
    }
}
