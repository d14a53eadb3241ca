//! Named pattern parameter bags and their resolution into typed patterns.
//!
//! A [`PatternLibrary`] maps pattern names to [`PatternParameters`]. Bags are
//! sparse: any field left out takes the default for the pattern's kind when
//! the bag is resolved into a [`FlightPattern`].

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use raider_core::constants::*;
use raider_core::enums::{Direction, PatternKind};

/// Failure loading a pattern library from disk or text.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read pattern config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed pattern config: {0}")]
    Json(#[from] serde_json::Error),
}

/// Sparse tunables for one named pattern.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatternParameters {
    /// Motion kind. When absent the pattern name is parsed as the kind.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub pattern_kind: Option<PatternKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<Direction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed_multiplier: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vertical_speed_multiplier: Option<f64>,
    /// Pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amplitude: Option<f64>,
    /// Radians per unit of elapsed time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency: Option<f64>,
    /// Radians per tick.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub angular_speed: Option<f64>,
    /// Pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,
    /// Pixels per unit of elapsed time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius_growth: Option<f64>,
}

impl PatternParameters {
    /// Bag that only names a kind.
    pub fn of_kind(kind: PatternKind) -> Self {
        Self {
            pattern_kind: Some(kind),
            ..Default::default()
        }
    }

    /// Kind this bag resolves to when registered under `name`.
    pub fn kind_for(&self, name: &str) -> PatternKind {
        self.pattern_kind
            .unwrap_or_else(|| name.parse().unwrap_or_default())
    }
}

/// Mapping from pattern name to parameter bag.
///
/// Ordered by name so that anything sampling from the library is
/// deterministic for a given seed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PatternLibrary {
    patterns: BTreeMap<String, PatternParameters>,
}

impl PatternLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// One entry per recognized kind, named after the kind, with no overrides.
    pub fn builtin() -> Self {
        let mut library = Self::new();
        for kind in PatternKind::ALL {
            library.insert(kind.as_str(), PatternParameters::default());
        }
        library
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    pub fn insert(&mut self, name: impl Into<String>, params: PatternParameters) {
        self.patterns.insert(name.into(), params);
    }

    pub fn get(&self, name: &str) -> Option<&PatternParameters> {
        self.patterns.get(name)
    }

    /// Snapshot of the bag registered under `name`, or an empty bag.
    /// The returned value is owned, so later edits to the library never
    /// reach agents that already resolved it.
    pub fn resolve(&self, name: &str) -> PatternParameters {
        self.patterns.get(name).cloned().unwrap_or_default()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.patterns.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

/// Tunables shared by the sinusoidal, zigzag and wave patterns.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oscillation {
    pub amplitude: f64,
    pub frequency: f64,
    pub vertical_speed_multiplier: f64,
}

/// A pattern with every tunable resolved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FlightPattern {
    /// Straight line; also covers `linear_diagonal`.
    Linear {
        direction: Direction,
        speed_multiplier: f64,
    },
    /// Horizontal sine sweep around the base x with constant vertical drift.
    Oscillating(Oscillation),
    /// Orbit of fixed radius around the base position.
    Circular { angular_speed: f64, radius: f64 },
    /// Orbit whose radius grows with elapsed time.
    Spiral { angular_speed: f64, radius_growth: f64 },
    /// Steer toward the player's center.
    ApproachPlayer { speed_multiplier: f64 },
    /// Straight down at base speed.
    Fallback,
}

impl FlightPattern {
    /// Fill in defaults for `kind` from a sparse bag.
    pub fn resolve(kind: PatternKind, params: &PatternParameters) -> Self {
        let speed_multiplier = params.speed_multiplier.unwrap_or(LINEAR_SPEED_MULTIPLIER);

        let oscillation = |amplitude, frequency, vertical| {
            FlightPattern::Oscillating(Oscillation {
                amplitude: params.amplitude.unwrap_or(amplitude),
                frequency: params.frequency.unwrap_or(frequency),
                vertical_speed_multiplier: params.vertical_speed_multiplier.unwrap_or(vertical),
            })
        };

        let direction = |default: Direction| match params.direction {
            Some(Direction::Unrecognized) => {
                tracing::debug!(?default, "unrecognized direction, using default");
                default
            }
            Some(direction) => direction,
            None => default,
        };

        match kind {
            PatternKind::Linear => FlightPattern::Linear {
                direction: direction(Direction::Down),
                speed_multiplier,
            },
            PatternKind::LinearDiagonal => FlightPattern::Linear {
                direction: direction(Direction::DownLeft),
                speed_multiplier,
            },
            PatternKind::Sinusoidal => oscillation(
                SINUSOIDAL_AMPLITUDE,
                SINUSOIDAL_FREQUENCY,
                SINUSOIDAL_VERTICAL_MULTIPLIER,
            ),
            PatternKind::Zigzag => {
                oscillation(ZIGZAG_AMPLITUDE, ZIGZAG_FREQUENCY, ZIGZAG_VERTICAL_MULTIPLIER)
            }
            PatternKind::Wave => {
                oscillation(WAVE_AMPLITUDE, WAVE_FREQUENCY, WAVE_VERTICAL_MULTIPLIER)
            }
            PatternKind::Circular => FlightPattern::Circular {
                angular_speed: params.angular_speed.unwrap_or(CIRCULAR_ANGULAR_SPEED),
                radius: params.radius.unwrap_or(CIRCULAR_RADIUS),
            },
            PatternKind::Spiral => FlightPattern::Spiral {
                angular_speed: params.angular_speed.unwrap_or(SPIRAL_ANGULAR_SPEED),
                radius_growth: params.radius_growth.unwrap_or(SPIRAL_RADIUS_GROWTH),
            },
            PatternKind::ApproachPlayer => FlightPattern::ApproachPlayer {
                speed_multiplier: params.speed_multiplier.unwrap_or(APPROACH_SPEED_MULTIPLIER),
            },
            PatternKind::Unknown => {
                tracing::debug!("unrecognized pattern kind, flying straight down");
                FlightPattern::Fallback
            }
        }
    }
}
