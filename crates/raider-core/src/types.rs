//! Fundamental geometric types.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box in screen space (pixels).
/// `origin` is the top-left corner; y grows downwards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub origin: DVec2,
    pub size: DVec2,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            origin: DVec2::new(x, y),
            size: DVec2::new(width, height),
        }
    }

    /// Build a box of the given size centred on `center`.
    pub fn from_center(center: DVec2, size: DVec2) -> Self {
        Self {
            origin: center - size * 0.5,
            size,
        }
    }

    pub fn left(&self) -> f64 {
        self.origin.x
    }

    pub fn right(&self) -> f64 {
        self.origin.x + self.size.x
    }

    pub fn top(&self) -> f64 {
        self.origin.y
    }

    pub fn bottom(&self) -> f64 {
        self.origin.y + self.size.y
    }

    pub fn width(&self) -> f64 {
        self.size.x
    }

    pub fn height(&self) -> f64 {
        self.size.y
    }

    pub fn center(&self) -> DVec2 {
        self.origin + self.size * 0.5
    }

    /// Same box moved so its top-left corner sits at `origin`.
    pub fn with_origin(&self, origin: DVec2) -> Self {
        Self {
            origin,
            size: self.size,
        }
    }
}

/// Screen dimensions an agent lives in (pixels).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Screen {
    pub width: f64,
    pub height: f64,
}

impl Screen {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Default for Screen {
    fn default() -> Self {
        Self {
            width: crate::constants::DEFAULT_SCREEN_WIDTH,
            height: crate::constants::DEFAULT_SCREEN_HEIGHT,
        }
    }
}
