//! Screen-edge handling: wrap to the opposite edge, or despawn.

use glam::DVec2;

use raider_core::constants::DESPAWN_VERTICAL_MARGIN;
use raider_core::enums::PatternKind;
use raider_core::types::{Rect, Screen};

/// Result of applying the boundary rules to one post-motion box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundaryOutcome {
    /// Top-left corner after wrapping.
    pub origin: DVec2,
    pub wrapped: bool,
    /// The agent left the play area and must be removed.
    pub despawn: bool,
}

/// Apply wrap and despawn rules to `bounds`.
///
/// Both rules read the same raw post-motion box. Wrap always applies; despawn
/// only for patterns that are not bounded by their own radius.
pub fn apply(bounds: Rect, screen: Screen, kind: PatternKind) -> BoundaryOutcome {
    let origin = wrap(bounds, screen);
    BoundaryOutcome {
        origin,
        wrapped: origin != bounds.origin,
        despawn: !kind.is_self_bounded() && out_of_play(bounds, screen),
    }
}

/// A box entirely past one edge reappears just past the opposite edge.
fn wrap(bounds: Rect, screen: Screen) -> DVec2 {
    let mut origin = bounds.origin;

    if bounds.right() < 0.0 {
        origin.x = screen.width;
    } else if bounds.left() > screen.width {
        origin.x = -bounds.width();
    }

    if bounds.bottom() < 0.0 {
        origin.y = screen.height;
    } else if bounds.top() > screen.height {
        origin.y = -bounds.height();
    }

    origin
}

/// Beyond the vertical margin, or fully off either side.
fn out_of_play(bounds: Rect, screen: Screen) -> bool {
    bounds.top() > screen.height + DESPAWN_VERTICAL_MARGIN
        || bounds.bottom() < -DESPAWN_VERTICAL_MARGIN
        || bounds.right() < 0.0
        || bounds.left() > screen.width
}
