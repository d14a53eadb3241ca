//! Registry of things enemies can home in on.
//!
//! Agents refer to the player through a [`TargetHandle`] rather than owning
//! it, so a despawned target simply stops resolving.

use std::collections::HashMap;

use hecs::World;

use raider_core::types::Rect;

/// Handle to a target entity in the engine's target world.
pub type TargetHandle = hecs::Entity;

/// Marks an entity as something enemies can steer toward.
#[derive(Debug, Clone, Copy)]
pub struct Target;

/// Current bounding box of a target.
#[derive(Debug, Clone, Copy)]
pub struct Bounds(pub Rect);

/// Read-only view of target positions during a tick.
pub trait TargetLookup {
    fn bounds_of(&self, handle: TargetHandle) -> Option<Rect>;
}

impl TargetLookup for World {
    fn bounds_of(&self, handle: TargetHandle) -> Option<Rect> {
        self.get::<&Bounds>(handle).ok().map(|bounds| bounds.0)
    }
}

impl TargetLookup for HashMap<TargetHandle, Rect> {
    fn bounds_of(&self, handle: TargetHandle) -> Option<Rect> {
        self.get(&handle).copied()
    }
}

/// No targets at all; homing patterns fall back to straight-down flight.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTargets;

impl TargetLookup for NoTargets {
    fn bounds_of(&self, _handle: TargetHandle) -> Option<Rect> {
        None
    }
}

/// Spawn a target with the given bounds.
pub fn spawn_target(world: &mut World, bounds: Rect) -> TargetHandle {
    world.spawn((Target, Bounds(bounds)))
}
