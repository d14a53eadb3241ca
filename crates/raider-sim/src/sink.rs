//! Projectile sinks: where spawn events go once an agent fires.

use std::cell::RefCell;
use std::rc::Rc;

use raider_core::events::{SpawnError, SpawnEvent};

/// Receiver for projectile spawn events.
///
/// Called synchronously from inside an agent's update, at most once per agent
/// per tick. A returned error is logged by the agent and otherwise ignored.
pub trait ProjectileSink {
    fn spawn(&mut self, event: SpawnEvent) -> Result<(), SpawnError>;
}

impl<F> ProjectileSink for F
where
    F: FnMut(SpawnEvent) -> Result<(), SpawnError>,
{
    fn spawn(&mut self, event: SpawnEvent) -> Result<(), SpawnError> {
        self(event)
    }
}

/// Bounded buffer shared between many agents and the code that creates the
/// projectiles. Clones share the same buffer.
#[derive(Debug, Clone)]
pub struct ProjectileQueue {
    pending: Rc<RefCell<Vec<SpawnEvent>>>,
    capacity: usize,
}

impl ProjectileQueue {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            pending: Rc::new(RefCell::new(Vec::with_capacity(capacity))),
            capacity,
        }
    }

    pub fn len(&self) -> usize {
        self.pending.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.borrow().is_empty()
    }

    /// Take every pending event, oldest first.
    pub fn drain(&self) -> Vec<SpawnEvent> {
        std::mem::take(&mut *self.pending.borrow_mut())
    }
}

impl ProjectileSink for ProjectileQueue {
    fn spawn(&mut self, event: SpawnEvent) -> Result<(), SpawnError> {
        let mut pending = self.pending.borrow_mut();
        if pending.len() >= self.capacity {
            return Err(SpawnError::QueueFull {
                capacity: self.capacity,
            });
        }
        pending.push(event);
        Ok(())
    }
}
