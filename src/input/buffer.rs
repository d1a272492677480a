//! Input domain: timestamped action buffer with a consume-or-release protocol.
//!
//! Every event handed out by [`Pending`] comes back locked. A reader that wants
//! the event to survive into the next tick must hand it back through
//! [`Pending::release`] or [`InputBuffer::release`]. Anything still locked when
//! [`InputBuffer::prime`] runs counts as consumed and is dropped, so readers
//! should stop at the first event they act on.

use bevy::prelude::*;

/// Discrete edge transitions reported by the input source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputAction {
    JumpPressed,
    JumpReleased,
    AttackPressed,
    AttackReleased,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EventPhase {
    Pending,
    Locked,
    Consumed,
}

#[derive(Debug, Clone)]
struct BufferedEvent {
    id: u64,
    action: InputAction,
    timestamp: f32,
    phase: EventPhase,
}

/// Handle to an event that has been locked by iteration.
///
/// Dropping the handle consumes the event. Pass it back to `release` to keep it.
#[must_use = "dropping a locked event consumes it; call release to keep it buffered"]
#[derive(Debug, PartialEq)]
pub struct LockedEvent {
    id: u64,
    action: InputAction,
    timestamp: f32,
}

impl LockedEvent {
    pub fn action(&self) -> InputAction {
        self.action
    }

    pub fn timestamp(&self) -> f32 {
        self.timestamp
    }
}

/// Ordered buffer of input events awaiting a consumer.
#[derive(Resource, Debug, Default)]
pub struct InputBuffer {
    events: Vec<BufferedEvent>,
    next_id: u64,
}

impl InputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new pending event stamped with `now`.
    pub fn record(&mut self, action: InputAction, now: f32) {
        let id = self.next_id;
        self.next_id += 1;
        self.events.push(BufferedEvent {
            id,
            action,
            timestamp: now,
            phase: EventPhase::Pending,
        });
    }

    /// Drop every event left locked or consumed by the previous tick, and every
    /// event older than `window`. Must run once per tick before iterating.
    pub fn prime(&mut self, now: f32, window: f32) {
        self.events.retain(|event| {
            event.phase == EventPhase::Pending && now - event.timestamp <= window
        });
    }

    /// Lazily iterate pending events in arrival order, locking each one as it
    /// is yielded.
    pub fn pending(&mut self) -> Pending<'_> {
        Pending {
            buffer: self,
            cursor: 0,
        }
    }

    /// Return a locked event to the pending state so the next tick sees it.
    pub fn release(&mut self, event: LockedEvent) {
        self.set_phase(event.id, EventPhase::Pending);
    }

    /// Mark a locked event as consumed. Equivalent to dropping the handle, but
    /// explicit at the call site.
    pub fn consume(&mut self, event: LockedEvent) {
        self.set_phase(event.id, EventPhase::Consumed);
    }

    fn set_phase(&mut self, id: u64, phase: EventPhase) {
        if let Some(event) = self.events.iter_mut().find(|event| event.id == id) {
            event.phase = phase;
        }
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of events that the next iteration would yield.
    pub fn pending_count(&self) -> usize {
        self.events
            .iter()
            .filter(|event| event.phase == EventPhase::Pending)
            .count()
    }
}

/// Iterator over pending events. See the module docs for the locking contract.
pub struct Pending<'a> {
    buffer: &'a mut InputBuffer,
    cursor: usize,
}

impl Pending<'_> {
    /// Put an event back so it remains available next tick.
    pub fn release(&mut self, event: LockedEvent) {
        self.buffer.release(event);
    }

    /// Explicitly consume an event.
    pub fn consume(&mut self, event: LockedEvent) {
        self.buffer.consume(event);
    }
}

impl Iterator for Pending<'_> {
    type Item = LockedEvent;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(event) = self.buffer.events.get_mut(self.cursor) {
            self.cursor += 1;

            if event.phase != EventPhase::Pending {
                continue;
            }

            event.phase = EventPhase::Locked;
            return Some(LockedEvent {
                id: event.id,
                action: event.action,
                timestamp: event.timestamp,
            });
        }

        None
    }
}
