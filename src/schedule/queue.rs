//! Cancellable timer queue on a virtual clock.
//!
//! Entries fire in `(due, scheduling order)` order. Cancelled entries are
//! dropped from the pending map immediately and skipped lazily when they
//! reach the front of the heap.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::Millis;

/// Unique identifier for a scheduled timer. Never reused within a queue.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TimerId(pub u64);

impl std::fmt::Display for TimerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Timer({})", self.0)
    }
}

/// Generation counter. Bumped every time the queue is cleared.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Epoch(pub u32);

impl Epoch {
    /// The generation after this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

/// Handle returned by `TimerQueue::schedule`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimerHandle {
    /// Which timer.
    pub id: TimerId,
    /// Generation the timer was scheduled in.
    pub epoch: Epoch,
    /// Absolute due time on the queue's clock.
    pub due: Millis,
}

#[derive(Clone, Debug)]
struct Scheduled<T> {
    handle: TimerHandle,
    payload: T,
}

/// A timer that came due.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fired<T> {
    /// Handle the timer was scheduled with.
    pub handle: TimerHandle,
    /// What to do.
    pub payload: T,
}

/// Timer queue driven by explicit clock advances.
///
/// ## Behavior
///
/// - `schedule()`: Registers `payload` to fire `delay` ms after `now()`
/// - `cancel()`: Drops one timer; stale handles are a no-op
/// - `cancel_all()`: Drops every timer and starts a new epoch
/// - `pop_due()`: Yields the next live timer due at or before a deadline
#[derive(Clone, Debug)]
pub struct TimerQueue<T> {
    now: Millis,
    epoch: Epoch,
    next_id: u64,
    order: BinaryHeap<Reverse<(Millis, u64)>>,
    pending: FxHashMap<TimerId, Scheduled<T>>,
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TimerQueue<T> {
    /// Create an empty queue at time zero.
    #[must_use]
    pub fn new() -> Self {
        Self {
            now: 0,
            epoch: Epoch::default(),
            next_id: 0,
            order: BinaryHeap::new(),
            pending: FxHashMap::default(),
        }
    }

    /// Current time on the queue's clock.
    #[must_use]
    pub fn now(&self) -> Millis {
        self.now
    }

    /// Current generation.
    #[must_use]
    pub fn epoch(&self) -> Epoch {
        self.epoch
    }

    /// Number of live timers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Are there no live timers?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Due time of the earliest live timer.
    #[must_use]
    pub fn next_due(&self) -> Option<Millis> {
        self.pending.values().map(|entry| entry.handle.due).min()
    }

    /// Is this handle's timer still waiting to fire?
    #[must_use]
    pub fn is_live(&self, handle: TimerHandle) -> bool {
        handle.epoch == self.epoch && self.pending.contains_key(&handle.id)
    }

    /// Schedule `payload` to fire `delay` ms from now.
    pub fn schedule(&mut self, delay: Millis, payload: T) -> TimerHandle {
        let id = TimerId(self.next_id);
        self.next_id += 1;

        let handle = TimerHandle {
            id,
            epoch: self.epoch,
            due: self.now.saturating_add(delay),
        };

        self.order.push(Reverse((handle.due, id.0)));
        self.pending.insert(id, Scheduled { handle, payload });
        handle
    }

    /// Cancel one timer. Returns false if it already fired, was cancelled,
    /// or belongs to an earlier epoch.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        if handle.epoch != self.epoch {
            return false;
        }
        self.pending.remove(&handle.id).is_some()
    }

    /// Cancel every timer and start a new epoch.
    ///
    /// Returns how many timers were dropped.
    pub fn cancel_all(&mut self) -> usize {
        let dropped = self.pending.len();
        self.pending.clear();
        self.order.clear();
        self.epoch = self.epoch.next();
        dropped
    }

    /// Pop the next live timer due at or before `deadline`.
    ///
    /// The clock moves forward to the fired timer's due time, so timers
    /// scheduled while handling it are relative to when it fired.
    pub fn pop_due(&mut self, deadline: Millis) -> Option<Fired<T>> {
        while let Some(&Reverse((due, raw_id))) = self.order.peek() {
            if due > deadline {
                return None;
            }
            self.order.pop();

            if let Some(entry) = self.pending.remove(&TimerId(raw_id)) {
                self.now = self.now.max(due);
                return Some(Fired {
                    handle: entry.handle,
                    payload: entry.payload,
                });
            }
        }
        None
    }

    /// Move the clock to `deadline` once every due timer has been popped.
    pub fn settle_at(&mut self, deadline: Millis) {
        self.now = self.now.max(deadline);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(queue: &mut TimerQueue<&'static str>, deadline: Millis) -> Vec<&'static str> {
        let mut fired = Vec::new();
        while let Some(entry) = queue.pop_due(deadline) {
            fired.push(entry.payload);
        }
        queue.settle_at(deadline);
        fired
    }

    #[test]
    fn test_fires_in_due_order() {
        let mut queue = TimerQueue::new();
        queue.schedule(300, "late");
        queue.schedule(100, "early");
        queue.schedule(200, "middle");

        assert_eq!(drain(&mut queue, 1000), vec!["early", "middle", "late"]);
        assert_eq!(queue.now(), 1000);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_equal_due_times_keep_scheduling_order() {
        let mut queue = TimerQueue::new();
        queue.schedule(50, "first");
        queue.schedule(50, "second");
        queue.schedule(50, "third");

        assert_eq!(drain(&mut queue, 50), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_deadline_is_respected() {
        let mut queue = TimerQueue::new();
        queue.schedule(100, "a");
        queue.schedule(500, "b");

        assert_eq!(drain(&mut queue, 499), vec!["a"]);
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.next_due(), Some(500));

        assert_eq!(drain(&mut queue, 500), vec!["b"]);
    }

    #[test]
    fn test_schedule_is_relative_to_now() {
        let mut queue = TimerQueue::new();
        queue.settle_at(1000);

        let handle = queue.schedule(250, "x");
        assert_eq!(handle.due, 1250);
    }

    #[test]
    fn test_clock_follows_fired_timer() {
        let mut queue = TimerQueue::new();
        queue.schedule(100, "a");

        let fired = queue.pop_due(1000).unwrap();
        assert_eq!(fired.handle.due, 100);
        assert_eq!(queue.now(), 100);

        // Follow-up scheduled from within the handler
        let follow = queue.schedule(100, "b");
        assert_eq!(follow.due, 200);
    }

    #[test]
    fn test_cancel() {
        let mut queue = TimerQueue::new();
        let keep = queue.schedule(100, "keep");
        let drop = queue.schedule(100, "drop");

        assert!(queue.cancel(drop));
        assert!(!queue.cancel(drop), "second cancel is a no-op");
        assert!(queue.is_live(keep));
        assert!(!queue.is_live(drop));

        assert_eq!(drain(&mut queue, 100), vec!["keep"]);
        assert!(!queue.cancel(keep), "fired timers cannot be cancelled");
    }

    #[test]
    fn test_cancel_all_starts_new_epoch() {
        let mut queue = TimerQueue::new();
        let old = queue.schedule(100, "old");
        queue.schedule(200, "old too");

        assert_eq!(queue.cancel_all(), 2);
        assert_eq!(queue.epoch(), Epoch(1));
        assert!(!queue.is_live(old));

        let fresh = queue.schedule(100, "fresh");
        assert_eq!(fresh.epoch, Epoch(1));
        assert!(!queue.cancel(old), "stale handle must not touch the new epoch");
        assert!(queue.is_live(fresh));

        assert_eq!(drain(&mut queue, 1000), vec!["fresh"]);
    }

    #[test]
    fn test_ids_are_never_reused() {
        let mut queue: TimerQueue<()> = TimerQueue::new();
        let first = queue.schedule(10, ());
        queue.cancel_all();
        let second = queue.schedule(10, ());

        assert_ne!(first.id, second.id);
    }

    #[test]
    fn test_next_due_ignores_cancelled() {
        let mut queue = TimerQueue::new();
        let early = queue.schedule(10, "early");
        queue.schedule(20, "late");

        queue.cancel(early);
        assert_eq!(queue.next_due(), Some(20));
    }
}
