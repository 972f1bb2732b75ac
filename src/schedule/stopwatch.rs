//! Periodic tick source for the elapsed-time counter.
//!
//! The stopwatch owns at most one pending tick timer. Starting a running
//! stopwatch is a no-op, and only the tick it scheduled itself is accepted,
//! so a tick left over from an earlier game can never advance the counter.

use crate::core::Millis;

use super::queue::{TimerHandle, TimerQueue};

/// Self-rescheduling tick timer.
#[derive(Clone, Debug)]
pub struct Stopwatch {
    interval: Millis,
    handle: Option<TimerHandle>,
}

impl Stopwatch {
    /// Create a stopped stopwatch ticking every `interval` ms.
    #[must_use]
    pub fn new(interval: Millis) -> Self {
        assert!(interval > 0, "Tick interval must be positive");
        Self {
            interval,
            handle: None,
        }
    }

    /// Is a tick pending?
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    /// Start ticking. Returns false if already running.
    pub fn start<T>(&mut self, queue: &mut TimerQueue<T>, tick: T) -> bool {
        if self.is_running() {
            return false;
        }
        self.handle = Some(queue.schedule(self.interval, tick));
        true
    }

    /// Accept a fired tick and schedule the next one.
    ///
    /// Returns true if `fired` is this stopwatch's current tick; the caller
    /// should then count one interval.
    pub fn on_tick<T>(&mut self, queue: &mut TimerQueue<T>, fired: TimerHandle, tick: T) -> bool {
        if self.handle != Some(fired) {
            return false;
        }
        self.handle = Some(queue.schedule(self.interval, tick));
        true
    }

    /// Stop ticking. Returns false if it was not running.
    pub fn stop<T>(&mut self, queue: &mut TimerQueue<T>) -> bool {
        match self.handle.take() {
            Some(handle) => {
                queue.cancel(handle);
                true
            }
            None => false,
        }
    }

    /// Forget the pending tick without touching the queue.
    ///
    /// Used after the queue itself has been cleared.
    pub fn detach(&mut self) {
        self.handle = None;
    }
}
