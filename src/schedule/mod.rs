//! Deferred work: a cancellable timer queue and the stopwatch built on it.
//!
//! ## Design Philosophy
//!
//! Nothing in the game sleeps or spawns. Every delay (preview, mismatch
//! un-flip, animations, message expiry, clock ticks) is an entry in a
//! `TimerQueue` on a virtual millisecond clock. The host advances the clock
//! with real elapsed time; tests advance it by hand.
//!
//! Every `schedule()` returns a `TimerHandle`. Clearing the queue starts a
//! new `Epoch`, and handles from an earlier epoch can neither fire nor
//! cancel anything in the current one.
//!
//! ## Example Usage
//!
//! ```
//! use memory_match::schedule::TimerQueue;
//!
//! let mut queue = TimerQueue::new();
//! let handle = queue.schedule(1000, "un-flip");
//!
//! assert!(queue.pop_due(999).is_none());
//! let fired = queue.pop_due(1000).unwrap();
//! assert_eq!(fired.handle, handle);
//! assert_eq!(fired.payload, "un-flip");
//! ```

mod queue;
mod stopwatch;

pub use queue::{Epoch, Fired, TimerHandle, TimerId, TimerQueue};
pub use stopwatch::Stopwatch;
