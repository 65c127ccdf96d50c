//! Cancellable scheduled-event queue for timed session transitions.
//!
//! ## Model
//!
//! Engines never self-schedule wall-clock timers. A session that needs
//! timed behavior (the Memory reveal schedule, the Tic-Tac-Toe reply
//! delay, the host's Snake cadence) owns a `TimerQueue` of pending
//! events with absolute millisecond deadlines. The host pulses
//! `advance(now_ms)` with a monotonic clock and the session drains
//! whatever is due.
//!
//! ## Cancellation
//!
//! Every scheduled entry has a `TimerId` handle. `cancel` removes one
//! entry; `clear` removes them all. A session that is exited or reset
//! clears its queue, so no event of a relinquished session can fire on
//! a later pulse.

use serde::{Deserialize, Serialize};

/// Handle to a scheduled entry, unique within its queue.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimerId(pub u32);

impl TimerId {
    /// Create a timer id from a raw value.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }
}

#[derive(Clone, Debug)]
struct TimerEntry<E> {
    id: TimerId,
    due_ms: u64,
    event: E,
}

/// Pending scheduled events with cancellable handles.
///
/// Deadlines are absolute milliseconds on the caller's monotonic clock.
/// Draining returns due events ordered by deadline, ties broken by
/// scheduling order.
#[derive(Clone, Debug)]
pub struct TimerQueue<E> {
    next_id: u32,
    entries: Vec<TimerEntry<E>>,
}

impl<E> TimerQueue<E> {
    /// Create an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self {
            next_id: 0,
            entries: Vec::new(),
        }
    }

    /// Schedule an event at an absolute deadline.
    pub fn schedule(&mut self, due_ms: u64, event: E) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.entries.push(TimerEntry { id, due_ms, event });
        id
    }

    /// Cancel a single entry. Returns false if the handle no longer
    /// refers to a pending entry (already fired or cancelled).
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() != before
    }

    /// Cancel every pending entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of pending entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the queue has no pending entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Earliest pending deadline, if any.
    #[must_use]
    pub fn next_due(&self) -> Option<u64> {
        self.entries.iter().map(|e| e.due_ms).min()
    }

    /// Remove and return every entry due at or before `now_ms`,
    /// ordered by (deadline, scheduling order).
    pub fn drain_due(&mut self, now_ms: u64) -> Vec<E> {
        let mut due: Vec<TimerEntry<E>> = Vec::new();
        let mut remaining: Vec<TimerEntry<E>> = Vec::new();

        for entry in self.entries.drain(..) {
            if entry.due_ms <= now_ms {
                due.push(entry);
            } else {
                remaining.push(entry);
            }
        }

        self.entries = remaining;
        due.sort_by_key(|e| (e.due_ms, e.id.0));
        due.into_iter().map(|e| e.event).collect()
    }
}

impl<E> Default for TimerQueue<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drain_respects_deadlines() {
        let mut queue = TimerQueue::new();
        queue.schedule(100, "a");
        queue.schedule(200, "b");
        queue.schedule(150, "c");

        assert_eq!(queue.drain_due(50), Vec::<&str>::new());
        assert_eq!(queue.drain_due(150), vec!["a", "c"]);
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.drain_due(200), vec!["b"]);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_ties_fire_in_schedule_order() {
        let mut queue = TimerQueue::new();
        queue.schedule(100, 1);
        queue.schedule(100, 2);
        queue.schedule(100, 3);

        assert_eq!(queue.drain_due(100), vec![1, 2, 3]);
    }

    #[test]
    fn test_cancel_single_entry() {
        let mut queue = TimerQueue::new();
        let a = queue.schedule(100, "a");
        queue.schedule(100, "b");

        assert!(queue.cancel(a));
        assert!(!queue.cancel(a));
        assert_eq!(queue.drain_due(100), vec!["b"]);
    }

    #[test]
    fn test_clear_cancels_everything() {
        let mut queue = TimerQueue::new();
        queue.schedule(100, "a");
        queue.schedule(200, "b");

        queue.clear();

        assert!(queue.is_empty());
        assert_eq!(queue.drain_due(u64::MAX), Vec::<&str>::new());
    }

    #[test]
    fn test_next_due() {
        let mut queue: TimerQueue<()> = TimerQueue::new();
        assert_eq!(queue.next_due(), None);

        queue.schedule(300, ());
        queue.schedule(100, ());
        assert_eq!(queue.next_due(), Some(100));
    }

    #[test]
    fn test_handles_stay_unique_after_drain() {
        let mut queue = TimerQueue::new();
        let a = queue.schedule(10, "a");
        queue.drain_due(10);

        let b = queue.schedule(20, "b");
        assert_ne!(a, b);
        assert!(!queue.cancel(a));
        assert!(queue.cancel(b));
    }
}
