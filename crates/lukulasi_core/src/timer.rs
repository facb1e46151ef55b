//! Cancellable debounce timers, polled from the UI loop.

use std::time::{Duration, Instant};

/// Opaque handle to a scheduled timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

/// Poll-driven timer queue.
///
/// Timers do not run callbacks; the owner calls [`TimerQueue::fire_due`] once
/// per tick and reacts to the handles that came due. Cancel is idempotent and
/// safe on already-fired handles.
#[derive(Debug, Default)]
pub struct TimerQueue {
    next_id: u64,
    entries: Vec<(u64, Instant)>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a timer to come due at `now + delay`.
    pub fn schedule(&mut self, now: Instant, delay: Duration) -> TimerHandle {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push((id, now + delay));
        TimerHandle(id)
    }

    /// Cancel a timer. A cancelled timer never fires.
    pub fn cancel(&mut self, handle: TimerHandle) {
        self.entries.retain(|(id, _)| *id != handle.0);
    }

    /// Returns `true` while the timer is scheduled and has not fired.
    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.entries.iter().any(|(id, _)| *id == handle.0)
    }

    /// Remove and return every handle whose deadline has passed.
    pub fn fire_due(&mut self, now: Instant) -> Vec<TimerHandle> {
        let mut due = Vec::new();
        self.entries.retain(|(id, deadline)| {
            if *deadline <= now {
                due.push(TimerHandle(*id));
                false
            } else {
                true
            }
        });
        due
    }

    /// Earliest pending deadline, for hosts that want to sleep precisely.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.entries.iter().map(|(_, deadline)| *deadline).min()
    }
}

#[cfg(test)]
mod tests {
    use super::TimerQueue;
    use std::time::{Duration, Instant};

    #[test]
    fn timers_fire_only_after_their_deadline() {
        let mut queue = TimerQueue::new();
        let start = Instant::now();
        let handle = queue.schedule(start, Duration::from_millis(100));

        assert!(queue.fire_due(start + Duration::from_millis(99)).is_empty());
        assert!(queue.is_pending(handle));

        let due = queue.fire_due(start + Duration::from_millis(100));
        assert_eq!(due, vec![handle]);
        assert!(!queue.is_pending(handle));
    }

    #[test]
    fn cancelled_timers_never_fire_and_cancel_is_idempotent() {
        let mut queue = TimerQueue::new();
        let start = Instant::now();
        let handle = queue.schedule(start, Duration::from_millis(10));

        queue.cancel(handle);
        queue.cancel(handle);
        assert!(queue.fire_due(start + Duration::from_secs(1)).is_empty());

        // Cancelling after firing is also a no-op.
        let handle = queue.schedule(start, Duration::from_millis(10));
        let due = queue.fire_due(start + Duration::from_secs(1));
        assert_eq!(due.len(), 1);
        queue.cancel(handle);
    }

    #[test]
    fn next_deadline_tracks_earliest_entry() {
        let mut queue = TimerQueue::new();
        let start = Instant::now();
        assert_eq!(queue.next_deadline(), None);
        queue.schedule(start, Duration::from_millis(300));
        let early = queue.schedule(start, Duration::from_millis(100));
        assert_eq!(queue.next_deadline(), Some(start + Duration::from_millis(100)));
        queue.cancel(early);
        assert_eq!(queue.next_deadline(), Some(start + Duration::from_millis(300)));
    }
}
