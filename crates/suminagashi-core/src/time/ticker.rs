use std::time::{Duration, Instant};

/// Shortest accepted interval. Keeps the due-count division well defined for
/// zero or sub-microsecond configurations.
const MIN_INTERVAL: Duration = Duration::from_micros(100);

/// Interval clock for the periodic synthetic drop source.
///
/// `poll()` reports how many drops have come due since the last poll. The
/// count is clamped so a debugger pause or a minimized window cannot flood
/// the event queue with a burst of catch-up drops.
#[derive(Debug, Clone)]
pub struct DropTicker {
    last: Instant,
    interval: Duration,
    max_catch_up: u32,
}

impl DropTicker {
    /// Creates a ticker with the default catch-up clamp of 1 — after a stall,
    /// at most one drop fires.
    pub fn new(interval: Duration) -> Self {
        Self::with_catch_up(interval, 1)
    }

    /// Creates a ticker allowing up to `max_catch_up` due drops per poll.
    ///
    /// `interval` is clamped to a small minimum so a zero or near-zero
    /// configuration degrades to a fast ticker instead of dividing by zero.
    pub fn with_catch_up(interval: Duration, max_catch_up: u32) -> Self {
        debug_assert!(max_catch_up > 0);
        Self {
            last: Instant::now(),
            interval: interval.max(MIN_INTERVAL),
            max_catch_up,
        }
    }

    /// Resets the baseline, e.g. when the host resumes from suspension.
    pub fn reset(&mut self) {
        self.last = Instant::now();
    }

    /// Number of drops due since the last poll, clamped to the catch-up bound.
    pub fn poll(&mut self) -> u32 {
        self.poll_at(Instant::now())
    }

    fn poll_at(&mut self, now: Instant) -> u32 {
        let elapsed = now.saturating_duration_since(self.last);
        let due = (elapsed.as_nanos() / self.interval.as_nanos()) as u64;
        if due == 0 {
            return 0;
        }
        if due > u64::from(self.max_catch_up) {
            // Stalled past the clamp: drop the backlog and restart from now.
            self.last = now;
            return self.max_catch_up;
        }
        self.last += self.interval * due as u32;
        due as u32
    }
}
