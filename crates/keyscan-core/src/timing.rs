//! Elapsed/delta bookkeeping for the monitor loop.

use crate::Timestamp;

/// Session start and the timestamp of the last processed event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimingContext {
    start: Timestamp,
    last: Timestamp,
}

impl TimingContext {
    /// Both `start` and `last` begin at `start`.
    pub fn new(start: Timestamp) -> Self {
        Self { start, last: start }
    }

    pub fn start(&self) -> Timestamp {
        self.start
    }

    pub fn last(&self) -> Timestamp {
        self.last
    }

    /// Milliseconds since session start.
    pub fn elapsed(&self, at: Timestamp) -> u64 {
        at.since(self.start)
    }

    /// Milliseconds since the previous processed event.
    pub fn delta(&self, at: Timestamp) -> u64 {
        at.since(self.last)
    }

    /// Mark `at` as the last processed event.
    pub fn advance(&mut self, at: Timestamp) {
        self.last = at;
    }
}
