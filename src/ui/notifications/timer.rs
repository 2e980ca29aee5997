// SPDX-License-Identifier: MPL-2.0
//! One-shot deadline timers.
//!
//! A timer is armed with a start instant and a delay and becomes due once the
//! clock reaches its deadline. It never fires on its own: the owner polls it
//! on every tick. Cancelling a timer is dropping it.

use std::time::{Duration, Instant};

/// A single-use timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OneShot {
    deadline: Instant,
}

impl OneShot {
    /// Arms a timer that becomes due `delay` after `start`.
    #[must_use]
    pub fn start(start: Instant, delay: Duration) -> Self {
        Self {
            deadline: start + delay,
        }
    }

    /// Returns the instant at which the timer fires.
    #[must_use]
    pub fn deadline(self) -> Instant {
        self.deadline
    }

    /// Returns whether the deadline has been reached at `now`.
    #[must_use]
    pub fn is_due(self, now: Instant) -> bool {
        now >= self.deadline
    }

    /// Time left before the deadline, zero once due.
    #[must_use]
    pub fn remaining(self, now: Instant) -> Duration {
        self.deadline.saturating_duration_since(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn becomes_due_exactly_at_deadline() {
        let t0 = Instant::now();
        let timer = OneShot::start(t0, Duration::from_millis(300));

        assert!(!timer.is_due(t0 + Duration::from_millis(299)));
        assert!(timer.is_due(t0 + Duration::from_millis(300)));
    }

    #[test]
    fn remaining_saturates_at_zero() {
        let t0 = Instant::now();
        let timer = OneShot::start(t0, Duration::from_millis(100));

        assert_eq!(timer.remaining(t0), Duration::from_millis(100));
        assert_eq!(timer.remaining(t0 + Duration::from_secs(1)), Duration::ZERO);
    }
}
