// SPDX-License-Identifier: MPL-2.0
//! Toast auto-dismiss timeout domain type.
//!
//! This module provides a type-safe wrapper for the delay, in milliseconds,
//! after which a toast starts leaving the screen on its own.

use crate::config::{DEFAULT_AUTO_DISMISS_MS, MAX_AUTO_DISMISS_MS, MIN_AUTO_DISMISS_MS};
use std::time::Duration;

/// Auto-dismiss delay in milliseconds.
///
/// This newtype enforces validity at the type level, ensuring the value
/// is always within the valid range (500–60000 ms).
///
/// # Example
///
/// ```
/// use gift_registry::ui::state::DismissTimeout;
///
/// let timeout = DismissTimeout::new(5000);
/// assert_eq!(timeout.value(), 5000);
///
/// // Values outside range are clamped
/// let too_low = DismissTimeout::new(10);
/// assert_eq!(too_low.value(), 500);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DismissTimeout(u64);

impl DismissTimeout {
    /// Creates a new timeout value, clamping to valid range.
    #[must_use]
    pub fn new(millis: u64) -> Self {
        Self(millis.clamp(MIN_AUTO_DISMISS_MS, MAX_AUTO_DISMISS_MS))
    }

    /// Returns the value in milliseconds.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }

    /// Returns the timeout as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for DismissTimeout {
    fn default() -> Self {
        Self(DEFAULT_AUTO_DISMISS_MS)
    }
}

impl From<DismissTimeout> for Duration {
    fn from(timeout: DismissTimeout) -> Self {
        timeout.as_duration()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clamps_to_valid_range() {
        assert_eq!(DismissTimeout::new(0).value(), MIN_AUTO_DISMISS_MS);
        assert_eq!(DismissTimeout::new(u64::MAX).value(), MAX_AUTO_DISMISS_MS);
    }

    #[test]
    fn new_accepts_valid_values() {
        assert_eq!(DismissTimeout::new(500).value(), 500);
        assert_eq!(DismissTimeout::new(3000).value(), 3000);
        assert_eq!(DismissTimeout::new(60_000).value(), 60_000);
    }

    #[test]
    fn default_is_three_seconds() {
        assert_eq!(
            DismissTimeout::default().as_duration(),
            Duration::from_millis(3000)
        );
    }
}
