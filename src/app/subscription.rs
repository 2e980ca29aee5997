// SPDX-License-Identifier: MPL-2.0
//! Time-based subscriptions for the application.
//!
//! Toast timers are deadlines checked on each tick, so the tick only runs
//! while something on screen can change: fast while a toast or the spinner
//! animates, slow while toasts are merely waiting for their deadline.

use super::Message;
use crate::ui::catalog;
use iced::{time, Subscription};
use std::time::Duration;

/// Tick rate while a toast fades or the spinner turns (about 60 fps).
pub const ANIMATION_TICK: Duration = Duration::from_millis(16);

/// Tick rate while visible toasts wait for their auto-dismiss deadline.
pub const IDLE_TICK: Duration = Duration::from_millis(100);

/// Picks the tick interval for the current state, or `None` when nothing
/// needs time-based updates.
#[must_use]
pub fn tick_interval(animating: bool, has_notifications: bool) -> Option<Duration> {
    if animating {
        Some(ANIMATION_TICK)
    } else if has_notifications {
        Some(IDLE_TICK)
    } else {
        None
    }
}

/// Creates the tick subscription feeding `Message::Tick`.
pub fn create_tick_subscription(animating: bool, has_notifications: bool) -> Subscription<Message> {
    match tick_interval(animating, has_notifications) {
        Some(interval) => time::every(interval).map(Message::Tick),
        None => Subscription::none(),
    }
}

/// Creates the periodic catalog refresh standing in for change notifications.
pub fn create_refresh_subscription(interval: Duration) -> Subscription<Message> {
    time::every(interval).map(|_| Message::Catalog(catalog::Message::Refresh))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_tick_when_idle() {
        assert_eq!(tick_interval(false, false), None);
    }

    #[test]
    fn waiting_toasts_use_idle_tick() {
        assert_eq!(tick_interval(false, true), Some(IDLE_TICK));
    }

    #[test]
    fn animation_uses_fast_tick() {
        assert_eq!(tick_interval(true, true), Some(ANIMATION_TICK));
        assert_eq!(tick_interval(true, false), Some(ANIMATION_TICK));
    }
}
