// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` struct, the `Severity` enum and the
//! per-notification lifecycle: an auto-dismiss timer that can be cancelled by
//! a manual dismissal, followed by a fixed exit grace period.

use super::timer::OneShot;
use crate::config::{ENTER_ANIMATION, EXIT_GRACE};
use crate::ui::design_tokens::palette;
use iced::Color;
use std::time::{Duration, Instant};

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Severity level determines the color scheme and icon. Nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    /// Operation completed successfully (green, check icon).
    #[default]
    Success,
    /// Something went wrong (red, exclamation icon).
    Error,
    /// Neutral information (indigo, info icon).
    Info,
}

impl Severity {
    /// Returns the accent color used for the icon.
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Severity::Success => palette::SUCCESS_500,
            Severity::Error => palette::ERROR_500,
            Severity::Info => palette::INFO_500,
        }
    }

    /// Returns the toast background tint.
    #[must_use]
    pub fn background(&self) -> Color {
        match self {
            Severity::Success => palette::SUCCESS_100,
            Severity::Error => palette::ERROR_100,
            Severity::Info => palette::INFO_100,
        }
    }

    /// Returns the toast border color.
    #[must_use]
    pub fn border(&self) -> Color {
        match self {
            Severity::Success => palette::SUCCESS_200,
            Severity::Error => palette::ERROR_200,
            Severity::Info => palette::INFO_200,
        }
    }

    /// Returns the message text color.
    #[must_use]
    pub fn text(&self) -> Color {
        match self {
            Severity::Success => palette::SUCCESS_800,
            Severity::Error => palette::ERROR_800,
            Severity::Info => palette::INFO_800,
        }
    }
}

/// What the toast looks like right now. Derived from the lifecycle, only
/// used for animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisualState {
    /// Just mounted, sliding in.
    Entering,
    /// Steady; the auto-dismiss timer is running.
    Visible,
    /// Fading out; removal is scheduled.
    Exiting,
}

#[derive(Debug, Clone, Copy)]
enum Phase {
    /// Created but not yet handed to a manager.
    Pending,
    Shown {
        since: Instant,
        auto_dismiss: OneShot,
    },
    Exiting {
        since: Instant,
        removal: OneShot,
    },
}

/// A notification to be displayed to the user.
#[derive(Debug, Clone)]
pub struct Notification {
    /// Unique identifier for this notification.
    id: NotificationId,
    /// Severity level (determines color and icon).
    severity: Severity,
    /// Display text.
    message: String,
    /// Custom auto-dismiss duration (overrides the manager default).
    custom_dismiss_duration: Option<Duration>,
    phase: Phase,
}

impl Notification {
    /// Creates a new notification with the given severity and message.
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            id: NotificationId::new(),
            severity,
            message: message.into(),
            custom_dismiss_duration: None,
            phase: Phase::Pending,
        }
    }

    /// Creates a success notification.
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(Severity::Success, message)
    }

    /// Creates an error notification.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    /// Creates an info notification.
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Severity::Info, message)
    }

    /// Sets a custom auto-dismiss duration, overriding the manager default.
    ///
    /// Useful for notifications that need more time to read.
    #[must_use]
    pub fn auto_dismiss(mut self, duration: Duration) -> Self {
        self.custom_dismiss_duration = Some(duration);
        self
    }

    /// Returns the notification's unique ID.
    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    /// Returns the severity level.
    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Returns the display text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the custom auto-dismiss duration, if one was set.
    #[must_use]
    pub fn custom_dismiss_duration(&self) -> Option<Duration> {
        self.custom_dismiss_duration
    }

    /// Returns whether the exit sequence has started.
    #[must_use]
    pub fn is_exiting(&self) -> bool {
        matches!(self.phase, Phase::Exiting { .. })
    }

    /// Returns the visual state at `now`.
    #[must_use]
    pub fn visual_state(&self, now: Instant) -> VisualState {
        match self.phase {
            Phase::Pending => VisualState::Entering,
            Phase::Shown { since, .. } => {
                if now.saturating_duration_since(since) < ENTER_ANIMATION {
                    VisualState::Entering
                } else {
                    VisualState::Visible
                }
            }
            Phase::Exiting { .. } => VisualState::Exiting,
        }
    }

    /// Returns the opacity of the toast at `now`, from 0.0 to 1.0.
    #[must_use]
    pub fn opacity(&self, now: Instant) -> f32 {
        match self.phase {
            Phase::Pending => 0.0,
            Phase::Shown { since, .. } => ratio(now.saturating_duration_since(since), ENTER_ANIMATION),
            Phase::Exiting { since, .. } => {
                1.0 - ratio(now.saturating_duration_since(since), EXIT_GRACE)
            }
        }
    }

    /// Starts the auto-dismiss timer. Has no effect once mounted.
    pub(super) fn mount(&mut self, now: Instant, default_duration: Duration) {
        if let Phase::Pending = self.phase {
            let delay = self.custom_dismiss_duration.unwrap_or(default_duration);
            self.phase = Phase::Shown {
                since: now,
                auto_dismiss: OneShot::start(now, delay),
            };
        }
    }

    /// Enters the exit sequence at `at`, dropping the auto-dismiss timer.
    ///
    /// Returns `false` if the notification was already exiting.
    pub(super) fn begin_exit(&mut self, at: Instant) -> bool {
        match self.phase {
            Phase::Exiting { .. } => false,
            Phase::Pending | Phase::Shown { .. } => {
                self.phase = Phase::Exiting {
                    since: at,
                    removal: OneShot::start(at, EXIT_GRACE),
                };
                true
            }
        }
    }

    /// Fires whichever timers are due at `now`.
    ///
    /// The exit sequence starts at the auto-dismiss deadline rather than at
    /// `now`, so a coarse tick does not stretch the lifetime. Returns `true`
    /// when the removal timer is due and the entry must be dropped.
    pub(super) fn advance(&mut self, now: Instant) -> bool {
        if let Phase::Shown { auto_dismiss, .. } = self.phase {
            if auto_dismiss.is_due(now) {
                self.begin_exit(auto_dismiss.deadline());
            }
        }

        match self.phase {
            Phase::Exiting { removal, .. } => removal.is_due(now),
            Phase::Pending | Phase::Shown { .. } => false,
        }
    }
}

fn ratio(elapsed: Duration, total: Duration) -> f32 {
    if total.is_zero() {
        return 1.0;
    }
    (elapsed.as_secs_f32() / total.as_secs_f32()).clamp(0.0, 1.0)
}
