// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` owns every active notification in insertion order and drives
//! their timers. Entries leave the collection only through [`Manager::remove`],
//! [`Manager::clear`], or a due removal timer during [`Manager::tick`].

use super::clock::{Clock, SystemClock};
use super::notification::{Notification, NotificationId, Severity, VisualState};
use crate::ui::state::DismissTimeout;
use std::sync::Arc;
use std::time::Duration;

/// Messages for notification state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// The user closed a specific notification.
    Dismiss(NotificationId),
    /// Tick for checking timers.
    Tick,
}

/// Manages the ordered collection of active notifications.
#[derive(Debug)]
pub struct Manager {
    /// Active notifications, oldest first.
    active: Vec<Notification>,
    /// Auto-dismiss delay for notifications without a custom one.
    default_duration: Duration,
    clock: Arc<dyn Clock>,
}

impl Default for Manager {
    fn default() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }
}

impl Manager {
    /// Creates a new empty notification manager using the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new empty manager reading time from `clock`.
    #[must_use]
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            active: Vec::new(),
            default_duration: DismissTimeout::default().as_duration(),
            clock,
        }
    }

    /// Sets the auto-dismiss delay applied to subsequently pushed notifications.
    pub fn set_default_duration(&mut self, timeout: DismissTimeout) {
        self.default_duration = timeout.as_duration();
    }

    /// Returns the auto-dismiss delay applied when none is given.
    #[must_use]
    pub fn default_duration(&self) -> Duration {
        self.default_duration
    }

    /// Appends a notification and starts its auto-dismiss timer.
    pub fn push(&mut self, mut notification: Notification) -> NotificationId {
        let id = notification.id();
        notification.mount(self.clock.now(), self.default_duration);

        tracing::debug!(
            id = ?id,
            severity = ?notification.severity(),
            "notification shown"
        );
        if notification.severity() == Severity::Error {
            tracing::info!(message = notification.message(), "error notification");
        }

        self.active.push(notification);
        id
    }

    /// Creates a notification from `message` and `severity` and appends it.
    pub fn notify(&mut self, message: impl Into<String>, severity: Severity) -> NotificationId {
        self.push(Notification::new(severity, message))
    }

    /// Shows a success notification.
    pub fn success(&mut self, message: impl Into<String>) -> NotificationId {
        self.notify(message, Severity::Success)
    }

    /// Shows an error notification.
    pub fn error(&mut self, message: impl Into<String>) -> NotificationId {
        self.notify(message, Severity::Error)
    }

    /// Shows an info notification.
    pub fn info(&mut self, message: impl Into<String>) -> NotificationId {
        self.notify(message, Severity::Info)
    }

    /// Removes a notification by its ID.
    ///
    /// Returns `true` if the notification was found and removed. Removing an
    /// unknown ID is a no-op.
    pub fn remove(&mut self, id: NotificationId) -> bool {
        if let Some(pos) = self.active.iter().position(|n| n.id() == id) {
            self.active.remove(pos);
            tracing::debug!(id = ?id, "notification removed");
            return true;
        }
        false
    }

    /// Starts the exit sequence of a notification on user request.
    ///
    /// Cancels its auto-dismiss timer. Returns `false` if the notification is
    /// unknown or already exiting.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        let now = self.clock.now();
        self.active
            .iter_mut()
            .find(|n| n.id() == id)
            .is_some_and(|n| n.begin_exit(now))
    }

    /// Fires due timers and removes notifications whose exit has completed.
    ///
    /// Returns the IDs removed during this tick.
    pub fn tick(&mut self) -> Vec<NotificationId> {
        let now = self.clock.now();

        // Collect IDs of notifications to remove
        let expired: Vec<NotificationId> = self
            .active
            .iter_mut()
            .filter_map(|n| n.advance(now).then(|| n.id()))
            .collect();

        for id in &expired {
            self.remove(*id);
        }

        expired
    }

    /// Handles a notification message.
    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
            Message::Tick => {
                self.tick();
            }
        }
    }

    /// Returns the active notifications in insertion order.
    pub fn notifications(&self) -> impl Iterator<Item = &Notification> {
        self.active.iter()
    }

    /// Returns the notification with the given ID, if active.
    #[must_use]
    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.active.iter().find(|n| n.id() == id)
    }

    /// Returns the visual state of a notification, if active.
    #[must_use]
    pub fn visual_state(&self, id: NotificationId) -> Option<VisualState> {
        let now = self.clock.now();
        self.get(id).map(|n| n.visual_state(now))
    }

    /// Returns the opacity of a notification at the current time.
    #[must_use]
    pub fn opacity(&self, notification: &Notification) -> f32 {
        notification.opacity(self.clock.now())
    }

    /// Returns the number of active notifications.
    #[must_use]
    pub fn len(&self) -> usize {
        self.active.len()
    }

    /// Returns whether the collection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Returns whether there are any notifications to tick.
    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.active.is_empty()
    }

    /// Returns whether any notification is entering or exiting.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        let now = self.clock.now();
        self.active
            .iter()
            .any(|n| n.visual_state(now) != VisualState::Visible)
    }

    /// Drops every notification together with its pending timers.
    pub fn clear(&mut self) {
        self.active.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::clock::ManualClock;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn manager_with_clock() -> (Manager, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::new());
        (Manager::with_clock(clock.clone()), clock)
    }

    fn messages(manager: &Manager) -> Vec<(&str, Severity)> {
        manager
            .notifications()
            .map(|n| (n.message(), n.severity()))
            .collect()
    }

    #[test]
    fn new_manager_is_empty() {
        let manager = Manager::new();
        assert_eq!(manager.len(), 0);
        assert!(!manager.has_notifications());
    }

    #[test]
    fn notify_preserves_call_order() {
        let (mut manager, _clock) = manager_with_clock();
        for i in 0..10 {
            manager.info(format!("message-{i}"));
        }

        assert_eq!(manager.len(), 10);
        let texts: Vec<String> = manager
            .notifications()
            .map(|n| n.message().to_string())
            .collect();
        let expected: Vec<String> = (0..10).map(|i| format!("message-{i}")).collect();
        assert_eq!(texts, expected);
    }

    #[test]
    fn success_then_error_in_same_tick() {
        let (mut manager, _clock) = manager_with_clock();
        manager.success("Saved");
        manager.error("Failed");

        assert_eq!(
            messages(&manager),
            vec![("Saved", Severity::Success), ("Failed", Severity::Error)]
        );
    }

    #[test]
    fn remove_unknown_id_is_noop() {
        let (mut manager, _clock) = manager_with_clock();
        manager.success("keep");
        let gone = manager.info("gone");
        assert!(manager.remove(gone));

        assert!(!manager.remove(gone));
        assert_eq!(messages(&manager), vec![("keep", Severity::Success)]);
    }

    #[test]
    fn info_lifecycle_in_virtual_time() {
        let (mut manager, clock) = manager_with_clock();
        let id = manager.info("Hi");

        clock.advance(ms(2999));
        assert!(manager.tick().is_empty());
        assert_eq!(manager.visual_state(id), Some(VisualState::Visible));

        clock.advance(ms(1));
        assert!(manager.tick().is_empty());
        assert_eq!(manager.visual_state(id), Some(VisualState::Exiting));

        clock.advance(ms(299));
        assert!(manager.tick().is_empty());
        assert_eq!(manager.len(), 1);

        clock.advance(ms(1));
        assert_eq!(manager.tick(), vec![id]);
        assert!(manager.is_empty());
    }

    #[test]
    fn auto_dismissed_notification_is_removed_exactly_once() {
        let (mut manager, clock) = manager_with_clock();
        let id = manager.success("Saved");

        let mut removals = 0;
        for _ in 0..100 {
            clock.advance(ms(100));
            removals += manager.tick().iter().filter(|r| **r == id).count();
        }

        assert_eq!(removals, 1);
        assert!(manager.is_empty());
    }

    #[test]
    fn manual_dismiss_removes_exactly_once() {
        let (mut manager, clock) = manager_with_clock();
        let id = manager.error("Failed");

        clock.advance(ms(1000));
        assert!(manager.dismiss(id));
        assert!(!manager.dismiss(id), "second dismissal must be ignored");

        let mut removals = Vec::new();
        for _ in 0..60 {
            clock.advance(ms(100));
            removals.extend(manager.tick());
        }

        assert_eq!(removals, vec![id]);
    }

    #[test]
    fn manual_dismiss_removes_after_grace_not_auto_deadline() {
        let (mut manager, clock) = manager_with_clock();
        let id = manager.info("Hi");

        clock.advance(ms(500));
        manager.handle_message(&Message::Dismiss(id));
        assert_eq!(manager.visual_state(id), Some(VisualState::Exiting));

        clock.advance(ms(299));
        manager.handle_message(&Message::Tick);
        assert_eq!(manager.len(), 1);

        clock.advance(ms(1));
        manager.handle_message(&Message::Tick);
        assert!(manager.is_empty());
    }

    #[test]
    fn identical_notifications_get_distinct_ids() {
        let (mut manager, clock) = manager_with_clock();
        let first = manager.notify("Same", Severity::Info);
        let second = manager.notify("Same", Severity::Info);
        assert_ne!(first, second);

        manager.dismiss(first);
        clock.advance(ms(300));
        assert_eq!(manager.tick(), vec![first]);

        let remaining: Vec<NotificationId> = manager.notifications().map(|n| n.id()).collect();
        assert_eq!(remaining, vec![second]);
    }

    #[test]
    fn removal_order_is_independent_of_insertion_order() {
        let (mut manager, clock) = manager_with_clock();
        let first = manager.info("first");
        let second = manager.info("second");
        let third = manager.info("third");

        manager.dismiss(second);
        clock.advance(ms(300));
        assert_eq!(manager.tick(), vec![second]);

        let remaining: Vec<NotificationId> = manager.notifications().map(|n| n.id()).collect();
        assert_eq!(remaining, vec![first, third]);
    }

    #[test]
    fn custom_duration_overrides_default() {
        let (mut manager, clock) = manager_with_clock();
        let quick = manager.push(Notification::info("quick").auto_dismiss(ms(1000)));
        let normal = manager.info("normal");

        clock.advance(ms(1300));
        assert_eq!(manager.tick(), vec![quick]);
        assert!(manager.get(normal).is_some());
    }

    #[test]
    fn configured_default_duration_applies_to_new_notifications() {
        let (mut manager, clock) = manager_with_clock();
        manager.set_default_duration(DismissTimeout::new(5000));
        let id = manager.info("slow");

        clock.advance(ms(3300));
        assert!(manager.tick().is_empty());

        clock.advance(ms(2000));
        assert_eq!(manager.tick(), vec![id]);
    }

    #[test]
    fn clear_drops_pending_timers() {
        let (mut manager, clock) = manager_with_clock();
        let id = manager.success("Saved");
        manager.dismiss(id);
        manager.clear();

        clock.advance(ms(10_000));
        assert!(manager.tick().is_empty());
        assert!(!manager.remove(id));
    }

    #[test]
    fn is_animating_tracks_enter_and_exit() {
        let (mut manager, clock) = manager_with_clock();
        let id = manager.info("Hi");
        assert!(manager.is_animating());

        clock.advance(ms(400));
        assert!(!manager.is_animating());

        manager.dismiss(id);
        assert!(manager.is_animating());
    }
}
