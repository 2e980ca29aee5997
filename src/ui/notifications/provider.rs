// SPDX-License-Identifier: MPL-2.0
//! Ambient access to the notification queue.
//!
//! [`scope`] installs a [`Manager`] as the active queue of the current thread
//! while a closure runs. Anything called from inside that closure can obtain a
//! [`Toasts`] handle with [`Toasts::current`] and enqueue notifications without
//! a reference being threaded through every signature.
//!
//! Outside of any scope the handle is unavailable and every call fails with
//! [`Error::ContextMissing`].

use super::manager::Manager;
use super::notification::{NotificationId, Severity};
use crate::error::{Error, Result};
use std::cell::RefCell;
use std::marker::PhantomData;

thread_local! {
    static ACTIVE: RefCell<Option<Manager>> = const { RefCell::new(None) };
}

/// Restores the caller's manager and the enclosing scope, also on unwind.
struct Restore<'a> {
    owner: &'a mut Manager,
    outer: Option<Manager>,
}

impl Drop for Restore<'_> {
    fn drop(&mut self) {
        let outer = self.outer.take();
        let inner = ACTIVE.with(|slot| slot.replace(outer));
        if let Some(manager) = inner {
            *self.owner = manager;
        }
    }
}

/// Runs `f` with `manager` installed as the active notification queue.
///
/// Scopes nest: an inner scope shadows the outer one until it returns.
pub fn scope<R>(manager: &mut Manager, f: impl FnOnce() -> R) -> R {
    let installed = std::mem::take(manager);
    let outer = ACTIVE.with(|slot| slot.replace(Some(installed)));
    let _restore = Restore {
        owner: manager,
        outer,
    };
    f()
}

/// Returns whether a notification scope is active on this thread.
#[must_use]
pub fn is_active() -> bool {
    ACTIVE.with(|slot| slot.borrow().is_some())
}

/// Handle to the notification queue of the enclosing [`scope`].
///
/// The handle is tied to the UI thread and cannot be sent elsewhere.
#[derive(Debug, Clone, Copy)]
pub struct Toasts {
    _not_send: PhantomData<*const ()>,
}

impl Toasts {
    /// Obtains the handle for the active scope.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ContextMissing`] when called outside of [`scope`].
    pub fn current() -> Result<Self> {
        if is_active() {
            Ok(Self {
                _not_send: PhantomData,
            })
        } else {
            Err(Error::ContextMissing)
        }
    }

    /// Enqueues `message` with the given severity.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ContextMissing`] when the scope has ended.
    pub fn notify(&self, message: impl Into<String>, severity: Severity) -> Result<NotificationId> {
        with_active(|manager| manager.notify(message, severity))
    }

    /// Enqueues a success notification.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ContextMissing`] when the scope has ended.
    pub fn success(&self, message: impl Into<String>) -> Result<NotificationId> {
        self.notify(message, Severity::Success)
    }

    /// Enqueues an error notification.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ContextMissing`] when the scope has ended.
    pub fn error(&self, message: impl Into<String>) -> Result<NotificationId> {
        self.notify(message, Severity::Error)
    }

    /// Enqueues an info notification.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ContextMissing`] when the scope has ended.
    pub fn info(&self, message: impl Into<String>) -> Result<NotificationId> {
        self.notify(message, Severity::Info)
    }

    /// Removes a notification immediately. Unknown IDs are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ContextMissing`] when the scope has ended.
    pub fn remove(&self, id: NotificationId) -> Result<bool> {
        with_active(|manager| manager.remove(id))
    }
}

fn with_active<R>(f: impl FnOnce(&mut Manager) -> R) -> Result<R> {
    ACTIVE.with(|slot| {
        slot.borrow_mut()
            .as_mut()
            .map(f)
            .ok_or(Error::ContextMissing)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::clock::ManualClock;
    use std::sync::Arc;

    fn manager() -> Manager {
        Manager::with_clock(Arc::new(ManualClock::new()))
    }

    #[test]
    fn current_outside_scope_is_context_missing() {
        assert!(matches!(Toasts::current(), Err(Error::ContextMissing)));
        assert!(!is_active());
    }

    #[test]
    fn handle_used_after_scope_is_context_missing() {
        let mut manager = manager();
        let toasts = scope(&mut manager, || Toasts::current().expect("inside scope"));

        assert!(matches!(toasts.success("late"), Err(Error::ContextMissing)));
        assert!(matches!(toasts.error("late"), Err(Error::ContextMissing)));
        assert!(matches!(toasts.info("late"), Err(Error::ContextMissing)));
        assert!(manager.is_empty());
    }

    #[test]
    fn calls_inside_scope_reach_the_manager() {
        let mut manager = manager();
        scope(&mut manager, || -> Result<()> {
            let toasts = Toasts::current()?;
            toasts.success("Saved")?;
            toasts.error("Failed")?;
            Ok(())
        })
        .expect("scope is active");

        let entries: Vec<(&str, Severity)> = manager
            .notifications()
            .map(|n| (n.message(), n.severity()))
            .collect();
        assert_eq!(
            entries,
            vec![("Saved", Severity::Success), ("Failed", Severity::Error)]
        );
    }

    #[test]
    fn scope_restores_existing_entries() {
        let mut manager = manager();
        let before = manager.info("before");

        scope(&mut manager, || {
            let toasts = Toasts::current().expect("inside scope");
            toasts.info("during").expect("inside scope");
        });

        assert_eq!(manager.len(), 2);
        assert!(manager.get(before).is_some());
    }

    #[test]
    fn nested_scope_shadows_outer() {
        let mut outer = manager();
        let mut inner = manager();

        scope(&mut outer, || {
            Toasts::current().and_then(|t| t.info("outer-1")).expect("outer");
            scope(&mut inner, || {
                Toasts::current().and_then(|t| t.info("inner")).expect("inner");
            });
            Toasts::current().and_then(|t| t.info("outer-2")).expect("outer");
        });

        let outer_messages: Vec<&str> = outer.notifications().map(|n| n.message()).collect();
        let inner_messages: Vec<&str> = inner.notifications().map(|n| n.message()).collect();
        assert_eq!(outer_messages, vec!["outer-1", "outer-2"]);
        assert_eq!(inner_messages, vec!["inner"]);
        assert!(!is_active());
    }

    #[test]
    fn scope_is_restored_after_panic() {
        let mut manager = manager();
        manager.info("kept");

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            scope(&mut manager, || {
                Toasts::current().and_then(|t| t.info("added")).expect("inside");
                panic!("boom");
            })
        }));

        assert!(result.is_err());
        assert!(!is_active());
        assert_eq!(manager.len(), 2);
    }

    #[test]
    fn remove_through_handle_is_idempotent() {
        let mut manager = manager();
        scope(&mut manager, || -> Result<()> {
            let toasts = Toasts::current()?;
            let id = toasts.info("Hi")?;
            assert!(toasts.remove(id)?);
            assert!(!toasts.remove(id)?);
            Ok(())
        })
        .expect("scope is active");
        assert!(manager.is_empty());
    }
}
