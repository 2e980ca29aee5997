// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Notifications appear temporarily to inform guests about the outcome of an
//! action (gift reserved, request failed, link copied) without blocking the
//! page underneath.
//!
//! # Components
//!
//! - [`notification`] - Core `Notification` struct, severities and lifecycle
//! - [`manager`] - `Manager` owning the ordered collection of active toasts
//! - [`provider`] - Scoped ambient access through the `Toasts` handle
//! - [`toast`] - Toast widget rendering the collection as an overlay
//! - [`clock`] / [`timer`] - Time source and one-shot deadlines
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::notifications::{provider, Manager, Toasts, Toast};
//!
//! let mut manager = Manager::new();
//!
//! // Anything running inside the scope can reach the queue.
//! provider::scope(&mut manager, || -> Result<()> {
//!     Toasts::current()?.success("Gift reserved")?;
//!     Ok(())
//! })?;
//!
//! // In your view function, render toasts
//! let overlay = Toast::view_overlay(&manager).map(Message::Notification);
//! ```
//!
//! # Lifecycle
//!
//! - Auto-dismiss after 3 s by default (configurable, overridable per toast)
//! - Manual dismissal cancels the auto-dismiss timer
//! - Both paths end with a fixed 300 ms exit animation before removal
//! - Position: top-right corner, insertion order

pub mod clock;
mod manager;
mod notification;
pub mod provider;
pub mod timer;
mod toast;

pub use clock::{Clock, ManualClock, SystemClock};
pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity, VisualState};
pub use provider::Toasts;
pub use toast::Toast;
