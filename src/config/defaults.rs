// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Notifications**: Toast auto-dismiss and exit animation timing
//! - **Backend**: Catalog refresh cadence

use std::time::Duration;

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Default auto-dismiss delay for a toast (in milliseconds).
pub const DEFAULT_AUTO_DISMISS_MS: u64 = 3000;

/// Minimum auto-dismiss delay (in milliseconds).
pub const MIN_AUTO_DISMISS_MS: u64 = 500;

/// Maximum auto-dismiss delay (in milliseconds).
pub const MAX_AUTO_DISMISS_MS: u64 = 60_000;

/// Time a dismissed toast stays on screen so its exit animation can play.
///
/// Fixed; not exposed in `settings.toml`.
pub const EXIT_GRACE: Duration = Duration::from_millis(300);

/// Duration of the slide/fade-in animation after a toast is mounted.
pub const ENTER_ANIMATION: Duration = Duration::from_millis(300);

// ==========================================================================
// Backend Defaults
// ==========================================================================

/// Default interval between catalog refreshes (in seconds).
pub const DEFAULT_REFRESH_SECS: u64 = 30;

/// Minimum interval between catalog refreshes (in seconds).
pub const MIN_REFRESH_SECS: u64 = 5;

/// Name of the gift table exposed by the hosted store.
pub const GIFTS_TABLE: &str = "gifts";

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_AUTO_DISMISS_MS > 0);
    assert!(MAX_AUTO_DISMISS_MS >= MIN_AUTO_DISMISS_MS);
    assert!(DEFAULT_AUTO_DISMISS_MS >= MIN_AUTO_DISMISS_MS);
    assert!(DEFAULT_AUTO_DISMISS_MS <= MAX_AUTO_DISMISS_MS);

    assert!(MIN_REFRESH_SECS > 0);
    assert!(DEFAULT_REFRESH_SECS >= MIN_REFRESH_SECS);
};
