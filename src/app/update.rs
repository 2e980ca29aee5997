// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application update loop.
//!
//! The catalog reports outcomes through the ambient notification handle, so
//! every catalog update runs inside a [`provider::scope`] bound to the
//! application's manager.

use super::Message;
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::ui::catalog;
use crate::ui::notifications::{self, provider};
use iced::Task;
use std::time::Instant;

/// Mutable application state handed to the update handlers.
pub struct UpdateContext<'a> {
    pub i18n: &'a I18n,
    pub catalog: &'a mut catalog::State,
    pub notifications: &'a mut notifications::Manager,
}

/// Runs a catalog update inside a notification scope.
///
/// A failure here means the catalog tried to report an outcome without a
/// scope. Debug builds panic; release builds log it and drop the message.
pub fn handle_catalog_message(
    ctx: &mut UpdateContext<'_>,
    message: catalog::Message,
) -> Task<Message> {
    let catalog_ctx = catalog::UpdateContext { i18n: ctx.i18n };
    let catalog = &mut *ctx.catalog;

    let result = provider::scope(ctx.notifications, || catalog.update(message, &catalog_ctx));

    match result {
        Ok(task) => task.map(Message::Catalog),
        Err(err) => {
            report_update_failure(&err);
            Task::none()
        }
    }
}

fn report_update_failure(err: &Error) {
    tracing::error!(%err, "catalog update failed");
    if cfg!(debug_assertions) && matches!(err, Error::ContextMissing) {
        panic!("catalog update failed: {err}");
    }
}

pub fn handle_notification_message(
    ctx: &mut UpdateContext<'_>,
    message: &notifications::NotificationMessage,
) -> Task<Message> {
    ctx.notifications.handle_message(message);
    Task::none()
}

/// Fires due toast timers and advances the loading spinner.
pub fn handle_tick(ctx: &mut UpdateContext<'_>, now: Instant) -> Task<Message> {
    let removed = ctx.notifications.tick();
    if !removed.is_empty() {
        tracing::trace!(count = removed.len(), "notifications removed");
    }

    if ctx.catalog.is_loading() {
        return handle_catalog_message(ctx, catalog::Message::Tick(now));
    }
    Task::none()
}
