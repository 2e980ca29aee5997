// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The catalog page fills the window and the toast overlay is stacked on top
//! of it. The overlay only captures input on the toasts themselves.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::catalog;
use crate::ui::notifications::{Manager, Toast};
use iced::widget::Stack;
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub catalog: &'a catalog::State,
    pub notifications: &'a Manager,
}

/// Renders the catalog with the toast overlay above it.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let page = ctx
        .catalog
        .view(catalog::ViewContext { i18n: ctx.i18n })
        .map(Message::Catalog);

    let toasts = Toast::view_overlay(ctx.notifications).map(Message::Notification);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(page)
        .push(toasts)
        .into()
}
