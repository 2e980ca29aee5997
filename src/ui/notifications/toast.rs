// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering individual notifications.
//!
//! Toasts are the visual representation of notifications, appearing as
//! small tinted cards with a severity icon and a close button. Opacity and a
//! short vertical offset follow the notification's lifecycle.

use super::manager::{Manager, Message};
use super::notification::{Notification, Severity};
use crate::ui::design_tokens::{border, motion, palette, radius, shadow, sizing, spacing, typography};
use crate::ui::icons;
use iced::widget::{button, container, text, Column, Container, Row, Svg, Text};
use iced::{alignment, font, Color, Element, Font, Length, Padding, Theme};

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single toast notification at the given opacity.
    pub fn view(notification: &Notification, alpha: f32) -> Element<'_, Message> {
        let severity = notification.severity();
        let text_color = fade(severity.text(), alpha);

        let icon_widget = icons::sized(
            icons::tinted(Self::severity_icon(severity), fade(severity.color(), alpha)),
            sizing::ICON_LG,
        );

        let message_widget = Text::new(notification.message())
            .size(typography::BODY)
            .font(Font {
                weight: font::Weight::Bold,
                ..Font::DEFAULT
            })
            .style(move |_theme: &Theme| text::Style {
                color: Some(text_color),
            });

        let dismiss_button = button(icons::sized(
            icons::tinted(icons::cross(), fade(palette::GRAY_400, alpha)),
            sizing::ICON_MD,
        ))
        .on_press(Message::Dismiss(notification.id()))
        .padding(0)
        .style(dismiss_button_style);

        // Layout: [icon] [message] [dismiss]
        let content = Row::new()
            .spacing(spacing::MD)
            .align_y(alignment::Vertical::Top)
            .push(icon_widget)
            .push(
                Container::new(message_widget)
                    .width(Length::Fill)
                    .padding(Padding::ZERO.top(2.0)),
            )
            .push(dismiss_button);

        let card = Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::MD)
            .style(move |_theme: &Theme| toast_container_style(severity, alpha));

        // Slide in from above, drift down while leaving.
        Container::new(card)
            .padding(Padding::ZERO.top(slide_offset(alpha)))
            .into()
    }

    /// Renders the toast overlay with all active notifications.
    ///
    /// The overlay fills the window and stacks toasts in the top-right
    /// corner in insertion order. It holds no interactive widget besides the
    /// toasts, so clicks elsewhere reach the page underneath.
    pub fn view_overlay(manager: &Manager) -> Element<'_, Message> {
        let toasts: Vec<Element<'_, Message>> = manager
            .notifications()
            .map(|notification| Self::view(notification, manager.opacity(notification)))
            .collect();

        if toasts.is_empty() {
            // Return an empty container that takes no space
            Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into()
        } else {
            let toast_column = Column::with_children(toasts)
                .spacing(spacing::MD)
                .align_x(alignment::Horizontal::Right);

            Container::new(toast_column)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(alignment::Horizontal::Right)
                .align_y(alignment::Vertical::Top)
                .padding(spacing::LG)
                .into()
        }
    }

    /// Returns the appropriate icon for the severity level.
    fn severity_icon<'a>(severity: Severity) -> Svg<'a> {
        match severity {
            Severity::Success => icons::check_circle(),
            Severity::Error => icons::exclamation_circle(),
            Severity::Info => icons::info_circle(),
        }
    }
}

fn fade(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha,
        ..color
    }
}

fn slide_offset(alpha: f32) -> f32 {
    (1.0 - alpha.clamp(0.0, 1.0)) * motion::TOAST_SLIDE
}

/// Style function for the toast container.
fn toast_container_style(severity: Severity, alpha: f32) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(fade(severity.background(), alpha * 0.9))),
        border: iced::Border {
            color: fade(severity.border(), alpha),
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        shadow: iced::Shadow {
            color: fade(shadow::LG.color, alpha),
            ..shadow::LG
        },
        text_color: Some(fade(severity.text(), alpha)),
        ..Default::default()
    }
}

/// Style function for the dismiss button.
fn dismiss_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => palette::GRAY_600,
        button::Status::Active | button::Status::Disabled => palette::GRAY_400,
    };

    button::Style {
        background: None,
        text_color,
        border: iced::Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}
