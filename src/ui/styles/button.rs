// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    border, opacity,
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Primary action (dialog confirmation).
pub fn primary(theme: &Theme, status: button::Status) -> button::Style {
    let is_light = matches!(theme, Theme::Light);

    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette::BRAND_ACCENT)),
            text_color: WHITE,
            border: Border {
                color: palette::BRAND_ACCENT,
                width: border::WIDTH_SM,
                radius: radius::MD.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::BRAND_MID)),
            text_color: WHITE,
            border: Border {
                color: palette::BRAND_ACCENT,
                width: border::WIDTH_SM,
                radius: radius::MD.into(),
            },
            shadow: shadow::MD,
            snap: true,
        },
        // Shown while a request is in flight.
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(if is_light {
                palette::GRAY_300
            } else {
                palette::GRAY_600
            })),
            text_color: palette::GRAY_100,
            border: Border {
                radius: radius::MD.into(),
                ..Border::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

/// Secondary action (cancel, refresh).
pub fn secondary(theme: &Theme, status: button::Status) -> button::Style {
    let is_light = matches!(theme, Theme::Light);

    let (background, text_color) = if is_light {
        (palette::GRAY_100, palette::GRAY_800)
    } else {
        (palette::GRAY_800, palette::GRAY_100)
    };

    let border_color = match status {
        button::Status::Hovered => palette::BRAND_ACCENT,
        _ => palette::GRAY_300,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: if matches!(status, button::Status::Disabled) {
            palette::GRAY_400
        } else {
            text_color
        },
        border: Border {
            color: border_color,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// "View in store" link on a gift card. Disabled once the gift is taken.
pub fn link(_theme: &Theme, status: button::Status) -> button::Style {
    let (background, text_color, border_color) = match status {
        button::Status::Hovered | button::Status::Pressed => {
            (palette::LINK_600, WHITE, palette::LINK_600)
        }
        button::Status::Active => (palette::LINK_50, palette::LINK_600, palette::LINK_600),
        button::Status::Disabled => (palette::GRAY_100, palette::GRAY_400, palette::GRAY_200),
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color,
        border: Border {
            color: border_color,
            width: border::WIDTH_SM,
            radius: radius::FULL.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Empty box that opens the purchase dialog.
pub fn checkbox(theme: &Theme, status: button::Status) -> button::Style {
    let is_light = matches!(theme, Theme::Light);

    let border_color = match status {
        button::Status::Hovered | button::Status::Pressed => palette::BRAND_ACCENT,
        _ => palette::GRAY_400,
    };
    let background = match status {
        button::Status::Hovered => Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::BRAND_MID
        },
        _ if is_light => WHITE,
        _ => palette::GRAY_800,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: palette::BRAND_ACCENT,
        border: Border {
            color: border_color,
            width: border::WIDTH_MD,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Translucent white button placed on the brand gradient.
pub fn on_brand(_theme: &Theme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered => opacity::OVERLAY_MEDIUM,
        button::Status::Pressed => opacity::BACKDROP,
        _ => opacity::OVERLAY_SUBTLE,
    };

    button::Style {
        background: Some(Background::Color(Color { a: alpha, ..WHITE })),
        text_color: WHITE,
        border: Border {
            color: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..WHITE
            },
            width: border::WIDTH_SM,
            radius: radius::FULL.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_button_uses_brand_colors() {
        let style = primary(&Theme::Dark, button::Status::Active);

        if let Some(Background::Color(bg)) = style.background {
            assert_eq!(bg, palette::BRAND_ACCENT);
        } else {
            panic!("Expected background color");
        }
    }

    #[test]
    fn primary_button_is_muted_when_disabled() {
        let active = primary(&Theme::Light, button::Status::Active);
        let disabled = primary(&Theme::Light, button::Status::Disabled);
        assert_ne!(active.background, disabled.background);
    }

    #[test]
    fn link_button_inverts_on_hover() {
        let normal = link(&Theme::Light, button::Status::Active);
        let hover = link(&Theme::Light, button::Status::Hovered);

        assert_eq!(normal.text_color, palette::LINK_600);
        assert_eq!(hover.text_color, WHITE);
        assert_ne!(normal.background, hover.background);
    }

    #[test]
    fn disabled_link_is_gray() {
        let style = link(&Theme::Light, button::Status::Disabled);
        assert_eq!(style.text_color, palette::GRAY_400);
    }

    #[test]
    fn checkbox_border_highlights_on_hover() {
        let normal = checkbox(&Theme::Light, button::Status::Active);
        let hover = checkbox(&Theme::Light, button::Status::Hovered);
        assert_eq!(normal.border.color, palette::GRAY_400);
        assert_eq!(hover.border.color, palette::BRAND_ACCENT);
    }
}
