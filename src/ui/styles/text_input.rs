// SPDX-License-Identifier: MPL-2.0
//! Text input styles for dialog forms.

use crate::ui::design_tokens::{border, palette, radius};
use iced::widget::text_input::{Status, Style};
use iced::{Border, Theme};

/// Form field with a brand-colored focus ring.
pub fn field(theme: &Theme, status: Status) -> Style {
    let palette = theme.extended_palette();

    let border_color = match status {
        Status::Focused { .. } => palette::BRAND_ACCENT,
        Status::Hovered => palette.background.strong.text,
        Status::Active | Status::Disabled => palette.background.strong.color,
    };
    let background = match status {
        Status::Disabled => palette.background.weak.color,
        _ => palette.background.base.color,
    };

    Style {
        background: background.into(),
        border: Border {
            color: border_color,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        icon: palette.background.weak.text,
        placeholder: palette.background.strong.color,
        value: palette.background.base.text,
        selection: palette.primary.weak.color,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focused_field_uses_brand_border() {
        let style = field(&Theme::Light, Status::Focused { is_hovered: false });
        assert_eq!(style.border.color, palette::BRAND_ACCENT);
    }

    #[test]
    fn idle_field_uses_theme_border() {
        let theme = Theme::Light;
        let style = field(&theme, Status::Active);
        assert_eq!(
            style.border.color,
            theme.extended_palette().background.strong.color
        );
    }
}
