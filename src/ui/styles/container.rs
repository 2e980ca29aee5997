// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::domain::gift::PriceTier;
use crate::ui::design_tokens::{
    border, opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use iced::gradient::Linear;
use iced::widget::container;
use iced::{Background, Border, Color, Degrees, Gradient, Theme};

/// Full-page brand gradient behind the catalog.
pub fn page(_theme: &Theme) -> container::Style {
    let gradient = Linear::new(Degrees(135.0))
        .add_stop(0.0, palette::BRAND_START)
        .add_stop(0.5, palette::BRAND_MID)
        .add_stop(1.0, palette::BRAND_END);

    container::Style {
        background: Some(Background::Gradient(Gradient::Linear(gradient))),
        text_color: Some(WHITE),
        ..Default::default()
    }
}

/// Translucent white surface drawn directly on the gradient.
pub fn on_brand(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..WHITE
        })),
        text_color: Some(WHITE),
        border: Border {
            color: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..WHITE
            },
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        ..Default::default()
    }
}

/// Dialog surface.
///
/// Follows the active theme background so the surface stays readable in both
/// light and dark modes.
pub fn panel(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.base.color)),
        text_color: Some(palette.background.base.text),
        border: Border {
            radius: radius::XL.into(),
            ..Default::default()
        },
        shadow: shadow::LG,
        ..Default::default()
    }
}

/// Gift card surface; purchased gifts are drawn faded.
pub fn card(available: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let palette = theme.extended_palette();
        let alpha = if available {
            opacity::OPAQUE
        } else {
            opacity::UNAVAILABLE
        };

        container::Style {
            background: Some(Background::Color(Color {
                a: alpha,
                ..palette.background.weak.color
            })),
            text_color: Some(palette.background.base.text),
            border: Border {
                color: palette.background.strong.color,
                width: border::WIDTH_SM,
                radius: radius::LG.into(),
            },
            shadow: if available { shadow::MD } else { shadow::NONE },
            ..Default::default()
        }
    }
}

/// Accent color of a price tier.
#[must_use]
pub fn tier_color(tier: PriceTier) -> Color {
    match tier {
        PriceTier::Highlight => palette::GOLD_400,
        PriceTier::Keepsake => palette::SILVER_300,
    }
}

/// Colored stripe on the leading edge of a gift card.
pub fn tier_stripe(tier: PriceTier) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(tier_color(tier))),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// "Purchased" pill shown in place of the checkbox.
pub fn purchased_badge(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::SUCCESS_100)),
        text_color: Some(palette::SUCCESS_800),
        border: Border {
            color: palette::SUCCESS_200,
            width: border::WIDTH_SM,
            radius: radius::FULL.into(),
        },
        ..Default::default()
    }
}

/// Dimmed layer behind a dialog.
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::BACKDROP,
            ..BLACK
        })),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_use_distinct_accents() {
        assert_eq!(tier_color(PriceTier::Highlight), palette::GOLD_400);
        assert_eq!(tier_color(PriceTier::Keepsake), palette::SILVER_300);
    }

    #[test]
    fn unavailable_card_is_faded() {
        let available = card(true)(&Theme::Light);
        let taken = card(false)(&Theme::Light);

        let alpha = |style: &container::Style| match style.background {
            Some(Background::Color(color)) => color.a,
            _ => panic!("Expected background color"),
        };
        assert!(alpha(&taken) < alpha(&available));
    }

    #[test]
    fn backdrop_is_translucent() {
        match backdrop(&Theme::Dark).background {
            Some(Background::Color(color)) => assert_eq!(color.a, opacity::BACKDROP),
            _ => panic!("Expected background color"),
        }
    }

    #[test]
    fn page_uses_gradient_background() {
        assert!(matches!(
            page(&Theme::Light).background,
            Some(Background::Gradient(_))
        ));
    }
}
