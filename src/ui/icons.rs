// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module for SVG icons.
//!
//! Icons are small vector documents embedded as string literals. Handles are
//! cached using `OnceLock` so each document is parsed once. Every icon is drawn
//! in black and recolored at render time with [`tinted`], which keeps a single
//! source per icon for both themes.
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::icons;
//!
//! let icon = icons::tinted(icons::check_circle(), palette::SUCCESS_500);
//! let icon = icons::sized(icon, sizing::ICON_LG);
//! ```
//!
//! # Naming Convention
//!
//! Icons use generic visual names describing the icon's appearance,
//! not the action context (e.g., `cross` not `close_toast`).

use iced::widget::svg::{self, Handle, Svg};
use iced::{Color, Length, Theme};
use std::sync::OnceLock;

// =============================================================================
// Macro for icon definition with cached handle
// =============================================================================

/// Defines an icon function with a cached handle.
///
/// `outline` icons are 24x24 stroked paths, `solid` icons are 20x20 filled
/// paths using the even-odd rule.
macro_rules! define_icon {
    ($name:ident, outline, $path:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name<'a>() -> Svg<'a> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            const DATA: &str = concat!(
                r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="black" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d=""#,
                $path,
                r#""/></svg>"#
            );
            let handle = HANDLE.get_or_init(|| Handle::from_memory(DATA.as_bytes()));
            Svg::new(handle.clone())
        }
    };
    ($name:ident, solid, $path:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name<'a>() -> Svg<'a> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            const DATA: &str = concat!(
                r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 20 20" fill="black"><path fill-rule="evenodd" clip-rule="evenodd" d=""#,
                $path,
                r#""/></svg>"#
            );
            let handle = HANDLE.get_or_init(|| Handle::from_memory(DATA.as_bytes()));
            Svg::new(handle.clone())
        }
    };
}

// =============================================================================
// Status & Feedback Icons
// =============================================================================

define_icon!(
    check_circle,
    outline,
    "M9 12l2 2 4-4m6 2a9 9 0 11-18 0 9 9 0 0118 0z",
    "Check circle icon: tick inside a circle."
);
define_icon!(
    exclamation_circle,
    outline,
    "M12 8v4m0 4h.01M21 12a9 9 0 11-18 0 9 9 0 0118 0z",
    "Exclamation circle icon: exclamation mark inside a circle."
);
define_icon!(
    info_circle,
    outline,
    "M13 16h-1v-4h-1m1-4h.01M21 12a9 9 0 11-18 0 9 9 0 0118 0z",
    "Info circle icon: letter i inside a circle."
);
define_icon!(
    cross,
    solid,
    "M4.293 4.293a1 1 0 011.414 0L10 8.586l4.293-4.293a1 1 0 111.414 1.414L11.414 10l4.293 4.293a1 1 0 01-1.414 1.414L10 11.414l-4.293 4.293a1 1 0 01-1.414-1.414L8.586 10 4.293 5.707a1 1 0 010-1.414z",
    "Cross icon: X mark shape."
);
define_icon!(
    checkmark,
    outline,
    "M20 6L9 17l-5-5",
    "Checkmark icon: bare tick mark."
);

// =============================================================================
// Catalog Icons
// =============================================================================

define_icon!(
    sparkles,
    outline,
    "M5 3v4M3 5h4M6 17v4m-2-2h4m5-16l2.286 6.857L21 12l-5.714 2.143L13 21l-2.286-6.857L5 12l5.714-2.143L13 3z",
    "Sparkles icon: three stars of different sizes."
);
define_icon!(
    gift,
    outline,
    "M12 8v13m0-13V6a2 2 0 112 2h-2zm0 0V5.5A2.5 2.5 0 109.5 8H12zm-7 4h14M5 12a2 2 0 110-4h14a2 2 0 110 4M5 12v7a2 2 0 002 2h10a2 2 0 002-2v-7",
    "Gift icon: wrapped box with a bow."
);
define_icon!(
    external_link,
    outline,
    "M10 6H6a2 2 0 00-2 2v10a2 2 0 002 2h10a2 2 0 002-2v-4M14 4h6m0 0v6m0-6L10 14",
    "External link icon: arrow leaving a square."
);
define_icon!(
    duplicate,
    outline,
    "M8 16H6a2 2 0 01-2-2V6a2 2 0 012-2h8a2 2 0 012 2v2m-6 12h8a2 2 0 002-2v-8a2 2 0 00-2-2h-8a2 2 0 00-2 2v8a2 2 0 002 2z",
    "Duplicate icon: two overlapping squares."
);
define_icon!(plus, outline, "M12 4v16m8-8H4", "Plus icon: cross of two bars.");
define_icon!(
    cash,
    outline,
    "M17 9V7a2 2 0 00-2-2H5a2 2 0 00-2 2v6a2 2 0 002 2h2m2 4h10a2 2 0 002-2v-6a2 2 0 00-2-2H9a2 2 0 00-2 2v6a2 2 0 002 2zm7-5a2 2 0 11-4 0 2 2 0 014 0z",
    "Cash icon: stacked banknotes."
);

// =============================================================================
// Helper Functions
// =============================================================================

/// Creates an icon with specified dimensions.
///
/// This is a convenience wrapper for setting both width and height.
pub fn sized<'a>(icon: Svg<'a>, size: f32) -> Svg<'a> {
    icon.width(Length::Fixed(size)).height(Length::Fixed(size))
}

/// Recolors an icon.
pub fn tinted<'a>(icon: Svg<'a>, color: Color) -> Svg<'a> {
    icon.style(move |_theme: &Theme, _status| svg::Style { color: Some(color) })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_icons_load_successfully() {
        let _ = check_circle();
        let _ = exclamation_circle();
        let _ = info_circle();
        let _ = cross();
        let _ = checkmark();
        let _ = sparkles();
        let _ = gift();
        let _ = external_link();
        let _ = duplicate();
        let _ = plus();
        let _ = cash();
    }

    #[test]
    fn sized_and_tinted_helpers_compose() {
        let icon = tinted(sized(gift(), 32.0), Color::WHITE);
        let _ = icon;
    }
}
