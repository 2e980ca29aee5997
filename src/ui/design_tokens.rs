// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines all of the application's design tokens, following the W3C Design Tokens standard.

## Organization

- **Palette**: Base colors, severity schemes and tier accents
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions
- **Motion**: Toast animation offsets

## Examples

```
use gift_registry::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

// Create a modal backdrop color
let backdrop = Color {
    a: opacity::BACKDROP,
    ..palette::BLACK
};

// Use the spacing scale
let padding = spacing::MD; // 16px
```

## Modification

Tokens are designed to be consistent. Before modifying:
1. Check the impact on all components
2. Maintain ratios (e.g., MD = XS * 2)
3. Run validation tests
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.067, 0.094, 0.153);
    pub const GRAY_800: Color = Color::from_rgb(0.122, 0.161, 0.216);
    pub const GRAY_600: Color = Color::from_rgb(0.294, 0.333, 0.388);
    pub const GRAY_500: Color = Color::from_rgb(0.42, 0.447, 0.502);
    pub const GRAY_400: Color = Color::from_rgb(0.612, 0.639, 0.686);
    pub const GRAY_300: Color = Color::from_rgb(0.82, 0.835, 0.859);
    pub const GRAY_200: Color = Color::from_rgb(0.898, 0.906, 0.922);
    pub const GRAY_100: Color = Color::from_rgb(0.953, 0.957, 0.965);
    pub const GRAY_50: Color = Color::from_rgb(0.976, 0.98, 0.984);

    // Brand gradient (indigo -> purple -> pink)
    pub const BRAND_START: Color = Color::from_rgb(0.388, 0.4, 0.945);
    pub const BRAND_MID: Color = Color::from_rgb(0.659, 0.333, 0.969);
    pub const BRAND_END: Color = Color::from_rgb(0.925, 0.282, 0.6);
    pub const BRAND_ACCENT: Color = Color::from_rgb(0.576, 0.2, 0.918); // Purple 600

    // Link button (blue scale)
    pub const LINK_50: Color = Color::from_rgb(0.937, 0.965, 1.0);
    pub const LINK_600: Color = Color::from_rgb(0.145, 0.388, 0.922);

    // Success (green scale)
    pub const SUCCESS_100: Color = Color::from_rgb(0.863, 0.988, 0.906);
    pub const SUCCESS_200: Color = Color::from_rgb(0.733, 0.969, 0.816);
    pub const SUCCESS_500: Color = Color::from_rgb(0.133, 0.773, 0.369);
    pub const SUCCESS_800: Color = Color::from_rgb(0.086, 0.396, 0.204);

    // Error (red scale)
    pub const ERROR_100: Color = Color::from_rgb(0.996, 0.886, 0.886);
    pub const ERROR_200: Color = Color::from_rgb(0.996, 0.792, 0.792);
    pub const ERROR_500: Color = Color::from_rgb(0.937, 0.267, 0.267);
    pub const ERROR_800: Color = Color::from_rgb(0.6, 0.106, 0.106);

    // Info (indigo scale)
    pub const INFO_100: Color = Color::from_rgb(0.878, 0.906, 1.0);
    pub const INFO_200: Color = Color::from_rgb(0.78, 0.824, 0.996);
    pub const INFO_500: Color = Color::from_rgb(0.388, 0.4, 0.945);
    pub const INFO_800: Color = Color::from_rgb(0.216, 0.188, 0.639);

    // Price tier accents
    pub const GOLD_400: Color = Color::from_rgb(0.984, 0.749, 0.141);
    pub const GOLD_600: Color = Color::from_rgb(0.851, 0.467, 0.024);
    pub const SILVER_300: Color = Color::from_rgb(0.796, 0.835, 0.882);
    pub const SILVER_600: Color = Color::from_rgb(0.278, 0.333, 0.412);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    /// Modal backdrop over the page
    pub const BACKDROP: f32 = 0.6;
    /// Purchased gift cards
    pub const UNAVAILABLE: f32 = 0.5;
    /// Secondary text on the brand gradient
    pub const ON_BRAND_MUTED: f32 = 0.9;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
    pub const XXL: f32 = 48.0; // 6 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Icon sizes
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 20.0;
    pub const ICON_LG: f32 = 24.0;
    pub const ICON_XL: f32 = 48.0;

    // Interactive element heights
    pub const BUTTON_HEIGHT: f32 = 44.0;
    pub const CHECKBOX: f32 = 24.0;

    // Component widths
    pub const TOAST_WIDTH: f32 = 320.0;
    pub const MODAL_WIDTH: f32 = 448.0;
    pub const CONTENT_MAX_WIDTH: f32 = 1024.0;

    /// Left accent stripe of a gift card
    pub const TIER_STRIPE: f32 = 6.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font size scale.
    //!
    //! The scale provides semantic sizes for consistent text hierarchy:
    //! - Titles: Large headings (page, columns, dialogs)
    //! - Body: Primary content text
    //! - Caption: Secondary, supporting text

    /// Display - Page heading on the gradient
    pub const DISPLAY: f32 = 40.0;

    /// Large title - Column headings, dialog titles
    pub const TITLE_LG: f32 = 24.0;

    /// Medium title - Gift names
    pub const TITLE_MD: f32 = 18.0;

    /// Large body - Subtitle under the page heading
    pub const BODY_LG: f32 = 17.0;

    /// Standard body - Most UI text, toasts
    pub const BODY: f32 = 14.0;

    /// Small body - Prices, form hints
    pub const BODY_SM: f32 = 13.0;

    /// Caption - Badges, form labels
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Thin border - Toasts, input fields
    pub const WIDTH_SM: f32 = 1.0;

    /// Medium border - Checkboxes
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const XL: f32 = 16.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::Color;
    use iced::{Shadow, Vector};

    const SHADOW_COLOR: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.15,
    };

    pub const NONE: Shadow = Shadow {
        color: Color::TRANSPARENT,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const MD: Shadow = Shadow {
        color: SHADOW_COLOR,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };

    pub const LG: Shadow = Shadow {
        color: SHADOW_COLOR,
        offset: Vector { x: 0.0, y: 10.0 },
        blur_radius: 20.0,
    };
}

// ============================================================================
// Motion
// ============================================================================

pub mod motion {
    /// Horizontal distance a toast travels while entering or leaving.
    pub const TOAST_SLIDE: f32 = 24.0;
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    // Opacity validation
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::BACKDROP > 0.0 && opacity::BACKDROP < 1.0);
    assert!(opacity::UNAVAILABLE > 0.0 && opacity::UNAVAILABLE < 1.0);

    // Sizing validation
    assert!(sizing::ICON_LG > sizing::ICON_MD);
    assert!(sizing::ICON_MD > sizing::ICON_SM);
    assert!(sizing::MODAL_WIDTH < sizing::CONTENT_MAX_WIDTH);

    // Typography validation
    assert!(typography::DISPLAY > typography::TITLE_LG);
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::BODY_LG);
    assert!(typography::BODY > typography::BODY_SM);
    assert!(typography::BODY_SM > typography::CAPTION);

    // Border validation
    assert!(border::WIDTH_MD > border::WIDTH_SM);

    // Color validation
    assert!(palette::SUCCESS_500.g >= 0.0 && palette::SUCCESS_500.g <= 1.0);
};
