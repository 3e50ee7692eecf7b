// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Every color, size and spacing value used by the screens.

## Organization

- **Palette**: Surface colors and the accent set
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Font**: Font weights
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Hard offset shadows

## Examples

```
use signspeak::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

let faded_pink = Color {
    a: opacity::MUTED,
    ..palette::PINK
};

let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

/// Builds a color from 8-bit channels at compile time.
const fn rgb8(r: u8, g: u8, b: u8) -> Color {
    Color::from_rgb(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
}

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::{rgb8, Color};

    // Surfaces
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const CREAM: Color = rgb8(0xfe, 0xf3, 0xc7);
    pub const CHARCOAL: Color = rgb8(0x1a, 0x1a, 0x1a);
    pub const GRAPHITE: Color = rgb8(0x2d, 0x2d, 0x2d);

    // Accents
    pub const PINK: Color = rgb8(0xff, 0x6b, 0x9d);
    pub const PURPLE: Color = rgb8(0xc0, 0x84, 0xfc);
    pub const YELLOW: Color = rgb8(0xfb, 0xbf, 0x24);
    pub const BLUE: Color = rgb8(0x60, 0xa5, 0xfa);
    pub const GREEN: Color = rgb8(0x10, 0xb9, 0x81);
    pub const RED: Color = rgb8(0xef, 0x44, 0x44);
    pub const AMBER: Color = rgb8(0xf5, 0x9e, 0x0b);

    /// Accents in the order screens cycle through them.
    pub const ACCENTS: [Color; 5] = [PINK, PURPLE, YELLOW, BLUE, GREEN];
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    /// Secondary text over a card
    pub const MUTED: f32 = 0.7;
    /// Modal backdrop
    pub const BACKDROP: f32 = 0.5;
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
    pub const ICON_MD: f32 = 24.0;
    pub const ICON_LG: f32 = 32.0;
    pub const ICON_XL: f32 = 48.0;

    /// Splash logo and onboarding illustration tile
    pub const HERO: f32 = 128.0;
    pub const AVATAR: f32 = 96.0;
    pub const LOADING_DOT: f32 = 12.0;
    pub const PROGRESS_DOT: f32 = 12.0;
    pub const PROGRESS_DOT_ACTIVE: f32 = 32.0;

    pub const BUTTON_HEIGHT: f32 = 48.0;
    pub const BOTTOM_NAV_HEIGHT: f32 = 72.0;
    pub const PROGRESS_BAR_HEIGHT: f32 = 16.0;
    pub const MINI_BAR_HEIGHT: f32 = 8.0;

    /// Width of a gesture tile in the library grid
    pub const GESTURE_TILE: f32 = 96.0;
    pub const MODAL_WIDTH: f32 = 320.0;

    /// Phone-like default window
    pub const WINDOW_WIDTH: f32 = 420.0;
    pub const WINDOW_HEIGHT: f32 = 820.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font size scale.
    //!
    //! Display sizes are used for the splash title and recognized letters,
    //! titles for screen headings and body sizes for everything else.

    /// Recognized letter on the camera screen
    pub const DISPLAY_LG: f32 = 96.0;

    /// Splash title, gesture letter in the detail modal
    pub const DISPLAY: f32 = 48.0;

    /// Screen headings
    pub const TITLE_LG: f32 = 30.0;

    /// Card headings, app name
    pub const TITLE_MD: f32 = 20.0;

    /// Section headers
    pub const TITLE_SM: f32 = 18.0;

    pub const BODY_LG: f32 = 16.0;

    pub const BODY: f32 = 14.0;

    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Font Weights
// ============================================================================

pub mod font {
    use iced::font::Weight;
    use iced::Font;

    pub const BOLD: Font = Font {
        weight: Weight::Bold,
        ..Font::DEFAULT
    };

    /// Headings and button labels
    pub const HEAVY: Font = Font {
        weight: Weight::Black,
        ..Font::DEFAULT
    };
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Dividers and inner outlines
    pub const WIDTH_SM: f32 = 2.0;

    /// Card and button outlines
    pub const WIDTH_MD: f32 = 4.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 12.0;
    pub const LG: f32 = 24.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    /// Hard, unblurred offset shadow for cards and buttons.
    pub const HARD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 6.0, y: 6.0 },
        blur_radius: 0.0,
    };

    /// Shadow of a pressed button.
    pub const HARD_SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 2.0, y: 2.0 },
        blur_radius: 0.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::MUTED > 0.0 && opacity::MUTED < 1.0);

    assert!(sizing::ICON_XL > sizing::ICON_LG);
    assert!(sizing::ICON_LG > sizing::ICON_MD);
    assert!(sizing::PROGRESS_DOT_ACTIVE > sizing::PROGRESS_DOT);

    assert!(typography::DISPLAY_LG > typography::DISPLAY);
    assert!(typography::DISPLAY > typography::TITLE_LG);
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY > typography::CAPTION);

    assert!(border::WIDTH_MD > border::WIDTH_SM);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }

    #[test]
    fn hex_palette_converts_exactly() {
        assert_eq!(palette::CREAM.r, 254.0 / 255.0);
        assert_eq!(palette::CHARCOAL.g, 26.0 / 255.0);
        assert_eq!(palette::PINK.b, 157.0 / 255.0);
        assert_eq!(palette::PINK.a, 1.0);
    }
}
