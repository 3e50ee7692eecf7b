// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.
//!
//! Buttons are parameterized by the [`AppTheme`] rather than the iced
//! `Theme`, so they follow the dark-mode flag exactly.

use crate::ui::design_tokens::{border, palette, radius, shadow};
use crate::ui::theming::AppTheme;
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Accent-filled button with a thick outline and a hard shadow that
/// collapses when pressed.
pub fn accent(
    app_theme: AppTheme,
    fill: Color,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let (background, shadow) = match status {
            button::Status::Pressed => (fill, shadow::HARD_SM),
            button::Status::Hovered => (lighten(fill), shadow::HARD),
            button::Status::Disabled => (Color { a: 0.5, ..fill }, shadow::NONE),
            button::Status::Active => (fill, shadow::HARD),
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color: palette::BLACK,
            border: Border {
                color: app_theme.border,
                width: border::WIDTH_MD,
                radius: radius::MD.into(),
            },
            shadow,
            snap: true,
        }
    }
}

/// Card-colored button used for secondary actions.
pub fn outlined(app_theme: AppTheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| button::Style {
        text_color: app_theme.text,
        ..accent(app_theme, app_theme.card)(theme, status)
    }
}

/// Borderless text button (links, "skip", "forgot password").
pub fn text(app_theme: AppTheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match status {
            button::Status::Hovered | button::Status::Pressed => 1.0,
            _ => 0.8,
        };
        button::Style {
            background: None,
            text_color: Color {
                a: alpha,
                ..app_theme.text
            },
            border: Border::default(),
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Bottom navigation item; the active one is filled with `highlight`.
pub fn nav_item(
    app_theme: AppTheme,
    active: bool,
    highlight: Color,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let background = if active {
            Some(Background::Color(highlight))
        } else if matches!(status, button::Status::Hovered) {
            Some(Background::Color(Color {
                a: 0.3,
                ..highlight
            }))
        } else {
            None
        };
        let border_width = if active { border::WIDTH_SM } else { 0.0 };

        button::Style {
            background,
            text_color: if active {
                palette::BLACK
            } else {
                app_theme.text
            },
            border: Border {
                color: app_theme.border,
                width: border_width,
                radius: radius::MD.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Mixes a color a quarter of the way toward white.
fn lighten(color: Color) -> Color {
    Color {
        r: color.r + (1.0 - color.r) * 0.25,
        g: color.g + (1.0 - color.g) * 0.25,
        b: color.b + (1.0 - color.b) * 0.25,
        a: color.a,
    }
}
