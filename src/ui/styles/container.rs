// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use crate::ui::theming::AppTheme;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Full-screen background behind a screen.
pub fn screen(app_theme: AppTheme) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(app_theme.background)),
        text_color: Some(app_theme.text),
        ..Default::default()
    }
}

/// Background-colored cover drawn over a sliding layer to fade it out.
pub fn veil(app_theme: AppTheme, alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: alpha,
            ..app_theme.background
        })),
        ..Default::default()
    }
}

/// Outlined card on the theme's card color.
pub fn card(app_theme: AppTheme) -> impl Fn(&Theme) -> container::Style {
    filled(app_theme, app_theme.card)
}

/// Outlined card filled with an accent color.
///
/// Accent fills are light enough that their text is always black.
pub fn accent_card(app_theme: AppTheme, accent: Color) -> impl Fn(&Theme) -> container::Style {
    let base = filled(app_theme, accent);
    move |theme: &Theme| container::Style {
        text_color: Some(palette::BLACK),
        ..base(theme)
    }
}

fn filled(app_theme: AppTheme, fill: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(fill)),
        text_color: Some(app_theme.text),
        border: Border {
            color: app_theme.border,
            width: border::WIDTH_MD,
            radius: radius::LG.into(),
        },
        shadow: shadow::HARD,
        ..Default::default()
    }
}

/// Small rounded badge, e.g. a difficulty tag or a loading dot.
pub fn pill(app_theme: AppTheme, fill: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(fill)),
        text_color: Some(palette::BLACK),
        border: Border {
            color: app_theme.border,
            width: border::WIDTH_SM,
            radius: radius::FULL.into(),
        },
        ..Default::default()
    }
}

/// Persistent bottom navigation bar.
pub fn bottom_bar(app_theme: AppTheme) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(app_theme.card)),
        text_color: Some(app_theme.text),
        border: Border {
            color: app_theme.border,
            width: border::WIDTH_MD,
            radius: radius::NONE.into(),
        },
        ..Default::default()
    }
}

/// Dimmed backdrop behind a modal.
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::BACKDROP,
            ..palette::BLACK
        })),
        ..Default::default()
    }
}

/// Progress bar track and fill.
pub fn progress(
    app_theme: AppTheme,
    fill: Color,
) -> impl Fn(&Theme) -> iced::widget::progress_bar::Style {
    move |_theme: &Theme| iced::widget::progress_bar::Style {
        background: Background::Color(app_theme.card),
        bar: Background::Color(fill),
        border: Border {
            color: app_theme.border,
            width: border::WIDTH_SM,
            radius: radius::FULL.into(),
        },
    }
}
