// SPDX-License-Identifier: MPL-2.0
//! Screen headings.
//!
//! Headings are drawn inverted: the theme's text color becomes the badge
//! fill and the background color becomes the ink.

use crate::ui::design_tokens::{border, font, opacity, radius, shadow, spacing, typography};
use crate::ui::theming::AppTheme;
use iced::widget::{container, text, Column};
use iced::{Background, Border, Color, Element, Theme};

/// Inverted badge holding `title`.
pub fn badge<'a, M: 'a>(title: String, size: f32, app_theme: AppTheme) -> Element<'a, M> {
    container(text(title).size(size).font(font::HEAVY))
        .padding([spacing::XS, spacing::MD])
        .style(move |_theme: &Theme| container::Style {
            background: Some(Background::Color(app_theme.text)),
            text_color: Some(app_theme.background),
            border: Border {
                color: app_theme.border,
                width: border::WIDTH_SM,
                radius: radius::SM.into(),
            },
            shadow: shadow::HARD_SM,
            ..Default::default()
        })
        .into()
}

/// Screen title badge with a muted subtitle line below it.
pub fn screen_header<'a, M: 'a>(
    title: String,
    subtitle: String,
    app_theme: AppTheme,
) -> Element<'a, M> {
    Column::new()
        .spacing(spacing::XS)
        .push(badge(title.to_uppercase(), typography::TITLE_LG, app_theme))
        .push(muted(subtitle, typography::BODY, app_theme))
        .into()
}

/// Section heading inside a screen.
pub fn section_title<'a, M: 'a>(title: String, app_theme: AppTheme) -> Element<'a, M> {
    badge(title.to_uppercase(), typography::TITLE_SM, app_theme)
}

/// Secondary text at reduced opacity.
pub fn muted<'a, M: 'a>(content: String, size: f32, app_theme: AppTheme) -> Element<'a, M> {
    text(content)
        .size(size)
        .font(font::BOLD)
        .color(Color {
            a: opacity::MUTED,
            ..app_theme.text
        })
        .into()
}
