// SPDX-License-Identifier: MPL-2.0
//! Statistic tiles and cards.

use crate::ui::components::header::muted;
use crate::ui::design_tokens::{font, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::AppTheme;
use iced::alignment::Horizontal;
use iced::widget::{container, text, Column};
use iced::{Color, Element, Length};

/// A value over its label, on an accent-colored icon strip.
pub fn stat<'a, M: 'a>(
    icon: &'static str,
    value: String,
    label: String,
    accent: Color,
    app_theme: AppTheme,
) -> Element<'a, M> {
    let icon_badge = container(text(icon).size(typography::TITLE_MD))
        .padding(spacing::XS)
        .style(styles::container::pill(app_theme, accent));

    card(
        Column::new()
            .spacing(spacing::XS)
            .align_x(Horizontal::Center)
            .push(icon_badge)
            .push(text(value).size(typography::TITLE_MD).font(font::HEAVY))
            .push(muted(label.to_uppercase(), typography::CAPTION, app_theme))
            .into(),
        app_theme,
    )
}

/// Outlined card around `content`, filling the available width.
pub fn card<'a, M: 'a>(content: Element<'a, M>, app_theme: AppTheme) -> Element<'a, M> {
    container(content)
        .width(Length::Fill)
        .padding(spacing::MD)
        .style(styles::container::card(app_theme))
        .into()
}

/// Outlined card filled with an accent color.
pub fn accent_card<'a, M: 'a>(
    content: Element<'a, M>,
    accent: Color,
    app_theme: AppTheme,
) -> Element<'a, M> {
    container(content)
        .width(Length::Fill)
        .padding(spacing::MD)
        .style(styles::container::accent_card(app_theme, accent))
        .into()
}
