// SPDX-License-Identifier: MPL-2.0
//! Splash screen shown at startup.
//!
//! It has no interaction of its own and looks the same in both themes; the
//! navigator advances to onboarding once the dwell time has elapsed.

use crate::i18n::fluent::I18n;
use crate::ui::components::header;
use crate::ui::design_tokens::{border, font, palette, radius, shadow, sizing, spacing, typography};
use crate::ui::theming::AppTheme;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{container, text, Column, Row, Space};
use iced::{Background, Border, Element, Length, Theme};
use std::time::Duration;

/// Number of pulsing loading dots.
const LOADING_DOTS: usize = 3;

/// Period of one loading-dot pulse.
const PULSE_PERIOD: Duration = Duration::from_millis(1200);

/// Contextual data needed to render the splash screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// Time since the splash screen was entered, drives the dot pulse.
    pub elapsed: Duration,
}

/// Index of the highlighted loading dot after `elapsed`.
#[must_use]
pub fn active_dot(elapsed: Duration) -> usize {
    let step = PULSE_PERIOD.as_millis() / LOADING_DOTS as u128;
    ((elapsed.as_millis() / step) % LOADING_DOTS as u128) as usize
}

/// Render the splash screen.
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view<M: 'static>(ctx: ViewContext<'_>) -> Element<'static, M> {
    let logo = container(text("✋").size(typography::DISPLAY))
        .width(Length::Fixed(sizing::HERO))
        .height(Length::Fixed(sizing::HERO))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(|_theme: &Theme| container::Style {
            background: Some(Background::Color(palette::WHITE)),
            border: Border {
                color: palette::BLACK,
                width: border::WIDTH_MD,
                radius: radius::NONE.into(),
            },
            shadow: shadow::HARD,
            ..Default::default()
        });

    let title = text(ctx.i18n.tr("app-name"))
        .size(typography::DISPLAY)
        .font(font::HEAVY)
        .color(palette::BLACK);

    let tagline = header::badge(
        ctx.i18n.tr("splash-tagline").to_uppercase(),
        typography::BODY,
        AppTheme::LIGHT,
    );

    let active = active_dot(ctx.elapsed);
    let dots = (0..LOADING_DOTS).fold(Row::new().spacing(spacing::XS), |row, index| {
        let fill = if index == active {
            palette::BLACK
        } else {
            palette::WHITE
        };
        row.push(
            container(Space::new())
                .width(Length::Fixed(sizing::LOADING_DOT))
                .height(Length::Fixed(sizing::LOADING_DOT))
                .style(move |_theme: &Theme| container::Style {
                    background: Some(Background::Color(fill)),
                    border: Border {
                        color: palette::BLACK,
                        width: border::WIDTH_SM,
                        radius: radius::NONE.into(),
                    },
                    ..Default::default()
                }),
        )
    });

    let content = Column::new()
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .push(logo)
        .push(title)
        .push(tagline)
        .push(Space::new().height(Length::Fixed(spacing::XL)))
        .push(dots);

    // Same pink backdrop in both themes
    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(|_theme: &Theme| container::Style {
            background: Some(Background::Color(palette::PINK)),
            text_color: Some(palette::BLACK),
            ..Default::default()
        })
        .into()
}
