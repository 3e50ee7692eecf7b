// SPDX-License-Identifier: MPL-2.0
//! Persistent bottom navigation bar.
//!
//! Shown only on the screens listed in [`Screen::BOTTOM_NAV`]. Each item
//! issues a forward navigation request to its screen.

use crate::i18n::fluent::I18n;
use crate::navigation::Screen;
use crate::ui::design_tokens::{font, palette, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::AppTheme;
use iced::alignment::Horizontal;
use iced::widget::{button, container, text, Column, Row};
use iced::{Color, Element, Length};

/// Contextual data needed to render the bottom bar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub theme: AppTheme,
    pub active: Screen,
}

/// Messages emitted by the bottom bar.
#[derive(Debug, Clone)]
pub enum Message {
    Select(Screen),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Navigate(Screen),
}

/// Process a bottom bar message and return the corresponding event.
#[must_use]
pub fn update(message: &Message) -> Event {
    match message {
        Message::Select(screen) => Event::Navigate(*screen),
    }
}

fn icon(screen: Screen) -> &'static str {
    match screen {
        Screen::Home => "🏠",
        Screen::Camera => "📷",
        Screen::Library => "📖",
        Screen::Training => "🧠",
        Screen::Settings => "⚙",
        _ => "•",
    }
}

fn label_key(screen: Screen) -> String {
    format!("nav-{}", screen.id())
}

fn highlight(index: usize) -> Color {
    palette::ACCENTS[index % palette::ACCENTS.len()]
}

/// Render the bottom bar.
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view(ctx: ViewContext<'_>) -> Element<'static, Message> {
    let app_theme = ctx.theme;

    let items = Screen::BOTTOM_NAV.iter().enumerate().fold(
        Row::new().spacing(spacing::XXS),
        |row, (index, &screen)| {
            let active = screen == ctx.active;
            let content = Column::new()
                .spacing(spacing::XXS)
                .align_x(Horizontal::Center)
                .width(Length::Fill)
                .push(text(icon(screen)).size(typography::TITLE_SM))
                .push(
                    text(ctx.i18n.tr(&label_key(screen)).to_uppercase())
                        .size(typography::CAPTION)
                        .font(font::HEAVY),
                );
            row.push(
                button(content)
                    .width(Length::Fill)
                    .padding([spacing::XS, spacing::XXS])
                    .on_press(Message::Select(screen))
                    .style(styles::button::nav_item(app_theme, active, highlight(index))),
            )
        },
    );

    container(items)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::BOTTOM_NAV_HEIGHT))
        .padding([spacing::XS, spacing::SM])
        .style(styles::container::bottom_bar(app_theme))
        .into()
}
