// SPDX-License-Identifier: MPL-2.0
//! Home dashboard: greeting, static statistics and shortcuts to the main
//! features.

use crate::i18n::fluent::I18n;
use crate::navigation::Screen;
use crate::ui::components::{header, tile};
use crate::ui::design_tokens::{font, palette, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::AppTheme;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, container, scrollable, text, Column, Row, Space};
use iced::{Color, Element, Length};

/// Display name of the demo account.
pub const USER_NAME: &str = "Om";

struct ActionCard {
    target: Screen,
    icon: &'static str,
    title_key: &'static str,
    description_key: &'static str,
    accent: Color,
}

const ACTION_CARDS: [ActionCard; 4] = [
    ActionCard {
        target: Screen::Camera,
        icon: "📷",
        title_key: "home-card-camera-title",
        description_key: "home-card-camera-description",
        accent: palette::PINK,
    },
    ActionCard {
        target: Screen::Library,
        icon: "📖",
        title_key: "home-card-library-title",
        description_key: "home-card-library-description",
        accent: palette::PURPLE,
    },
    ActionCard {
        target: Screen::Training,
        icon: "🧠",
        title_key: "home-card-training-title",
        description_key: "home-card-training-description",
        accent: palette::YELLOW,
    },
    ActionCard {
        target: Screen::Settings,
        icon: "⚙",
        title_key: "home-card-settings-title",
        description_key: "home-card-settings-description",
        accent: palette::BLUE,
    },
];

/// (icon, value, label key, accent)
const STATS: [(&str, &str, &str, Color); 3] = [
    ("📈", "94%", "home-stat-accuracy", palette::GREEN),
    ("🏅", "26", "home-stat-gestures", palette::AMBER),
    ("⚡", "47", "home-stat-sessions", palette::RED),
];

/// Messages emitted by the home screen.
#[derive(Debug, Clone)]
pub enum Message {
    Open(Screen),
    OpenProfile,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Navigate(Screen),
}

/// Process a home message and return the corresponding event.
#[must_use]
pub fn update(message: &Message) -> Event {
    match message {
        Message::Open(target) => Event::Navigate(*target),
        Message::OpenProfile => Event::Navigate(Screen::Profile),
    }
}

/// Contextual data needed to render the home screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub theme: AppTheme,
}

/// Render the home screen.
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view(ctx: ViewContext<'_>) -> Element<'static, Message> {
    let app_theme = ctx.theme;
    let i18n = ctx.i18n;

    let hello = i18n.tr_with_args("home-greeting", &[("name", USER_NAME)]);
    let greeting = Column::new()
        .spacing(spacing::XS)
        .push(header::badge(
            format!("{} 👋", hello.to_uppercase()),
            typography::TITLE_MD,
            app_theme,
        ))
        .push(header::muted(
            i18n.tr("home-subtitle"),
            typography::BODY_LG,
            app_theme,
        ));

    let avatar = button(
        text(USER_NAME.chars().next().map(String::from).unwrap_or_default())
            .size(typography::TITLE_LG)
            .font(font::HEAVY)
            .align_x(Horizontal::Center),
    )
    .width(Length::Fixed(sizing::ICON_XL + spacing::MD))
    .height(Length::Fixed(sizing::ICON_XL + spacing::MD))
    .on_press(Message::OpenProfile)
    .style(styles::button::accent(app_theme, palette::PINK));

    let top = Row::new()
        .align_y(Vertical::Center)
        .push(greeting)
        .push(Space::new().width(Length::Fill))
        .push(avatar);

    let stats = STATS.iter().fold(
        Row::new().spacing(spacing::SM),
        |row, (icon, value, label_key, accent)| {
            row.push(tile::stat(
                *icon,
                (*value).to_string(),
                i18n.tr(label_key),
                *accent,
                app_theme,
            ))
        },
    );

    let cards = ACTION_CARDS
        .iter()
        .fold(Column::new().spacing(spacing::SM), |column, card| {
            column.push(action_card(i18n, card, app_theme))
        });

    let tip = tile::accent_card(
        Row::new()
            .spacing(spacing::SM)
            .align_y(Vertical::Center)
            .push(text("💡").size(typography::TITLE_LG))
            .push(
                Column::new()
                    .spacing(spacing::XXS)
                    .push(
                        text(i18n.tr("home-tip-title").to_uppercase())
                            .font(font::HEAVY)
                            .size(typography::BODY_LG),
                    )
                    .push(text(i18n.tr("home-tip-body")).size(typography::BODY)),
            )
            .into(),
        palette::YELLOW,
        app_theme,
    );

    let content = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::LG)
        .push(top)
        .push(stats)
        .push(cards)
        .push(tip);

    container(scrollable(content))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::screen(app_theme))
        .into()
}

fn action_card(i18n: &I18n, card: &ActionCard, app_theme: AppTheme) -> Element<'static, Message> {
    let icon = container(text(card.icon).size(typography::TITLE_LG))
        .padding(spacing::SM)
        .style(styles::container::pill(app_theme, card.accent));

    let body = Column::new()
        .spacing(spacing::XXS)
        .width(Length::Fill)
        .push(
            text(i18n.tr(card.title_key).to_uppercase())
                .size(typography::BODY_LG)
                .font(font::HEAVY),
        )
        .push(header::muted(
            i18n.tr(card.description_key),
            typography::BODY,
            app_theme,
        ));

    button(
        Row::new()
            .spacing(spacing::MD)
            .align_y(Vertical::Center)
            .push(icon)
            .push(body)
            .push(text("→").size(typography::TITLE_MD).font(font::HEAVY)),
    )
    .width(Length::Fill)
    .padding(spacing::MD)
    .on_press(Message::Open(card.target))
    .style(styles::button::outlined(app_theme))
    .into()
}
