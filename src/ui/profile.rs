// SPDX-License-Identifier: MPL-2.0
//! Profile screen with static demo statistics and achievements.

use crate::i18n::fluent::I18n;
use crate::navigation::Screen;
use crate::ui::components::{header, tile};
use crate::ui::design_tokens::{font, palette, sizing, spacing, typography};
use crate::ui::home::USER_NAME;
use crate::ui::styles;
use crate::ui::theming::AppTheme;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, container, progress_bar, scrollable, text, Column, Row, Space};
use iced::{Color, Element, Length};

const HANDLE: &str = "@om_signspeak";

const GESTURES_LEARNED: u32 = 18;
const GESTURES_TOTAL: u32 = 26;

struct Stat {
    icon: &'static str,
    value: &'static str,
    label_key: &'static str,
    /// Mini bar fill, in `[0, 1]`.
    progress: f32,
    accent: Color,
}

const STATS: [Stat; 4] = [
    Stat {
        icon: "✋",
        value: "18/26",
        label_key: "profile-stat-gestures",
        progress: 0.69,
        accent: palette::PINK,
    },
    Stat {
        icon: "⚡",
        value: "47",
        label_key: "profile-stat-sessions",
        progress: 0.78,
        accent: palette::PURPLE,
    },
    Stat {
        icon: "🎯",
        value: "94.2%",
        label_key: "profile-stat-accuracy",
        progress: 0.94,
        accent: palette::GREEN,
    },
    Stat {
        icon: "⏱",
        value: "12h 34m",
        label_key: "profile-stat-time",
        progress: 0.62,
        accent: palette::YELLOW,
    },
];

/// (icon, title key, description key, unlocked)
const ACHIEVEMENTS: [(&str, &str, &str, bool); 4] = [
    ("🏁", "profile-achievement-first-steps", "profile-achievement-first-steps-description", true),
    ("🚀", "profile-achievement-quick-learner", "profile-achievement-quick-learner-description", true),
    ("👑", "profile-achievement-master", "profile-achievement-master-description", false),
    ("🧠", "profile-achievement-trainer", "profile-achievement-trainer-description", true),
];

/// Messages emitted by the profile screen.
#[derive(Debug, Clone)]
pub enum Message {
    Back,
    ExportModel,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Navigate(Screen),
}

/// Process a profile message and return the corresponding event.
#[must_use]
pub fn update(message: &Message) -> Event {
    match message {
        Message::Back => Event::Navigate(Screen::Home),
        Message::ExportModel => {
            tracing::debug!("no model to export; ignoring");
            Event::None
        }
    }
}

/// Contextual data needed to render the profile screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub theme: AppTheme,
}

/// Render the profile screen.
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view(ctx: ViewContext<'_>) -> Element<'static, Message> {
    let app_theme = ctx.theme;
    let i18n = ctx.i18n;

    let back = button(text(format!("← {}", i18n.tr("profile-back").to_uppercase())).font(font::HEAVY))
        .on_press(Message::Back)
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::outlined(app_theme));

    let stats = STATS
        .chunks(2)
        .fold(Column::new().spacing(spacing::SM), |column, pair| {
            column.push(pair.iter().fold(Row::new().spacing(spacing::SM), |row, stat| {
                row.push(stat_card(i18n, stat, app_theme))
            }))
        });

    let content = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::LG)
        .push(Row::new().push(back))
        .push(view_identity(i18n, app_theme))
        .push(stats)
        .push(view_learning_progress(i18n, app_theme))
        .push(view_achievements(i18n, app_theme))
        .push(
            button(
                text(format!("⬇ {}", i18n.tr("profile-export").to_uppercase()))
                    .font(font::HEAVY)
                    .width(Length::Fill)
                    .align_x(Horizontal::Center),
            )
            .width(Length::Fill)
            .padding(spacing::MD)
            .on_press(Message::ExportModel)
            .style(styles::button::accent(app_theme, palette::PINK)),
        );

    container(scrollable(content))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::screen(app_theme))
        .into()
}

fn view_identity(i18n: &I18n, app_theme: AppTheme) -> Element<'static, Message> {
    let avatar = container(
        text(USER_NAME.chars().next().map(String::from).unwrap_or_default())
            .size(typography::DISPLAY)
            .font(font::HEAVY),
    )
    .width(Length::Fixed(sizing::AVATAR))
    .height(Length::Fixed(sizing::AVATAR))
    .align_x(Horizontal::Center)
    .align_y(Vertical::Center)
    .style(styles::container::accent_card(app_theme, palette::PINK));

    container(
        Column::new()
            .spacing(spacing::SM)
            .align_x(Horizontal::Center)
            .push(avatar)
            .push(header::badge(
                USER_NAME.to_uppercase(),
                typography::TITLE_LG,
                app_theme,
            ))
            .push(header::muted(HANDLE.to_string(), typography::BODY_LG, app_theme))
            .push(
                container(
                    text(i18n.tr_with_args("profile-accuracy-badge", &[("accuracy", "94.2")]))
                        .font(font::HEAVY),
                )
                .padding([spacing::XXS, spacing::MD])
                .style(styles::container::pill(app_theme, palette::GREEN)),
            ),
    )
    .width(Length::Fill)
    .align_x(Horizontal::Center)
    .into()
}

fn stat_card(i18n: &I18n, stat: &Stat, app_theme: AppTheme) -> Element<'static, Message> {
    tile::card(
        Column::new()
            .spacing(spacing::XS)
            .push(
                Row::new()
                    .spacing(spacing::XS)
                    .align_y(Vertical::Center)
                    .push(
                        container(text(stat.icon).size(typography::BODY_LG))
                            .padding(spacing::XXS)
                            .style(styles::container::pill(app_theme, stat.accent)),
                    )
                    .push(
                        text(stat.value)
                            .size(typography::TITLE_SM)
                            .font(font::HEAVY),
                    ),
            )
            .push(header::muted(
                i18n.tr(stat.label_key).to_uppercase(),
                typography::CAPTION,
                app_theme,
            ))
            .push(
                progress_bar(0.0..=1.0, stat.progress)
                    .girth(Length::Fixed(sizing::MINI_BAR_HEIGHT))
                    .style(styles::container::progress(app_theme, stat.accent)),
            )
            .into(),
        app_theme,
    )
}

fn view_learning_progress(i18n: &I18n, app_theme: AppTheme) -> Element<'static, Message> {
    let fraction = GESTURES_LEARNED as f32 / GESTURES_TOTAL as f32;

    tile::accent_card(
        Column::new()
            .spacing(spacing::SM)
            .push(text(i18n.tr("profile-learning-progress").to_uppercase()).font(font::HEAVY))
            .push(
                Row::new()
                    .push(text(i18n.tr("profile-gesture-library")).font(font::BOLD))
                    .push(Space::new().width(Length::Fill))
                    .push(
                        text(format!("{GESTURES_LEARNED}/{GESTURES_TOTAL}")).font(font::HEAVY),
                    ),
            )
            .push(
                progress_bar(0.0..=1.0, fraction)
                    .girth(Length::Fixed(sizing::PROGRESS_BAR_HEIGHT))
                    .style(styles::container::progress(app_theme, palette::BLACK)),
            )
            .into(),
        palette::BLUE,
        app_theme,
    )
}

fn view_achievements(i18n: &I18n, app_theme: AppTheme) -> Element<'static, Message> {
    let grid = ACHIEVEMENTS
        .chunks(2)
        .fold(Column::new().spacing(spacing::SM), |column, pair| {
            column.push(pair.iter().fold(
                Row::new().spacing(spacing::SM),
                |row, (icon, title_key, description_key, unlocked)| {
                    let title = i18n.tr(title_key).to_uppercase();
                    let description = i18n.tr(description_key);
                    let card = if *unlocked {
                        tile::accent_card(
                            Column::new()
                                .spacing(spacing::XXS)
                                .align_x(Horizontal::Center)
                                .width(Length::Fill)
                                .push(text(*icon).size(typography::TITLE_LG))
                                .push(text(title).font(font::HEAVY))
                                .push(
                                    text(description)
                                        .size(typography::CAPTION)
                                        .align_x(Horizontal::Center),
                                )
                                .into(),
                            palette::YELLOW,
                            app_theme,
                        )
                    } else {
                        tile::card(
                            Column::new()
                                .spacing(spacing::XXS)
                                .align_x(Horizontal::Center)
                                .width(Length::Fill)
                                .push(text("🔒").size(typography::TITLE_LG))
                                .push(header::muted(title, typography::BODY, app_theme))
                                .push(header::muted(description, typography::CAPTION, app_theme))
                                .into(),
                            app_theme,
                        )
                    };
                    row.push(card)
                },
            ))
        });

    Column::new()
        .spacing(spacing::MD)
        .push(header::section_title(i18n.tr("profile-achievements"), app_theme))
        .push(grid)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn back_returns_home() {
        assert_eq!(update(&Message::Back), Event::Navigate(Screen::Home));
    }

    #[test]
    fn export_is_inert() {
        assert_eq!(update(&Message::ExportModel), Event::None);
    }

    #[test]
    fn stat_bars_are_fractions() {
        assert!(STATS.iter().all(|stat| (0.0..=1.0).contains(&stat.progress)));
    }

    #[test]
    fn one_achievement_is_still_locked() {
        let locked: Vec<_> = ACHIEVEMENTS
            .iter()
            .filter(|(_, _, _, unlocked)| !unlocked)
            .map(|(_, key, _, _)| *key)
            .collect();
        assert_eq!(locked, vec!["profile-achievement-master"]);
    }
}
